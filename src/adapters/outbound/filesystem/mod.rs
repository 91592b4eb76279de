/// Filesystem adapters for report artifacts
mod artifact_writer;
mod zip_archiver;

pub use artifact_writer::FileSystemArtifactWriter;
pub use zip_archiver::ZipReportArchiver;
