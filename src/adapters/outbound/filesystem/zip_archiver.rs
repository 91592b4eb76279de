use crate::ports::outbound::ReportArchiver;
use crate::shared::error::ReportError;
use crate::shared::security::validate_not_symlink;
use crate::shared::Result;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// ZipReportArchiver adapter bundling report artifacts into `{base}.zip`
///
/// Entries are stored flat, under their file names, deflate-compressed.
pub struct ZipReportArchiver {
    output_dir: PathBuf,
}

impl ZipReportArchiver {
    pub fn new(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }

    fn append_file(writer: &mut ZipWriter<fs::File>, file: &Path) -> Result<()> {
        let name = file
            .file_name()
            .ok_or_else(|| anyhow::anyhow!("Artifact has no file name: {}", file.display()))?
            .to_string_lossy()
            .into_owned();
        let bytes = fs::read(file).map_err(|e| ReportError::FileReadError {
            path: file.to_path_buf(),
            details: e.to_string(),
        })?;

        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .unix_permissions(0o644);
        writer.start_file(name, options)?;
        writer.write_all(&bytes)?;
        Ok(())
    }
}

impl ReportArchiver for ZipReportArchiver {
    fn archive(&self, archive_base_name: &str, files: &[PathBuf]) -> Result<PathBuf> {
        let archive_path = self.output_dir.join(format!("{}.zip", archive_base_name));
        if fs::symlink_metadata(&archive_path).is_ok() {
            validate_not_symlink(&archive_path, "write report archive")?;
        }

        let to_archive_error = |details: String| ReportError::ArchiveError {
            path: archive_path.clone(),
            details,
        };

        let file = fs::File::create(&archive_path).map_err(|e| to_archive_error(e.to_string()))?;
        let mut writer = ZipWriter::new(file);
        for artifact in files {
            Self::append_file(&mut writer, artifact)
                .map_err(|e| to_archive_error(format!("{:#}", e)))?;
        }
        writer
            .finish()
            .map_err(|e| to_archive_error(e.to_string()))?;

        debug!(path = %archive_path.display(), entries = files.len(), "Archive created");
        Ok(archive_path)
    }
}
