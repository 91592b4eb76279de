/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (Code Insight, file system, console).
pub mod artifact_writer;
pub mod inventory_repository;
pub mod progress_reporter;
pub mod report_archiver;
pub mod report_renderer;
pub mod report_uploader;

pub use artifact_writer::ArtifactWriter;
pub use inventory_repository::{InventoryRepository, ProjectInformation};
pub use progress_reporter::ProgressReporter;
pub use report_archiver::ReportArchiver;
pub use report_renderer::ReportRenderer;
pub use report_uploader::ReportUploader;
