/// Mock implementations for testing
mod mock_inventory_repository;
mod mock_progress_reporter;
mod mock_report_uploader;

pub use mock_inventory_repository::MockInventoryRepository;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_report_uploader::MockReportUploader;
