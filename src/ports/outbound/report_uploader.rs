use crate::shared::Result;
use async_trait::async_trait;
use std::path::Path;

/// ReportUploader port for delivering the report archive back to the server
#[async_trait]
pub trait ReportUploader: Send + Sync {
    /// Attaches the archive to the given report of the given project
    ///
    /// # Arguments
    /// * `project_id` - Project the report was generated for
    /// * `report_id` - Report registration ID assigned by the server
    /// * `archive_path` - Archive to upload
    async fn upload_report_archive(
        &self,
        project_id: u64,
        report_id: u64,
        archive_path: &Path,
    ) -> Result<()>;
}
