use async_trait::async_trait;
use inventory_license_audit::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock ReportUploader that records every upload
#[derive(Default, Clone)]
pub struct MockReportUploader {
    pub uploads: Arc<Mutex<Vec<(u64, u64, PathBuf)>>>,
    pub should_fail: bool,
}

impl MockReportUploader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn get_uploads(&self) -> Vec<(u64, u64, PathBuf)> {
        self.uploads.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReportUploader for MockReportUploader {
    async fn upload_report_archive(
        &self,
        project_id: u64,
        report_id: u64,
        archive_path: &Path,
    ) -> Result<()> {
        if self.should_fail {
            anyhow::bail!("Mock upload failure");
        }
        self.uploads
            .lock()
            .unwrap()
            .push((project_id, report_id, archive_path.to_path_buf()));
        Ok(())
    }
}
