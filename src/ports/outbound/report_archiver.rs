use crate::shared::Result;
use std::path::PathBuf;

/// ReportArchiver port for bundling report artifacts into one deliverable
pub trait ReportArchiver {
    /// Packages `files` into an archive named after `archive_base_name` and
    /// returns the archive path
    fn archive(&self, archive_base_name: &str, files: &[PathBuf]) -> Result<PathBuf>;
}
