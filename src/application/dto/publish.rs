use std::path::PathBuf;

/// Where a finished report archive should be uploaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadTarget {
    pub project_id: u64,
    pub report_id: u64,
}

/// Outcome of publishing a report.
#[derive(Debug, Clone)]
pub struct PublishedReport {
    /// Rendered documents, one per requested format
    pub artifacts: Vec<PathBuf>,
    /// Archive bundling the artifacts
    pub archive: PathBuf,
    /// Whether the archive was uploaded to the server
    pub uploaded: bool,
}
