use crate::audit_report::domain::report_data::REPORT_NAME;
use crate::audit_report::domain::{ReportOptions, ReportTimestamp};

/// History field whose changes the report tracks unless told otherwise.
pub const DEFAULT_AUDIT_FIELD: &str = "License";

/// ReportRequest - Internal request DTO for the report generation use case
#[derive(Debug, Clone)]
pub struct ReportRequest {
    /// Project the report starts from
    pub project_id: u64,
    /// Validated report options
    pub options: ReportOptions,
    /// History field to audit (e.g. "License")
    pub audit_field: String,
    /// Title of the report
    pub report_name: String,
    /// Generation instant used in file names and the footer
    pub timestamp: ReportTimestamp,
}

impl ReportRequest {
    pub fn new(project_id: u64, options: ReportOptions) -> Self {
        Self {
            project_id,
            options,
            audit_field: DEFAULT_AUDIT_FIELD.to_string(),
            report_name: REPORT_NAME.to_string(),
            timestamp: ReportTimestamp::now(),
        }
    }

    pub fn with_audit_field(mut self, audit_field: impl Into<String>) -> Self {
        self.audit_field = audit_field.into();
        self
    }

    pub fn with_timestamp(mut self, timestamp: ReportTimestamp) -> Self {
        self.timestamp = timestamp;
        self
    }
}
