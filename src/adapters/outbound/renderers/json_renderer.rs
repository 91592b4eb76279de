use crate::audit_report::domain::{ErrorReportData, ReportData};
use crate::ports::outbound::ReportRenderer;
use crate::shared::Result;

/// JsonReportRenderer adapter writing the report dataset as pretty JSON
pub struct JsonReportRenderer;

impl JsonReportRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonReportRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportRenderer for JsonReportRenderer {
    fn render(&self, data: &ReportData) -> Result<String> {
        Ok(serde_json::to_string_pretty(data)?)
    }

    fn render_error(&self, data: &ErrorReportData) -> Result<String> {
        Ok(serde_json::to_string_pretty(data)?)
    }

    fn file_extension(&self) -> &'static str {
        "json"
    }
}
