use crate::audit_report::domain::{ErrorReportData, ReportData};
use crate::shared::Result;

/// ReportRenderer port for turning report data into a document
///
/// One implementation per output format (HTML, JSON, ...).
pub trait ReportRenderer {
    /// Renders the normal audit report
    fn render(&self, data: &ReportData) -> Result<String>;

    /// Renders the report produced when the report options were invalid
    fn render_error(&self, data: &ErrorReportData) -> Result<String>;

    /// File extension of the rendered document, without the dot
    fn file_extension(&self) -> &'static str;
}
