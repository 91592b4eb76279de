use crate::adapters::outbound::renderers::{HtmlReportRenderer, JsonReportRenderer};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::ReportRenderer;

/// Factory for creating report renderers
///
/// Keeps the choice of rendering adapter out of the CLI and the use cases.
pub struct RendererFactory;

impl RendererFactory {
    /// Creates a renderer instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use inventory_license_audit::application::dto::OutputFormat;
    /// use inventory_license_audit::application::factories::RendererFactory;
    ///
    /// let renderer = RendererFactory::create(OutputFormat::Html);
    /// assert_eq!(renderer.file_extension(), "html");
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn ReportRenderer> {
        match format {
            OutputFormat::Html => Box::new(HtmlReportRenderer::new()),
            OutputFormat::Json => Box::new(JsonReportRenderer::new()),
        }
    }

    /// Returns the progress message for the specified output format
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Html => "📝 Generating HTML report...",
            OutputFormat::Json => "📝 Generating JSON report data...",
        }
    }
}
