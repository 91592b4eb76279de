/// Report renderers, one per output format
mod html_renderer;
mod json_renderer;

pub use html_renderer::HtmlReportRenderer;
pub use json_renderer::JsonReportRenderer;
