/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod output_format;
mod publish;
mod report_request;

pub use output_format::OutputFormat;
pub use publish::{PublishedReport, UploadTarget};
pub use report_request::{ReportRequest, DEFAULT_AUDIT_FIELD};
