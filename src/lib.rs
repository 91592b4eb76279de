//! inventory-license-audit - license change audit for Code Insight projects
//!
//! This library collects the license change history of every component in a
//! Code Insight project (optionally with all of its child projects) and turns
//! it into an audit report, following hexagonal architecture and
//! Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`audit_report`): Pure business logic and domain models
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use inventory_license_audit::prelude::*;
//!
//! # async fn run() -> Result<()> {
//! // Create adapters
//! let client = CodeInsightClient::new(CodeInsightSettings::new(
//!     "https://codeinsight.example.com",
//!     "api-token",
//! ))?;
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = GenerateReportUseCase::new(client, progress_reporter);
//!
//! // Execute
//! let options = ReportOptions::parse(r#"{"includeChildProjects": "true"}"#)
//!     .map_err(|errors| anyhow::anyhow!("{} invalid option(s)", errors.len()))?;
//! let report = use_case.execute(ReportRequest::new(42, options)).await?;
//!
//! // Render
//! let html = HtmlReportRenderer::new().render(&report)?;
//! println!("{}", html);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod audit_report;
pub mod config;
pub mod logging;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemArtifactWriter, ZipReportArchiver};
    pub use crate::adapters::outbound::network::{CodeInsightClient, CodeInsightSettings};
    pub use crate::adapters::outbound::renderers::{HtmlReportRenderer, JsonReportRenderer};
    pub use crate::application::dto::{OutputFormat, PublishedReport, ReportRequest, UploadTarget};
    pub use crate::application::use_cases::{
        GenerateReportUseCase, PublishReportUseCase, ReportDocument,
    };
    pub use crate::audit_report::domain::{
        AuditEntry, AuditEvent, AuditHistory, ErrorReportData, ProjectList, ProjectNode,
        ProjectTree, ReportData, ReportOptions, ReportTimestamp,
    };
    pub use crate::ports::outbound::{
        ArtifactWriter, InventoryRepository, ProgressReporter, ReportArchiver, ReportRenderer,
        ReportUploader,
    };
    pub use crate::shared::Result;
}
