use crate::application::dto::ReportRequest;
use crate::application::services::AuditAggregator;
use crate::audit_report::domain::ReportData;
use crate::audit_report::services::{LicenseChangeFilter, ProjectHierarchyBuilder};
use crate::ports::outbound::{InventoryRepository, ProgressReporter};
use crate::shared::Result;
use anyhow::Context;
use tracing::info;

/// GenerateReportUseCase - Core use case for the license audit report
///
/// Orchestrates hierarchy retrieval, flattening and audit aggregation using
/// generic dependency injection for the infrastructure it needs.
///
/// # Type Parameters
/// * `R` - InventoryRepository implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateReportUseCase<R, PR> {
    repository: R,
    progress_reporter: PR,
}

impl<R, PR> GenerateReportUseCase<R, PR>
where
    R: InventoryRepository,
    PR: ProgressReporter,
{
    /// Creates a new GenerateReportUseCase with injected dependencies
    pub fn new(repository: R, progress_reporter: PR) -> Self {
        Self {
            repository,
            progress_reporter,
        }
    }

    /// Gives back the repository, e.g. to reuse the client for uploading
    pub fn into_repository(self) -> R {
        self.repository
    }

    /// Executes the report generation use case
    ///
    /// # Arguments
    /// * `request` - Project, validated options and audit settings
    ///
    /// # Returns
    /// ReportData ready to hand to the renderers
    pub async fn execute(&self, request: ReportRequest) -> Result<ReportData> {
        info!(
            project_id = request.project_id,
            include_child_projects = request.options.include_child_projects,
            restricted_licenses_only = request.options.restricted_licenses_only,
            audit_field = %request.audit_field,
            "Gathering data for {}", request.report_name
        );

        // Step 1: Load the project hierarchy
        self.progress_reporter.report(&format!(
            "📖 Loading project hierarchy for project {}",
            request.project_id
        ));
        let hierarchy = self
            .repository
            .fetch_project_hierarchy(request.project_id)
            .await
            .with_context(|| {
                format!("Failed to load project hierarchy for project {}", request.project_id)
            })?;

        // Step 2: Flatten it into the report's project list
        let mut projects = ProjectHierarchyBuilder::build(
            &hierarchy,
            request.options.include_child_projects,
            |project_id| self.repository.project_link(project_id),
        );
        if !request.options.include_child_projects {
            info!("Child hierarchy disabled");
        }
        self.progress_reporter
            .report(&format!("✅ {} project(s) in scope", projects.len()));

        // Step 3: Collect the license change history
        self.progress_reporter.report(&format!(
            "🔍 Reviewing {} history{}...",
            request.audit_field,
            if request.options.restricted_licenses_only {
                " (restricted licenses only)"
            } else {
                ""
            }
        ));
        let filter = LicenseChangeFilter::new(
            request.audit_field.as_str(),
            request.options.restricted_licenses_only,
        );
        let aggregator = AuditAggregator::new(&self.repository, &self.progress_reporter, filter);
        let audit_history = aggregator.aggregate(&mut projects).await?;

        self.progress_reporter.report_completion(&format!(
            "✅ Audit complete: {} change(s) across {} inventory item(s), {} license(s) looked up",
            audit_history.event_count(),
            audit_history.len(),
            aggregator.resolved_license_count()
        ));

        // Step 4: Assemble the report data
        Ok(ReportData::new(
            &request.report_name,
            projects,
            hierarchy,
            audit_history,
            request.timestamp,
        ))
    }
}
