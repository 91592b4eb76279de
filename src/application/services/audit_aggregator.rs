use crate::audit_report::domain::{
    ApplicationIdentity, AuditEntry, AuditEvent, AuditHistory, ChangeEvent, ProjectList,
    ProjectNode,
};
use crate::audit_report::policies::LicenseNamePolicy;
use crate::audit_report::services::{LicenseChangeFilter, LicenseNameCache};
use crate::ports::outbound::{InventoryRepository, ProgressReporter};
use crate::shared::Result;
use anyhow::Context;
use tracing::{debug, warn};

/// AuditAggregator walks every project's inventory and collects the license
/// changes worth reporting.
///
/// The license name cache is owned by the aggregator, so one aggregator
/// corresponds to one report run: each distinct license ID is looked up on
/// the server at most once.
pub struct AuditAggregator<'a, R: ?Sized, PR: ?Sized> {
    repository: &'a R,
    progress_reporter: &'a PR,
    filter: LicenseChangeFilter,
    license_names: LicenseNameCache,
}

impl<'a, R, PR> AuditAggregator<'a, R, PR>
where
    R: InventoryRepository + ?Sized,
    PR: ProgressReporter + ?Sized,
{
    pub fn new(repository: &'a R, progress_reporter: &'a PR, filter: LicenseChangeFilter) -> Self {
        Self {
            repository,
            progress_reporter,
            filter,
            license_names: LicenseNameCache::new(),
        }
    }

    /// Builds the audit history for every project in the list.
    ///
    /// Also resolves each project's application identity and stores it on the
    /// project node for display.
    pub async fn aggregate(&self, projects: &mut ProjectList) -> Result<AuditHistory> {
        let total = projects.len();
        let mut history = AuditHistory::new();

        for (idx, project) in projects.iter_mut().enumerate() {
            self.progress_reporter
                .report_progress(idx, total, Some(&project.project_name));

            let information = self
                .repository
                .fetch_project_information(project.project_id)
                .await
                .with_context(|| {
                    format!("Failed to load details of project {}", project.project_id)
                })?;
            project.application = Some(ApplicationIdentity::resolve(
                &project.project_name,
                &information.custom_fields,
            ));

            self.collect_project_history(project, &mut history).await?;
        }

        self.progress_reporter.report_progress(total, total, None);
        Ok(history)
    }

    async fn collect_project_history(
        &self,
        project: &ProjectNode,
        history: &mut AuditHistory,
    ) -> Result<()> {
        let inventory = self
            .repository
            .fetch_inventory_summary(project.project_id)
            .await
            .with_context(|| {
                format!("Failed to load inventory of project {}", project.project_name)
            })?;

        if inventory.is_empty() {
            warn!(
                project_id = project.project_id,
                "No inventory items found for project {}", project.project_name
            );
            return Ok(());
        }

        for item in inventory.iter().filter(|item| item.is_component()) {
            let item_history = self
                .repository
                .fetch_inventory_history(item.id)
                .await
                .with_context(|| format!("Failed to load history of inventory item {}", item.id))?;

            let mut events = Vec::new();
            for (event_id, change) in item_history.changes() {
                if self.filter.accepts(change) {
                    events.push(self.audit_event(event_id, change).await?);
                }
            }

            debug!(
                inventory_id = item.id,
                events = events.len(),
                "Reviewed history of {}", item.name
            );

            history.record(AuditEntry {
                inventory_id: item.id,
                inventory_item_name: item.name.clone(),
                inventory_item_link: self.repository.inventory_link(project.project_id, item.id),
                project: project.project_name.clone(),
                project_link: project.project_link.clone(),
                application_name_version: project.application_name_version().to_string(),
                events,
            });
        }

        Ok(())
    }

    async fn audit_event(&self, event_id: &str, change: &ChangeEvent) -> Result<AuditEvent> {
        Ok(AuditEvent {
            event_id: event_id.to_string(),
            date: change.date.clone(),
            user: change.user.clone(),
            user_email: change.user_email.clone(),
            old_value: self.resolve_license_name(change.old_value.as_deref()).await?,
            new_value: self.resolve_license_name(change.new_value.as_deref()).await?,
        })
    }

    /// Resolves a license ID to its display name, asking the server only for
    /// IDs not seen before in this run. Missing or empty IDs resolve to "".
    pub async fn resolve_license_name(&self, license_id: Option<&str>) -> Result<String> {
        let Some(license_id) = license_id.filter(|id| !id.is_empty()) else {
            return Ok(String::new());
        };

        if let Some(name) = self.license_names.get(license_id) {
            return Ok(name);
        }

        let details = self
            .repository
            .fetch_license_details(license_id)
            .await
            .with_context(|| format!("Failed to look up license {}", license_id))?;
        let name = LicenseNamePolicy::display_name(license_id, &details);
        self.license_names.insert(license_id, &name);

        debug!(license_id, name = %name, "Resolved license name");
        Ok(name)
    }

    /// Number of distinct license IDs resolved so far
    pub fn resolved_license_count(&self) -> usize {
        self.license_names.len()
    }
}
