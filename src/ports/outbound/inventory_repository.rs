use crate::audit_report::domain::{
    CustomField, InventoryHistory, InventoryItem, LicenseDetails, ProjectTree,
};
use crate::shared::Result;
use async_trait::async_trait;

/// Project-level information the report needs beyond the hierarchy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectInformation {
    pub custom_fields: Vec<CustomField>,
}

/// InventoryRepository port for reading projects, inventory and history
///
/// This port abstracts the Code Insight REST API. Server address and
/// credentials belong to the implementation, so every operation is keyed by
/// IDs only.
///
/// # Errors
/// Implementations return an error when the request ultimately fails (after
/// any retries) or the response cannot be decoded. Callers treat every error
/// as fatal for the run.
#[async_trait]
pub trait InventoryRepository: Send + Sync {
    /// Fetches the project and all of its descendants
    async fn fetch_project_hierarchy(&self, project_id: u64) -> Result<ProjectTree>;

    /// Fetches the inventory summary of a single project
    async fn fetch_inventory_summary(&self, project_id: u64) -> Result<Vec<InventoryItem>>;

    /// Fetches project details, including custom fields
    async fn fetch_project_information(&self, project_id: u64) -> Result<ProjectInformation>;

    /// Fetches the full change history of an inventory item
    async fn fetch_inventory_history(&self, inventory_id: u64) -> Result<InventoryHistory>;

    /// Looks up a license by its Code Insight license ID
    async fn fetch_license_details(&self, license_id: &str) -> Result<LicenseDetails>;

    /// Browser link to a project's inventory page
    fn project_link(&self, project_id: u64) -> String;

    /// Browser link to a single inventory item
    fn inventory_link(&self, project_id: u64, inventory_id: u64) -> String;
}
