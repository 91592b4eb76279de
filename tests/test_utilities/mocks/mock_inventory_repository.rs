use async_trait::async_trait;
use inventory_license_audit::audit_report::domain::{
    CustomField, InventoryHistory, InventoryItem, LicenseDetails,
};
use inventory_license_audit::ports::outbound::ProjectInformation;
use inventory_license_audit::prelude::*;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Mock InventoryRepository serving canned Code Insight data
#[derive(Default)]
pub struct MockInventoryRepository {
    pub hierarchy: Option<ProjectTree>,
    pub inventories: HashMap<u64, Vec<InventoryItem>>,
    pub custom_fields: HashMap<u64, Vec<CustomField>>,
    pub histories: HashMap<u64, InventoryHistory>,
    pub licenses: HashMap<String, LicenseDetails>,
    pub license_calls: AtomicUsize,
    pub should_fail: bool,
}

impl MockInventoryRepository {
    pub fn new(hierarchy: ProjectTree) -> Self {
        Self {
            hierarchy: Some(hierarchy),
            ..Self::default()
        }
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn with_component(mut self, project_id: u64, inventory_id: u64, name: &str) -> Self {
        self.inventories
            .entry(project_id)
            .or_default()
            .push(InventoryItem::new(inventory_id, name, "Component"));
        self
    }

    pub fn with_item(mut self, project_id: u64, item: InventoryItem) -> Self {
        self.inventories.entry(project_id).or_default().push(item);
        self
    }

    pub fn with_custom_field(mut self, project_id: u64, label: &str, value: &str) -> Self {
        self.custom_fields
            .entry(project_id)
            .or_default()
            .push(CustomField::new(label, value));
        self
    }

    pub fn with_history(mut self, inventory_id: u64, history: InventoryHistory) -> Self {
        self.histories.insert(inventory_id, history);
        self
    }

    pub fn with_license(mut self, license_id: &str, spdx: Option<&str>, short_name: Option<&str>) -> Self {
        self.licenses.insert(
            license_id.to_string(),
            LicenseDetails::new(spdx.map(str::to_string), short_name.map(str::to_string)),
        );
        self
    }

    pub fn license_call_count(&self) -> usize {
        self.license_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl InventoryRepository for MockInventoryRepository {
    async fn fetch_project_hierarchy(&self, project_id: u64) -> Result<ProjectTree> {
        if self.should_fail {
            anyhow::bail!("Mock inventory repository failure");
        }
        match &self.hierarchy {
            Some(tree) if tree.id == project_id => Ok(tree.clone()),
            _ => anyhow::bail!("Project {} not found", project_id),
        }
    }

    async fn fetch_inventory_summary(&self, project_id: u64) -> Result<Vec<InventoryItem>> {
        Ok(self.inventories.get(&project_id).cloned().unwrap_or_default())
    }

    async fn fetch_project_information(&self, project_id: u64) -> Result<ProjectInformation> {
        Ok(ProjectInformation {
            custom_fields: self.custom_fields.get(&project_id).cloned().unwrap_or_default(),
        })
    }

    async fn fetch_inventory_history(&self, inventory_id: u64) -> Result<InventoryHistory> {
        Ok(self.histories.get(&inventory_id).cloned().unwrap_or_default())
    }

    async fn fetch_license_details(&self, license_id: &str) -> Result<LicenseDetails> {
        self.license_calls.fetch_add(1, Ordering::SeqCst);
        self.licenses
            .get(license_id)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("License {} not found", license_id))
    }

    fn project_link(&self, project_id: u64) -> String {
        format!(
            "https://fnci.test/codeinsight/FNCI#myprojectdetails/?id={}&tab=projectInventory",
            project_id
        )
    }

    fn inventory_link(&self, project_id: u64, inventory_id: u64) -> String {
        format!("{}&pinv={}", self.project_link(project_id), inventory_id)
    }
}
