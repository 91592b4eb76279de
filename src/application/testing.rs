//! In-memory port implementations shared by the application layer tests.

use crate::audit_report::domain::{
    CustomField, InventoryHistory, InventoryItem, LicenseDetails, ProjectTree,
};
use crate::ports::outbound::{InventoryRepository, ProgressReporter, ProjectInformation};
use crate::shared::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// InventoryRepository backed by hash maps, counting license lookups
#[derive(Default)]
pub struct FakeInventoryRepository {
    hierarchy: Option<ProjectTree>,
    inventories: HashMap<u64, Vec<InventoryItem>>,
    custom_fields: HashMap<u64, Vec<CustomField>>,
    histories: HashMap<u64, InventoryHistory>,
    licenses: HashMap<String, LicenseDetails>,
    license_lookups: AtomicUsize,
    history_requests: Mutex<Vec<u64>>,
}

impl FakeInventoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_hierarchy(mut self, tree: ProjectTree) -> Self {
        self.hierarchy = Some(tree);
        self
    }

    pub fn with_inventory(mut self, project_id: u64, items: Vec<InventoryItem>) -> Self {
        self.inventories.insert(project_id, items);
        self
    }

    pub fn with_custom_fields(mut self, project_id: u64, fields: Vec<CustomField>) -> Self {
        self.custom_fields.insert(project_id, fields);
        self
    }

    pub fn with_history(mut self, inventory_id: u64, history: InventoryHistory) -> Self {
        self.histories.insert(inventory_id, history);
        self
    }

    pub fn with_license(mut self, license_id: &str, spdx: Option<&str>, short_name: Option<&str>) -> Self {
        self.licenses.insert(
            license_id.to_string(),
            LicenseDetails::new(spdx.map(String::from), short_name.map(String::from)),
        );
        self
    }

    pub fn license_lookup_count(&self) -> usize {
        self.license_lookups.load(Ordering::SeqCst)
    }

    pub fn history_requested(&self, inventory_id: u64) -> bool {
        self.history_requests.lock().unwrap().contains(&inventory_id)
    }
}

#[async_trait]
impl InventoryRepository for FakeInventoryRepository {
    async fn fetch_project_hierarchy(&self, project_id: u64) -> Result<ProjectTree> {
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
        self.history_requests.lock().unwrap().push(inventory_id);
        Ok(self.histories.get(&inventory_id).cloned().unwrap_or_default())
    }

    async fn fetch_license_details(&self, license_id: &str) -> Result<LicenseDetails> {
        self.license_lookups.fetch_add(1, Ordering::SeqCst);
        self.licenses
            .get(license_id)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("License {} not found", license_id))
    }

    fn project_link(&self, project_id: u64) -> String {
        format!("https://fnci.test/project/{}", project_id)
    }

    fn inventory_link(&self, project_id: u64, inventory_id: u64) -> String {
        format!("https://fnci.test/project/{}/inventory/{}", project_id, inventory_id)
    }
}

/// ProgressReporter that captures every message
#[derive(Default, Clone)]
pub struct RecordingProgressReporter {
    messages: Arc<Mutex<Vec<String>>>,
}

impl RecordingProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl ProgressReporter for RecordingProgressReporter {
    fn report(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        let msg = match message {
            Some(m) => format!("Progress: {}/{} - {}", current, total, m),
            None => format!("Progress: {}/{}", current, total),
        };
        self.messages.lock().unwrap().push(msg);
    }

    fn report_error(&self, message: &str) {
        self.messages.lock().unwrap().push(format!("Error: {}", message));
    }

    fn report_completion(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("Completed: {}", message));
    }
}
