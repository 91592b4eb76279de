use serde::Serialize;

/// One reportable license change, with license IDs already resolved to names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEvent {
    #[serde(rename = "eventID")]
    pub event_id: String,
    pub date: String,
    pub user: String,
    pub user_email: String,
    pub old_value: String,
    pub new_value: String,
}

/// Reportable license changes of a single inventory item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEntry {
    #[serde(rename = "inventoryID")]
    pub inventory_id: u64,
    pub inventory_item_name: String,
    pub inventory_item_link: String,
    pub project: String,
    pub project_link: String,
    pub application_name_version: String,
    pub events: Vec<AuditEvent>,
}

/// License change history for every inventory item that has at least one
/// reportable event, in the order the items were visited.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AuditHistory {
    entries: Vec<AuditEntry>,
}

impl AuditHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry. Entries without events are dropped, and a second entry
    /// for the same inventory item extends the first.
    ///
    /// Returns whether anything was recorded.
    pub fn record(&mut self, entry: AuditEntry) -> bool {
        if entry.events.is_empty() {
            return false;
        }

        match self
            .entries
            .iter_mut()
            .find(|existing| existing.inventory_id == entry.inventory_id)
        {
            Some(existing) => existing.events.extend(entry.events),
            None => self.entries.push(entry),
        }
        true
    }

    pub fn get(&self, inventory_id: u64) -> Option<&AuditEntry> {
        self.entries
            .iter()
            .find(|entry| entry.inventory_id == inventory_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn event_count(&self) -> usize {
        self.entries.iter().map(|entry| entry.events.len()).sum()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AuditEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a AuditHistory {
    type Item = &'a AuditEntry;
    type IntoIter = std::slice::Iter<'a, AuditEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
