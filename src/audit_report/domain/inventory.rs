/// Inventory type that takes part in the license audit.
pub const COMPONENT_TYPE: &str = "Component";

/// Summary of one inventory item within a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryItem {
    pub id: u64,
    pub name: String,
    pub item_type: String,
}

impl InventoryItem {
    pub fn new(id: u64, name: impl Into<String>, item_type: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            item_type: item_type.into(),
        }
    }

    pub fn is_component(&self) -> bool {
        self.item_type == COMPONENT_TYPE
    }
}

/// A single field mutation recorded in an inventory item's history.
///
/// License changes carry Code Insight license IDs in `old_value` and
/// `new_value`; either may be absent when a license was first set or cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeEvent {
    pub field: String,
    pub date: String,
    pub user: String,
    pub user_email: String,
    pub old_value: Option<String>,
    pub new_value: Option<String>,
}

impl ChangeEvent {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            ..Default::default()
        }
    }

    pub fn with_values(mut self, old_value: &str, new_value: &str) -> Self {
        self.old_value = Some(old_value.to_string());
        self.new_value = Some(new_value.to_string());
        self
    }

    pub fn by(mut self, user: &str, user_email: &str, date: &str) -> Self {
        self.user = user.to_string();
        self.user_email = user_email.to_string();
        self.date = date.to_string();
        self
    }
}

/// Change history of one inventory item, grouped by event ID.
///
/// Order is the order the server returned; nothing here re-sorts it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InventoryHistory {
    events: Vec<(String, Vec<ChangeEvent>)>,
}

impl InventoryHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_event(mut self, event_id: impl Into<String>, changes: Vec<ChangeEvent>) -> Self {
        self.push(event_id, changes);
        self
    }

    pub fn push(&mut self, event_id: impl Into<String>, changes: Vec<ChangeEvent>) {
        self.events.push((event_id.into(), changes));
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Iterates `(event_id, change)` pairs in source order.
    pub fn changes(&self) -> impl Iterator<Item = (&str, &ChangeEvent)> {
        self.events.iter().flat_map(|(event_id, changes)| {
            changes.iter().map(move |change| (event_id.as_str(), change))
        })
    }
}
