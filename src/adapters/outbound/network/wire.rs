use crate::audit_report::domain::{
    ChangeEvent, CustomField, InventoryHistory, InventoryItem, LicenseDetails, ProjectTree,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Every Code Insight response wraps its payload in `data`.
#[derive(Debug, Deserialize)]
pub(super) struct Envelope<T> {
    pub data: T,
}

#[derive(Debug, Deserialize)]
pub(super) struct WireProjectTree {
    id: u64,
    name: String,
    #[serde(rename = "childProject", default)]
    child_projects: Vec<WireProjectTree>,
}

/// Decodes a response body without serde_json's nesting limit, growing the
/// stack on demand instead.
pub(super) fn decode_unbounded<T: DeserializeOwned>(body: &[u8]) -> serde_json::Result<T> {
    let mut deserializer = serde_json::Deserializer::from_slice(body);
    deserializer.disable_recursion_limit();
    let value = T::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
    deserializer.end()?;
    Ok(value)
}

type PendingNode = (ProjectTree, std::vec::IntoIter<WireProjectTree>);

fn detach(wire: WireProjectTree) -> PendingNode {
    (
        ProjectTree::new(wire.id, wire.name),
        wire.child_projects.into_iter(),
    )
}

/// Converted with an explicit stack; hierarchies can nest deeper than the
/// call stack allows.
pub(super) fn project_tree_from_wire(root: WireProjectTree) -> ProjectTree {
    let (mut tree, mut root_children) = detach(root);
    let mut stack: Vec<PendingNode> = Vec::new();
    loop {
        let next = match stack.last_mut() {
            Some((_, pending)) => pending.next(),
            None => root_children.next(),
        };
        match next {
            Some(child) => stack.push(detach(child)),
            None => match stack.pop() {
                Some((node, _)) => match stack.last_mut() {
                    Some((parent, _)) => parent.child_projects.push(node),
                    None => tree.child_projects.push(node),
                },
                None => return tree,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct InventoryPage {
    #[serde(default)]
    pub data: Vec<WireInventoryItem>,
    #[serde(default)]
    pub total_pages: Option<Value>,
}

impl InventoryPage {
    /// Page count reported by the server; it sends both numbers and strings.
    pub fn page_count(&self) -> Option<u64> {
        self.total_pages.as_ref().and_then(as_count)
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct WireInventoryItem {
    id: u64,
    #[serde(default)]
    name: String,
    #[serde(rename = "type", default)]
    item_type: String,
}

impl From<WireInventoryItem> for InventoryItem {
    fn from(wire: WireInventoryItem) -> Self {
        InventoryItem::new(wire.id, wire.name, wire.item_type)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct WireProject {
    #[serde(default)]
    pub custom_fields: Vec<WireCustomField>,
}

#[derive(Debug, Deserialize)]
pub(super) struct WireCustomField {
    #[serde(alias = "fieldLabel", default)]
    label: String,
    #[serde(default)]
    value: Option<Value>,
}

impl From<WireCustomField> for CustomField {
    fn from(wire: WireCustomField) -> Self {
        CustomField {
            label: wire.label,
            value: wire.value.as_ref().and_then(scalar_to_string),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireChangeEvent {
    #[serde(alias = "fieldName", default)]
    field: String,
    #[serde(default)]
    date: Option<Value>,
    #[serde(alias = "userName", default)]
    user: Option<Value>,
    #[serde(default)]
    user_email: Option<Value>,
    #[serde(default)]
    old_value: Option<Value>,
    #[serde(default)]
    new_value: Option<Value>,
}

impl From<WireChangeEvent> for ChangeEvent {
    fn from(wire: WireChangeEvent) -> Self {
        let text = |value: &Option<Value>| {
            value.as_ref().and_then(scalar_to_string).unwrap_or_default()
        };
        ChangeEvent {
            field: wire.field,
            date: text(&wire.date),
            user: text(&wire.user),
            user_email: text(&wire.user_email),
            old_value: license_value(&wire.old_value),
            new_value: license_value(&wire.new_value),
        }
    }
}

/// Converts the `{eventID: [events]}` history object, keeping key order.
///
/// Items that were never changed come back as `null` or an empty array.
pub(super) fn history_from_wire(data: Value) -> serde_json::Result<InventoryHistory> {
    let events: Map<String, Value> = match data {
        Value::Null => Map::new(),
        Value::Array(items) if items.is_empty() => Map::new(),
        other => serde_json::from_value(other)?,
    };

    let mut history = InventoryHistory::new();
    for (event_id, changes) in events {
        let changes: Vec<WireChangeEvent> = match changes {
            Value::Array(_) => serde_json::from_value(changes)?,
            Value::Null => Vec::new(),
            single => vec![serde_json::from_value(single)?],
        };
        history.push(event_id, changes.into_iter().map(Into::into).collect());
    }
    Ok(history)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct WireLicense {
    #[serde(default)]
    spdx_identifier: Option<String>,
    #[serde(default)]
    short_name: Option<String>,
}

impl From<WireLicense> for LicenseDetails {
    fn from(wire: WireLicense) -> Self {
        LicenseDetails::new(wire.spdx_identifier, wire.short_name)
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

/// License IDs are trimmed once here; blank values mean "no license".
fn license_value(value: &Option<Value>) -> Option<String> {
    value
        .as_ref()
        .and_then(scalar_to_string)
        .map(|id| id.trim().to_string())
        .filter(|id| !id.is_empty())
}

fn as_count(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
