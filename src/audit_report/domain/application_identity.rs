use serde::Serialize;

pub const APPLICATION_NAME_FIELD: &str = "Application Name";
pub const APPLICATION_VERSION_FIELD: &str = "Application Version";
pub const APPLICATION_PUBLISHER_FIELD: &str = "Application Publisher";

/// A project-level custom field as configured on the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomField {
    pub label: String,
    pub value: Option<String>,
}

impl CustomField {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: Some(value.into()),
        }
    }
}

/// Human-facing application identity of a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationIdentity {
    pub application_name: String,
    pub application_version: String,
    pub application_publisher: String,
    pub application_name_version: String,
    pub application_details: String,
}

impl ApplicationIdentity {
    /// Derives the identity from the project's custom fields.
    ///
    /// The version only shows up in `application_name_version` when a custom
    /// application name was also supplied; otherwise it is the project name.
    pub fn resolve(project_name: &str, custom_fields: &[CustomField]) -> Self {
        let custom_name = field_value(custom_fields, APPLICATION_NAME_FIELD);
        let version = field_value(custom_fields, APPLICATION_VERSION_FIELD).unwrap_or_default();
        let publisher = field_value(custom_fields, APPLICATION_PUBLISHER_FIELD).unwrap_or_default();

        let (application_name, application_name_version) = match custom_name {
            Some(name) if !version.is_empty() => (name.clone(), format!("{} - {}", name, version)),
            Some(name) => (name.clone(), name),
            None => (project_name.to_string(), project_name.to_string()),
        };

        let application_details =
            details_string(&publisher, &application_name, &version);

        Self {
            application_name,
            application_version: version,
            application_publisher: publisher,
            application_name_version,
            application_details,
        }
    }
}

/// Non-empty, trimmed value of the first field with the given label.
fn field_value(custom_fields: &[CustomField], label: &str) -> Option<String> {
    custom_fields
        .iter()
        .find(|field| field.label == label)
        .and_then(|field| field.value.as_deref())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(String::from)
}

fn details_string(publisher: &str, application_name: &str, version: &str) -> String {
    let mut details = String::new();
    if !publisher.is_empty() {
        details.push_str(&format!("Publisher: {} | ", publisher));
    }
    details.push_str(&format!("Application: {}", application_name));
    if !version.is_empty() {
        details.push_str(&format!(" | Version: {}", version));
    }
    details
}
