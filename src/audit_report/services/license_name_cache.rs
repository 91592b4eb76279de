use dashmap::DashMap;

/// License ID → display name memo for one report run.
///
/// Names are assumed not to change while a report is generated, so entries
/// are never invalidated. Dropping the cache ends its lifetime.
#[derive(Debug, Default)]
pub struct LicenseNameCache {
    names: DashMap<String, String>,
}

impl LicenseNameCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, license_id: &str) -> Option<String> {
        self.names.get(license_id).map(|name| name.value().clone())
    }

    pub fn insert(&self, license_id: &str, name: &str) {
        self.names.insert(license_id.to_string(), name.to_string());
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
