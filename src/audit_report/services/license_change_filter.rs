use crate::audit_report::domain::ChangeEvent;
use crate::audit_report::policies::RestrictedLicenseRegistry;

/// Decides which history events belong in the audit report.
#[derive(Debug, Clone)]
pub struct LicenseChangeFilter {
    audit_field: String,
    restricted_licenses_only: bool,
}

impl LicenseChangeFilter {
    pub fn new(audit_field: impl Into<String>, restricted_licenses_only: bool) -> Self {
        Self {
            audit_field: audit_field.into(),
            restricted_licenses_only,
        }
    }

    /// An event is reportable when its field mentions the audit field and,
    /// in restricted-only mode, the license it moved away from is restricted.
    pub fn accepts(&self, event: &ChangeEvent) -> bool {
        if !event.field.contains(&self.audit_field) {
            return false;
        }

        if !self.restricted_licenses_only {
            return true;
        }

        event
            .old_value
            .as_deref()
            .is_some_and(RestrictedLicenseRegistry::is_restricted)
    }
}
