/// Code Insight license IDs flagged as restricted, with their display names.
///
/// A change away from one of these is what the restricted-only report looks for.
const RESTRICTED_LICENSES: [(&str, &str); 12] = [
    ("2026", "Affero General Public License v1.0-deprecated (AGPL-1.0-deprecated)"),
    ("1654", "Affero General Public License v1.0 only (AGPL-1.0-only)"),
    ("2074", "Affero General Public License v1.0 or later (AGPL-1.0-or-later)"),
    ("2076", "GNU Affero General Public License v3.0-deprecated (AGPL-3.0-deprecated)"),
    ("229", "GNU Affero General Public License v3.0 only (AGPL-3.0-only)"),
    ("1217", "GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later)"),
    ("343", "GNU General Public License v1.0 only (GPL-1.0-only)"),
    ("698", "GNU General Public License v1.0 or later (GPL-1.0-or-later)"),
    ("331", "GNU General Public License v2.0 only (GPL-2.0-only)"),
    ("699", "GNU General Public License v2.0 or later (GPL-2.0-or-later)"),
    ("1097", "GNU General Public License v3.0 only (GPL-3.0-only)"),
    ("702", "GNU General Public License v3.0 or later (GPL-3.0-or-later)"),
];

/// Static registry of restricted (copyleft) licenses.
pub struct RestrictedLicenseRegistry;

impl RestrictedLicenseRegistry {
    pub fn is_restricted(license_id: &str) -> bool {
        Self::description(license_id).is_some()
    }

    pub fn description(license_id: &str) -> Option<&'static str> {
        RESTRICTED_LICENSES
            .iter()
            .find(|(id, _)| *id == license_id)
            .map(|(_, description)| *description)
    }

    pub fn license_ids() -> impl Iterator<Item = &'static str> {
        RESTRICTED_LICENSES.iter().map(|(id, _)| *id)
    }
}
