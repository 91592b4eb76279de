use crate::audit_report::domain::LicenseDetails;

/// Placeholder the server uses when a license has no SPDX identifier.
const NOT_AVAILABLE: &str = "N/A";

/// LicenseNamePolicy decides how a license is named in the report.
///
/// Priority order:
/// 1. SPDX identifier (if non-empty and not "N/A")
/// 2. Short name (if non-empty)
/// 3. The raw license ID
pub struct LicenseNamePolicy;

impl LicenseNamePolicy {
    pub fn display_name(license_id: &str, details: &LicenseDetails) -> String {
        details
            .spdx_identifier
            .as_deref()
            .map(str::trim)
            .filter(|spdx| !spdx.is_empty() && *spdx != NOT_AVAILABLE)
            .or_else(|| {
                details
                    .short_name
                    .as_deref()
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
            })
            .unwrap_or(license_id)
            .to_string()
    }
}
