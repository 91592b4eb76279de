mod license_name_policy;
mod restricted_licenses;

pub use license_name_policy::LicenseNamePolicy;
pub use restricted_licenses::RestrictedLicenseRegistry;
