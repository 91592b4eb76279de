mod hierarchy_builder;
mod license_change_filter;
mod license_name_cache;

pub use hierarchy_builder::ProjectHierarchyBuilder;
pub use license_change_filter::LicenseChangeFilter;
pub use license_name_cache::LicenseNameCache;
