pub mod application_identity;
pub mod audit_history;
pub mod inventory;
pub mod license;
pub mod project;
pub mod report_data;
pub mod report_options;

pub use application_identity::{ApplicationIdentity, CustomField};
pub use audit_history::{AuditEntry, AuditEvent, AuditHistory};
pub use inventory::{ChangeEvent, InventoryHistory, InventoryItem, COMPONENT_TYPE};
pub use license::LicenseDetails;
pub use project::{ProjectList, ProjectNode, ProjectTree, ROOT_PARENT};
pub use report_data::{ErrorReportData, ReportData, ReportTimestamp};
pub use report_options::{OptionError, ReportOptions};
