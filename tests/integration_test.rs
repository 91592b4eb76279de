/// Integration tests for the application layer
mod test_utilities;

use inventory_license_audit::audit_report::domain::{ChangeEvent, InventoryHistory, InventoryItem};
use inventory_license_audit::prelude::*;
use std::fs;
use tempfile::TempDir;
use test_utilities::mocks::*;

fn license_change(old: &str, new: &str) -> ChangeEvent {
    ChangeEvent::new("License")
        .with_values(old, new)
        .by("amy", "amy@example.com", "2024-02-03 09:15:00")
}

/// Root project with one child; each has a single component. Only the
/// child's component carries a license change.
fn root_with_child() -> MockInventoryRepository {
    let tree = ProjectTree::new(1, "Root").with_child(ProjectTree::new(2, "Child"));
    MockInventoryRepository::new(tree)
        .with_component(1, 10, "zlib")
        .with_component(2, 20, "openssl")
        .with_history(10, InventoryHistory::new())
        .with_history(
            20,
            InventoryHistory::new()
                .with_event("101", vec![license_change("331", "1097")])
                .with_event(
                    "102",
                    vec![ChangeEvent::new("Severity").with_values("Low", "High")],
                ),
        )
        .with_license("331", Some("GPL-2.0-only"), Some("GPL-2.0"))
        .with_license("1097", Some("GPL-3.0-only"), Some("GPL-3.0"))
}

fn options(raw: &str) -> ReportOptions {
    ReportOptions::parse(raw).unwrap()
}

#[tokio::test]
async fn test_generate_report_happy_path() {
    let progress_reporter = MockProgressReporter::new();
    let use_case = GenerateReportUseCase::new(root_with_child(), progress_reporter.clone());

    let report = use_case
        .execute(ReportRequest::new(1, options("{}")))
        .await
        .unwrap();

    assert_eq!(report.project_name, "Root");
    assert_eq!(report.project_list.len(), 2);
    assert_eq!(report.audit_history.len(), 1);

    let entry = report.audit_history.get(20).unwrap();
    assert_eq!(entry.project, "Child");
    assert_eq!(entry.inventory_item_name, "openssl");
    assert!(entry.inventory_item_link.ends_with("&pinv=20"));
    assert_eq!(entry.events.len(), 1);
    assert_eq!(entry.events[0].event_id, "101");
    assert_eq!(entry.events[0].old_value, "GPL-2.0-only");
    assert_eq!(entry.events[0].new_value, "GPL-3.0-only");
    assert_eq!(entry.events[0].user, "amy");

    assert!(report.report_file_name_base.starts_with("Root-with-children-1-"));
    assert!(progress_reporter.message_count() > 0);
}

#[tokio::test]
async fn test_generate_report_restricted_only_skips_unrestricted_change() {
    let tree = ProjectTree::new(1, "Root").with_child(ProjectTree::new(2, "Child"));
    let repository = MockInventoryRepository::new(tree)
        .with_component(2, 20, "openssl")
        .with_history(
            20,
            InventoryHistory::new().with_event("101", vec![license_change("25", "1097")]),
        )
        .with_license("25", Some("MIT"), None)
        .with_license("1097", Some("GPL-3.0-only"), None);
    let use_case = GenerateReportUseCase::new(repository, MockProgressReporter::new());

    let report = use_case
        .execute(ReportRequest::new(
            1,
            options(r#"{"restrictedLicensesOnly": "true"}"#),
        ))
        .await
        .unwrap();

    assert!(report.audit_history.is_empty());
    assert_eq!(use_case.into_repository().license_call_count(), 0);
}

#[tokio::test]
async fn test_generate_report_restricted_only_keeps_restricted_change() {
    let repository = root_with_child();
    let use_case = GenerateReportUseCase::new(repository, MockProgressReporter::new());

    let report = use_case
        .execute(ReportRequest::new(
            1,
            options(r#"{"restrictedLicensesOnly": "yes"}"#),
        ))
        .await
        .unwrap();

    let entry = report.audit_history.get(20).unwrap();
    assert_eq!(entry.events[0].old_value, "GPL-2.0-only");
}

#[tokio::test]
async fn test_generate_report_without_children() {
    let use_case = GenerateReportUseCase::new(root_with_child(), MockProgressReporter::new());

    let report = use_case
        .execute(ReportRequest::new(
            1,
            options(r#"{"includeChildProjects": "false"}"#),
        ))
        .await
        .unwrap();

    assert_eq!(report.project_list.len(), 1);
    assert!(report.audit_history.is_empty());
    assert!(report.report_file_name_base.starts_with("Root-1-"));
}

#[tokio::test]
async fn test_generate_report_resolves_each_license_once() {
    let tree = ProjectTree::new(1, "Root");
    let repository = MockInventoryRepository::new(tree)
        .with_component(1, 10, "zlib")
        .with_component(1, 11, "libpng")
        .with_history(
            10,
            InventoryHistory::new().with_event("1", vec![license_change("331", "1097")]),
        )
        .with_history(
            11,
            InventoryHistory::new().with_event("2", vec![license_change("331", "1097")]),
        )
        .with_license("331", Some("GPL-2.0-only"), None)
        .with_license("1097", None, Some("GPL-3.0"));
    let use_case = GenerateReportUseCase::new(repository, MockProgressReporter::new());

    let report = use_case
        .execute(ReportRequest::new(1, options("{}")))
        .await
        .unwrap();

    assert_eq!(report.audit_history.event_count(), 2);
    assert_eq!(report.audit_history.get(11).unwrap().events[0].new_value, "GPL-3.0");
    assert_eq!(use_case.into_repository().license_call_count(), 2);
}

#[tokio::test]
async fn test_generate_report_ignores_non_components() {
    let repository = MockInventoryRepository::new(ProjectTree::new(1, "Root"))
        .with_item(1, InventoryItem::new(10, "notes", "Work in Progress"))
        .with_history(
            10,
            InventoryHistory::new().with_event("1", vec![license_change("331", "1097")]),
        );
    let use_case = GenerateReportUseCase::new(repository, MockProgressReporter::new());

    let report = use_case
        .execute(ReportRequest::new(1, options("{}")))
        .await
        .unwrap();

    assert!(report.audit_history.is_empty());
}

#[tokio::test]
async fn test_generate_report_uses_application_name() {
    let repository = root_with_child()
        .with_custom_field(2, "Application Name", "Payments")
        .with_custom_field(2, "Application Version", "3.1");
    let use_case = GenerateReportUseCase::new(repository, MockProgressReporter::new());

    let report = use_case
        .execute(ReportRequest::new(1, options("{}")))
        .await
        .unwrap();

    let entry = report.audit_history.get(20).unwrap();
    assert_eq!(entry.application_name_version, "Payments - 3.1");
}

#[tokio::test]
async fn test_generate_report_repository_failure() {
    let use_case =
        GenerateReportUseCase::new(MockInventoryRepository::with_failure(), MockProgressReporter::new());

    let result = use_case.execute(ReportRequest::new(1, options("{}"))).await;

    let err = format!("{:#}", result.unwrap_err());
    assert!(err.contains("Failed to load project hierarchy for project 1"));
    assert!(err.contains("Mock inventory repository failure"));
}

#[tokio::test]
async fn test_generate_and_publish_to_disk() {
    let temp_dir = TempDir::new().unwrap();
    let generator = GenerateReportUseCase::new(root_with_child(), MockProgressReporter::new());
    let report = generator
        .execute(ReportRequest::new(1, options("{}")))
        .await
        .unwrap();

    let uploader = MockReportUploader::new();
    let publisher = PublishReportUseCase::new(
        FileSystemArtifactWriter::new(temp_dir.path().to_path_buf()),
        ZipReportArchiver::new(temp_dir.path().to_path_buf()),
        uploader.clone(),
        MockProgressReporter::new(),
    );
    let published = publisher
        .execute(
            ReportDocument::Audit(&report),
            &[OutputFormat::Html, OutputFormat::Json],
            Some(UploadTarget {
                project_id: 1,
                report_id: 99,
            }),
        )
        .await
        .unwrap();

    assert_eq!(published.artifacts.len(), 2);
    assert!(published.uploaded);
    assert_eq!(
        published.archive,
        temp_dir
            .path()
            .join(format!("{}.zip", report.report_file_name_base))
    );
    assert!(published.archive.exists());

    let mut archive = zip::ZipArchive::new(fs::File::open(&published.archive).unwrap()).unwrap();
    let mut entry_names: Vec<String> = archive.file_names().map(str::to_string).collect();
    entry_names.sort();
    assert_eq!(
        entry_names,
        vec![
            format!("{}.html", report.report_file_name_base),
            format!("{}.json", report.report_file_name_base),
        ]
    );
    assert!(archive.by_index(0).unwrap().size() > 0);

    let html = fs::read_to_string(&published.artifacts[0]).unwrap();
    assert!(html.contains("GPL-2.0-only"));
    assert!(html.contains("<th>PROJECT</th>"));

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&published.artifacts[1]).unwrap()).unwrap();
    assert_eq!(json["auditHistory"][0]["inventoryID"], 20);

    let uploads = uploader.get_uploads();
    assert_eq!(uploads, vec![(1, 99, published.archive.clone())]);
}

#[tokio::test]
async fn test_publish_error_report_without_upload() {
    let temp_dir = TempDir::new().unwrap();
    let errors = match ReportOptions::parse(r#"{"includeChildProjects": "maybe"}"#) {
        Err(errors) => errors,
        Ok(_) => panic!("options should be rejected"),
    };
    let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
    let data = ErrorReportData::new(
        "Project Inventory License Audit Report",
        messages,
        ReportTimestamp::now(),
    );

    let uploader = MockReportUploader::new();
    let publisher = PublishReportUseCase::new(
        FileSystemArtifactWriter::new(temp_dir.path().to_path_buf()),
        ZipReportArchiver::new(temp_dir.path().to_path_buf()),
        uploader.clone(),
        MockProgressReporter::new(),
    );
    let published = publisher
        .execute(ReportDocument::Error(&data), &[OutputFormat::Html], None)
        .await
        .unwrap();

    assert!(!published.uploaded);
    assert!(uploader.get_uploads().is_empty());
    assert!(data
        .report_file_name_base
        .starts_with("Project_Inventory_License_Audit_Report-Creation_Error-"));
    let html = fs::read_to_string(&published.artifacts[0]).unwrap();
    assert!(html.contains("maybe"));
}

#[tokio::test]
async fn test_publish_upload_failure_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let data = ErrorReportData::new("Audit", vec!["bad".to_string()], ReportTimestamp::now());
    let publisher = PublishReportUseCase::new(
        FileSystemArtifactWriter::new(temp_dir.path().to_path_buf()),
        ZipReportArchiver::new(temp_dir.path().to_path_buf()),
        MockReportUploader::with_failure(),
        MockProgressReporter::new(),
    );

    let result = publisher
        .execute(
            ReportDocument::Error(&data),
            &[OutputFormat::Json],
            Some(UploadTarget {
                project_id: 1,
                report_id: 2,
            }),
        )
        .await;

    let err = format!("{:#}", result.unwrap_err());
    assert!(err.contains("Failed to upload the report archive"));
}
