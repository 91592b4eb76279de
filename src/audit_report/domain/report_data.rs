use crate::audit_report::domain::{AuditHistory, ProjectList, ProjectTree};
use chrono::{DateTime, Local, TimeZone};
use serde::Serialize;

pub const REPORT_NAME: &str = "Project Inventory License Audit Report";

/// Generation instant of a report, in the two renderings the artifacts need.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportTimestamp {
    /// `20230621-142501`, used in file names
    pub file_name_time_stamp: String,
    /// `June 21, 2023 at 14:25:01`, shown in the report footer
    pub report_time_stamp: String,
}

impl ReportTimestamp {
    pub fn now() -> Self {
        Self::at(Local::now())
    }

    pub fn at<Tz: TimeZone>(instant: DateTime<Tz>) -> Self
    where
        Tz::Offset: std::fmt::Display,
    {
        Self {
            file_name_time_stamp: instant.format("%Y%m%d-%H%M%S").to_string(),
            report_time_stamp: instant.format("%B %d, %Y at %H:%M:%S").to_string(),
        }
    }
}

/// Everything a renderer needs for the normal report.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportData {
    pub report_name: String,
    pub project_name: String,
    pub project_list: ProjectList,
    pub project_hierarchy: ProjectTree,
    pub audit_history: AuditHistory,
    #[serde(flatten)]
    pub timestamp: ReportTimestamp,
    pub report_file_name_base: String,
}

impl ReportData {
    pub fn new(
        report_name: &str,
        project_list: ProjectList,
        project_hierarchy: ProjectTree,
        audit_history: AuditHistory,
        timestamp: ReportTimestamp,
    ) -> Self {
        let project_name = project_hierarchy.name.clone();
        let report_file_name_base = report_file_name_base(
            &project_name,
            project_hierarchy.id,
            report_name,
            project_list.has_children(),
            &timestamp,
        );

        Self {
            report_name: report_name.to_string(),
            project_name,
            project_list,
            project_hierarchy,
            audit_history,
            timestamp,
            report_file_name_base,
        }
    }
}

/// Data for the report produced in place of the normal one when the report
/// options are invalid.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorReportData {
    pub report_name: String,
    pub errors: Vec<String>,
    #[serde(flatten)]
    pub timestamp: ReportTimestamp,
    pub report_file_name_base: String,
}

impl ErrorReportData {
    pub fn new(report_name: &str, errors: Vec<String>, timestamp: ReportTimestamp) -> Self {
        let report_file_name_base = format!(
            "{}-Creation_Error-{}",
            report_name.replace(' ', "_"),
            timestamp.file_name_time_stamp
        );

        Self {
            report_name: report_name.to_string(),
            errors,
            timestamp,
            report_file_name_base,
        }
    }
}

fn report_file_name_base(
    project_name: &str,
    project_id: u64,
    report_name: &str,
    with_children: bool,
    timestamp: &ReportTimestamp,
) -> String {
    let children_marker = if with_children { "-with-children" } else { "" };
    format!(
        "{}{}-{}-{}-{}",
        sanitize_for_file_name(project_name),
        children_marker,
        project_id,
        report_name.replace(' ', "_"),
        timestamp.file_name_time_stamp
    )
}

/// Collapses every run of characters outside `[a-zA-Z0-9]` into a single `-`.
pub fn sanitize_for_file_name(name: &str) -> String {
    let mut sanitized = String::with_capacity(name.len());
    let mut in_run = false;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            sanitized.push(c);
            in_run = false;
        } else if !in_run {
            sanitized.push('-');
            in_run = true;
        }
    }
    sanitized
}
