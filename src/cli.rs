use clap::Parser;
use inventory_license_audit::application::dto::{OutputFormat, DEFAULT_AUDIT_FIELD};
use inventory_license_audit::logging::DEFAULT_LOG_FILE;
use std::path::PathBuf;

/// Summarize license changes across a Code Insight project hierarchy
#[derive(Parser, Debug)]
#[command(name = "inventory-license-audit")]
#[command(version)]
#[command(
    about = "Summarize license changes across a Code Insight project hierarchy",
    long_about = None
)]
pub struct Args {
    /// Project to report on
    #[arg(long = "project-id", alias = "projectID", value_name = "ID")]
    pub project_id: u64,

    /// Report registration ID; the archive is uploaded to this report
    #[arg(long = "report-id", alias = "reportID", value_name = "ID")]
    pub report_id: Option<u64>,

    /// Code Insight API token
    #[arg(long = "auth-token", alias = "authToken", value_name = "TOKEN")]
    pub auth_token: String,

    /// Server address (overrides core.server.url from the properties file)
    #[arg(long = "base-url", alias = "baseURL", value_name = "URL")]
    pub base_url: Option<String>,

    /// Report options as JSON, e.g. {"includeChildProjects": "true"}
    #[arg(
        long = "report-options",
        alias = "reportOptions",
        value_name = "JSON",
        default_value = "{}"
    )]
    pub report_options: String,

    /// History field to audit
    #[arg(long = "audit-field", value_name = "FIELD", default_value = DEFAULT_AUDIT_FIELD)]
    pub audit_field: String,

    /// Output format: html or json. Can be specified multiple times
    #[arg(short, long = "format", value_name = "FORMAT", default_value = "html")]
    pub formats: Vec<OutputFormat>,

    /// Directory the report files and archive are written to
    #[arg(short, long = "output-dir", value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Server properties file (defaults to ./server_properties.json when present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Keep the archive local even when a report ID is given
    #[arg(long = "no-upload")]
    pub no_upload: bool,

    /// Log file, truncated on every run
    #[arg(long = "log-file", value_name = "PATH", default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// Log debug detail
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
