mod cli;

use cli::Args;
use inventory_license_audit::adapters::outbound::console::StderrProgressReporter;
use inventory_license_audit::adapters::outbound::filesystem::{
    FileSystemArtifactWriter, ZipReportArchiver,
};
use inventory_license_audit::adapters::outbound::network::{CodeInsightClient, CodeInsightSettings};
use inventory_license_audit::application::dto::{ReportRequest, UploadTarget};
use inventory_license_audit::application::use_cases::{
    GenerateReportUseCase, PublishReportUseCase, ReportDocument,
};
use inventory_license_audit::audit_report::domain::report_data::REPORT_NAME;
use inventory_license_audit::audit_report::domain::{
    ErrorReportData, ReportOptions, ReportTimestamp,
};
use inventory_license_audit::config::{
    discover_config, load_config_from_path, resolve_base_url, ServerProperties,
};
use inventory_license_audit::logging::init_logging;
use inventory_license_audit::shared::error::{ExitCode, ReportError};
use inventory_license_audit::shared::Result;
use owo_colors::OwoColorize;
use std::path::Path;
use std::process;
use std::time::Duration;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let args = Args::parse_args();

    let exit_code = match run(args).await {
        Ok(code) => code,
        Err(e) => {
            error!(error = %format!("{:#}", e), "Report run failed");
            eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\n{} {}", "Caused by:".yellow(), cause);
            }

            eprintln!();
            ExitCode::ApplicationError
        }
    };

    process::exit(exit_code.as_i32());
}

async fn run(args: Args) -> Result<ExitCode> {
    init_logging(&args.log_file, args.verbose)?;
    info!(
        project_id = args.project_id,
        report_id = ?args.report_id,
        "Starting {} v{}",
        REPORT_NAME,
        env!("CARGO_PKG_VERSION")
    );

    let properties = load_properties(args.config.as_deref())?;
    let client = create_client(&args, properties.as_ref())?;
    let timestamp = ReportTimestamp::now();

    validate_output_dir(&args.output_dir)?;
    let upload_target = match (args.report_id, args.no_upload) {
        (Some(report_id), false) => Some(UploadTarget {
            project_id: args.project_id,
            report_id,
        }),
        _ => None,
    };

    let options = match ReportOptions::parse(&args.report_options) {
        Ok(options) => options,
        Err(errors) => {
            let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
            for message in &messages {
                error!(%message, "Invalid report option");
                eprintln!("{} {}", "⚠️ ".yellow(), message);
            }

            let data = ErrorReportData::new(REPORT_NAME, messages, timestamp);
            let publisher = PublishReportUseCase::new(
                FileSystemArtifactWriter::new(args.output_dir.clone()),
                ZipReportArchiver::new(args.output_dir.clone()),
                client,
                StderrProgressReporter::new(),
            );
            publisher
                .execute(ReportDocument::Error(&data), &args.formats, upload_target)
                .await?;
            return Ok(ExitCode::InvalidReportOptions);
        }
    };

    let request = ReportRequest::new(args.project_id, options)
        .with_audit_field(args.audit_field.clone())
        .with_timestamp(timestamp);

    let generator = GenerateReportUseCase::new(client, StderrProgressReporter::new());
    let report = generator.execute(request).await?;

    let publisher = PublishReportUseCase::new(
        FileSystemArtifactWriter::new(args.output_dir.clone()),
        ZipReportArchiver::new(args.output_dir.clone()),
        generator.into_repository(),
        StderrProgressReporter::new(),
    );
    let published = publisher
        .execute(ReportDocument::Audit(&report), &args.formats, upload_target)
        .await?;

    info!(
        archive = %published.archive.display(),
        uploaded = published.uploaded,
        "{} completed",
        REPORT_NAME
    );
    Ok(ExitCode::Success)
}

fn load_properties(explicit: Option<&Path>) -> Result<Option<ServerProperties>> {
    match explicit {
        Some(path) => load_config_from_path(path).map(Some),
        None => discover_config(Path::new(".")),
    }
}

fn create_client(args: &Args, properties: Option<&ServerProperties>) -> Result<CodeInsightClient> {
    let base_url = resolve_base_url(args.base_url.as_deref(), properties);
    let mut settings = CodeInsightSettings::new(base_url, args.auth_token.clone());

    if let Some(properties) = properties {
        if let Some(seconds) = properties.timeout_seconds {
            settings = settings.with_timeout(Duration::from_secs(seconds));
        }
        if let Some(retries) = properties.max_retries {
            settings = settings.with_max_retries(retries);
        }
        settings = settings.with_certificate(properties.certificate_path().map(Path::to_path_buf));
    }

    info!(base_url = %settings.base_url, "Using Code Insight server");
    CodeInsightClient::new(settings)
}

fn validate_output_dir(path: &Path) -> Result<()> {
    if !path.is_dir() {
        return Err(ReportError::ArtifactWriteError {
            path: path.to_path_buf(),
            details: "Output directory does not exist".to_string(),
        }
        .into());
    }
    Ok(())
}
