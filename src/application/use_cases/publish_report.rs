use crate::application::dto::{OutputFormat, PublishedReport, UploadTarget};
use crate::application::factories::RendererFactory;
use crate::audit_report::domain::{ErrorReportData, ReportData};
use crate::ports::outbound::{
    ArtifactWriter, ProgressReporter, ReportArchiver, ReportRenderer, ReportUploader,
};
use crate::shared::Result;
use anyhow::Context;
use tracing::info;

/// The document being published: the audit report, or the error report that
/// replaces it when the report options were invalid.
#[derive(Debug, Clone, Copy)]
pub enum ReportDocument<'a> {
    Audit(&'a ReportData),
    Error(&'a ErrorReportData),
}

impl ReportDocument<'_> {
    pub fn file_name_base(&self) -> &str {
        match self {
            ReportDocument::Audit(data) => &data.report_file_name_base,
            ReportDocument::Error(data) => &data.report_file_name_base,
        }
    }

    fn render_with(&self, renderer: &dyn ReportRenderer) -> Result<String> {
        match self {
            ReportDocument::Audit(data) => renderer.render(data),
            ReportDocument::Error(data) => renderer.render_error(data),
        }
    }
}

/// PublishReportUseCase - renders, writes, archives and uploads a report
///
/// # Type Parameters
/// * `W` - ArtifactWriter implementation
/// * `A` - ReportArchiver implementation
/// * `U` - ReportUploader implementation
/// * `PR` - ProgressReporter implementation
pub struct PublishReportUseCase<W, A, U, PR> {
    artifact_writer: W,
    archiver: A,
    uploader: U,
    progress_reporter: PR,
}

impl<W, A, U, PR> PublishReportUseCase<W, A, U, PR>
where
    W: ArtifactWriter,
    A: ReportArchiver,
    U: ReportUploader,
    PR: ProgressReporter,
{
    pub fn new(artifact_writer: W, archiver: A, uploader: U, progress_reporter: PR) -> Self {
        Self {
            artifact_writer,
            archiver,
            uploader,
            progress_reporter,
        }
    }

    /// Publishes the document in every requested format
    ///
    /// # Arguments
    /// * `document` - Audit or error report to publish
    /// * `formats` - Output formats; duplicates are rendered once
    /// * `upload` - Upload destination, or `None` to keep the archive local
    pub async fn execute(
        &self,
        document: ReportDocument<'_>,
        formats: &[OutputFormat],
        upload: Option<UploadTarget>,
    ) -> Result<PublishedReport> {
        let base_name = document.file_name_base();
        let mut rendered: Vec<OutputFormat> = Vec::new();
        let mut artifacts = Vec::new();

        for format in formats {
            if rendered.contains(format) {
                continue;
            }
            rendered.push(*format);

            self.progress_reporter
                .report(RendererFactory::progress_message(*format));
            let renderer = RendererFactory::create(*format);
            let content = document
                .render_with(renderer.as_ref())
                .with_context(|| format!("Failed to render {} report", format))?;

            let file_name = format!("{}.{}", base_name, renderer.file_extension());
            let path = self.artifact_writer.write_artifact(&file_name, &content)?;
            info!(path = %path.display(), "Report artifact written");
            artifacts.push(path);
        }

        if artifacts.is_empty() {
            anyhow::bail!("No output format was requested; nothing to publish");
        }

        let archive = self.archiver.archive(base_name, &artifacts)?;
        self.progress_reporter
            .report(&format!("📦 Report archive created: {}", archive.display()));

        let uploaded = match upload {
            Some(target) => {
                self.progress_reporter.report(&format!(
                    "📤 Uploading report archive to report {} of project {}",
                    target.report_id, target.project_id
                ));
                self.uploader
                    .upload_report_archive(target.project_id, target.report_id, &archive)
                    .await
                    .context("Failed to upload the report archive")?;
                true
            }
            None => false,
        };

        self.progress_reporter.report_completion(&format!(
            "✅ Report published: {} artifact(s){}",
            artifacts.len(),
            if uploaded { ", uploaded to Code Insight" } else { "" }
        ));

        Ok(PublishedReport {
            artifacts,
            archive,
            uploaded,
        })
    }
}
