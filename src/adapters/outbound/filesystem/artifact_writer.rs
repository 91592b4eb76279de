use crate::ports::outbound::ArtifactWriter;
use crate::shared::error::ReportError;
use crate::shared::security::validate_not_symlink;
use crate::shared::Result;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// FileSystemArtifactWriter adapter for writing report documents
///
/// Writes every artifact into a single output directory.
pub struct FileSystemArtifactWriter {
    output_dir: PathBuf,
}

impl FileSystemArtifactWriter {
    pub fn new(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }

    /// The output directory must already exist
    fn validate_output_directory(&self, target: &PathBuf) -> Result<()> {
        if !self.output_dir.is_dir() {
            return Err(ReportError::ArtifactWriteError {
                path: target.clone(),
                details: format!(
                    "Output directory does not exist: {}",
                    self.output_dir.display()
                ),
            }
            .into());
        }
        Ok(())
    }

    /// File names come from report data, so they must stay a single component
    fn validate_file_name(file_name: &str) -> Result<()> {
        if file_name.is_empty()
            || file_name.contains('/')
            || file_name.contains('\\')
            || file_name.contains("..")
        {
            anyhow::bail!(
                "Security: artifact name '{}' must be a plain file name",
                file_name
            );
        }
        Ok(())
    }
}

impl ArtifactWriter for FileSystemArtifactWriter {
    fn write_artifact(&self, file_name: &str, content: &str) -> Result<PathBuf> {
        Self::validate_file_name(file_name)?;
        let target = self.output_dir.join(file_name);

        self.validate_output_directory(&target)?;
        if fs::symlink_metadata(&target).is_ok() {
            validate_not_symlink(&target, "write report artifact")?;
        }

        fs::write(&target, content).map_err(|e| ReportError::ArtifactWriteError {
            path: target.clone(),
            details: e.to_string(),
        })?;

        debug!(path = %target.display(), bytes = content.len(), "Artifact written");
        Ok(target)
    }
}
