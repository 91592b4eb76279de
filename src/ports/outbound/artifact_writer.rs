use crate::shared::Result;
use std::path::PathBuf;

/// ArtifactWriter port for persisting rendered report documents
pub trait ArtifactWriter {
    /// Writes `content` under `file_name` and returns the full path written
    ///
    /// # Errors
    /// Returns an error if:
    /// - The output directory does not exist
    /// - The target is a symbolic link
    /// - Writing fails
    fn write_artifact(&self, file_name: &str, content: &str) -> Result<PathBuf>;
}
