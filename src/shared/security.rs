use crate::shared::error::ReportError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Largest server properties or certificate file we are willing to load (1 MB).
pub const MAX_CONFIG_FILE_SIZE: u64 = 1024 * 1024;

/// Rejects paths that are symbolic links.
///
/// Uses `symlink_metadata()` so the link itself is inspected rather than its target.
///
/// # Arguments
/// * `path` - The path to validate
/// * `operation` - Description of the operation (e.g., "read", "write") for error messages
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read metadata for {} operation on {}: {}",
            operation,
            path.display(),
            e
        )
    })?;

    if metadata.is_symlink() {
        return Err(ReportError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("{} refused on a symbolic link", operation),
            hint: "Remove the link or choose another output directory".to_string(),
        }
        .into());
    }

    Ok(())
}

/// Validates that a path exists and is a regular file (not a directory or symlink)
///
/// # Arguments
/// * `path` - The path to validate
/// * `file_description` - Description of the file (e.g., "server properties", "certificate")
pub fn validate_regular_file(path: &Path, file_description: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read {} metadata: {}",
            file_description,
            e
        )
    })?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    validate_file_size(metadata.len(), path, MAX_CONFIG_FILE_SIZE)
}

/// Validates file size is within acceptable limits
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}
