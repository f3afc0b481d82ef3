use crate::shared::error::ExportError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Validates that a path is not a symbolic link
///
/// # Security
/// This function uses `symlink_metadata()` instead of `metadata()` to ensure
/// we check the symlink itself, not the target it points to. A path that does
/// not exist is not a symlink and passes.
///
/// # Arguments
/// * `path` - The path to validate
/// * `operation` - Description of the operation (e.g., "write") for error messages
///
/// # Errors
/// Returns a `SecurityError` if the path is a symbolic link
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(e) => {
            anyhow::bail!(
                "Failed to read metadata for {} operation on {}: {}",
                operation,
                path.display(),
                e
            )
        }
    };

    if metadata.is_symlink() {
        return Err(ExportError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "Path is a symbolic link. For security reasons, {} operations on symbolic links are not allowed.",
                operation
            ),
            hint: "Remove the link or choose a different output directory".to_string(),
        }
        .into());
    }

    Ok(())
}

/// Checks whether an output directory already exists
///
/// # Returns
/// `true` if the path is an existing directory, `false` if nothing exists there
///
/// # Errors
/// Returns an `InvalidOutputPath` error if something other than a directory
/// occupies the path
pub fn existing_directory(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }

    if !path.is_dir() {
        return Err(ExportError::InvalidOutputPath {
            path: path.to_path_buf(),
            reason: "Path exists but is not a directory".to_string(),
        }
        .into());
    }

    Ok(true)
}
