use crate::ports::outbound::ExportWriter;
use crate::shared::error::ExportError;
use crate::shared::security::{existing_directory, validate_not_symlink};
use crate::shared::Result;
use std::fs;
use std::io::Write;
use std::path::Path;

/// FileSystemWriter adapter for writing exports to the local disk
///
/// This adapter implements the ExportWriter port. Files are staged in a
/// temporary file next to the target and then renamed over it, so readers
/// only ever see a complete export.
pub struct FileSystemWriter;

impl FileSystemWriter {
    pub fn new() -> Self {
        Self
    }

    fn write_error(path: &Path, details: impl ToString) -> anyhow::Error {
        ExportError::FileWriteError {
            path: path.to_path_buf(),
            details: details.to_string(),
        }
        .into()
    }
}

impl Default for FileSystemWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ExportWriter for FileSystemWriter {
    fn ensure_directory(&self, directory: &Path) -> Result<bool> {
        if existing_directory(directory)? {
            return Ok(false);
        }

        fs::create_dir_all(directory).map_err(|e| ExportError::DirectoryCreateError {
            path: directory.to_path_buf(),
            details: e.to_string(),
        })?;

        Ok(true)
    }

    fn write_file(&self, path: &Path, content: &[u8]) -> Result<()> {
        validate_not_symlink(path, "write")?;

        let parent = match path.parent() {
            Some(parent) if parent != Path::new("") => parent,
            _ => Path::new("."),
        };

        let mut builder = tempfile::Builder::new();
        builder.prefix(".freeze-export-").suffix(".tmp");
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            builder.permissions(fs::Permissions::from_mode(0o644));
        }

        let mut staged = builder
            .tempfile_in(parent)
            .map_err(|e| Self::write_error(path, e))?;
        staged
            .write_all(content)
            .and_then(|_| staged.flush())
            .map_err(|e| Self::write_error(path, e))?;
        staged
            .persist(path)
            .map_err(|e| Self::write_error(path, e.error))?;

        Ok(())
    }
}
