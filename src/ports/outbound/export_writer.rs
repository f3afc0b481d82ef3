use crate::shared::Result;
use std::path::Path;

/// ExportWriter port for persisting export files
///
/// This port abstracts the destination (the local file system in production)
/// where export directories and files are created.
pub trait ExportWriter {
    /// Makes sure `directory` exists, creating missing parents as needed
    ///
    /// # Returns
    /// `true` if the directory was created by this call, `false` if it already existed
    ///
    /// # Errors
    /// Returns an error if the path is occupied by a non-directory or
    /// cannot be created
    fn ensure_directory(&self, directory: &Path) -> Result<bool>;

    /// Writes `content` to `path`, replacing any existing file
    ///
    /// # Errors
    /// Returns an error if:
    /// - The target is a symbolic link
    /// - File permissions prevent writing
    /// - Disk space is insufficient
    fn write_file(&self, path: &Path, content: &[u8]) -> Result<()>;
}
