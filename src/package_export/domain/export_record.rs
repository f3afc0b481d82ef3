use super::ExportDate;
use std::path::{Path, PathBuf};

/// Prefix shared by every export file name
pub const EXPORT_FILE_PREFIX: &str = "python_packages_";

/// Extension shared by every export file name
pub const EXPORT_FILE_EXTENSION: &str = "txt";

/// ExportRecord value object for a single export
///
/// Holds the date, the destination directory, the derived file path and the
/// verbatim output of the package manager. A record is built once per run
/// and written once.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportRecord {
    date: ExportDate,
    directory: PathBuf,
    file_path: PathBuf,
    payload: Vec<u8>,
}

impl ExportRecord {
    pub fn new(date: ExportDate, directory: PathBuf, payload: Vec<u8>) -> Self {
        let file_path = directory.join(Self::file_name(&date));
        Self {
            date,
            directory,
            file_path,
            payload,
        }
    }

    /// File name for an export taken on `date`: `python_packages_<YYYY-MM-DD>.txt`
    pub fn file_name(date: &ExportDate) -> String {
        format!("{}{}.{}", EXPORT_FILE_PREFIX, date, EXPORT_FILE_EXTENSION)
    }

    pub fn date(&self) -> &ExportDate {
        &self.date
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Number of non-blank lines in the payload
    ///
    /// Freeze output lists one package per line, so this is the package
    /// count shown to the user. The payload itself is never rewritten.
    pub fn package_count(&self) -> usize {
        String::from_utf8_lossy(&self.payload)
            .lines()
            .filter(|line| !line.trim().is_empty())
            .count()
    }
}
