use crate::package_export::domain::ExportRecord;
use serde::Serialize;
use std::path::PathBuf;

/// ExportResponse - Summary of one export run
///
/// Serialized as-is for `--json` output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportResponse {
    /// Export date in `YYYY-MM-DD` form
    pub date: String,
    pub output_dir: PathBuf,
    pub file_path: PathBuf,
    pub package_count: usize,
    /// Zero in dry-run mode
    pub bytes_written: usize,
    /// Whether this run had to create the output directory
    pub directory_created: bool,
    pub dry_run: bool,
}

impl ExportResponse {
    pub fn from_record(record: &ExportRecord, directory_created: bool, dry_run: bool) -> Self {
        Self {
            date: record.date().to_string(),
            output_dir: record.directory().to_path_buf(),
            file_path: record.file_path().to_path_buf(),
            package_count: record.package_count(),
            bytes_written: if dry_run { 0 } else { record.payload().len() },
            directory_created,
            dry_run,
        }
    }
}
