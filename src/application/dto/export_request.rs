use crate::package_export::domain::ExportDate;
use std::path::PathBuf;

/// ExportRequest - Internal request DTO for the export use case
#[derive(Debug, Clone)]
pub struct ExportRequest {
    /// Directory the export file is written into
    pub output_dir: PathBuf,
    /// Date to file the export under instead of today
    pub date_override: Option<ExportDate>,
    /// Report what would be written without touching the file system
    pub dry_run: bool,
}

impl ExportRequest {
    pub fn new(output_dir: PathBuf, date_override: Option<ExportDate>, dry_run: bool) -> Self {
        Self {
            output_dir,
            date_override,
            dry_run,
        }
    }
}
