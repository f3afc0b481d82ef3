pub mod export_date;
pub mod export_record;

pub use export_date::ExportDate;
pub use export_record::{ExportRecord, EXPORT_FILE_EXTENSION, EXPORT_FILE_PREFIX};
