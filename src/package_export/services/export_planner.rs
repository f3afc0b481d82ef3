use crate::package_export::domain::ExportDate;

/// ExportPlanner service for deciding what an export run produces
///
/// This service contains pure logic: which date the export is filed under.
pub struct ExportPlanner;

impl ExportPlanner {
    /// Picks the export date
    ///
    /// # Arguments
    /// * `today` - The current local date from the clock
    /// * `date_override` - A date requested explicitly by the caller
    ///
    /// # Returns
    /// The override when present, otherwise today
    pub fn resolve_date(today: ExportDate, date_override: Option<ExportDate>) -> ExportDate {
        date_override.unwrap_or(today)
    }
}
