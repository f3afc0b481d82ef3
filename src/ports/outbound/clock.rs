use crate::package_export::domain::ExportDate;

/// Clock port for reading the current date
///
/// Abstracting the clock keeps the date in file names deterministic in tests.
pub trait Clock {
    /// Returns the current date in the system's local time zone
    fn today(&self) -> ExportDate;
}
