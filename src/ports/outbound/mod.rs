/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (clock, processes, file system, console).
pub mod clock;
pub mod export_writer;
pub mod package_lister;
pub mod progress_reporter;

pub use clock::Clock;
pub use export_writer::ExportWriter;
pub use package_lister::PackageLister;
pub use progress_reporter::ProgressReporter;
