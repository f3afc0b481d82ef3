/// Mock implementations for testing
mod mock_clock;
mod mock_package_lister;
mod mock_progress_reporter;

pub use mock_clock::MockClock;
pub use mock_package_lister::MockPackageLister;
pub use mock_progress_reporter::MockProgressReporter;
