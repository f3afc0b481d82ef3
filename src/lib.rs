//! freeze-export - snapshot installed Python packages to date-stamped files
//!
//! This library runs a package manager in "freeze" mode (`pip freeze` by
//! default) and writes its output verbatim to
//! `<output_dir>/python_packages_<YYYY-MM-DD>.txt`, creating the directory
//! when needed. It follows hexagonal architecture and Domain-Driven Design
//! principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`package_export`): Export dates, records and path rules
//! - **Application Layer** (`application`): The export use case and its DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Clock, subprocess, filesystem and console implementations
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use freeze_export::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case = ExportPackagesUseCase::new(
//!     SystemClock::new(),
//!     FreezeCommand::default(),
//!     FileSystemWriter::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let request = ExportRequest::new(PathBuf::from("/tmp/exports"), None, false);
//! let response = use_case.execute(request)?;
//! println!("{}", response.file_path.display());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod package_export;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::clock::SystemClock;
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::FileSystemWriter;
    pub use crate::adapters::outbound::process::FreezeCommand;
    pub use crate::application::dto::{ExportRequest, ExportResponse};
    pub use crate::application::use_cases::ExportPackagesUseCase;
    pub use crate::package_export::domain::{ExportDate, ExportRecord};
    pub use crate::package_export::services::ExportPlanner;
    pub use crate::ports::outbound::{Clock, ExportWriter, PackageLister, ProgressReporter};
    pub use crate::shared::error::{ExitCode, ExportError};
    pub use crate::shared::Result;
}
