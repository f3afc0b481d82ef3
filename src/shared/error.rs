use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts and schedulers to tell a failed export
/// apart from a mistyped invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the export was written (or planned, in dry-run mode)
    Success = 0,
    /// Application error (directory, package manager, file I/O, config, etc.)
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors, malformed dates)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors for package exports.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// keeping every message paired with a hint for the operator.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to create output directory: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the parent directory is writable")]
    DirectoryCreateError { path: PathBuf, details: String },

    #[error("Invalid output path: {path}\nReason: {reason}\n\n💡 Hint: Please specify a directory with --output-dir or `output_dir` in the config file")]
    InvalidOutputPath { path: PathBuf, reason: String },

    #[error("Package manager not found: {program}\nDetails: {details}\n\n💡 Hint: Make sure `{program}` is installed and on your PATH, or set --package-manager")]
    PackageManagerNotFound { program: String, details: String },

    #[error("Package manager `{program}` exited with {status}\n{stderr}\n\n💡 Hint: Run the command manually to inspect the failure; no export file was written")]
    PackageManagerFailed {
        program: String,
        status: String,
        stderr: String,
    },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    /// Validation error for config values and date strings
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
