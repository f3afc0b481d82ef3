use clap::Parser;
use std::path::PathBuf;

use crate::package_export::domain::ExportDate;

/// Export installed Python packages to a date-stamped snapshot file
#[derive(Parser, Debug)]
#[command(name = "freeze-export")]
#[command(version)]
#[command(
    about = "Export installed Python packages (pip freeze) to a date-stamped file",
    long_about = None
)]
pub struct Args {
    /// Directory to write python_packages_<YYYY-MM-DD>.txt into (created if missing)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Path to a config file (defaults to ./freeze-export.config.yml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Package manager executable to run in freeze mode (default: pip)
    #[arg(long, value_name = "PROGRAM")]
    pub package_manager: Option<String>,

    /// File the export under this date instead of today (YYYY-MM-DD)
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub date: Option<ExportDate>,

    /// Show what would be exported without creating directories or files
    #[arg(long)]
    pub dry_run: bool,

    /// Print a JSON summary of the export to stdout
    #[arg(long)]
    pub json: bool,
}

impl Args {
    pub fn try_parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }
}
