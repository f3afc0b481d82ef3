//! Configuration file support for freeze-export.
//!
//! Provides YAML-based configuration through `freeze-export.config.yml` files,
//! including data structures, file loading, validation, and merging with
//! command-line options.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::adapters::outbound::process::{DEFAULT_FREEZE_ARGS, DEFAULT_PACKAGE_MANAGER};
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "freeze-export.config.yml";

/// Output directory used when neither the CLI nor a config file names one
pub const DEFAULT_OUTPUT_DIR: &str = "python_package_exports";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub output_dir: Option<PathBuf>,
    pub package_manager: Option<PackageManagerConfig>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// The command used to produce the freeze listing.
#[derive(Debug, Deserialize, Clone)]
pub struct PackageManagerConfig {
    pub program: String,
    pub args: Option<Vec<String>>,
}

/// Effective settings after merging CLI options, config file and defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub output_dir: PathBuf,
    pub program: String,
    pub args: Vec<String>,
}

impl Settings {
    /// Merge with precedence CLI > config file > built-in default.
    pub fn resolve(
        cli_output_dir: Option<PathBuf>,
        cli_program: Option<String>,
        config: Option<&ConfigFile>,
    ) -> Self {
        let file_package_manager = config.and_then(|c| c.package_manager.as_ref());

        let output_dir = cli_output_dir
            .or_else(|| config.and_then(|c| c.output_dir.clone()))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

        let default_args = || -> Vec<String> {
            DEFAULT_FREEZE_ARGS.iter().map(|s| s.to_string()).collect()
        };

        // Config args belong to the config program and are dropped with it
        let (program, args) = match (cli_program, file_package_manager) {
            (Some(program), _) => (program, default_args()),
            (None, Some(pm)) => (
                pm.program.clone(),
                pm.args.clone().unwrap_or_else(default_args),
            ),
            (None, None) => (DEFAULT_PACKAGE_MANAGER.to_string(), default_args()),
        };

        Self {
            output_dir,
            program,
            args,
        }
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    // An empty file deserializes to null rather than an empty mapping
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref output_dir) = config.output_dir {
        if output_dir.as_os_str().is_empty() {
            bail!(
                "Invalid config: output_dir must not be empty.\n\n\
                 💡 Hint: Remove the key to use the default directory ({}).",
                DEFAULT_OUTPUT_DIR
            );
        }
    }

    if let Some(ref package_manager) = config.package_manager {
        if package_manager.program.trim().is_empty() {
            bail!(
                "Invalid config: package_manager.program must not be empty.\n\n\
                 💡 Hint: Set it to an executable on your PATH (e.g., \"pip\" or \"pip3\")."
            );
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
