use crate::ports::outbound::PackageLister;
use crate::shared::error::ExportError;
use crate::shared::Result;
use anyhow::Context;
use std::io::ErrorKind;
use std::process::{Command, Stdio};

/// Package manager invoked when nothing else is configured
pub const DEFAULT_PACKAGE_MANAGER: &str = "pip";

/// Arguments that put the default package manager in freeze mode
pub const DEFAULT_FREEZE_ARGS: &[&str] = &["freeze"];

/// FreezeCommand adapter running a package manager as a subprocess
///
/// The command inherits the current environment, so whichever `pip` is first
/// on `PATH` (or active in a virtualenv) is the one that gets listed.
#[derive(Debug, Clone)]
pub struct FreezeCommand {
    program: String,
    args: Vec<String>,
}

impl FreezeCommand {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl Default for FreezeCommand {
    fn default() -> Self {
        Self::new(
            DEFAULT_PACKAGE_MANAGER,
            DEFAULT_FREEZE_ARGS.iter().map(|s| s.to_string()).collect(),
        )
    }
}

impl PackageLister for FreezeCommand {
    fn freeze(&self) -> Result<Vec<u8>> {
        let output = match Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .output()
        {
            Ok(output) => output,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(ExportError::PackageManagerNotFound {
                    program: self.program.clone(),
                    details: e.to_string(),
                }
                .into());
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to run `{}`", self.describe()));
            }
        };

        if !output.status.success() {
            return Err(ExportError::PackageManagerFailed {
                program: self.program.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .into());
        }

        Ok(output.stdout)
    }

    fn describe(&self) -> String {
        if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        }
    }
}
