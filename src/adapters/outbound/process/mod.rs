/// Process adapters for running external package managers
mod freeze_command;

pub use freeze_command::{FreezeCommand, DEFAULT_FREEZE_ARGS, DEFAULT_PACKAGE_MANAGER};
