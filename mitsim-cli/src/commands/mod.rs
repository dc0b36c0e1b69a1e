//! Command orchestration for the mitsim binary.

pub mod simulate;

pub use simulate::{execute_simulate, SimulateResult};

use thiserror::Error;

use crate::cli::CliError;
use mitsim_engine::ConfigError;
use mitsim_fs::FsError;

/// Errors from command execution.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] CliError),

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("export error: {0}")]
    Export(#[from] FsError),
}

/// Result of command execution.
pub type CommandResult<T> = Result<T, CommandError>;
