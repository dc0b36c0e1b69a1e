//! MITSIM CLI.
//!
//! Command-line interface for the mitigation simulator: argument parsing
//! and validation, command orchestration, logging, and exit codes.

pub mod cli;
pub mod commands;
pub mod exit;
pub mod logger;

pub use cli::{parse_from, Args, CliError};
pub use commands::{execute_simulate, CommandError, CommandResult, SimulateResult};
pub use logger::{Logger, MockLogger, NullLogger, StderrLogger, Verbosity};
