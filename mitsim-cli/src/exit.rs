//! Exit codes for the mitsim CLI.
//!
//! Following Unix conventions for exit codes.

use crate::commands::CommandError;

/// Exit code constants.
pub mod codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Invalid arguments or configuration.
    pub const INVALID_ARGS: i32 = 1;
    /// Export I/O error.
    pub const IO_ERROR: i32 = 2;
}

/// Map a CommandError to an exit code.
pub fn exit_code(error: &CommandError) -> i32 {
    match error {
        CommandError::InvalidArgument(_) => codes::INVALID_ARGS,
        CommandError::Config(_) => codes::INVALID_ARGS,
        CommandError::Export(_) => codes::IO_ERROR,
    }
}
