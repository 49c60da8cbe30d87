//! CLI error type and exit codes.

use thiserror::Error;

/// Process exit codes.
pub mod exit_codes {
    /// Greeting printed.
    pub const SUCCESS: i32 = 0;
    /// Output could not be written.
    pub const ERROR: i32 = 1;
}

/// Errors surfaced by the `greeter` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// Writing the greeting failed.
    #[error("failed to write greeting: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Exit code to report for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Io(_) => exit_codes::ERROR,
        }
    }
}
