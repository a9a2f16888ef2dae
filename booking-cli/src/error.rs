//! Errors surfaced by the `booking` binary and their exit codes.

use booking::Error as LibError;
use thiserror::Error;

/// Anything a subcommand can fail with.
///
/// | code | meaning |
/// |------|---------|
/// | 1 | semantic failure: invalid draft, unknown id, failed validation |
/// | 4 | invalid arguments |
/// | 5 | I/O |
/// | 6 | other library error |
/// | 7 | configuration |
#[derive(Debug, Error)]
pub enum CliError {
    /// Error raised by the booking library.
    #[error(transparent)]
    Library(LibError),

    /// Arguments that parsed but make no sense.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// Reading stdin or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be loaded or is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The command ran but did not succeed.
    #[error("{0}")]
    SemanticFailure(String),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::SemanticFailure(_)
            | Self::Library(
                LibError::Validation { .. }
                | LibError::UnknownService { .. }
                | LibError::NotFound { .. },
            ) => 1,
            Self::Library(_) => 6,
            Self::InvalidArguments(_) => 4,
            Self::Io(_) => 5,
            Self::Config(_) => 7,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        match e {
            LibError::Io(io) => Self::Io(io),
            other => Self::Library(other),
        }
    }
}

impl From<csv::Error> for CliError {
    fn from(e: csv::Error) -> Self {
        Self::Io(e.into())
    }
}
