//! Interpreter error types
//!
//! These wrap core errors and add the failures only the command
//! interpreter can produce. All of them are reported to the user and the
//! read loop continues.

use thiserror::Error;

use cardbox_core::CoreError;

/// Interpreter-level errors
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{command} needs at least {needed} parameter(s)")]
    MissingArgument { command: &'static str, needed: usize },

    #[error("your command is not right, try again")]
    UnrecognizedCommand,

    #[error("invalid filter type, '{0}' is not valid")]
    UnknownFilter(String),

    #[error("'{0}' is not an option, enter 'labels', 'status' or 'exit'")]
    UnknownField(String),

    #[error("invalid input, '{0}' is not valid here")]
    UnknownEditInput(String),

    #[error("no card is selected for editing")]
    NoActiveCard,

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl CliError {
    /// Create a missing-argument error for a command
    pub fn missing_argument(command: &'static str, needed: usize) -> Self {
        Self::MissingArgument { command, needed }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            context: "IO operation failed".to_string(),
            source: err,
        }
    }
}

/// Result type for interpreter operations
pub type Result<T> = std::result::Result<T, CliError>;
