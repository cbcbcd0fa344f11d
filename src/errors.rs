use std::io;

use rustyline::error::ReadlineError;
use thiserror::Error;

/// Failures raised while reading the on-disk configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Malformed configuration: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Rejected user input. The message doubles as the re-prompt text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Invalid input! Please enter a valid number.")]
    NotANumber,
    #[error("Value cannot be negative. Try again.")]
    Negative,
    #[error("Invalid input! Please enter a valid integer.")]
    NotAnInteger,
    #[error("Value must be at least {0}. Try again.")]
    BelowMinimum(i64),
    #[error("Value must not exceed {0}. Try again.")]
    AboveMaximum(i64),
    #[error("Invalid choice! Please enter one of: {}.", .choices.join(", "))]
    UnknownChoice {
        choices: Vec<String>,
        suggestion: Option<String>,
    },
    #[error("Input cannot be empty. Please try again.")]
    Empty,
}

/// Errors surfaced by the interactive session.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to read input: {0}")]
    InputStream(io::Error),
    #[error("Line editor error: {0}")]
    Readline(#[from] ReadlineError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Input stream closed")]
    EndOfInput,
    #[error("Interrupted")]
    Interrupted,
}

impl CliError {
    /// Whether the session should stop quietly rather than report the error.
    ///
    /// A broken stdout pipe counts: nobody is left to read the report.
    pub fn ends_session(&self) -> bool {
        match self {
            CliError::EndOfInput | CliError::Interrupted => true,
            CliError::Io(err) => err.kind() == io::ErrorKind::BrokenPipe,
            _ => false,
        }
    }

    /// Whether the error should abort the whole program.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            CliError::InputStream(_) | CliError::Readline(_) | CliError::Config(_)
        )
    }
}
