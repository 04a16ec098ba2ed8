//! This module defines all error types used throughout the application.

use std::io;
use thiserror::Error;

/// Main error type for the application
#[derive(Error, Debug)]
pub enum Error {
    /// IO errors (file not found, permission denied, etc.)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The text extractor could not be run or exited unsuccessfully
    #[error("Extraction failed running `{command}`: {message}")]
    Extraction { command: String, message: String },

    /// A line arrived in a state that has no handler for its event
    #[error("Undefined transition at line {line_number}: {event} while {state} ({line:?})")]
    UndefinedTransition {
        state: String,
        event: String,
        line_number: u64,
        line: String,
    },

    /// An action could not re-derive the captures of an already classified line
    #[error("Line classified as {event} no longer matches its pattern: {line:?}")]
    FragmentMismatch { event: String, line: String },

    /// A record was assembled before all of its fields were captured
    #[error("Record is missing field `{0}`")]
    MissingField(&'static str),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Output sink errors
    #[error("Output error: {0}")]
    Sink(String),

    /// Generic error with custom message
    #[error("{0}")]
    Custom(String),

    /// Wrapped anyhow errors
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a custom error with a message
    pub fn custom(msg: impl Into<String>) -> Self {
        Self::Custom(msg.into())
    }

    /// Create an extraction error for the given command
    pub fn extraction(command: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Extraction {
            command: command.into(),
            message: msg.into(),
        }
    }

    /// Create an output sink error
    pub fn sink(msg: impl Into<String>) -> Self {
        Self::Sink(msg.into())
    }

    /// Check if the error was caused by malformed statement text
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Error::UndefinedTransition { .. } | Error::FragmentMismatch { .. } | Error::MissingField(_)
        )
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Sink(format!("JSON error: {}", err))
    }
}

/// Create a custom error with formatting
#[macro_export]
macro_rules! custom_error {
    ($($arg:tt)*) => {
        $crate::error::Error::Custom(format!($($arg)*))
    };
}

/// Bail with a custom error message
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::custom_error!($($arg)*))
    };
}

/// Ensure a condition is true or return error
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($arg:tt)*) => {
        if !($cond) {
            $crate::bail!($($arg)*);
        }
    };
}
