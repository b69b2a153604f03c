//! Error types and handling infrastructure for CSV to JSON conversion

use std::path::PathBuf;

/// Errors raised while converting a CSV file to JSON.
///
/// `SchemaMismatch` is row-scoped and recoverable: the offending row is
/// reported and skipped while the conversion continues. Every other variant
/// aborts the run.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("invalid configuration: {message}")]
    Configuration { message: String },

    #[error("invalid input: {message}")]
    Validation {
        message: String,
        path: Option<PathBuf>,
    },

    #[error("row has {found} fields, expected {expected}: {row:?}")]
    SchemaMismatch {
        expected: usize,
        found: usize,
        row: Vec<String>,
    },

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
    },
}

impl ConvertError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Validation {
            message: message.into(),
            path,
        }
    }

    pub fn schema_mismatch(expected: usize, found: usize, row: Vec<String>) -> Self {
        Self::SchemaMismatch {
            expected,
            found,
            row,
        }
    }

    pub fn io(message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Io {
            message: message.into(),
            path,
        }
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Configuration { message } => {
                format!("Invalid configuration: {}", message)
            }
            Self::Validation { message, path } => match path {
                Some(path) => format!("Invalid input '{}': {}", path.display(), message),
                None => format!("Invalid input: {}", message),
            },
            Self::SchemaMismatch {
                expected,
                found,
                row,
            } => {
                format!(
                    "Skipping row with {} fields (header has {}): {:?}",
                    found, expected, row
                )
            }
            Self::Io { message, path } => match path {
                Some(path) => format!("IO error on '{}': {}", path.display(), message),
                None => format!("IO error: {}", message),
            },
        }
    }
}

impl From<serde_json::Error> for ConvertError {
    fn from(err: serde_json::Error) -> Self {
        Self::Io {
            message: err.to_string(),
            path: None,
        }
    }
}

/// Result type for conversion operations
pub type ConvertResult<T> = Result<T, ConvertError>;
