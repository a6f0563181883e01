//! Error types for SocialKV
//!
//! Collections never return errors: their failures are booleans or `None`.
//! This type covers the CSV layer and configuration.

use thiserror::Error;

/// Result type alias using SocialError
pub type Result<T> = std::result::Result<T, SocialError>;

/// Unified error type for SocialKV operations
#[derive(Debug, Error)]
pub enum SocialError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    // -------------------------------------------------------------------------
    // CSV Errors
    // -------------------------------------------------------------------------
    #[error("Malformed CSV at line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    #[error("Empty field '{field}' at line {line}")]
    EmptyField { line: usize, field: &'static str },

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SocialError {
    /// Line number of a CSV error, if this is one
    pub fn line(&self) -> Option<usize> {
        match self {
            SocialError::Malformed { line, .. } | SocialError::EmptyField { line, .. } => {
                Some(*line)
            }
            _ => None,
        }
    }
}
