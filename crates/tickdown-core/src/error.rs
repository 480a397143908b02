//! Core error types for tickdown-core.
//!
//! The engine itself never fails -- invalid transitions are silent no-ops.
//! Errors exist only at the boundaries: duration parsing, event
//! serialization and terminal output.

use thiserror::Error;

use crate::duration::DurationError;

/// Core error type for tickdown-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Duration string could not be parsed
    #[error("Duration error: {0}")]
    Duration(#[from] DurationError),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO errors (terminal output)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
