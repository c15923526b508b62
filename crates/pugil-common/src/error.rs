//! Error types for Pugil.

use thiserror::Error;

/// Top-level error type for Pugil operations.
#[derive(Debug, Error)]
pub enum PugilError {
    /// Stage geometry rejected at construction
    #[error("Invalid stage: {reason}")]
    InvalidStage {
        /// Why the geometry was rejected
        reason: String,
    },

    /// Match configuration failed validation
    #[error("Invalid configuration `{field}`: {reason}")]
    InvalidConfig {
        /// The offending field, dotted path form
        field: String,
        /// Why the value was rejected
        reason: String,
    },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PugilError {
    /// Convenience constructor for stage validation failures.
    #[must_use]
    pub fn invalid_stage(reason: impl Into<String>) -> Self {
        Self::InvalidStage {
            reason: reason.into(),
        }
    }

    /// Convenience constructor for config validation failures.
    #[must_use]
    pub fn invalid_config(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for Pugil operations.
pub type PugilResult<T> = Result<T, PugilError>;
