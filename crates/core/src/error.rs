//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic failures (validation, bad thresholds).
/// Unknown sort keys and unknown shipping regions are deliberately *not*
/// errors: those fall back to "no reordering" and the default fee.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// A price bound was negative or NaN.
    #[error("invalid price threshold: min={min}, max={max}")]
    InvalidThreshold { min: f64, max: f64 },

    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
