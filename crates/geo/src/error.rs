//! Error types for the geo crate.

use thiserror::Error;

/// Result type alias for geo operations.
pub type Result<T> = std::result::Result<T, GeoError>;

/// Errors that can occur while interpreting coordinate input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoError {
    /// Field text is not a finite decimal number
    #[error("{field} is not a number: {value:?}")]
    NotANumber {
        /// Name of the offending field
        field: &'static str,
        /// Raw text as entered
        value: String,
    },

    /// Parsed value lies outside the valid range
    #[error("{field} {value} is outside [{min}, {max}]")]
    OutOfRange {
        /// Name of the offending field
        field: &'static str,
        /// Parsed value
        value: f64,
        /// Inclusive lower bound
        min: f64,
        /// Inclusive upper bound
        max: f64,
    },
}

impl GeoError {
    /// Name of the field that failed to parse.
    pub fn field(&self) -> &'static str {
        match self {
            GeoError::NotANumber { field, .. } | GeoError::OutOfRange { field, .. } => field,
        }
    }
}
