//! Unified error type for Vana'diel time operations
//!
//! Construction and conversion report failures through [`VanaError`] so callers
//! can match on the failure kind instead of parsing strings. Formatting never
//! fails and has no error variant.

use thiserror::Error;

/// Unified error type for time construction and conversion
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VanaError {
    /// A component or converted scalar is outside its allowed range
    #[error("{field} out of range: {value}")]
    OutOfRange { field: &'static str, value: i64 },

    /// The input cannot be interpreted as a time value
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A constructor that requires the year was called without components
    #[error("Wrong number of arguments: year is required")]
    MissingArguments,
}

impl VanaError {
    /// Creates an out-of-range error naming the offending field.
    ///
    /// Use `"time"` as the field when an arithmetic or conversion result
    /// no longer fits the internal scalar.
    ///
    /// # Example
    /// ```ignore
    /// if !(1..=12).contains(&month) {
    ///     return Err(VanaError::out_of_range("month", month as i64));
    /// }
    /// ```
    pub fn out_of_range(field: &'static str, value: i64) -> Self {
        Self::OutOfRange { field, value }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Returns the field name for out-of-range errors.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::OutOfRange { field, .. } => Some(field),
            _ => None,
        }
    }
}
