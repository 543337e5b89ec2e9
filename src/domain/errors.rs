//! # Domain Errors
//!
//! Error types raised when a domain value fails validation.
//!
//! # Error Hierarchy
//!
//! ```text
//! DomainError
//! ├── InvalidArgument  - malformed input (e.g. car number length)
//! └── OutOfRange       - numeric input outside its allowed range
//! ```
//!
//! # Examples
//!
//! ```
//! use taxi_income::domain::errors::DomainError;
//!
//! let err = DomainError::invalid_argument("car_number", "must be exactly 7 characters");
//! assert!(err.is_invalid_argument());
//! assert_eq!(err.field(), "car_number");
//! ```

use std::fmt;
use thiserror::Error;

/// Error raised by domain value construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// An argument was malformed.
    #[error("invalid argument `{field}`: {reason}")]
    InvalidArgument {
        /// Name of the offending field.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// A numeric argument fell outside its allowed range.
    #[error("argument `{field}` out of range (got {value}): {reason}")]
    OutOfRange {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value, rendered as text.
        value: String,
        /// Why the value was rejected.
        reason: String,
    },
}

impl DomainError {
    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field,
            reason: reason.into(),
        }
    }

    /// Creates an out of range error.
    #[must_use]
    pub fn out_of_range(
        field: &'static str,
        value: impl fmt::Display,
        reason: impl Into<String>,
    ) -> Self {
        Self::OutOfRange {
            field,
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Returns the name of the field that failed validation.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidArgument { field, .. } | Self::OutOfRange { field, .. } => field,
        }
    }

    /// Returns true if this is an invalid argument error.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Returns true if this is an out of range error.
    #[must_use]
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_argument_display() {
        let err = DomainError::invalid_argument("car_number", "must not be blank");
        assert_eq!(
            err.to_string(),
            "invalid argument `car_number`: must not be blank"
        );
        assert!(err.is_invalid_argument());
        assert!(!err.is_out_of_range());
    }

    #[test]
    fn out_of_range_display() {
        let err = DomainError::out_of_range("trip_cost", -5, "must be positive");
        assert_eq!(
            err.to_string(),
            "argument `trip_cost` out of range (got -5): must be positive"
        );
        assert!(err.is_out_of_range());
        assert!(!err.is_invalid_argument());
    }

    #[test]
    fn field_reports_offending_field() {
        assert_eq!(
            DomainError::invalid_argument("car_number", "x").field(),
            "car_number"
        );
        assert_eq!(
            DomainError::out_of_range("trip_cost", 0, "x").field(),
            "trip_cost"
        );
    }
}
