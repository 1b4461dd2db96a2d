//! Custom error types for the expense tracker
//!
//! This module defines the error hierarchy for the application using thiserror.
//! Every variant is user-correctable: nothing here should terminate a session.

use thiserror::Error;

use crate::models::{Money, Month};

/// Malformed or missing input field
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid salary")]
    InvalidSalary,

    #[error("missing field: {0}")]
    MissingField(&'static str),

    #[error("invalid year")]
    InvalidYear,

    #[error("invalid month")]
    InvalidMonth,

    #[error("invalid amount")]
    InvalidAmount,
}

/// The main error type for expense tracker operations
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Summary export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Input field failed format validation
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Expense exceeds what is left of the month's salary
    #[error("Insufficient balance for month {month}: need {requested}, have {available}")]
    InsufficientBalance {
        month: Month,
        requested: Money,
        available: Money,
    },

    /// Expense entry or summary attempted before the user was confirmed
    #[error("No account confirmed yet: enter name, role and salary first")]
    NoAccount,

    /// The session account is fixed once confirmed
    #[error("An account is already confirmed for this session")]
    AccountAlreadyConfirmed,

    /// Unparseable shell command line
    #[error("{0}")]
    Usage(String),
}

impl TrackerError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this is an insufficient balance error
    pub fn is_insufficient_balance(&self) -> bool {
        matches!(self, Self::InsufficientBalance { .. })
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for expense tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TrackerError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_validation_messages() {
        assert_eq!(ValidationError::InvalidSalary.to_string(), "invalid salary");
        assert_eq!(
            ValidationError::MissingField("name").to_string(),
            "missing field: name"
        );

        let err: TrackerError = ValidationError::InvalidMonth.into();
        assert_eq!(err.to_string(), "Validation error: invalid month");
        assert!(err.is_validation());
    }

    #[test]
    fn test_insufficient_balance_error() {
        let err = TrackerError::InsufficientBalance {
            month: Month::new(3).unwrap(),
            requested: Money::from_cents(60000),
            available: Money::from_cents(50000),
        };
        assert_eq!(
            err.to_string(),
            "Insufficient balance for month 3: need 600.00, have 500.00"
        );
        assert!(err.is_insufficient_balance());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: TrackerError = io_err.into();
        assert!(matches!(err, TrackerError::Io(_)));
    }
}
