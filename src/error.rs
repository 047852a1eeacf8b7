//! Error types for the payroll core.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! Validation failures and storage failures are kept as separate variants so
//! callers can tell "the input was invalid" apart from "the store failed".
//! A missing record is never an error; see [`crate::store::StoreOutcome`].

use thiserror::Error;

/// The main error type for the payroll core.
///
/// # Example
///
/// ```
/// use payroll_core::error::PayrollError;
///
/// let error = PayrollError::Validation {
///     field: "name".to_string(),
///     message: "cannot be empty".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid employee field 'name': cannot be empty");
/// assert!(error.is_validation());
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// An employee record violated a creation invariant.
    #[error("Invalid employee field '{field}': {message}")]
    Validation {
        /// The field that was invalid.
        field: String,
        /// A description of the violated rule.
        message: String,
    },

    /// The underlying storage engine reported a failure.
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds values the calculator cannot accept.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// A description of the rejected value.
        message: String,
    },
}

impl PayrollError {
    /// Creates a validation error for the given field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Returns true if this error was raised by input validation.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Returns true if this error came from the storage engine.
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_))
    }
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
