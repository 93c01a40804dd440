//! # Error Types
//!
//! Structured error types for calc_core. The engine itself only ever fails
//! on division by zero, and it recovers from that internally by showing the
//! `"Error"` sentinel. The other variants cover the edges of the crate:
//! turning key presses into events and loading settings.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::errors::{CalcError, CalcResult};
//!
//! fn checked_divide(left: f64, right: f64) -> CalcResult<f64> {
//!     if right == 0.0 {
//!         return Err(CalcError::DivisionByZero);
//!     }
//!     Ok(left / right)
//! }
//!
//! assert_eq!(checked_divide(1.0, 0.0).unwrap_err().error_code(), "DIVISION_BY_ZERO");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for calc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculator operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// Right-hand operand of a divide was exactly zero
    #[error("Division by zero")]
    DivisionByZero,

    /// A key has no binding to an input event
    #[error("Unrecognized key: {key:?}")]
    UnrecognizedKey { key: String },

    /// A digit value outside 0..=9
    #[error("Invalid digit: {value}")]
    InvalidDigit { value: u32 },

    /// A settings field is out of range
    #[error("Invalid setting '{field}': {value} - {reason}")]
    InvalidSettings {
        field: String,
        value: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an UnrecognizedKey error
    pub fn unrecognized_key(key: char) -> Self {
        CalcError::UnrecognizedKey {
            key: key.to_string(),
        }
    }

    /// Create an InvalidSettings error
    pub fn invalid_settings(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidSettings {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Whether the session can carry on as normal after this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            CalcError::DivisionByZero | CalcError::UnrecognizedKey { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::DivisionByZero => "DIVISION_BY_ZERO",
            CalcError::UnrecognizedKey { .. } => "UNRECOGNIZED_KEY",
            CalcError::InvalidDigit { .. } => "INVALID_DIGIT",
            CalcError::InvalidSettings { .. } => "INVALID_SETTINGS",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_settings("max_input_len", "0", "must be at least 1");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidSettings\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::DivisionByZero.error_code(), "DIVISION_BY_ZERO");
        assert_eq!(CalcError::unrecognized_key('x').error_code(), "UNRECOGNIZED_KEY");
    }

    #[test]
    fn test_recoverable() {
        assert!(CalcError::DivisionByZero.is_recoverable());
        assert!(!CalcError::SerializationError { reason: "eof".into() }.is_recoverable());
    }

    #[test]
    fn test_display_message() {
        assert_eq!(CalcError::unrecognized_key('q').to_string(), "Unrecognized key: \"q\"");
    }
}
