//! # Error Types
//!
//! Structured error types for thread_core.
//!
//! The form and the calculator never fail: unparseable text is coerced to
//! zero and simply leaves the Calculate action disabled. These errors only
//! come out of the outer surfaces, such as looking up a spacing from free
//! text or encoding a result as JSON.
//!
//! ## Example
//!
//! ```rust
//! use thread_core::errors::{ThreadError, ThreadResult};
//! use thread_core::spacing::IronSpacing;
//!
//! fn parse_spacing(text: &str) -> ThreadResult<IronSpacing> {
//!     text.parse()
//! }
//!
//! let err = parse_spacing("7.5").unwrap_err();
//! assert_eq!(err.error_code(), "SPACING_NOT_FOUND");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for thread_core operations
pub type ThreadResult<T> = Result<T, ThreadError>;

/// Structured error type for the non-form entry points.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum ThreadError {
    /// An input value is invalid (out of range, wrong type, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// The requested stitch spacing is not one of the catalog irons
    #[error("Spacing not found: '{value}' is not a supported iron spacing")]
    SpacingNotFound { value: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl ThreadError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        ThreadError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a SpacingNotFound error
    pub fn spacing_not_found(value: impl Into<String>) -> Self {
        ThreadError::SpacingNotFound { value: value.into() }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ThreadError::InvalidInput { .. } => "INVALID_INPUT",
            ThreadError::SpacingNotFound { .. } => "SPACING_NOT_FOUND",
            ThreadError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for ThreadError {
    fn from(err: serde_json::Error) -> Self {
        ThreadError::SerializationError {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = ThreadError::invalid_input("holes", "abc", "Hole count must be a whole number");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: ThreadError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_json_shape() {
        let error = ThreadError::spacing_not_found("7.5");
        let value = serde_json::to_value(&error).unwrap();
        assert_eq!(value["type"], "SpacingNotFound");
        assert_eq!(value["details"]["value"], "7.5");
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(ThreadError::spacing_not_found("1").error_code(), "SPACING_NOT_FOUND");
        assert_eq!(
            ThreadError::invalid_input("a", "b", "c").error_code(),
            "INVALID_INPUT"
        );
    }

    #[test]
    fn test_from_serde_error() {
        let err = serde_json::from_str::<u32>("not json").unwrap_err();
        let converted: ThreadError = err.into();
        assert_eq!(converted.error_code(), "SERIALIZATION_ERROR");
    }
}
