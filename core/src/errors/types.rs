//! Input validation errors

use thiserror::Error;

/// Validation errors raised before the store or the SMS provider is touched
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Invalid phone number format")]
    InvalidPhoneFormat,

    #[error("Unsupported country code, expected {expected}")]
    UnsupportedCountryCode { expected: String },
}

impl ValidationError {
    /// Shorthand for a missing or empty field
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::RequiredField { field: field.into() }
    }
}
