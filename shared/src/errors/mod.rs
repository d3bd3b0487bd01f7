//! Shared error response structure

use serde::{Deserialize, Serialize};

use crate::types::ResponseStatus;

/// Error envelope returned by every endpoint on failure
///
/// ```json
/// { "status": "error", "message": "Invalid or expired OTP" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Always [`ResponseStatus::Error`]
    pub status: ResponseStatus,

    /// Human-readable error message
    pub message: String,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_shape() {
        let body = serde_json::to_value(ErrorResponse::new("Missing phone number")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"status": "error", "message": "Missing phone number"})
        );
    }
}
