use otp_shared::ResponseStatus;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /send-otp`
///
/// A missing or `null` field deserializes to `None`; the handler reports it
/// as a missing phone number rather than a malformed body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SendOtpRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "phone_number must not be empty"))]
    pub phone_number: Option<String>,
}

/// Body of `POST /verify-otp`
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct VerifyOtpRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "phone_number must not be empty"))]
    pub phone_number: Option<String>,
    #[serde(default)]
    #[validate(length(min = 1, message = "otp must not be empty"))]
    pub otp: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendOtpResponse {
    /// The phone number exactly as submitted
    pub otp_sent_to: String,
    pub status: ResponseStatus,
}

impl SendOtpResponse {
    pub fn new(otp_sent_to: impl Into<String>) -> Self {
        Self {
            otp_sent_to: otp_sent_to.into(),
            status: ResponseStatus::Success,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyOtpResponse {
    pub message: String,
    pub status: ResponseStatus,
}

impl VerifyOtpResponse {
    pub fn verified() -> Self {
        Self {
            message: "OTP verified successfully".to_string(),
            status: ResponseStatus::Success,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_and_null_fields_deserialize_to_none() {
        let request: SendOtpRequest = serde_json::from_str("{}").unwrap();
        assert!(request.phone_number.is_none());

        let request: VerifyOtpRequest =
            serde_json::from_str(r#"{"phone_number": null, "otp": "123456"}"#).unwrap();
        assert!(request.phone_number.is_none());
        assert_eq!(request.otp.as_deref(), Some("123456"));
    }

    #[test]
    fn test_empty_fields_fail_validation() {
        let request = SendOtpRequest {
            phone_number: Some(String::new()),
        };
        assert!(request.validate().is_err());

        let request = VerifyOtpRequest {
            phone_number: Some("8209998944".to_string()),
            otp: Some(String::new()),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_success_bodies() {
        let body = serde_json::to_value(SendOtpResponse::new("8209998944")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"otp_sent_to": "8209998944", "status": "success"})
        );

        let body = serde_json::to_value(VerifyOtpResponse::verified()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"message": "OTP verified successfully", "status": "success"})
        );
    }
}
