//! Conversion of domain errors into the JSON error envelope
//!
//! Every failure leaves the API as `{"status": "error", "message": ...}`.
//! Provider and store details are logged here and never returned.

use actix_web::{error::InternalError, error::JsonPayloadError, http::StatusCode, HttpRequest, HttpResponse};
use otp_core::errors::{DomainError, ValidationError};
use otp_shared::ErrorResponse;

/// Which endpoint an error came from; decides the wording for missing input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtpOperation {
    SendOtp,
    VerifyOtp,
}

impl OtpOperation {
    pub fn missing_input_message(self) -> &'static str {
        match self {
            OtpOperation::SendOtp => "Missing phone number",
            OtpOperation::VerifyOtp => "Missing phone number or OTP",
        }
    }
}

/// Build an error envelope with the given status
pub fn error_response(status: StatusCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse::new(message))
}

/// Handle domain errors and convert them to appropriate HTTP responses
pub fn handle_domain_error(error: &DomainError, operation: OtpOperation) -> HttpResponse {
    let (status, message) = match error {
        DomainError::Validation(ValidationError::RequiredField { .. }) => (
            StatusCode::BAD_REQUEST,
            operation.missing_input_message().to_string(),
        ),
        DomainError::Validation(ValidationError::InvalidPhoneFormat) => (
            StatusCode::BAD_REQUEST,
            "Invalid phone number format".to_string(),
        ),
        DomainError::Validation(unsupported @ ValidationError::UnsupportedCountryCode { .. }) => {
            (StatusCode::BAD_REQUEST, unsupported.to_string())
        }
        DomainError::InvalidOrExpiredOtp => (
            StatusCode::UNAUTHORIZED,
            "Invalid or expired OTP".to_string(),
        ),
        DomainError::Dispatch { .. } => (
            StatusCode::BAD_GATEWAY,
            "Failed to send OTP".to_string(),
        ),
        DomainError::Storage { .. } => (
            StatusCode::SERVICE_UNAVAILABLE,
            "OTP storage unavailable".to_string(),
        ),
        DomainError::Configuration { .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error".to_string(),
        ),
    };

    if status.is_server_error() {
        log::error!("{:?} failed: {}", operation, error);
    } else {
        log::warn!("{:?} rejected: {}", operation, error);
    }

    error_response(status, message)
}

/// Turn body deserialization failures into the error envelope
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::warn!("Malformed JSON body on {}: {}", req.path(), err);

    let message = match &err {
        JsonPayloadError::ContentType => "Content-Type must be application/json",
        JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
            "Request body too large"
        }
        _ => "Invalid JSON body",
    };
    InternalError::from_response(err, error_response(StatusCode::BAD_REQUEST, message)).into()
}

/// Default handler for unknown routes
pub async fn not_found() -> HttpResponse {
    error_response(StatusCode::NOT_FOUND, "The requested resource was not found")
}
