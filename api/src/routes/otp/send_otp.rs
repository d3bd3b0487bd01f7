use actix_web::{web, HttpResponse};
use otp_core::errors::{DomainError, ValidationError};
use otp_core::services::{CacheServiceTrait, SmsServiceTrait};
use validator::Validate;

use super::AppState;
use crate::dto::{SendOtpRequest, SendOtpResponse};
use crate::handlers::{handle_domain_error, OtpOperation};

/// Handler for POST /send-otp
///
/// # Request Body
///
/// ```json
/// { "phone_number": "8209998944" }
/// ```
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// { "otp_sent_to": "8209998944", "status": "success" }
/// ```
///
/// ## Errors
/// - 400: missing or malformed phone number
/// - 502: the SMS provider failed
/// - 503: the OTP store is unavailable
pub async fn send_otp<S, C>(
    state: web::Data<AppState<S, C>>,
    request: web::Json<SendOtpRequest>,
) -> HttpResponse
where
    S: SmsServiceTrait + 'static,
    C: CacheServiceTrait + 'static,
{
    let request = request.into_inner();

    if request.validate().is_err() {
        let error = DomainError::from(ValidationError::required("phone_number"));
        return handle_domain_error(&error, OtpOperation::SendOtp);
    }
    let phone_number = request.phone_number.unwrap_or_default();

    match state.otp_service.request_otp(&phone_number).await {
        Ok(result) => {
            log::info!(
                "OTP sent to {}, message_id: {}, expires_at: {}",
                result.phone.masked(),
                result.message_id,
                result.expires_at.to_rfc3339()
            );
            HttpResponse::Ok().json(SendOtpResponse::new(result.otp_sent_to))
        }
        Err(error) => handle_domain_error(&error, OtpOperation::SendOtp),
    }
}
