use actix_web::{web, HttpResponse};
use otp_core::errors::{DomainError, ValidationError};
use otp_core::services::{CacheServiceTrait, SmsServiceTrait};
use validator::Validate;

use super::AppState;
use crate::dto::{VerifyOtpRequest, VerifyOtpResponse};
use crate::handlers::{handle_domain_error, OtpOperation};

/// Handler for POST /verify-otp
///
/// A correct code can be used once. Wrong, expired and never-issued codes
/// all answer 401 with the same message.
pub async fn verify_otp<S, C>(
    state: web::Data<AppState<S, C>>,
    request: web::Json<VerifyOtpRequest>,
) -> HttpResponse
where
    S: SmsServiceTrait + 'static,
    C: CacheServiceTrait + 'static,
{
    let request = request.into_inner();

    if let Err(errors) = request.validate() {
        let field = errors
            .field_errors()
            .keys()
            .next()
            .map(|f| f.to_string())
            .unwrap_or_else(|| "phone_number".to_string());
        let error = DomainError::from(ValidationError::required(field));
        return handle_domain_error(&error, OtpOperation::VerifyOtp);
    }
    let phone_number = request.phone_number.unwrap_or_default();
    let otp = request.otp.unwrap_or_default();

    match state.otp_service.verify_otp(&phone_number, &otp).await {
        Ok(()) => HttpResponse::Ok().json(VerifyOtpResponse::verified()),
        Err(error) => handle_domain_error(&error, OtpOperation::VerifyOtp),
    }
}
