//! OTP route handlers
//!
//! - `POST /send-otp`: issue a code and send it by SMS
//! - `POST /verify-otp`: check a submitted code

pub mod send_otp;
pub mod verify_otp;

use std::sync::Arc;

use otp_core::services::{CacheServiceTrait, OtpService, SmsServiceTrait};

pub use send_otp::send_otp;
pub use verify_otp::verify_otp;

/// Application state that holds shared services
pub struct AppState<S, C>
where
    S: SmsServiceTrait,
    C: CacheServiceTrait,
{
    pub otp_service: Arc<OtpService<S, C>>,
}

impl<S, C> AppState<S, C>
where
    S: SmsServiceTrait,
    C: CacheServiceTrait,
{
    pub fn new(otp_service: OtpService<S, C>) -> Self {
        Self {
            otp_service: Arc::new(otp_service),
        }
    }
}
