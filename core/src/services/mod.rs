//! Business services containing domain logic and use cases.

pub mod otp;

// Re-export commonly used types
pub use otp::{CacheServiceTrait, OtpConfig, OtpService, SendOtpResult, SmsServiceTrait, OTP_MESSAGE_PREFIX};
