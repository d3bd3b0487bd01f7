//! OTP lifecycle service module
//!
//! This module provides the one-time passcode workflow:
//! - Phone number canonicalization
//! - Secure code generation and expiring storage
//! - SMS dispatch through an injected provider
//! - One-shot verification

mod service;
mod traits;
mod types;


pub use service::{OtpService, OTP_MESSAGE_PREFIX};
pub use traits::{CacheServiceTrait, SmsServiceTrait};
pub use types::SendOtpResult;
pub use otp_shared::config::OtpConfig;
