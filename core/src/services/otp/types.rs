//! Types for OTP service results

use chrono::{DateTime, Utc};

use crate::domain::PhoneNumber;

/// Result of requesting an OTP
#[derive(Debug, Clone)]
pub struct SendOtpResult {
    /// The phone number exactly as the caller supplied it
    pub otp_sent_to: String,
    /// The canonical number the code was stored under and sent to
    pub phone: PhoneNumber,
    /// The SMS message ID from the provider
    pub message_id: String,
    /// When the stored code stops being valid
    pub expires_at: DateTime<Utc>,
}
