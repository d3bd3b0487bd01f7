//! Value objects for the OTP domain

pub mod otp_code;
pub mod phone_number;

pub use otp_code::OtpCode;
pub use phone_number::PhoneNumber;
