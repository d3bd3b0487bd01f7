//! Domain layer containing the value objects of the OTP lifecycle.

pub mod value_objects;

pub use value_objects::{OtpCode, PhoneNumber};
