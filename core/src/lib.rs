//! # SMS OTP Core
//!
//! Core business logic for the SMS one-time passcode service.
//! This crate contains the phone number and passcode value objects, the OTP
//! lifecycle service, the collaborator traits it is injected with, and the
//! domain error types.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
