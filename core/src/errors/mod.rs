//! Domain-specific error types and error handling.

mod types;

pub use types::ValidationError;

use thiserror::Error;

/// Core domain errors
///
/// Each variant maps to one failure class of the OTP lifecycle. Messages
/// never contain a passcode.
#[derive(Error, Debug)]
pub enum DomainError {
    /// Missing or malformed input
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The SMS provider rejected the message or could not be reached
    #[error("Failed to dispatch OTP: {message}")]
    Dispatch { message: String },

    /// The OTP store could not be read or written
    #[error("OTP storage unavailable: {message}")]
    Storage { message: String },

    /// No stored code, an expired code, an already consumed code or a
    /// mismatching code. Callers cannot tell these cases apart.
    #[error("Invalid or expired OTP")]
    InvalidOrExpiredOtp,

    /// The service was built with an unusable OTP policy
    #[error("Invalid OTP configuration: {message}")]
    Configuration { message: String },
}

pub type DomainResult<T> = Result<T, DomainError>;
