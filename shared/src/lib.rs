//! Shared utilities and common types for the SMS OTP server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types (server, cache, OTP policy, environment)
//! - The JSON error envelope returned by every endpoint
//! - Phone number utilities (canonicalization, masking, E.164 checks)

pub mod config;
pub mod errors;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    CacheBackend, CacheConfig, CorsConfig, Environment, LoggingConfig, OtpConfig, ServerConfig,
};
pub use errors::ErrorResponse;
pub use types::ResponseStatus;
pub use utils::phone;
