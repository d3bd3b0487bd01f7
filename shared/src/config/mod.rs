//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `cache` - OTP store backend and Redis connection settings
//! - `environment` - Environment detection and logging configuration
//! - `otp` - OTP policy (default country code, code length, expiry)
//! - `server` - HTTP server and CORS configuration
//!
//! Every configuration type has a `Default` implementation and a `from_env`
//! constructor. Unparseable numeric values fall back to the defaults.

pub mod cache;
pub mod environment;
pub mod otp;
pub mod server;

// Re-export commonly used types
pub use cache::{CacheBackend, CacheConfig};
pub use environment::{Environment, LoggingConfig};
pub use otp::OtpConfig;
pub use server::{CorsConfig, ServerConfig};

/// Read an environment variable and parse it, falling back to `default`
/// when the variable is missing or malformed.
pub(crate) fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}
