//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the SMS OTP service.
//! It provides concrete implementations of the two collaborators the OTP
//! lifecycle service is injected with.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Cache**: Redis-backed and in-memory OTP stores with expiry
//! - **SMS**: SMS provider integrations (AWS SNS, mock console sender)
//!
//! ## Features
//!
//! - `aws-sns`: Enable the AWS SNS SMS provider (default)

// Re-export core types for convenience
pub use otp_core::errors::*;

/// SMS service module - External SMS providers
pub mod sms;

/// Cache module - OTP stores
pub mod cache;

/// Configuration module for infrastructure services
pub mod config {
    //! Configuration management for infrastructure services
    //!
    //! Handles:
    //! - Store backend and Redis settings (shared `CacheConfig`)
    //! - SMS provider selection and credentials

    use serde::{Deserialize, Serialize};

    pub use otp_shared::config::CacheConfig;

    /// Default AWS region for SNS
    pub const DEFAULT_AWS_REGION: &str = "us-east-1";

    /// Default bound on a single SNS publish call
    pub const DEFAULT_SMS_REQUEST_TIMEOUT_SECS: u64 = 10;

    /// SMS service configuration
    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct SmsConfig {
        /// SMS service provider ("aws-sns", "mock")
        pub provider: String,
        /// AWS access key id
        pub access_key_id: String,
        /// AWS secret access key
        #[serde(skip_serializing)]
        pub secret_access_key: String,
        /// AWS region
        pub region: String,
        /// Optional alphanumeric sender id
        pub sender_id: Option<String>,
        /// "Transactional" or "Promotional"
        pub sms_type: String,
        /// Seconds before a publish call is abandoned
        pub request_timeout_secs: u64,
    }

    impl Default for SmsConfig {
        fn default() -> Self {
            Self {
                provider: "mock".to_string(),
                access_key_id: String::new(),
                secret_access_key: String::new(),
                region: DEFAULT_AWS_REGION.to_string(),
                sender_id: None,
                sms_type: "Transactional".to_string(),
                request_timeout_secs: DEFAULT_SMS_REQUEST_TIMEOUT_SECS,
            }
        }
    }

    impl SmsConfig {
        /// Create from environment variables
        pub fn from_env() -> Self {
            let defaults = Self::default();

            Self {
                provider: std::env::var("SMS_PROVIDER").unwrap_or(defaults.provider),
                access_key_id: std::env::var("AWS_ACCESS_KEY_ID").unwrap_or_default(),
                secret_access_key: std::env::var("AWS_SECRET_ACCESS_KEY").unwrap_or_default(),
                region: std::env::var("AWS_REGION").unwrap_or(defaults.region),
                sender_id: std::env::var("AWS_SNS_SENDER_ID")
                    .ok()
                    .filter(|s| !s.is_empty()),
                sms_type: std::env::var("AWS_SNS_SMS_TYPE").unwrap_or(defaults.sms_type),
                request_timeout_secs: std::env::var("AWS_SNS_REQUEST_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.request_timeout_secs),
            }
        }

        /// A mock provider configuration, used by tests and local development
        pub fn mock() -> Self {
            Self::default()
        }
    }
}

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// SMS service error
    #[error("SMS service error: {0}")]
    Sms(String),

    /// An external call did not finish within its bound
    #[error("Timed out: {0}")]
    Timeout(String),
}
