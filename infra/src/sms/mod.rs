//! SMS Service Module
//!
//! This module provides SMS service implementations for delivering OTPs.
//!
//! ## Features
//!
//! - **SMS Service Trait**: Common interface for all SMS providers
//! - **Mock Implementation**: Console output for development
//! - **AWS SNS Support**: Production SMS via AWS SNS
//! - **Adapter**: `SmsDispatcher` plugs any provider into the OTP service
//! - **Security**: Phone number masking in logs

pub mod adapter;
pub mod mock_sms;
pub mod sms_service;

// AWS SNS SMS service (feature-gated)
#[cfg(feature = "aws-sns")]
pub mod aws_sns;

// Re-export commonly used types
pub use adapter::SmsDispatcher;
pub use mock_sms::{MockSmsService, SentSms};
pub use sms_service::{is_valid_phone_number, mask_phone_number, SmsService};

#[cfg(feature = "aws-sns")]
pub use aws_sns::{AwsSnsConfig, AwsSnsSmsService};

use crate::InfrastructureError;

#[cfg(test)]
mod tests;

/// Create an SMS service based on configuration
///
/// Returns the SMS service implementation named by `config.provider`.
/// Unknown provider names fall back to the mock implementation with a
/// warning.
///
/// # Arguments
///
/// * `config` - SMS configuration containing provider settings
///
/// # Returns
///
/// * `Ok(service)` - A boxed SMS service implementation
/// * `Err(InfrastructureError::Config)` - The named provider could not be
///   initialized from the given settings
pub async fn create_sms_service(
    config: &crate::config::SmsConfig,
) -> Result<Box<dyn SmsService>, InfrastructureError> {
    match config.provider.as_str() {
        "mock" => Ok(Box::new(MockSmsService::new())),
        #[cfg(feature = "aws-sns")]
        "aws-sns" => {
            let aws_config = AwsSnsConfig::try_from(config).map_err(|e| {
                tracing::error!("Failed to initialize AWS SNS SMS service: {}", e);
                e
            })?;
            let service = AwsSnsSmsService::new(aws_config).await?;
            Ok(Box::new(service))
        }
        _ => {
            tracing::warn!(
                "Unknown SMS provider '{}', using mock implementation",
                config.provider
            );
            Ok(Box::new(MockSmsService::new()))
        }
    }
}
