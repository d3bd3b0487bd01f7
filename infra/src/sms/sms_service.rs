//! SMS Service Interface
//!
//! Defines the trait every SMS provider implements.

use async_trait::async_trait;
use crate::InfrastructureError;

pub use otp_shared::phone::mask_phone_number;

/// SMS service trait for sending text messages
///
/// Implementations include:
/// - AWS SNS
/// - Mock implementation for development
#[async_trait]
pub trait SmsService: Send + Sync {
    /// Send an SMS message to a phone number
    ///
    /// # Arguments
    ///
    /// * `phone_number` - The recipient's phone number (E.164 format)
    /// * `message` - The message content to send
    ///
    /// # Returns
    ///
    /// * `Ok(message_id)` - Unique identifier for the sent message
    /// * `Err(InfrastructureError)` - If sending fails
    ///
    /// # Example
    ///
    /// ```ignore
    /// let service = MockSmsService::new();
    /// let message_id = service.send_sms("+918209998944", "Your verification code is: 123456").await?;
    /// ```
    async fn send_sms(&self, phone_number: &str, message: &str) -> Result<String, InfrastructureError>;

    /// Get the service provider name
    ///
    /// Returns the name of the SMS service provider (e.g., "AWS SNS", "Mock")
    fn provider_name(&self) -> &str;

    /// Check if the service is available
    ///
    /// Default implementation always returns true.
    async fn is_available(&self) -> bool {
        true
    }
}

/// Validate phone number format (E.164)
///
/// A leading '+', a non-zero first digit and 2 to 15 digits in total.
pub fn is_valid_phone_number(phone: &str) -> bool {
    otp_shared::phone::is_valid_international_phone(phone)
}
