//! SMS Service Trait Adapter
//!
//! Bridges any infrastructure [`SmsService`] to the core `SmsServiceTrait`
//! the OTP service is injected with.

use async_trait::async_trait;
use otp_core::services::SmsServiceTrait;

use crate::sms::sms_service::SmsService;

/// Adapter that implements the core SmsServiceTrait for an SMS provider
///
/// Works with concrete providers (`SmsDispatcher<MockSmsService>`) and with
/// the boxed provider returned by `create_sms_service`
/// (`SmsDispatcher<dyn SmsService>`).
pub struct SmsDispatcher<T: SmsService + ?Sized> {
    inner: Box<T>,
}

impl<T: SmsService> SmsDispatcher<T> {
    pub fn new(inner: T) -> Self {
        Self {
            inner: Box::new(inner),
        }
    }
}

impl<T: SmsService + ?Sized> SmsDispatcher<T> {
    pub fn from_boxed(inner: Box<T>) -> Self {
        Self { inner }
    }

    /// The wrapped provider
    pub fn provider(&self) -> &T {
        &self.inner
    }
}

#[async_trait]
impl<T: SmsService + ?Sized> SmsServiceTrait for SmsDispatcher<T> {
    async fn send_message(&self, phone: &str, message: &str) -> Result<String, String> {
        self.inner
            .send_sms(phone, message)
            .await
            .map_err(|e| format!("{} provider: {}", self.inner.provider_name(), e))
    }
}
