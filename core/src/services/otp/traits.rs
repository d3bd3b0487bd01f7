//! Traits for SMS and cache service integration

use async_trait::async_trait;

/// Trait for SMS service integration
#[async_trait]
pub trait SmsServiceTrait: Send + Sync {
    /// Send a text message to an E.164 number, returning the provider message id
    async fn send_message(&self, phone: &str, message: &str) -> Result<String, String>;
}

/// Trait for the key-value store with expiry that holds OTP records
#[async_trait]
pub trait CacheServiceTrait: Send + Sync {
    /// Store `value` under `key`, replacing any previous value and resetting its TTL
    async fn set_with_expiry(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<(), String>;
    /// Read the value under `key`; `None` when absent or expired
    async fn get(&self, key: &str) -> Result<Option<String>, String>;
    /// Delete `key`, returning whether a live value was removed
    async fn delete(&self, key: &str) -> Result<bool, String>;
    /// Check that the store can serve requests
    async fn health_check(&self) -> Result<(), String> {
        Ok(())
    }
}
