//! Cache module for OTP storage
//!
//! This module provides the key-value stores with expiry that hold OTP
//! records: a Redis-backed store for production and an in-memory store for
//! development and tests. Both implement the core `CacheServiceTrait`.

pub mod clock;
pub mod memory_store;
pub mod otp_store;
pub mod redis_client;

#[cfg(test)]
mod tests;

use async_trait::async_trait;
use otp_core::services::CacheServiceTrait;
use otp_shared::CacheBackend;
use tracing::info;

use crate::InfrastructureError;

pub use clock::{Clock, ManualClock, SystemClock};
pub use memory_store::InMemoryOtpStore;
pub use otp_store::RedisOtpStore;
pub use redis_client::RedisClient;

// Re-export commonly used types
pub use otp_shared::config::CacheConfig;

/// The store selected at startup from `CacheConfig::backend`
pub enum OtpStore {
    Redis(RedisOtpStore),
    Memory(InMemoryOtpStore),
}

impl OtpStore {
    /// Build the configured store, connecting to Redis when selected
    pub async fn from_config(config: &CacheConfig) -> Result<Self, InfrastructureError> {
        match config.backend {
            CacheBackend::Redis => {
                let store = RedisOtpStore::connect(config.clone()).await?;
                Ok(OtpStore::Redis(store))
            }
            CacheBackend::Memory => {
                info!("Using in-memory OTP store; records are lost on restart");
                Ok(OtpStore::Memory(InMemoryOtpStore::new()))
            }
        }
    }

    pub fn backend_name(&self) -> &'static str {
        match self {
            OtpStore::Redis(_) => "redis",
            OtpStore::Memory(_) => "memory",
        }
    }
}

#[async_trait]
impl CacheServiceTrait for OtpStore {
    async fn set_with_expiry(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<(), String> {
        match self {
            OtpStore::Redis(store) => store.set_with_expiry(key, value, ttl_seconds).await,
            OtpStore::Memory(store) => store.set_with_expiry(key, value, ttl_seconds).await,
        }
    }

    async fn get(&self, key: &str) -> Result<Option<String>, String> {
        match self {
            OtpStore::Redis(store) => store.get(key).await,
            OtpStore::Memory(store) => store.get(key).await,
        }
    }

    async fn delete(&self, key: &str) -> Result<bool, String> {
        match self {
            OtpStore::Redis(store) => store.delete(key).await,
            OtpStore::Memory(store) => store.delete(key).await,
        }
    }

    async fn health_check(&self) -> Result<(), String> {
        match self {
            OtpStore::Redis(store) => store.health_check().await,
            OtpStore::Memory(store) => store.health_check().await,
        }
    }
}
