//! Redis-backed OTP store
//!
//! Records live under `{prefix}:{canonical phone}` (e.g. `otp:+918209998944`)
//! and expire through Redis' own TTL.

use async_trait::async_trait;
use otp_core::services::CacheServiceTrait;
use tracing::debug;

use crate::cache::RedisClient;
use crate::config::CacheConfig;
use crate::InfrastructureError;

/// OTP store over a [`RedisClient`]
#[derive(Clone)]
pub struct RedisOtpStore {
    /// Redis client for cache operations
    redis_client: RedisClient,
    /// Supplies the key namespace
    config: CacheConfig,
}

impl RedisOtpStore {
    /// Wrap an existing client
    pub fn new(redis_client: RedisClient, config: CacheConfig) -> Self {
        Self {
            redis_client,
            config,
        }
    }

    /// Connect to the Redis server named in `config`
    pub async fn connect(config: CacheConfig) -> Result<Self, InfrastructureError> {
        let redis_client = RedisClient::new(&config).await?;
        Ok(Self::new(redis_client, config))
    }

    /// The Redis key a canonical phone number is stored under
    pub fn key_for(&self, phone: &str) -> String {
        self.config.make_key(phone)
    }
}

#[async_trait]
impl CacheServiceTrait for RedisOtpStore {
    async fn set_with_expiry(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<(), String> {
        self.redis_client
            .set_with_expiry(&self.key_for(key), value, ttl_seconds)
            .await
            .map_err(|e| e.to_string())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, String> {
        self.redis_client
            .get(&self.key_for(key))
            .await
            .map_err(|e| e.to_string())
    }

    async fn delete(&self, key: &str) -> Result<bool, String> {
        let deleted = self
            .redis_client
            .delete(&self.key_for(key))
            .await
            .map_err(|e| e.to_string())?;
        debug!(deleted, "Deleted OTP record");
        Ok(deleted)
    }

    async fn health_check(&self) -> Result<(), String> {
        match self.redis_client.health_check().await {
            Ok(true) => Ok(()),
            Ok(false) => Err("unexpected PING reply".to_string()),
            Err(e) => Err(e.to_string()),
        }
    }
}
