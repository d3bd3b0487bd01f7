//! Cache configuration module
//!
//! The OTP store is either a Redis server (production) or an in-process map
//! (development and tests).

use serde::{Deserialize, Serialize};

use super::env_parse;

/// Which key-value store backs the OTP records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheBackend {
    Redis,
    Memory,
}

impl std::str::FromStr for CacheBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "redis" => Ok(CacheBackend::Redis),
            "memory" | "in-memory" => Ok(CacheBackend::Memory),
            _ => Err(format!("Invalid cache backend: {}", s)),
        }
    }
}

/// Redis cache configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Store backend
    #[serde(default = "default_backend")]
    pub backend: CacheBackend,

    /// Redis connection URL
    pub url: String,

    /// Connection timeout in seconds
    pub connection_timeout: u64,

    /// Response timeout in seconds, applied to every store call
    pub response_timeout: u64,

    /// Namespace prepended to every key
    #[serde(default)]
    pub key_prefix: Option<String>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            url: String::from("redis://localhost:6379"),
            connection_timeout: 5,
            response_timeout: 5,
            key_prefix: Some(String::from("otp")),
        }
    }
}

impl CacheConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let backend = std::env::var("CACHE_BACKEND")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.backend);
        let url = std::env::var("REDIS_URL").unwrap_or(defaults.url);
        let key_prefix = match std::env::var("REDIS_KEY_PREFIX") {
            Ok(prefix) if prefix.is_empty() => None,
            Ok(prefix) => Some(prefix),
            Err(_) => defaults.key_prefix,
        };

        Self {
            backend,
            url,
            connection_timeout: env_parse("REDIS_CONNECTION_TIMEOUT", defaults.connection_timeout),
            response_timeout: env_parse("REDIS_RESPONSE_TIMEOUT", defaults.response_timeout),
            key_prefix,
        }
    }

    /// Create a new cache configuration with URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Set the key prefix for all cache keys
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = Some(prefix.into());
        self
    }

    /// Drop the key prefix so keys are stored verbatim
    pub fn without_prefix(mut self) -> Self {
        self.key_prefix = None;
        self
    }

    /// Generate a cache key with prefix
    pub fn make_key(&self, key: &str) -> String {
        match &self.key_prefix {
            Some(prefix) => format!("{}:{}", prefix, key),
            None => key.to_string(),
        }
    }
}

fn default_backend() -> CacheBackend {
    CacheBackend::Redis
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_config_default() {
        let config = CacheConfig::default();
        assert_eq!(config.url, "redis://localhost:6379");
        assert_eq!(config.backend, CacheBackend::Redis);
        assert_eq!(config.key_prefix.as_deref(), Some("otp"));
    }

    #[test]
    fn test_cache_key_with_prefix() {
        let config = CacheConfig::new("redis://cache:6379").with_prefix("sms");
        assert_eq!(config.make_key("+918209998944"), "sms:+918209998944");
    }

    #[test]
    fn test_cache_key_without_prefix() {
        let config = CacheConfig::default().without_prefix();
        assert_eq!(config.make_key("+918209998944"), "+918209998944");
    }

    #[test]
    fn test_cache_backend_from_str() {
        assert_eq!("redis".parse::<CacheBackend>().unwrap(), CacheBackend::Redis);
        assert_eq!("Memory".parse::<CacheBackend>().unwrap(), CacheBackend::Memory);
        assert!("memcached".parse::<CacheBackend>().is_err());
    }
}
