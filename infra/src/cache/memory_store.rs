//! In-process OTP store
//!
//! A mutex-guarded map with per-entry expiry. Expired entries read as absent
//! and are swept from the map on every write. Suitable for development and tests;
//! records do not survive a restart and are not shared between processes.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use otp_core::services::CacheServiceTrait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use super::clock::{Clock, SystemClock};

struct Entry {
    value: String,
    expires_at: DateTime<Utc>,
}

/// In-memory OTP store driven by an injected [`Clock`]
pub struct InMemoryOtpStore<K: Clock = SystemClock> {
    entries: Mutex<HashMap<String, Entry>>,
    clock: Arc<K>,
}

impl InMemoryOtpStore<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }
}

impl Default for InMemoryOtpStore<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clock> InMemoryOtpStore<K> {
    pub fn with_clock(clock: Arc<K>) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            clock,
        }
    }

    /// Number of live (unexpired) records
    pub fn len(&self) -> usize {
        let now = self.clock.now();
        match self.entries.lock() {
            Ok(entries) => entries.values().filter(|e| e.expires_at > now).count(),
            Err(_) => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Entries held in the map, expired ones included
    #[cfg(test)]
    pub(crate) fn raw_len(&self) -> usize {
        self.entries.lock().map(|entries| entries.len()).unwrap_or(0)
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, Entry>>, String> {
        self.entries
            .lock()
            .map_err(|_| "in-memory OTP store lock poisoned".to_string())
    }
}

#[async_trait]
impl<K: Clock> CacheServiceTrait for InMemoryOtpStore<K> {
    async fn set_with_expiry(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<(), String> {
        let now = self.clock.now();
        let expires_at = now + Duration::seconds(ttl_seconds as i64);
        let mut entries = self.lock()?;
        entries.retain(|_, entry| entry.expires_at > now);
        entries.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at,
            },
        );
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, String> {
        let now = self.clock.now();
        let mut entries = self.lock()?;
        match entries.get(key) {
            Some(entry) if entry.expires_at > now => Ok(Some(entry.value.clone())),
            Some(_) => {
                entries.remove(key);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, key: &str) -> Result<bool, String> {
        let now = self.clock.now();
        let removed = self.lock()?.remove(key);
        Ok(removed.is_some_and(|entry| entry.expires_at > now))
    }
}
