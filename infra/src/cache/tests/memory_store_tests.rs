//! Unit tests for the in-memory OTP store

use std::sync::Arc;

use otp_core::services::CacheServiceTrait;

use crate::cache::{InMemoryOtpStore, ManualClock};

fn store_with_clock() -> (InMemoryOtpStore<ManualClock>, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new());
    (InMemoryOtpStore::with_clock(clock.clone()), clock)
}

#[tokio::test]
async fn test_set_and_get() {
    let (store, _clock) = store_with_clock();

    store.set_with_expiry("+918209998944", "123456", 300).await.unwrap();

    assert_eq!(
        store.get("+918209998944").await.unwrap(),
        Some("123456".to_string())
    );
    assert_eq!(store.get("+918209998945").await.unwrap(), None);
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn test_set_overwrites_and_resets_ttl() {
    let (store, clock) = store_with_clock();

    store.set_with_expiry("+918209998944", "111111", 300).await.unwrap();
    clock.advance(200);
    store.set_with_expiry("+918209998944", "222222", 300).await.unwrap();
    clock.advance(200);

    // 400s after the first write, 200s after the second
    assert_eq!(
        store.get("+918209998944").await.unwrap(),
        Some("222222".to_string())
    );
}

#[tokio::test]
async fn test_entry_expires() {
    let (store, clock) = store_with_clock();

    store.set_with_expiry("+918209998944", "123456", 300).await.unwrap();

    clock.advance(299);
    assert!(store.get("+918209998944").await.unwrap().is_some());

    clock.advance(1);
    assert_eq!(store.get("+918209998944").await.unwrap(), None);
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_delete_reports_removal() {
    let (store, _clock) = store_with_clock();

    store.set_with_expiry("+918209998944", "123456", 300).await.unwrap();

    assert!(store.delete("+918209998944").await.unwrap());
    assert!(!store.delete("+918209998944").await.unwrap());
    assert_eq!(store.get("+918209998944").await.unwrap(), None);
}

#[tokio::test]
async fn test_delete_of_expired_entry_reports_nothing_removed() {
    let (store, clock) = store_with_clock();

    store.set_with_expiry("+918209998944", "123456", 60).await.unwrap();
    clock.advance(61);

    assert!(!store.delete("+918209998944").await.unwrap());
}

#[tokio::test]
async fn test_write_sweeps_expired_entries() {
    let (store, clock) = store_with_clock();

    for i in 0..1000 {
        let phone = format!("+91820999{:04}", i);
        store.set_with_expiry(&phone, "123456", 300).await.unwrap();
    }
    assert_eq!(store.raw_len(), 1000);

    clock.advance(3600);
    store.set_with_expiry("+918209998944", "654321", 300).await.unwrap();

    assert_eq!(store.len(), 1);
    assert_eq!(store.raw_len(), 1);
}

#[tokio::test]
async fn test_write_keeps_live_entries() {
    let (store, clock) = store_with_clock();

    store.set_with_expiry("+918209998944", "111111", 60).await.unwrap();
    store.set_with_expiry("+918209998945", "222222", 600).await.unwrap();
    clock.advance(120);
    store.set_with_expiry("+918209998946", "333333", 300).await.unwrap();

    assert_eq!(store.raw_len(), 2);
    assert_eq!(
        store.get("+918209998945").await.unwrap(),
        Some("222222".to_string())
    );
}

#[tokio::test]
async fn test_system_clock_store() {
    let store = InMemoryOtpStore::new();

    store.set_with_expiry("+918209998944", "654321", 300).await.unwrap();
    assert_eq!(
        store.get("+918209998944").await.unwrap(),
        Some("654321".to_string())
    );
}
