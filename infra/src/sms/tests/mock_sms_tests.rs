//! Unit tests for mock SMS service

use crate::sms::mock_sms::OUTBOX_CAPACITY;
use crate::sms::{MockSmsService, SmsService};
use crate::InfrastructureError;

#[tokio::test]
async fn test_mock_sms_send_success() {
    let service = MockSmsService::with_options(false, false);
    let result = service.send_sms("+918209998944", "Your verification code is: 123456").await;

    let message_id = result.unwrap();
    assert!(message_id.starts_with("mock_"));
    assert_eq!(service.get_message_count(), 1);

    let sent = service.last_message().unwrap();
    assert_eq!(sent.phone_number, "+918209998944");
    assert_eq!(sent.message, "Your verification code is: 123456");
    assert_eq!(sent.message_id, message_id);
}

#[tokio::test]
async fn test_mock_sms_invalid_phone() {
    let service = MockSmsService::with_options(false, false);
    let result = service.send_sms("8209998944", "Test message").await;

    if let Err(InfrastructureError::Sms(msg)) = result {
        assert!(msg.contains("Invalid phone number"));
    } else {
        panic!("Expected Sms error");
    }
    assert!(service.sent_messages().is_empty());
}

#[tokio::test]
async fn test_mock_sms_simulate_failure() {
    let mut service = MockSmsService::with_options(false, false);
    service.set_simulate_failure(true);

    let result = service.send_sms("+918209998944", "Test message").await;
    assert!(result.is_err());
    assert!(!service.is_available().await);
    assert_eq!(service.get_message_count(), 0);
}

#[tokio::test]
async fn test_mock_sms_counter() {
    let service = MockSmsService::with_options(false, false);

    for i in 1..=3 {
        let _ = service.send_sms("+918209998944", &format!("Message {}", i)).await;
        assert_eq!(service.get_message_count(), i);
    }
    assert_eq!(service.sent_messages().len(), 3);

    service.reset_counter();
    assert_eq!(service.get_message_count(), 0);
    assert!(service.last_message().is_none());
}

#[tokio::test]
async fn test_clones_share_outbox() {
    let service = MockSmsService::with_options(false, false);
    let clone = service.clone();

    clone.send_sms("+918209998944", "hello").await.unwrap();
    assert_eq!(service.get_message_count(), 1);
    assert_eq!(service.last_message().unwrap().message, "hello");
}

#[tokio::test]
async fn test_outbox_keeps_only_recent_messages() {
    let service = MockSmsService::with_options(false, false);
    let total = OUTBOX_CAPACITY + 50;

    for i in 0..total {
        service.send_sms("+918209998944", &format!("Message {}", i)).await.unwrap();
    }

    let sent = service.sent_messages();
    assert_eq!(sent.len(), OUTBOX_CAPACITY);
    assert_eq!(sent[0].message, "Message 50");
    assert_eq!(service.last_message().unwrap().message, format!("Message {}", total - 1));
    assert_eq!(service.get_message_count(), total as u64);
}

#[test]
fn test_provider_name() {
    let service = MockSmsService::new();
    assert_eq!(service.provider_name(), "Mock");
}
