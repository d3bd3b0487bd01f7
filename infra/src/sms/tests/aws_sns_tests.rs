//! Tests for AWS SNS SMS Service

use crate::config::SmsConfig;
use crate::sms::aws_sns::{to_e164, AwsSnsConfig, AwsSnsSmsService};
use crate::sms::sms_service::SmsService;
use crate::InfrastructureError;

fn sns_settings() -> SmsConfig {
    SmsConfig {
        provider: "aws-sns".to_string(),
        access_key_id: "test_access_key".to_string(),
        secret_access_key: "test_secret_key".to_string(),
        ..SmsConfig::default()
    }
}

#[test]
fn test_aws_sns_config_from_sms_config() {
    let config = AwsSnsConfig::try_from(&sns_settings()).unwrap();

    assert_eq!(config.access_key_id, "test_access_key");
    assert_eq!(config.secret_access_key, "test_secret_key");
    assert_eq!(config.region, "us-east-1");
    assert_eq!(config.sms_type, "Transactional");
    assert_eq!(config.request_timeout_secs, 10);
    assert!(config.sender_id.is_none());
}

#[test]
fn test_aws_sns_config_rejects_bad_sms_type() {
    let settings = SmsConfig {
        sms_type: "Marketing".to_string(),
        ..sns_settings()
    };

    let result = AwsSnsConfig::try_from(&settings);
    assert!(matches!(result, Err(InfrastructureError::Config(_))));
}

#[test]
fn test_aws_sns_config_requires_credentials() {
    let settings = SmsConfig {
        secret_access_key: String::new(),
        ..sns_settings()
    };

    assert!(AwsSnsConfig::try_from(&settings).is_err());
}

#[test]
fn test_to_e164() {
    assert_eq!(to_e164("+918209998944").unwrap(), "+918209998944");
    assert_eq!(to_e164("+14155552671").unwrap(), "+14155552671");

    // Local numbers must be canonicalized before they reach the provider
    assert!(to_e164("8209998944").is_err());
    assert!(to_e164("+").is_err());
}

#[tokio::test]
async fn test_aws_sns_service_creation() {
    let config = AwsSnsConfig::try_from(&sns_settings()).unwrap();

    let service = AwsSnsSmsService::new(config).await.unwrap();
    assert_eq!(service.provider_name(), "AWS SNS");
}

#[tokio::test]
async fn test_aws_sns_rejects_long_message() {
    let config = AwsSnsConfig::try_from(&sns_settings()).unwrap();
    let service = AwsSnsSmsService::new(config).await.unwrap();

    let message = "x".repeat(1601);
    let result = service.send_sms("+918209998944", &message).await;
    assert!(matches!(result, Err(InfrastructureError::Sms(_))));
}
