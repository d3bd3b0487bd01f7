//! AWS SNS SMS Service Implementation
//!
//! This module provides SMS sending capabilities using the AWS SNS API.
//! Each message is a single `Publish` call bounded by a request timeout.
//! Failures are returned to the caller as they are; nothing is retried.

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_sns::{
    Client as SnsClient,
    config::Region,
    types::MessageAttributeValue,
};
use phonenumber::{Mode, PhoneNumber};
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, error, info, warn};

use crate::{
    config::SmsConfig,
    sms::sms_service::{mask_phone_number, SmsService},
    InfrastructureError,
};

/// Longest message SNS accepts for SMS
const MAX_MESSAGE_LENGTH: usize = 1600;

/// AWS SNS SMS service configuration
#[derive(Debug, Clone)]
pub struct AwsSnsConfig {
    /// AWS Access Key ID
    pub access_key_id: String,
    /// AWS Secret Access Key
    pub secret_access_key: String,
    /// AWS Region (e.g., "us-east-1")
    pub region: String,
    /// SMS sender ID (optional, may not be supported in all regions)
    pub sender_id: Option<String>,
    /// SMS type: "Transactional" or "Promotional"
    pub sms_type: String,
    /// Timeout for API requests in seconds
    pub request_timeout_secs: u64,
}

impl TryFrom<&SmsConfig> for AwsSnsConfig {
    type Error = InfrastructureError;

    fn try_from(config: &SmsConfig) -> Result<Self, Self::Error> {
        if config.access_key_id.is_empty() {
            return Err(InfrastructureError::Config("AWS_ACCESS_KEY_ID not set".to_string()));
        }
        if config.secret_access_key.is_empty() {
            return Err(InfrastructureError::Config("AWS_SECRET_ACCESS_KEY not set".to_string()));
        }

        // Validate SMS type
        if config.sms_type != "Transactional" && config.sms_type != "Promotional" {
            return Err(InfrastructureError::Config(
                "AWS_SNS_SMS_TYPE must be either 'Transactional' or 'Promotional'".to_string()
            ));
        }

        if config.request_timeout_secs == 0 {
            return Err(InfrastructureError::Config(
                "AWS_SNS_REQUEST_TIMEOUT_SECS must be greater than zero".to_string()
            ));
        }

        Ok(Self {
            access_key_id: config.access_key_id.clone(),
            secret_access_key: config.secret_access_key.clone(),
            region: config.region.clone(),
            sender_id: config.sender_id.clone(),
            sms_type: config.sms_type.clone(),
            request_timeout_secs: config.request_timeout_secs,
        })
    }
}

/// AWS SNS SMS service implementation
pub struct AwsSnsSmsService {
    client: SnsClient,
    config: AwsSnsConfig,
}

impl AwsSnsSmsService {
    /// Create a new AWS SNS SMS service
    pub async fn new(config: AwsSnsConfig) -> Result<Self, InfrastructureError> {
        let credentials_provider = aws_credential_types::Credentials::new(
            &config.access_key_id,
            &config.secret_access_key,
            None,
            None,
            "otp_sms_service",
        );

        let region = Region::new(config.region.clone());
        let aws_config = aws_config::defaults(BehaviorVersion::latest())
            .region(region)
            .credentials_provider(credentials_provider)
            .load()
            .await;

        let client = SnsClient::new(&aws_config);

        info!(
            "AWS SNS SMS service initialized for region: {}",
            config.region
        );

        if let Some(ref sender_id) = config.sender_id {
            info!("Using sender ID: {}", sender_id);
        }

        Ok(Self { client, config })
    }

    /// Create SMS attributes for AWS SNS
    fn create_sms_attributes(&self) -> Result<HashMap<String, MessageAttributeValue>, InfrastructureError> {
        let mut attributes = HashMap::new();

        attributes.insert(
            "AWS.SNS.SMS.SMSType".to_string(),
            string_attribute(&self.config.sms_type)?,
        );

        // Set sender ID if configured (not supported in all regions)
        if let Some(ref sender_id) = self.config.sender_id {
            attributes.insert(
                "AWS.SNS.SMS.SenderID".to_string(),
                string_attribute(sender_id)?,
            );
        }

        Ok(attributes)
    }

    /// Publish once, bounded by the request timeout
    async fn publish(&self, to: &str, message: &str) -> Result<String, InfrastructureError> {
        let attributes = self.create_sms_attributes()?;
        let bound = Duration::from_secs(self.config.request_timeout_secs);

        debug!("Publishing SMS to {} via AWS SNS", mask_phone_number(to));

        let request = self.client
            .publish()
            .phone_number(to)
            .message(message)
            .set_message_attributes(Some(attributes))
            .send();

        match tokio::time::timeout(bound, request).await {
            Ok(Ok(response)) => {
                let message_id = response.message_id()
                    .unwrap_or("unknown")
                    .to_string();

                info!(
                    "SMS sent successfully to {} via AWS SNS with message ID: {}",
                    mask_phone_number(to),
                    message_id
                );

                Ok(message_id)
            }
            Ok(Err(e)) => {
                error!("Failed to send SMS via AWS SNS: {}", e);
                Err(InfrastructureError::Sms(format!(
                    "AWS SNS publish failed: {}",
                    e
                )))
            }
            Err(_) => {
                error!(
                    "AWS SNS publish to {} timed out after {:?}",
                    mask_phone_number(to),
                    bound
                );
                Err(InfrastructureError::Timeout(format!(
                    "AWS SNS publish did not complete within {:?}",
                    bound
                )))
            }
        }
    }
}

fn string_attribute(value: &str) -> Result<MessageAttributeValue, InfrastructureError> {
    MessageAttributeValue::builder()
        .data_type("String")
        .string_value(value)
        .build()
        .map_err(|e| InfrastructureError::Sms(format!("Invalid SMS attribute: {}", e)))
}

/// Parse an E.164 number and format it back in E.164
///
/// Numbers without a leading '+' are rejected; the caller is expected to
/// have canonicalized them already.
pub fn to_e164(phone: &str) -> Result<String, InfrastructureError> {
    if !phone.starts_with('+') {
        return Err(InfrastructureError::Sms(
            "Phone number must be in E.164 format (e.g., +918209998944)".to_string()
        ));
    }

    match phone.parse::<PhoneNumber>() {
        Ok(parsed) => {
            let formatted = parsed.format().mode(Mode::E164).to_string();
            debug!("Validated phone number: {}", mask_phone_number(&formatted));
            Ok(formatted)
        }
        Err(e) => {
            warn!("Invalid phone number format: {}", e);
            Err(InfrastructureError::Sms(format!(
                "Invalid phone number format: {}",
                e
            )))
        }
    }
}

#[async_trait]
impl SmsService for AwsSnsSmsService {
    async fn send_sms(&self, phone_number: &str, message: &str) -> Result<String, InfrastructureError> {
        let normalized_phone = to_e164(phone_number)?;

        if message.len() > MAX_MESSAGE_LENGTH {
            return Err(InfrastructureError::Sms(format!(
                "Message exceeds maximum length of {} characters",
                MAX_MESSAGE_LENGTH
            )));
        }

        info!(
            "Sending SMS to {} via AWS SNS (message length: {} chars)",
            mask_phone_number(&normalized_phone),
            message.len()
        );

        self.publish(&normalized_phone, message).await
    }

    fn provider_name(&self) -> &str {
        "AWS SNS"
    }

    async fn is_available(&self) -> bool {
        // Lightweight call that exercises credentials and connectivity
        let bound = Duration::from_secs(self.config.request_timeout_secs);
        match tokio::time::timeout(bound, self.client.get_sms_attributes().send()).await {
            Ok(Ok(_)) => {
                debug!("AWS SNS health check passed");
                true
            }
            Ok(Err(e)) => {
                warn!("AWS SNS health check failed: {}", e);
                false
            }
            Err(_) => {
                warn!("AWS SNS health check timed out after {:?}", bound);
                false
            }
        }
    }
}
