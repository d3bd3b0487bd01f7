//! Main OTP service implementation

use chrono::{Duration, Utc};
use std::sync::Arc;

use otp_shared::config::OtpConfig;

use crate::domain::{OtpCode, PhoneNumber};
use crate::errors::{DomainError, DomainResult, ValidationError};

use super::traits::{CacheServiceTrait, SmsServiceTrait};
use super::types::SendOtpResult;

/// Text placed in front of the code in every SMS
pub const OTP_MESSAGE_PREFIX: &str = "Your verification code is: ";

/// OTP lifecycle service
///
/// Owns the rules for generating, storing, dispatching and validating
/// one-time passcodes. Each phone number has at most one active code: a new
/// request overwrites the previous one (last write wins, no compare-and-swap)
/// and a successful verification deletes it.
pub struct OtpService<S: SmsServiceTrait, C: CacheServiceTrait> {
    /// SMS service for sending messages
    sms_service: Arc<S>,
    /// Key-value store holding canonical phone -> code
    cache_service: Arc<C>,
    /// OTP policy
    config: OtpConfig,
}

impl<S: SmsServiceTrait, C: CacheServiceTrait> OtpService<S, C> {
    /// Create a new OTP service
    ///
    /// # Arguments
    ///
    /// * `sms_service` - SMS service implementation
    /// * `cache_service` - Store implementation
    /// * `config` - OTP policy, checked with [`OtpConfig::validate`]
    ///
    /// # Returns
    ///
    /// * `Err(DomainError::Configuration)` - If the policy is unusable
    pub fn new(sms_service: Arc<S>, cache_service: Arc<C>, config: OtpConfig) -> DomainResult<Self> {
        config
            .validate()
            .map_err(|message| DomainError::Configuration { message })?;

        Ok(Self {
            sms_service,
            cache_service,
            config,
        })
    }

    pub fn config(&self) -> &OtpConfig {
        &self.config
    }

    /// Check that the OTP store is reachable
    ///
    /// # Returns
    ///
    /// * `Err(DomainError::Storage)` - The store did not answer
    pub async fn check_store(&self) -> DomainResult<()> {
        self.cache_service.health_check().await.map_err(|e| {
            tracing::warn!(error = %e, event = "otp_store_unhealthy", "OTP store health check failed");
            DomainError::Storage { message: e }
        })
    }

    /// Issue a new OTP for a phone number
    ///
    /// This method:
    /// 1. Canonicalizes the phone number (default country code prepended)
    /// 2. Generates a new code with the OS CSPRNG
    /// 3. Stores it under the canonical number, replacing any previous code
    /// 4. Sends the code via SMS
    ///
    /// Nothing is sent when the store write fails. When the SMS fails the
    /// stored code is left in place.
    ///
    /// # Arguments
    ///
    /// * `raw_phone` - The phone number as supplied by the caller
    ///
    /// # Returns
    ///
    /// * `Ok(SendOtpResult)` - Echo of the supplied number plus delivery details
    /// * `Err(DomainError::Validation)` - Missing or malformed phone number
    /// * `Err(DomainError::Storage)` - The store write failed
    /// * `Err(DomainError::Dispatch)` - The SMS provider failed
    pub async fn request_otp(&self, raw_phone: &str) -> DomainResult<SendOtpResult> {
        let phone = PhoneNumber::canonicalize(raw_phone, &self.config.default_country_code)?;
        let code = OtpCode::generate(self.config.code_length);

        self.cache_service
            .set_with_expiry(phone.as_str(), code.as_str(), self.config.expiry_seconds)
            .await
            .map_err(|e| {
                tracing::error!(
                    phone = %phone.masked(),
                    error = %e,
                    event = "otp_storage_failed",
                    "Failed to store OTP"
                );
                DomainError::Storage { message: e }
            })?;

        let expires_at = Utc::now() + Duration::seconds(self.config.expiry_seconds as i64);

        tracing::info!(
            phone = %phone.masked(),
            event = "otp_generated",
            expires_in = self.config.expiry_seconds,
            "Stored new OTP for phone number"
        );

        let message = format!("{}{}", OTP_MESSAGE_PREFIX, code.as_str());
        let message_id = self
            .sms_service
            .send_message(phone.as_str(), &message)
            .await
            .map_err(|e| {
                tracing::error!(
                    phone = %phone.masked(),
                    error = %e,
                    event = "otp_dispatch_failed",
                    "Failed to send OTP via SMS"
                );
                DomainError::Dispatch { message: e }
            })?;

        tracing::info!(
            phone = %phone.masked(),
            message_id = %message_id,
            event = "otp_sent",
            "OTP sent"
        );

        Ok(SendOtpResult {
            otp_sent_to: raw_phone.to_string(),
            phone,
            message_id,
            expires_at,
        })
    }

    /// Verify a submitted OTP
    ///
    /// The phone number is canonicalized exactly as in [`Self::request_otp`],
    /// so local and canonical forms address the same record. The submitted
    /// code must equal the stored string exactly. On a match the record is
    /// deleted, which makes every later attempt with the same code fail.
    ///
    /// A missing record, an expired record and a wrong code all produce
    /// [`DomainError::InvalidOrExpiredOtp`]; a wrong code leaves the record in
    /// place.
    ///
    /// # Arguments
    ///
    /// * `raw_phone` - The phone number as supplied by the caller
    /// * `submitted_code` - The code typed in by the user
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The code matched and has been consumed
    /// * `Err(DomainError::Validation)` - Missing phone number or code
    /// * `Err(DomainError::InvalidOrExpiredOtp)` - No matching live code
    /// * `Err(DomainError::Storage)` - The store could not be read or the
    ///   record could not be deleted
    pub async fn verify_otp(&self, raw_phone: &str, submitted_code: &str) -> DomainResult<()> {
        if raw_phone.trim().is_empty() {
            return Err(ValidationError::required("phone_number").into());
        }
        if submitted_code.trim().is_empty() {
            return Err(ValidationError::required("otp").into());
        }

        let phone = PhoneNumber::canonicalize(raw_phone, &self.config.default_country_code)?;

        let stored = self
            .cache_service
            .get(phone.as_str())
            .await
            .map_err(|e| {
                tracing::error!(
                    phone = %phone.masked(),
                    error = %e,
                    event = "otp_lookup_failed",
                    "Failed to read OTP from store"
                );
                DomainError::Storage { message: e }
            })?;

        let stored = match stored {
            Some(code) => OtpCode::from_stored(code),
            None => {
                tracing::warn!(
                    phone = %phone.masked(),
                    event = "otp_not_found",
                    "No active OTP for phone number"
                );
                return Err(DomainError::InvalidOrExpiredOtp);
            }
        };

        if !stored.matches(submitted_code) {
            tracing::warn!(
                phone = %phone.masked(),
                event = "otp_mismatch",
                "Submitted OTP does not match"
            );
            return Err(DomainError::InvalidOrExpiredOtp);
        }

        let removed = self
            .cache_service
            .delete(phone.as_str())
            .await
            .map_err(|e| {
                tracing::error!(
                    phone = %phone.masked(),
                    error = %e,
                    event = "otp_consume_failed",
                    "Failed to delete verified OTP"
                );
                DomainError::Storage { message: e }
            })?;

        // Another request consumed or expired the record between read and delete.
        if !removed {
            tracing::warn!(
                phone = %phone.masked(),
                event = "otp_consumed_concurrently",
                "OTP was consumed before it could be deleted"
            );
            return Err(DomainError::InvalidOrExpiredOtp);
        }

        tracing::info!(
            phone = %phone.masked(),
            event = "otp_verified_success",
            "OTP verified"
        );

        Ok(())
    }
}
