//! OTP policy configuration

use serde::{Deserialize, Serialize};

use super::env_parse;

/// Default country calling code prepended to local-format numbers
pub const DEFAULT_COUNTRY_CODE: &str = "+91";

/// Default number of digits in a generated code
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Default lifetime of a stored code (5 minutes)
pub const DEFAULT_EXPIRY_SECONDS: u64 = 300;

/// Longest code that still fits the numeric range used for generation
pub const MAX_CODE_LENGTH: usize = 9;

/// OTP issuing policy
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct OtpConfig {
    /// Country calling code used to canonicalize local numbers, e.g. "+91"
    pub default_country_code: String,

    /// Number of digits in a generated code
    pub code_length: usize,

    /// Seconds a code stays valid in the store
    pub expiry_seconds: u64,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            default_country_code: DEFAULT_COUNTRY_CODE.to_string(),
            code_length: DEFAULT_CODE_LENGTH,
            expiry_seconds: DEFAULT_EXPIRY_SECONDS,
        }
    }
}

impl OtpConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            default_country_code: std::env::var("OTP_DEFAULT_COUNTRY_CODE")
                .map(|v| v.trim().to_string())
                .unwrap_or_else(|_| DEFAULT_COUNTRY_CODE.to_string()),
            code_length: env_parse("OTP_CODE_LENGTH", DEFAULT_CODE_LENGTH),
            expiry_seconds: env_parse("OTP_EXPIRY_SECONDS", DEFAULT_EXPIRY_SECONDS),
        }
    }

    /// Check the policy for values the service cannot work with
    pub fn validate(&self) -> Result<(), String> {
        let prefix = &self.default_country_code;
        if prefix.len() < 2
            || !prefix.starts_with('+')
            || !prefix[1..].chars().all(|c| c.is_ascii_digit())
            || prefix[1..].starts_with('0')
        {
            return Err(format!(
                "default_country_code must look like '+91', got '{}'",
                prefix
            ));
        }

        if self.code_length == 0 || self.code_length > MAX_CODE_LENGTH {
            return Err(format!(
                "code_length must be between 1 and {}, got {}",
                MAX_CODE_LENGTH, self.code_length
            ));
        }

        if self.expiry_seconds == 0 {
            return Err("expiry_seconds must be greater than zero".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_otp_config_default() {
        let config = OtpConfig::default();
        assert_eq!(config.default_country_code, "+91");
        assert_eq!(config.code_length, 6);
        assert_eq!(config.expiry_seconds, 300);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_prefix() {
        for prefix in ["91", "+", "+9a", "+091", ""] {
            let config = OtpConfig {
                default_country_code: prefix.to_string(),
                ..Default::default()
            };
            assert!(config.validate().is_err(), "prefix {:?} should be rejected", prefix);
        }
    }

    #[test]
    fn test_validate_rejects_bad_code_length() {
        let zero = OtpConfig { code_length: 0, ..Default::default() };
        assert!(zero.validate().is_err());

        let too_long = OtpConfig { code_length: 10, ..Default::default() };
        assert!(too_long.validate().is_err());

        let nine = OtpConfig { code_length: 9, ..Default::default() };
        assert!(nine.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_expiry() {
        let config = OtpConfig { expiry_seconds: 0, ..Default::default() };
        assert!(config.validate().is_err());
    }
}
