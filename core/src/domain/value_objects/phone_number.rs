//! Canonical phone number value object

use std::fmt;

use otp_shared::phone::{
    has_only_phone_characters, is_valid_international_phone, mask_phone_number,
    normalize_phone_number,
};

use crate::errors::ValidationError;

/// Fewest subscriber digits accepted after the country code
const MIN_SUBSCRIBER_DIGITS: usize = 4;

/// A phone number in canonical E.164 form, used verbatim as the store key
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Canonicalize a caller-supplied phone number
    ///
    /// Separators (spaces, dashes, dots, parentheses) are dropped. A number
    /// that already starts with `default_country_code` is kept as is; a local
    /// number has its leading trunk zeros removed and the country code
    /// prepended. Numbers carrying a different `+` country code are rejected.
    ///
    /// ```
    /// use otp_core::PhoneNumber;
    ///
    /// let phone = PhoneNumber::canonicalize("8209998944", "+91").unwrap();
    /// assert_eq!(phone.as_str(), "+918209998944");
    /// ```
    pub fn canonicalize(raw: &str, default_country_code: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::required("phone_number"));
        }

        if !has_only_phone_characters(trimmed) {
            return Err(ValidationError::InvalidPhoneFormat);
        }

        let compact = normalize_phone_number(trimmed);
        if compact.rfind('+').is_some_and(|pos| pos > 0) {
            return Err(ValidationError::InvalidPhoneFormat);
        }

        let canonical = if compact.starts_with(default_country_code) {
            compact
        } else if compact.starts_with('+') {
            return Err(ValidationError::UnsupportedCountryCode {
                expected: default_country_code.to_string(),
            });
        } else {
            format!("{}{}", default_country_code, compact.trim_start_matches('0'))
        };

        let subscriber_digits = canonical.len().saturating_sub(default_country_code.len());
        if subscriber_digits < MIN_SUBSCRIBER_DIGITS || !is_valid_international_phone(&canonical) {
            return Err(ValidationError::InvalidPhoneFormat);
        }

        Ok(Self(canonical))
    }

    /// The canonical E.164 string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The canonical number with all but the last four digits hidden
    pub fn masked(&self) -> String {
        mask_phone_number(&self.0)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
