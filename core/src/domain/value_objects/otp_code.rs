//! One-time passcode value object

use std::fmt;

use constant_time_eq::constant_time_eq;
use otp_shared::config::otp::MAX_CODE_LENGTH;
use rand::{rngs::OsRng, Rng};

/// A numeric one-time passcode
///
/// The `Debug` implementation is redacted so a code never ends up in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct OtpCode(String);

impl OtpCode {
    /// Generate a code of `length` digits using the OS-provided CSPRNG
    ///
    /// The value is drawn uniformly from `0..10^length` and zero-padded, so
    /// every digit string of that length is equally likely. `length` is
    /// clamped to `1..=MAX_CODE_LENGTH`, so this never panics.
    pub fn generate(length: usize) -> Self {
        let length = length.clamp(1, MAX_CODE_LENGTH);
        let upper = 10u64.pow(length as u32);
        let value = OsRng.gen_range(0..upper);
        Self(format!("{:0width$}", value, width = length))
    }

    /// Wrap a code read back from the store
    pub fn from_stored(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Exact string comparison in constant time
    pub fn matches(&self, submitted: &str) -> bool {
        if self.0.len() != submitted.len() {
            return false;
        }
        constant_time_eq(self.0.as_bytes(), submitted.as_bytes())
    }
}

impl fmt::Debug for OtpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OtpCode(<redacted>)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_clamps_length() {
        assert_eq!(OtpCode::generate(0).as_str().len(), 1);
        assert_eq!(OtpCode::generate(20).as_str().len(), MAX_CODE_LENGTH);
        assert_eq!(OtpCode::generate(usize::MAX).as_str().len(), MAX_CODE_LENGTH);
    }

    #[test]
    fn test_generate_has_requested_length() {
        for length in 1..=9 {
            let code = OtpCode::generate(length);
            assert_eq!(code.as_str().len(), length);
            assert!(code.as_str().chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_generate_six_digit_range() {
        for _ in 0..200 {
            let code = OtpCode::generate(6);
            let num: u32 = code.as_str().parse().unwrap();
            assert!(num < 1_000_000);
        }
    }

    #[test]
    fn test_generate_is_not_constant() {
        let codes: HashSet<String> = (0..50)
            .map(|_| OtpCode::generate(6).as_str().to_string())
            .collect();
        assert!(codes.len() > 1);
    }

    #[test]
    fn test_matches_is_exact_string_equality() {
        let code = OtpCode::from_stored("012345");
        assert!(code.matches("012345"));
        assert!(!code.matches("12345"));
        assert!(!code.matches("012346"));
        assert!(!code.matches(" 012345"));
        assert!(!code.matches(""));
    }

    #[test]
    fn test_debug_is_redacted() {
        let code = OtpCode::from_stored("987654");
        let debug = format!("{:?}", code);
        assert!(!debug.contains("987654"));
    }
}
