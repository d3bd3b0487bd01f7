//! Phone number utilities

use once_cell::sync::Lazy;
use regex::Regex;

// International phone number regex (E.164 format)
static INTERNATIONAL_PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+[1-9]\d{1,14}$").unwrap()
});

/// Normalize a phone number by removing common formatting characters
///
/// Keeps digits and the `+` sign only: `"+91 82099-98944"` becomes
/// `"+918209998944"`.
pub fn normalize_phone_number(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

/// Check if a phone number is valid (international E.164 format)
pub fn is_valid_international_phone(phone: &str) -> bool {
    INTERNATIONAL_PHONE_REGEX.is_match(phone)
}

/// Check that a raw input only contains characters a phone number may carry
///
/// Allows digits, a `+`, and spaces, dashes, dots and parentheses used as
/// separators.
pub fn has_only_phone_characters(phone: &str) -> bool {
    phone
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | ' ' | '-' | '.' | '(' | ')'))
}

/// Mask a phone number for logging, keeping at most the last 4 digits
///
/// `"+918209998944"` becomes `"+********8944"`. Numbers of 4 digits or fewer
/// are masked completely; a leading `+` is kept.
pub fn mask_phone_number(phone: &str) -> String {
    let (plus, digits) = match phone.strip_prefix('+') {
        Some(rest) => ("+", rest),
        None => ("", phone),
    };

    let char_count = digits.chars().count();
    if char_count <= 4 {
        return format!("{}{}", plus, "*".repeat(char_count));
    }

    let visible = 4;
    let last_digits: String = digits.chars().skip(char_count - visible).collect();
    format!("{}{}{}", plus, "*".repeat(char_count - visible), last_digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_phone_number() {
        assert_eq!(normalize_phone_number("820-999-8944"), "8209998944");
        assert_eq!(normalize_phone_number("+91 82099 98944"), "+918209998944");
        assert_eq!(normalize_phone_number("(820) 999.8944"), "8209998944");
    }

    #[test]
    fn test_is_valid_international_phone() {
        assert!(is_valid_international_phone("+918209998944"));
        assert!(is_valid_international_phone("+14155552671"));
        assert!(!is_valid_international_phone("8209998944")); // Missing +
        assert!(!is_valid_international_phone("+0123456789")); // Invalid country code
        assert!(!is_valid_international_phone("+1234567890123456")); // Too long
        assert!(!is_valid_international_phone("+91 8209998944")); // Not normalized
    }

    #[test]
    fn test_has_only_phone_characters() {
        assert!(has_only_phone_characters("+91 (820) 999-8944"));
        assert!(!has_only_phone_characters("82099abc44"));
        assert!(!has_only_phone_characters("8209998944;"));
    }

    #[test]
    fn test_mask_phone_number() {
        assert_eq!(mask_phone_number("+918209998944"), "+********8944");
        assert_eq!(mask_phone_number("8209998944"), "******8944");
        assert_eq!(mask_phone_number("123"), "***");
        assert_eq!(mask_phone_number("1234"), "****");
        assert_eq!(mask_phone_number("+1234"), "+****");
        assert_eq!(mask_phone_number("+12345"), "+*2345");
        assert_eq!(mask_phone_number("12345"), "*2345");
    }
}
