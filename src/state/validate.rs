//! Field validity predicates and lenient integer parsing

use once_cell::sync::Lazy;
use regex::Regex;

/// Minimal `a@b.c` shape: no spaces, exactly one `@`, a dot in the domain
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Digits, spaces, hyphens, and parentheses only; empty is valid
static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9()\- ]*$").unwrap());

/// Largest integer the form treats as safe (2^53 - 1)
const MAX_SAFE_INTEGER: i64 = (1 << 53) - 1;

/// Validate email format
pub fn is_valid_email(raw: &str) -> bool {
    EMAIL_REGEX.is_match(raw)
}

/// Validate phone format
pub fn is_valid_phone(raw: &str) -> bool {
    PHONE_REGEX.is_match(raw)
}

/// Whether `value` is within the safe-integer range; values outside it are
/// stored but flagged by the year validator
pub fn is_safe_integer(value: i64) -> bool {
    value.abs() <= MAX_SAFE_INTEGER
}

/// Parse the leading integer of `raw`, ignoring any non-numeric suffix:
/// "2005x" parses to 2005, "  -5 " to -5, "abc" and "" to `None`.
///
/// A digit run too long for `i64` also yields `None`, so callers treat it
/// the same as non-numeric input.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let digits: &str = {
        let end = rest
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        &rest[..end]
    };
    if digits.is_empty() {
        return None;
    }

    digits
        .parse::<i64>()
        .ok()
        .map(|value| if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_valid_emails() {
        for email in ["a@b.c", "jo.user@example.co.uk", "x+tag@host.dev"] {
            assert!(is_valid_email(email), "{email} should be valid");
        }
    }

    #[test]
    fn test_invalid_emails() {
        for email in ["", "plain", "a@b", "a b@c.d", "a@@b.c", "@b.c", "a@.c "] {
            assert!(!is_valid_email(email), "{email} should be invalid");
        }
    }

    #[test]
    fn test_valid_phones() {
        for phone in ["", "555-123 (45)", "0123456789", "(555) 867-5309"] {
            assert!(is_valid_phone(phone), "{phone} should be valid");
        }
    }

    #[test]
    fn test_invalid_phones() {
        for phone in ["abc", "555x", "+49 123", "555.1234"] {
            assert!(!is_valid_phone(phone), "{phone} should be invalid");
        }
    }

    #[test]
    fn test_parse_plain_integers() {
        assert_eq!(parse_leading_int("2000"), Some(2000));
        assert_eq!(parse_leading_int("0"), Some(0));
        assert_eq!(parse_leading_int("+7"), Some(7));
    }

    #[test]
    fn test_parse_ignores_trailing_garbage() {
        assert_eq!(parse_leading_int("12abc"), Some(12));
        assert_eq!(parse_leading_int("2005x"), Some(2005));
        assert_eq!(parse_leading_int("19 99"), Some(19));
    }

    #[test]
    fn test_parse_leading_whitespace_and_sign() {
        assert_eq!(parse_leading_int("  -5 "), Some(-5));
        assert_eq!(parse_leading_int(" 42"), Some(42));
    }

    #[test]
    fn test_parse_non_numeric_is_none() {
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int("x12"), None);
        assert_eq!(parse_leading_int("-"), None);
    }

    #[test]
    fn test_parse_beyond_machine_integer_is_none() {
        assert_eq!(parse_leading_int("99999999999999999999"), None);
    }

    #[test]
    fn test_parse_keeps_values_past_the_safe_bound() {
        assert_eq!(
            parse_leading_int("9007199254740992"),
            Some(9007199254740992)
        );
    }

    #[test]
    fn test_safe_integer_bounds() {
        assert!(is_safe_integer(9007199254740991));
        assert!(is_safe_integer(-9007199254740991));
        assert!(!is_safe_integer(9007199254740992));
        assert!(!is_safe_integer(-9007199254740992));
        assert!(is_safe_integer(0));
    }
}
