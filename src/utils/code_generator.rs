//! Short code generation and validation utilities.
//!
//! Codes are 6 to 8 characters drawn from `[A-Za-z0-9]`. Generated codes pick
//! the length and every character uniformly; uniqueness is checked by the
//! caller against the store.

use crate::error::AppError;
use rand::Rng;
use rand::distr::Alphanumeric;
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;

/// Shortest accepted code.
pub const MIN_CODE_LENGTH: usize = 6;

/// Longest accepted code.
pub const MAX_CODE_LENGTH: usize = 8;

/// Codes that would be shadowed by fixed top-level routes.
pub const RESERVED_CODES: &[&str] = &["healthz"];

/// Anchored pattern every stored code matches.
static CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{6,8}$").unwrap());

/// Generates a random candidate short code.
///
/// The length is chosen uniformly from 6, 7 and 8, and each character uniformly
/// from the 62 ASCII letters and digits.
///
/// # Examples
///
/// ```
/// use linkshort::utils::code_generator::{generate_code, is_valid_format};
///
/// let code = generate_code();
/// assert!(is_valid_format(&code));
/// ```
pub fn generate_code() -> String {
    let mut rng = rand::rng();
    let len = rng.random_range(MIN_CODE_LENGTH..=MAX_CODE_LENGTH);

    (&mut rng)
        .sample_iter(Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// Returns true iff `code` is exactly 6-8 ASCII letters or digits.
///
/// No trimming is applied: surrounding whitespace makes a code invalid.
pub fn is_valid_format(code: &str) -> bool {
    CODE_REGEX.is_match(code)
}

/// Returns true if `code` collides with a fixed route such as `/healthz`.
pub fn is_reserved(code: &str) -> bool {
    RESERVED_CODES.contains(&code)
}

/// Validates a user-provided custom short code.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the code does not match the format
/// or is reserved.
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    if !is_valid_format(code) {
        return Err(AppError::bad_request(
            "Custom code must be 6-8 alphanumeric characters",
            json!({ "code": code }),
        ));
    }

    if is_reserved(code) {
        return Err(AppError::bad_request(
            "Custom code is reserved",
            json!({ "code": code }),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_code_has_valid_length() {
        for _ in 0..1000 {
            let code = generate_code();
            assert!(
                (MIN_CODE_LENGTH..=MAX_CODE_LENGTH).contains(&code.len()),
                "unexpected length for '{}'",
                code
            );
        }
    }

    #[test]
    fn test_generate_code_uses_alphanumeric_characters() {
        for _ in 0..1000 {
            let code = generate_code();
            assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn test_generate_code_matches_format() {
        for _ in 0..1000 {
            let code = generate_code();
            assert!(is_valid_format(&code), "generated '{}' is invalid", code);
        }
    }

    #[test]
    fn test_generate_code_covers_every_length() {
        let lengths: HashSet<usize> = (0..1000).map(|_| generate_code().len()).collect();

        assert_eq!(lengths, HashSet::from([6, 7, 8]));
    }

    #[test]
    fn test_generate_code_produces_distinct_codes() {
        let codes: HashSet<String> = (0..1000).map(|_| generate_code()).collect();

        // 62^6 possibilities at minimum; a handful of duplicates would still be a bug.
        assert!(codes.len() > 990);
    }

    #[test]
    fn test_valid_format_boundaries() {
        assert!(is_valid_format("abc123"));
        assert!(is_valid_format("MyCode1"));
        assert!(is_valid_format("ABCD1234"));
        assert!(is_valid_format("000000"));
    }

    #[test]
    fn test_invalid_format_length() {
        assert!(!is_valid_format(""));
        assert!(!is_valid_format("ab"));
        assert!(!is_valid_format("abc12"));
        assert!(!is_valid_format("abcd12345"));
    }

    #[test]
    fn test_invalid_format_characters() {
        assert!(!is_valid_format("abc-123"));
        assert!(!is_valid_format("abc_123"));
        assert!(!is_valid_format("abc 123"));
        assert!(!is_valid_format("héllo12"));
        assert!(!is_valid_format("abc123!"));
    }

    #[test]
    fn test_invalid_format_surrounding_whitespace() {
        assert!(!is_valid_format(" abc123"));
        assert!(!is_valid_format("abc123 "));
        assert!(!is_valid_format("abc123\n"));
    }

    #[test]
    fn test_validate_custom_code_ok() {
        assert!(validate_custom_code("MyCode1").is_ok());
    }

    #[test]
    fn test_validate_custom_code_too_short() {
        let err = validate_custom_code("ab").unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
        assert!(err.to_string().contains("6-8 alphanumeric"));
    }

    #[test]
    fn test_validate_custom_code_special_characters() {
        let result = validate_custom_code("my_code");
        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[test]
    fn test_reserved_codes() {
        assert!(is_reserved("healthz"));
        assert!(!is_reserved("Healthz"));
        assert!(!is_reserved("abc123"));
    }

    #[test]
    fn test_validate_custom_code_reserved() {
        let err = validate_custom_code("healthz").unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
        assert_eq!(err.to_string(), "Custom code is reserved");
    }
}
