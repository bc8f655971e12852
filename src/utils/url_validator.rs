//! Target URL validation.
//!
//! A target must be an absolute URL with an explicit scheme and a host.
//! The URL is stored exactly as submitted (after trimming); it is parsed only
//! to check its shape.

use url::Url;

/// Schemes accepted for target URLs.
const ALLOWED_SCHEMES: &[&str] = &["http", "https", "ftp"];

/// Reasons a target URL is rejected.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UrlValidationError {
    #[error("URL must not be empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Unsupported URL scheme '{0}'")]
    UnsupportedScheme(String),

    #[error("URL must include a host")]
    MissingHost,
}

/// Validates a target URL and returns the trimmed form to store.
///
/// # Rules
///
/// 1. Must parse as an absolute URL (relative inputs such as `example.com` fail)
/// 2. Scheme must be `http`, `https` or `ftp`
/// 3. Must have a non-empty host
///
/// # Errors
///
/// Returns a [`UrlValidationError`] describing the first rule violated.
///
/// # Examples
///
/// ```
/// use linkshort::utils::url_validator::validate_target_url;
///
/// assert_eq!(validate_target_url(" https://example.com ").unwrap(), "https://example.com");
/// assert!(validate_target_url("not-a-url").is_err());
/// assert!(validate_target_url("javascript:alert(1)").is_err());
/// ```
pub fn validate_target_url(input: &str) -> Result<String, UrlValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(UrlValidationError::Empty);
    }

    let url = Url::parse(trimmed).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    if !ALLOWED_SCHEMES.contains(&url.scheme()) {
        return Err(UrlValidationError::UnsupportedScheme(
            url.scheme().to_string(),
        ));
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(trimmed.to_string()),
        _ => Err(UrlValidationError::MissingHost),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_and_https() {
        assert_eq!(
            validate_target_url("http://example.com").unwrap(),
            "http://example.com"
        );
        assert_eq!(
            validate_target_url("https://example.com/path?q=1#frag").unwrap(),
            "https://example.com/path?q=1#frag"
        );
    }

    #[test]
    fn test_keeps_url_as_submitted() {
        // No normalization: case, default port and missing path are preserved.
        assert_eq!(
            validate_target_url("https://EXAMPLE.com:443").unwrap(),
            "https://EXAMPLE.com:443"
        );
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        assert_eq!(
            validate_target_url("  https://example.com\n").unwrap(),
            "https://example.com"
        );
    }

    #[test]
    fn test_accepts_ftp() {
        assert!(validate_target_url("ftp://files.example.com/pub").is_ok());
    }

    #[test]
    fn test_accepts_ip_and_port() {
        assert!(validate_target_url("http://127.0.0.1:8080/health").is_ok());
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(validate_target_url("   "), Err(UrlValidationError::Empty));
    }

    #[test]
    fn test_rejects_missing_scheme() {
        assert!(matches!(
            validate_target_url("not-a-url"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
        assert!(matches!(
            validate_target_url("example.com/path"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_rejects_dangerous_schemes() {
        assert_eq!(
            validate_target_url("javascript:alert(1)"),
            Err(UrlValidationError::UnsupportedScheme("javascript".to_string()))
        );
        assert!(matches!(
            validate_target_url("data:text/html,hi"),
            Err(UrlValidationError::UnsupportedScheme(_))
        ));
        assert!(matches!(
            validate_target_url("file:///etc/passwd"),
            Err(UrlValidationError::UnsupportedScheme(_))
        ));
    }

    #[test]
    fn test_rejects_mailto() {
        assert!(matches!(
            validate_target_url("mailto:someone@example.com"),
            Err(UrlValidationError::UnsupportedScheme(_))
        ));
    }

    #[test]
    fn test_rejects_missing_host() {
        assert!(validate_target_url("http://").is_err());
    }
}
