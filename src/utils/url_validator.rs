//! Input checks for target URLs and user-chosen aliases.

use url::Url;

/// Maximum length accepted for a user-chosen alias.
pub const MAX_ALIAS_LENGTH: usize = 64;

/// Aliases that would be shadowed by service routes.
const RESERVED_ALIASES: &[&str] = &["url", "health"];

/// Reasons a target URL is rejected.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UrlValidationError {
    #[error("URL is empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL has no host")]
    MissingHost,

    #[error("URL contains control characters")]
    ControlCharacter,
}

/// Checks that `input` is a well-formed absolute URL with a recognized scheme and a host.
///
/// # Errors
///
/// Returns [`UrlValidationError::InvalidFormat`] for unparsable input,
/// [`UrlValidationError::UnsupportedProtocol`] for schemes other than HTTP(S)
/// [`UrlValidationError::MissingHost`] when the host is empty and
/// [`UrlValidationError::ControlCharacter`] for tabs, newlines and other
/// control characters, which URL parsing would otherwise drop silently.
///
/// # Examples
///
/// ```ignore
/// assert!(validate_target_url("https://www.google.com").is_ok());
/// assert!(validate_target_url("not-a-url").is_err());
/// assert!(validate_target_url("javascript:alert(1)").is_err());
/// ```
pub fn validate_target_url(input: &str) -> Result<(), UrlValidationError> {
    if input.trim().is_empty() {
        return Err(UrlValidationError::Empty);
    }

    if input.chars().any(char::is_control) {
        return Err(UrlValidationError::ControlCharacter);
    }

    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedProtocol),
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(UrlValidationError::MissingHost),
    }
}

/// Returns whether `alias` is shadowed by a service route.
pub fn is_reserved_alias(alias: &str) -> bool {
    RESERVED_ALIASES.contains(&alias)
}

/// Returns whether `alias` may be chosen by a user.
///
/// Allowed: 1 to [`MAX_ALIAS_LENGTH`] characters from `[A-Za-z0-9_-]`, so the
/// alias stays a single path segment, and not one of the route names.
pub fn is_valid_alias(alias: &str) -> bool {
    !alias.is_empty()
        && !is_reserved_alias(alias)
        && alias.len() <= MAX_ALIAS_LENGTH
        && alias
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_and_https() {
        assert!(validate_target_url("https://www.google.com").is_ok());
        assert!(validate_target_url("http://example.com/path?q=1#frag").is_ok());
    }

    #[test]
    fn test_rejects_missing_scheme() {
        assert!(matches!(
            validate_target_url("not-a-url"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(validate_target_url(""), Err(UrlValidationError::Empty));
        assert_eq!(validate_target_url("   "), Err(UrlValidationError::Empty));
    }

    #[test]
    fn test_rejects_dangerous_protocols() {
        assert_eq!(
            validate_target_url("javascript:alert(1)"),
            Err(UrlValidationError::UnsupportedProtocol)
        );
        assert_eq!(
            validate_target_url("ftp://files.example.com"),
            Err(UrlValidationError::UnsupportedProtocol)
        );
    }

    #[test]
    fn test_rejects_control_characters() {
        for input in [
            "https://example.com/a\nb",
            "https://example.com/a\tb",
            "https://example.com/a\rb",
            "https://exam\u{7f}ple.com",
        ] {
            assert_eq!(
                validate_target_url(input),
                Err(UrlValidationError::ControlCharacter),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_accepts_non_ascii() {
        assert!(validate_target_url("https://пример.рф/путь").is_ok());
    }

    #[test]
    fn test_valid_aliases() {
        assert!(is_valid_alias("x"));
        assert!(is_valid_alias("test_alias"));
        assert!(is_valid_alias("my-link-2024"));
        assert!(is_valid_alias(&"a".repeat(MAX_ALIAS_LENGTH)));
    }

    #[test]
    fn test_invalid_aliases() {
        assert!(!is_valid_alias(""));
        assert!(!is_valid_alias("has space"));
        assert!(!is_valid_alias("slash/inside"));
        assert!(!is_valid_alias("ünïcode"));
        assert!(!is_valid_alias(&"a".repeat(MAX_ALIAS_LENGTH + 1)));
    }

    #[test]
    fn test_route_lookalikes_are_not_reserved() {
        assert!(!is_reserved_alias("URL"));
        assert!(!is_reserved_alias("healthy"));
    }

    #[test]
    fn test_reserved_aliases() {
        for &reserved in RESERVED_ALIASES {
            assert!(
                !is_valid_alias(reserved),
                "Reserved alias '{}' should be invalid",
                reserved
            );
            assert!(is_reserved_alias(reserved));
        }
    }
}
