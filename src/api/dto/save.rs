//! DTOs for the save endpoint.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::utils::url_validator::{UrlValidationError, is_valid_alias, validate_target_url};

/// Request to bind a URL to an alias.
///
/// A missing or empty `alias` asks the service to generate one.
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct SaveRequest {
    /// The original URL (must be an absolute HTTP/HTTPS URL).
    #[serde(default)]
    #[validate(custom(function = "validate_url_field"))]
    pub url: String,

    /// Optional user-chosen alias.
    #[serde(default)]
    #[validate(custom(function = "validate_alias_field"))]
    pub alias: String,
}

fn validate_url_field(url: &str) -> Result<(), ValidationError> {
    match validate_target_url(url) {
        Ok(()) => Ok(()),
        Err(UrlValidationError::Empty) => Err(ValidationError::new("required")),
        Err(_) => Err(ValidationError::new("url")),
    }
}

fn validate_alias_field(alias: &str) -> Result<(), ValidationError> {
    if alias.is_empty() || is_valid_alias(alias) {
        Ok(())
    } else {
        Err(ValidationError::new("alias"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::validation_message;

    fn request(url: &str, alias: &str) -> SaveRequest {
        SaveRequest {
            url: url.to_string(),
            alias: alias.to_string(),
        }
    }

    #[test]
    fn test_valid_request() {
        assert!(request("https://google.com", "test_alias").validate().is_ok());
        assert!(request("https://google.com", "").validate().is_ok());
    }

    #[test]
    fn test_invalid_url_message() {
        let errors = request("not-a-url", "x").validate().unwrap_err();
        assert_eq!(validation_message(&errors), "field url is not a valid URL");
    }

    #[test]
    fn test_empty_url_message() {
        let errors = request("", "test_alias").validate().unwrap_err();
        assert_eq!(
            validation_message(&errors),
            "field url is a required field"
        );
    }

    #[test]
    fn test_invalid_alias_message() {
        let errors = request("https://google.com", "no spaces").validate().unwrap_err();
        assert_eq!(validation_message(&errors), "field alias is not valid");
    }

    #[test]
    fn test_missing_fields_deserialize_to_empty() {
        let req: SaveRequest = serde_json::from_str(r#"{"url":"https://google.com"}"#).unwrap();
        assert_eq!(req.alias, "");

        let req: SaveRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.url, "");
    }
}
