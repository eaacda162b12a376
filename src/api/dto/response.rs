//! Common response envelope.

use serde::{Deserialize, Serialize};

/// Outcome marker carried by every response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResponseStatus {
    #[serde(rename = "OK")]
    Ok,
    #[serde(rename = "Error")]
    Error,
}

/// Response body shared by save, delete and error responses.
///
/// ```json
/// { "status": "OK", "alias": "abc123" }
/// { "status": "Error", "error": "alias already exists" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: ResponseStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

impl ApiResponse {
    pub fn ok() -> Self {
        Self {
            status: ResponseStatus::Ok,
            error: None,
            alias: None,
        }
    }

    pub fn ok_with_alias(alias: impl Into<String>) -> Self {
        Self {
            alias: Some(alias.into()),
            ..Self::ok()
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            error: Some(message.into()),
            alias: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ok_serialization_omits_empty_fields() {
        let value = serde_json::to_value(ApiResponse::ok()).unwrap();
        assert_eq!(value, json!({ "status": "OK" }));
    }

    #[test]
    fn test_ok_with_alias_serialization() {
        let value = serde_json::to_value(ApiResponse::ok_with_alias("test_alias")).unwrap();
        assert_eq!(value, json!({ "status": "OK", "alias": "test_alias" }));
    }

    #[test]
    fn test_error_serialization() {
        let value = serde_json::to_value(ApiResponse::error("url not found")).unwrap();
        assert_eq!(value, json!({ "status": "Error", "error": "url not found" }));
    }
}
