//! # Client Error Types
//!
//! Unified error handling for Workato API client operations.

use thiserror::Error;

/// Client operation result type
pub type ClientResult<T> = Result<T, ClientError>;

/// Error types for client operations.
///
/// Nothing here is retried or downgraded: every variant propagates to the caller as-is.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Workato API request failed: {status} - {body}")]
    Api { status: u16, body: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON serialization/deserialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Create an API error from a non-success HTTP response
    pub fn api_error(status: u16, body: impl Into<String>) -> Self {
        Self::Api {
            status,
            body: body.into(),
        }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// HTTP status of a remote failure, if the remote answered at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            ClientError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Response body of a remote failure.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        match self {
            ClientError::Api { body, .. } => Some(body),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_constructor() {
        let err = ClientError::api_error(404, "not found");
        match err {
            ClientError::Api { status, body } => {
                assert_eq!(status, 404);
                assert_eq!(body, "not found");
            }
            _ => panic!("Expected Api variant"),
        }
    }

    #[test]
    fn test_config_error_constructor() {
        let err = ClientError::config_error("missing token");
        match err {
            ClientError::Config(msg) => assert_eq!(msg, "missing token"),
            _ => panic!("Expected Config variant"),
        }
    }

    #[test]
    fn test_status_and_body_accessors() {
        let err = ClientError::api_error(422, r#"{"message":"invalid"}"#);
        assert_eq!(err.status(), Some(422));
        assert_eq!(err.body(), Some(r#"{"message":"invalid"}"#));

        let err = ClientError::config_error("bad");
        assert_eq!(err.status(), None);
        assert_eq!(err.body(), None);
    }

    #[test]
    fn test_display_api_error() {
        let err = ClientError::api_error(503, "service down");
        assert_eq!(
            format!("{err}"),
            "Workato API request failed: 503 - service down"
        );
    }

    #[test]
    fn test_display_config_error() {
        let err = ClientError::config_error("API token is required");
        assert_eq!(format!("{err}"), "Configuration error: API token is required");
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{{bad}}").unwrap_err();
        let err: ClientError = json_err.into();
        assert!(matches!(err, ClientError::Serialization(_)));
        assert_eq!(err.status(), None);
    }
}
