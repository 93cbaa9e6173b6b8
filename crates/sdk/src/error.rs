//! Error types for the Coolify SDK.

use coolify_core::ErrorResponse;
use reqwest::StatusCode;

/// Result type for SDK operations.
pub type CoolifyResult<T> = Result<T, CoolifyError>;

/// Error types that can occur when using the Coolify SDK.
#[derive(Debug, thiserror::Error)]
pub enum CoolifyError {
    /// Invalid configuration. Raised before any network activity.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The platform could not be reached at all.
    #[error(
        "Failed to connect to Coolify server at {base_url}. \
         Please check if the server is running and the URL is correct."
    )]
    Connection {
        base_url: String,
        #[source]
        source: reqwest::Error,
    },

    /// API returned a non-success status.
    ///
    /// The message is the platform's own `message` field when it sent one.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// A success status arrived with a body that is not the expected JSON.
    #[error("Invalid response from Coolify (status {status}): {source}")]
    InvalidResponse {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    /// Connection validation failed.
    #[error("Failed to connect to Coolify server: {0}")]
    ValidationFailed(#[source] Box<CoolifyError>),

    /// Invalid input, caught before sending anything.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// HTTP error while reading a response.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl CoolifyError {
    /// Create an API error from a failed response's status and raw body.
    pub fn from_response(status: StatusCode, body: &[u8]) -> Self {
        let message = serde_json::from_slice::<ErrorResponse>(body)
            .ok()
            .and_then(|error| error.message)
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| {
                format!(
                    "HTTP {}: {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("")
                )
            });

        Self::Api {
            status: status.as_u16(),
            message,
        }
    }

    /// HTTP status of an API error, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } | Self::InvalidResponse { status, .. } => Some(*status),
            Self::ValidationFailed(inner) => inner.status(),
            _ => None,
        }
    }

    /// Whether the platform could not be reached at all.
    pub fn is_connection(&self) -> bool {
        match self {
            Self::Connection { .. } => true,
            Self::ValidationFailed(inner) => inner.is_connection(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_taken_from_body() {
        let err = CoolifyError::from_response(StatusCode::NOT_FOUND, br#"{"message":"Not found"}"#);
        assert_eq!(err.to_string(), "Not found");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_generic_message_without_message_field() {
        let err = CoolifyError::from_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            br#"{"error":"boom"}"#,
        );
        assert_eq!(err.to_string(), "HTTP 500: Internal Server Error");
    }

    #[test]
    fn test_generic_message_for_non_json_body() {
        let err = CoolifyError::from_response(StatusCode::BAD_GATEWAY, b"<html>bad gateway</html>");
        assert_eq!(err.to_string(), "HTTP 502: Bad Gateway");
    }

    #[test]
    fn test_empty_message_falls_back() {
        let err = CoolifyError::from_response(StatusCode::UNAUTHORIZED, br#"{"message":""}"#);
        assert_eq!(err.to_string(), "HTTP 401: Unauthorized");
    }

    #[test]
    fn test_validation_failed_wraps_inner_message() {
        let inner = CoolifyError::Api {
            status: 401,
            message: "Unauthenticated.".to_string(),
        };
        let err = CoolifyError::ValidationFailed(Box::new(inner));
        assert_eq!(
            err.to_string(),
            "Failed to connect to Coolify server: Unauthenticated."
        );
        assert_eq!(err.status(), Some(401));
        assert!(!err.is_connection());
    }
}
