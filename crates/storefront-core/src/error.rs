//! Error types for the storefront cart

use thiserror::Error;

use crate::view::Anchor;

/// Main error type for cart operations
#[derive(Error, Debug)]
pub enum StorefrontError {
    /// The request could not complete (connect, timeout, body read)
    #[error("Transport error: {0}")]
    Transport(String),

    /// The server answered with something that is not the expected JSON shape
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The server answered `success: false`
    #[error("Rejected by server: {}", message.as_deref().unwrap_or("no message"))]
    Rejected {
        /// Server-provided reason, if any
        message: Option<String>,
    },

    /// Required view anchors are not mounted
    #[error("Missing view anchors: {0:?}")]
    MissingAnchors(Vec<Anchor>),

    /// An id attribute could not be parsed
    #[error("Invalid id: {0}")]
    InvalidId(String),

    /// Configuration could not be built
    #[error("Config error: {0}")]
    Config(String),
}

impl StorefrontError {
    /// Message suitable for a user-facing notification.
    ///
    /// Server rejections carry their own message; everything else falls back
    /// to `fallback`, except transport failures which read as a connection error.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            StorefrontError::Rejected {
                message: Some(message),
            } if !message.trim().is_empty() => message.clone(),
            StorefrontError::Transport(_) => CONNECTION_ERROR.to_string(),
            _ => fallback.to_string(),
        }
    }
}

impl From<reqwest::Error> for StorefrontError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            StorefrontError::MalformedResponse(err.to_string())
        } else {
            StorefrontError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for StorefrontError {
    fn from(err: serde_json::Error) -> Self {
        StorefrontError::MalformedResponse(err.to_string())
    }
}

/// Shown when a request never reached the server
pub const CONNECTION_ERROR: &str = "Connection error";

/// Result type alias using StorefrontError
pub type StorefrontResult<T> = Result<T, StorefrontError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StorefrontError::Rejected {
            message: Some("Out of stock".to_string()),
        };
        assert_eq!(format!("{}", err), "Rejected by server: Out of stock");

        let err = StorefrontError::Rejected { message: None };
        assert_eq!(format!("{}", err), "Rejected by server: no message");
    }

    #[test]
    fn test_request_failures_become_transport_errors() {
        let err = reqwest::Client::new().get("not a url").build().unwrap_err();
        let err = StorefrontError::from(err);
        assert!(matches!(err, StorefrontError::Transport(_)));
        assert_eq!(err.user_message("fallback"), CONNECTION_ERROR);
    }

    #[test]
    fn test_user_message_prefers_server_text() {
        let err = StorefrontError::Rejected {
            message: Some("Max stock reached (3 units)".to_string()),
        };
        assert_eq!(err.user_message("fallback"), "Max stock reached (3 units)");
    }

    #[test]
    fn test_user_message_fallbacks() {
        let blank = StorefrontError::Rejected {
            message: Some("  ".to_string()),
        };
        assert_eq!(blank.user_message("Could not remove"), "Could not remove");

        let malformed = StorefrontError::MalformedResponse("eof".to_string());
        assert_eq!(malformed.user_message("Could not remove"), "Could not remove");

        let transport = StorefrontError::Transport("refused".to_string());
        assert_eq!(transport.user_message("Could not remove"), CONNECTION_ERROR);
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: StorefrontError = json_err.into();
        assert!(matches!(err, StorefrontError::MalformedResponse(_)));
    }
}
