//! Error types for the taskboard client.
//!
//! # Design
//! Every failure a panel can observe is an `ApiError`. Client-side
//! validation never reaches the network; `Request` carries the server's
//! `detail` message when the error body had one; `Network` wraps whatever
//! the host reported when the round-trip could not complete.

use serde::Deserialize;
use thiserror::Error;

/// The host could not complete an exchange (connection refused, DNS, I/O).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct TransportError(pub String);

impl TransportError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// A required form field was empty after trimming.
    #[error("{0}")]
    Validation(String),

    /// The server returned 404.
    #[error("resource not found")]
    NotFound { detail: Option<String> },

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {}", .detail.as_deref().unwrap_or("no detail"))]
    Request { status: u16, detail: Option<String> },

    #[error("network error: {0}")]
    Network(#[from] TransportError),

    #[error("deserialization failed: {0}")]
    Deserialization(String),

    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl ApiError {
    /// Server-provided message, if the error body carried one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::NotFound { detail } | ApiError::Request { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// Text for an inline form banner: the server's detail, else `fallback`.
    pub fn banner_message(&self, fallback: &str) -> String {
        self.detail().unwrap_or(fallback).to_string()
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// Extract `detail` from a JSON error body. Non-JSON bodies yield `None`.
pub(crate) fn extract_detail(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail)
        .filter(|d| !d.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_is_read_from_json_body() {
        assert_eq!(
            extract_detail(r#"{"detail":"Email already exists"}"#).as_deref(),
            Some("Email already exists")
        );
    }

    #[test]
    fn missing_or_blank_detail_is_none() {
        assert!(extract_detail(r#"{"error":"boom"}"#).is_none());
        assert!(extract_detail(r#"{"detail":"  "}"#).is_none());
        assert!(extract_detail("<html>bad gateway</html>").is_none());
    }

    #[test]
    fn banner_prefers_detail_over_fallback() {
        let err = ApiError::Request {
            status: 400,
            detail: Some("User not found".to_string()),
        };
        assert_eq!(err.banner_message("Failed to create todo"), "User not found");

        let err = ApiError::Network(TransportError::new("connection refused"));
        assert_eq!(err.banner_message("Failed to create todo"), "Failed to create todo");
    }
}
