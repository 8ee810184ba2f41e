//! Error handling for the Pharmacy Manager client
//!
//! Errors are surfaced to the caller as-is; nothing here retries or hides a
//! failed request.

use reqwest::StatusCode;
use thiserror::Error;

/// Client error types
#[derive(Error, Debug)]
pub enum ClientError {
    /// Rejected locally before any request was sent
    #[error("Validation error: {0}")]
    Validation(&'static str),

    /// 401/403 from the API; the session is gone and the user must log in again
    #[error("{message}")]
    Unauthorized { status: StatusCode, message: String },

    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Any other non-success response, with the server's message
    #[error("Operation failed ({status}): {message}")]
    Rejected { status: StatusCode, message: String },

    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    /// A success response whose body does not match the expected shape
    #[error("Unexpected response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ClientError {
    /// Whether the caller should drop its token and return to the login page
    pub fn is_session_expired(&self) -> bool {
        matches!(self, ClientError::Unauthorized { .. })
    }
}

impl From<&'static str> for ClientError {
    fn from(message: &'static str) -> Self {
        ClientError::Validation(message)
    }
}

pub const SESSION_EXPIRED: &str = "Session expired or unauthorized. Please login again.";

/// Result type alias for client calls
pub type ClientResult<T> = Result<T, ClientError>;

/// Message to show for a 401/403; the server's text when it sent one
pub fn unauthorized_message(status: StatusCode, body: &str) -> String {
    if body.trim().is_empty() {
        SESSION_EXPIRED.to_string()
    } else {
        rejection_message(status, body)
    }
}

/// Message to show for a rejected request.
///
/// The API answers either with a plain string or with a JSON body carrying a
/// `message` field; anything else falls back to the status reason.
pub fn rejection_message(status: StatusCode, body: &str) -> String {
    let body = body.trim();
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(message) = value.get("message").and_then(|m| m.as_str()) {
            return message.to_string();
        }
        if let Some(message) = value.as_str() {
            return message.to_string();
        }
    }
    if !body.is_empty() && !body.starts_with('{') {
        return body.to_string();
    }
    status
        .canonical_reason()
        .unwrap_or("Operation failed")
        .to_string()
}
