//! Request failure taxonomy for registry API calls.
//!
//! ERROR HANDLING
//! ==============
//! The registry answers failures with `{"error": "..."}` and a non-2xx
//! status. That payload is kept on [`RequestError::Status`] so forms can show
//! the server's own message; everything else falls back to display text.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use super::types::ErrorBody;

/// Errors produced by [`crate::net::client::ApiClient`] calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    /// No response reached the client (network down, CORS, native build).
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("request failed with status {status}")]
    Status { status: u16, error: Option<String> },

    /// A 2xx body did not match the expected shape.
    #[error("response parse failed: {0}")]
    Decode(String),

    /// The request body could not be serialized.
    #[error("request encode failed: {0}")]
    Encode(String),
}

impl RequestError {
    /// Build a status error, lifting the server's `error` field when present.
    pub fn from_status(status: u16, body: &str) -> Self {
        let error = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .map(|b| b.error)
            .filter(|e| !e.trim().is_empty());
        Self::Status { status, error }
    }

    /// The server-supplied error message, if the response carried one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { error: Some(error), .. } => Some(error),
            _ => None,
        }
    }

    /// Message to surface in the UI: the server's string, else display text.
    pub fn user_message(&self) -> String {
        self.server_message()
            .map_or_else(|| self.to_string(), ToOwned::to_owned)
    }

    /// HTTP status for [`RequestError::Status`] failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
