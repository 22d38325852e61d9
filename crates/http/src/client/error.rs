//! Client error types

use fairchat_core::RespondError;
use thiserror::Error;

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or request error
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error status
    #[error("Server error {status}")]
    ServerError {
        status: u16,
        /// `error` field of the response body
        message: Option<String>,
    },

    /// Response body was not the expected JSON
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl ClientError {
    /// Create error from HTTP status code and the decoded error body
    pub fn from_status(status: reqwest::StatusCode, message: Option<String>) -> Self {
        Self::ServerError {
            status: status.as_u16(),
            message,
        }
    }
}

impl From<ClientError> for RespondError {
    fn from(error: ClientError) -> Self {
        match error {
            ClientError::ServerError { status, message } => Self::http(status, message),
            other => Self::transport(other.to_string()),
        }
    }
}
