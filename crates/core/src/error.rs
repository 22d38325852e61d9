//! Failure classes of a single respond request

/// Standard result type for a respond request
pub type RespondResult<T> = std::result::Result<T, RespondError>;

/// Why a request did not produce a usable response
///
/// Both variants are caught at the widget boundary and turned into an
/// [`Exchange`](crate::Exchange); nothing here ever reaches the page.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RespondError {
    /// The endpoint answered with a non-success status
    #[error("Server error {status}")]
    Http {
        status: u16,
        /// The `error` field of the response body, when present
        message: Option<String>,
    },

    /// The request could not be completed into a usable response
    #[error("Transport error: {0}")]
    Transport(String),
}

impl RespondError {
    /// Create an HTTP status error
    pub fn http(status: u16, message: Option<String>) -> Self {
        Self::Http { status, message }
    }

    /// Create a transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Short label used in log events
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Http { .. } => "http_error",
            Self::Transport(_) => "network_error",
        }
    }
}
