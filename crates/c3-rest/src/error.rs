//! Error types for REST API operations

use c3_auth::AuthError;
use c3_types::{PairError, SideParseError};

/// Errors that can occur during REST API operations
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// HTTP request failed (connection, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-2xx status
    #[error("HTTP status {status}: {body}")]
    Status {
        /// Status code
        status: u16,
        /// Response body as returned by the server
        body: String,
    },

    /// Response body is not valid JSON or lacks an expected field
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Invalid request parameters, rejected before any network call
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Credential or signing failure
    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    /// Missing API credentials for private endpoint
    #[error("Authentication required for this endpoint")]
    AuthRequired,

    /// Client could not be configured
    #[error("Configuration error: {0}")]
    Config(String),
}

impl RestError {
    /// HTTP status code, if the server answered
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if repeating the same call could succeed
    ///
    /// The client never retries on its own; this is a hint for callers.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Http(e) => e.is_timeout() || e.is_connect(),
            Self::Status { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

impl From<PairError> for RestError {
    fn from(e: PairError) -> Self {
        Self::InvalidArgument(e.to_string())
    }
}

impl From<SideParseError> for RestError {
    fn from(e: SideParseError) -> Self {
        Self::InvalidArgument(e.to_string())
    }
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;
