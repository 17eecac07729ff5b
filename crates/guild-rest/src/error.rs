//! REST client errors

use guild_core::ModelError;
use thiserror::Error;

/// Errors returned by [`RestClient`](crate::RestClient) calls
#[derive(Debug, Error)]
pub enum RestError {
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{method} {endpoint} returned {status}: {body}")]
    Status {
        method: String,
        endpoint: String,
        status: u16,
        body: String,
    },

    #[error("Failed to decode response of {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Empty or non-JSON response from {endpoint}")]
    EmptyBody { endpoint: String },

    #[error(transparent)]
    Validation(#[from] ModelError),
}

impl RestError {
    /// HTTP status for `Status` errors
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_client_error(&self) -> bool {
        self.status().is_some_and(|s| (400..500).contains(&s))
    }

    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.status().is_some_and(|s| s >= 500)
    }

    /// Whether the request never reached a response (timeout, DNS, refused)
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Http(e) if e.status().is_none())
    }
}

/// Result type alias for REST calls
pub type RestResult<T> = Result<T, RestError>;
