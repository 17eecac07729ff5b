//! Gateway error types

use guild_rest::RestError;
use thiserror::Error;

/// Errors that end or prevent a gateway session
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The gateway URL could not be resolved
    #[error("failed to resolve gateway url: {0}")]
    Resolve(#[source] RestError),

    /// REST call failed
    #[error("rest error: {0}")]
    Rest(#[from] RestError),

    /// WebSocket connection could not be established
    #[error("failed to connect to {url}: {reason}")]
    Connect { url: String, reason: String },

    /// No live socket to write to
    #[error("not connected")]
    NotConnected,

    /// Server sent an op code outside the protocol
    #[error("unknown op code: {0}")]
    UnknownOpcode(u64),

    /// Server closed with a code that does not allow resuming
    #[error("unexpected close code: {0}")]
    UnexpectedCloseCode(i64),

    /// Too many consecutive failed connection attempts
    #[error("gave up reconnecting after {attempts} attempts: {last_error}")]
    ReconnectExhausted { attempts: u32, last_error: String },

    /// `run` called while another `run` is active
    #[error("bot is already running")]
    AlreadyRunning,

    /// Outbound frame could not be serialized
    #[error("failed to encode frame: {0}")]
    Encode(#[from] serde_json::Error),
}

impl GatewayError {
    /// Whether the outer loop may recover by replacing the socket
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Resolve(_) | Self::Connect { .. } | Self::NotConnected)
    }
}

/// Result type alias for gateway operations
pub type GatewayResult<T> = Result<T, GatewayError>;
