//! Recovery decisions

use std::time::Duration;

use crate::protocol::CloseCode;

/// Which handshake to send after Hello, Reconnect or InvalidSession
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthKind {
    Identify,
    Resume,
}

impl AuthKind {
    /// Resume iff a session id is stored
    pub fn for_session(session_id: Option<&str>) -> Self {
        match session_id {
            Some(_) => Self::Resume,
            None => Self::Identify,
        }
    }
}

/// What the outer loop does when a socket ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recovery {
    /// Re-resolve, open a new socket, keep session id and sequence
    ReplaceSocket,
    /// End `run` with an error
    Terminate,
}

impl Recovery {
    pub fn for_close_code(code: i64) -> Self {
        if CloseCode::is_resumable(code) {
            Self::ReplaceSocket
        } else {
            Self::Terminate
        }
    }
}

/// Pacing and limit for socket replacement
#[derive(Debug, Clone)]
pub struct ReconnectPolicy {
    delay: Duration,
    /// Zero means unlimited
    max_attempts: u32,
    failures: u32,
}

impl ReconnectPolicy {
    pub fn new(delay: Duration, max_attempts: u32) -> Self {
        Self {
            delay,
            max_attempts,
            failures: 0,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Consecutive failed connection attempts
    pub fn failures(&self) -> u32 {
        self.failures
    }

    pub fn record_success(&mut self) {
        self.failures = 0;
    }

    /// Count a failed attempt; `false` once the limit is exceeded
    pub fn record_failure(&mut self) -> bool {
        self.failures = self.failures.saturating_add(1);
        self.max_attempts == 0 || self.failures < self.max_attempts
    }
}
