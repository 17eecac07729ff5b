//! Session state
//!
//! Written only by the receive loop; read concurrently by the heartbeat, the
//! reconnect logic and user code.

use guild_core::User;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Lifecycle phase of the gateway session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SessionPhase {
    /// No socket
    #[default]
    Disconnected,
    /// Socket open, waiting for Hello
    AwaitingHello,
    /// Identify sent
    Identifying,
    /// Resume sent
    Resuming,
    /// READY or RESUMED received
    Active,
    /// Replacing the socket
    Reconnecting,
    /// Session ended for good
    Terminated,
}

impl SessionPhase {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Disconnected => "disconnected",
            Self::AwaitingHello => "awaiting_hello",
            Self::Identifying => "identifying",
            Self::Resuming => "resuming",
            Self::Active => "active",
            Self::Reconnecting => "reconnecting",
            Self::Terminated => "terminated",
        }
    }
}

impl std::fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Shared session state
#[derive(Debug, Default)]
pub struct SessionState {
    /// Last dispatch sequence seen
    sequence: AtomicU64,

    /// Heartbeat interval from Hello, zero until then
    heartbeat_interval_ms: AtomicU64,

    /// Session id from READY
    session_id: RwLock<Option<String>>,

    phase: RwLock<SessionPhase>,

    last_ack: RwLock<Option<Instant>>,

    /// Bot user from READY
    user: RwLock<Option<User>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current sequence number
    pub fn sequence(&self) -> u64 {
        self.sequence.load(Ordering::SeqCst)
    }

    /// Set the sequence number
    pub fn set_sequence(&self, seq: u64) {
        self.sequence.store(seq, Ordering::SeqCst);
    }

    /// Heartbeat interval, `None` until Hello has been received
    pub fn heartbeat_interval(&self) -> Option<Duration> {
        match self.heartbeat_interval_ms.load(Ordering::SeqCst) {
            0 => None,
            ms => Some(Duration::from_millis(ms)),
        }
    }

    pub fn set_heartbeat_interval(&self, ms: u64) {
        self.heartbeat_interval_ms.store(ms, Ordering::SeqCst);
    }

    pub fn session_id(&self) -> Option<String> {
        self.session_id.read().clone()
    }

    pub fn has_session(&self) -> bool {
        self.session_id.read().is_some()
    }

    pub fn set_session(&self, session_id: impl Into<String>, user: User) {
        *self.session_id.write() = Some(session_id.into());
        *self.user.write() = Some(user);
    }

    /// Forget the session so the next auth is a fresh Identify
    pub fn clear_session(&self) {
        *self.session_id.write() = None;
    }

    pub fn phase(&self) -> SessionPhase {
        *self.phase.read()
    }

    pub fn set_phase(&self, phase: SessionPhase) {
        *self.phase.write() = phase;
    }

    pub fn record_ack(&self) {
        *self.last_ack.write() = Some(Instant::now());
    }

    /// Time of the last heartbeat ACK
    pub fn last_ack(&self) -> Option<Instant> {
        *self.last_ack.read()
    }

    pub fn user(&self) -> Option<User> {
        self.user.read().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bot_user() -> User {
        serde_json::from_str(r#"{"id":"42","username":"bot","bot":true}"#).unwrap()
    }

    #[test]
    fn test_new_state_is_empty() {
        let state = SessionState::new();
        assert_eq!(state.sequence(), 0);
        assert_eq!(state.heartbeat_interval(), None);
        assert!(!state.has_session());
        assert_eq!(state.phase(), SessionPhase::Disconnected);
        assert!(state.last_ack().is_none());
    }

    #[test]
    fn test_session_lifecycle() {
        let state = SessionState::new();
        state.set_session("xyz", bot_user());
        state.set_sequence(5);
        assert_eq!(state.session_id().as_deref(), Some("xyz"));
        assert_eq!(state.user().map(|u| u.id), Some("42".to_string()));

        state.clear_session();
        assert!(!state.has_session());
        // Sequence survives an invalidated session
        assert_eq!(state.sequence(), 5);
    }

    #[test]
    fn test_heartbeat_interval() {
        let state = SessionState::new();
        state.set_heartbeat_interval(41_250);
        assert_eq!(state.heartbeat_interval(), Some(Duration::from_millis(41_250)));
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(SessionPhase::AwaitingHello.to_string(), "awaiting_hello");
    }
}
