//! Gateway counters

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counters updated by the session, heartbeat and registry
#[derive(Debug, Default)]
pub struct GatewayStats {
    frames_received: AtomicU64,
    dispatches: AtomicU64,
    decode_failures: AtomicU64,
    heartbeats_sent: AtomicU64,
    heartbeat_failures: AtomicU64,
    heartbeat_acks: AtomicU64,
    reconnects: AtomicU64,
    handler_failures: AtomicU64,
}

/// Point-in-time copy of [`GatewayStats`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StatsSnapshot {
    pub frames_received: u64,
    pub dispatches: u64,
    pub decode_failures: u64,
    pub heartbeats_sent: u64,
    pub heartbeat_failures: u64,
    pub heartbeat_acks: u64,
    pub reconnects: u64,
    pub handler_failures: u64,
}

impl GatewayStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_frame(&self) {
        self.frames_received.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_dispatch(&self) {
        self.dispatches.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_decode_failure(&self) {
        self.decode_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_heartbeat(&self) {
        self.heartbeats_sent.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_heartbeat_failure(&self) {
        self.heartbeat_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_heartbeat_ack(&self) {
        self.heartbeat_acks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_reconnect(&self) {
        self.reconnects.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_handler_failure(&self) {
        self.handler_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn decode_failures(&self) -> u64 {
        self.decode_failures.load(Ordering::Relaxed)
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            frames_received: self.frames_received.load(Ordering::Relaxed),
            dispatches: self.dispatches.load(Ordering::Relaxed),
            decode_failures: self.decode_failures.load(Ordering::Relaxed),
            heartbeats_sent: self.heartbeats_sent.load(Ordering::Relaxed),
            heartbeat_failures: self.heartbeat_failures.load(Ordering::Relaxed),
            heartbeat_acks: self.heartbeat_acks.load(Ordering::Relaxed),
            reconnects: self.reconnects.load(Ordering::Relaxed),
            handler_failures: self.handler_failures.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot() {
        let stats = GatewayStats::new();
        stats.record_frame();
        stats.record_frame();
        stats.record_decode_failure();
        stats.record_reconnect();

        let snap = stats.snapshot();
        assert_eq!(snap.frames_received, 2);
        assert_eq!(snap.decode_failures, 1);
        assert_eq!(snap.reconnects, 1);
        assert_eq!(snap.dispatches, 0);
        assert_eq!(stats.decode_failures(), 1);
    }
}
