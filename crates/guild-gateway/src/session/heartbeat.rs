//! Heartbeat loop
//!
//! One loop per session, started on READY. Each tick sleeps the interval
//! from Hello and then writes `{op:1, d:<seq>}` to whichever socket is
//! current.

use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

use crate::connection::{GatewayStats, OutboundSlot, SessionState};
use crate::protocol::{Frame, HelloPayload};

/// Handle to the session's heartbeat task
#[derive(Debug)]
pub struct Heartbeat {
    state: Arc<SessionState>,
    stats: Arc<GatewayStats>,
    outbound: OutboundSlot,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl Heartbeat {
    pub fn new(state: Arc<SessionState>, stats: Arc<GatewayStats>, outbound: OutboundSlot) -> Self {
        Self {
            state,
            stats,
            outbound,
            task: Mutex::new(None),
        }
    }

    /// Start the loop, aborting any previous one first
    pub fn restart(&self) {
        let mut task = self.task.lock();
        if let Some(previous) = task.take() {
            previous.abort();
            tracing::debug!("Previous heartbeat loop cancelled");
        }
        *task = Some(tokio::spawn(heartbeat_loop(
            Arc::clone(&self.state),
            Arc::clone(&self.stats),
            self.outbound.clone(),
        )));
    }

    pub fn is_running(&self) -> bool {
        self.task.lock().as_ref().is_some_and(|task| !task.is_finished())
    }

    pub fn stop(&self) {
        if let Some(task) = self.task.lock().take() {
            task.abort();
        }
    }
}

impl Drop for Heartbeat {
    fn drop(&mut self) {
        self.stop();
    }
}

async fn heartbeat_loop(
    state: Arc<SessionState>,
    stats: Arc<GatewayStats>,
    outbound: OutboundSlot,
) {
    loop {
        let interval = state
            .heartbeat_interval()
            .unwrap_or(Duration::from_millis(HelloPayload::DEFAULT_HEARTBEAT_INTERVAL));
        tokio::time::sleep(interval).await;

        let seq = state.sequence();
        match outbound.send(Frame::heartbeat(seq)).await {
            Ok(()) => {
                stats.record_heartbeat();
                tracing::debug!(seq, "Heartbeat sent");
            }
            Err(e) => {
                stats.record_heartbeat_failure();
                tracing::warn!(seq, error = %e, "Failed to send heartbeat");
            }
        }
    }
}
