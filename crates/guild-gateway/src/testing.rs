//! In-memory transport for session tests

use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

use crate::connection::{Connector, Inbound, Transport};
use crate::error::{GatewayError, GatewayResult};
use crate::protocol::{Frame, OpCode};

/// The platform's end of one mock socket
pub(crate) struct ServerSide {
    pub inbound: mpsc::Sender<Inbound>,
    pub outbound: mpsc::Receiver<Frame>,
}

impl ServerSide {
    pub async fn send(&self, message: Inbound) {
        self.inbound.send(message).await.unwrap();
    }

    pub async fn send_text(&self, text: &str) {
        self.send(Inbound::Text(text.to_string())).await;
    }

    pub async fn send_json(&self, value: Value) {
        self.send_text(&value.to_string()).await;
    }

    pub async fn hello(&self, heartbeat_interval: u64) {
        self.send_json(json!({"op": 10, "d": {"heartbeat_interval": heartbeat_interval}}))
            .await;
    }

    /// Next frame the client wrote
    pub async fn recv(&mut self) -> Frame {
        tokio::time::timeout(Duration::from_secs(600), self.outbound.recv())
            .await
            .expect("timed out waiting for a client frame")
            .expect("client closed the socket")
    }

    /// Next frame that is not a heartbeat
    pub async fn recv_non_heartbeat(&mut self) -> Frame {
        loop {
            let frame = self.recv().await;
            if frame.op != OpCode::Heartbeat {
                return frame;
            }
        }
    }
}

/// `READY` dispatch frame
pub(crate) fn ready_json(seq: u64, session_id: &str) -> Value {
    json!({
        "op": 0,
        "s": seq,
        "t": "READY",
        "d": {
            "version": 1,
            "session_id": session_id,
            "user": {"id": "42", "username": "bot", "bot": true},
            "shard": [0, 1]
        }
    })
}

struct MockInner {
    sockets: mpsc::UnboundedSender<ServerSide>,
    fail_next: AtomicU32,
    attempts: AtomicU32,
}

/// Connector handing the server side of every new socket to the test
#[derive(Clone)]
pub(crate) struct MockConnector {
    inner: Arc<MockInner>,
}

impl MockConnector {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<ServerSide>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let connector = Self {
            inner: Arc::new(MockInner {
                sockets: tx,
                fail_next: AtomicU32::new(0),
                attempts: AtomicU32::new(0),
            }),
        };
        (connector, rx)
    }

    /// Refuse the next `count` connection attempts
    pub fn fail_next(&self, count: u32) {
        self.inner.fail_next.store(count, Ordering::SeqCst);
    }

    /// Connection attempts so far, failed ones included
    pub fn attempts(&self) -> u32 {
        self.inner.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Connector for MockConnector {
    async fn connect(&self, url: &str) -> GatewayResult<Transport> {
        self.inner.attempts.fetch_add(1, Ordering::SeqCst);

        let refuse = self
            .inner
            .fail_next
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if refuse {
            return Err(GatewayError::Connect {
                url: url.to_string(),
                reason: "connection refused".to_string(),
            });
        }

        let (out_tx, out_rx) = mpsc::channel(64);
        let (in_tx, in_rx) = mpsc::channel(64);
        self.inner
            .sockets
            .send(ServerSide {
                inbound: in_tx,
                outbound: out_rx,
            })
            .map_err(|_| GatewayError::NotConnected)?;

        Ok(Transport {
            outbound: out_tx,
            inbound: in_rx,
        })
    }
}
