//! Socket abstraction
//!
//! A connected socket is a pair of channels: frames written to `outbound` are
//! serialized by a single writer task, and everything read from the wire
//! arrives on `inbound`.

use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::Arc;
use tokio::sync::mpsc;

use crate::error::{GatewayError, GatewayResult};
use crate::protocol::Frame;

/// Channel buffer size for outgoing frames
pub(crate) const OUTBOUND_BUFFER_SIZE: usize = 64;

/// Channel buffer size for incoming messages
pub(crate) const INBOUND_BUFFER_SIZE: usize = 256;

/// One message read from the socket
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inbound {
    Text(String),
    Binary(Vec<u8>),
    /// Close frame, with its code when one was sent
    Close(Option<u16>),
    /// Transport failure; the socket is unusable afterwards
    Error(String),
}

/// A live socket
#[derive(Debug)]
pub struct Transport {
    pub outbound: mpsc::Sender<Frame>,
    pub inbound: mpsc::Receiver<Inbound>,
}

/// Opens sockets to a gateway URL
#[async_trait]
pub trait Connector: Send + Sync + 'static {
    async fn connect(&self, url: &str) -> GatewayResult<Transport>;
}

/// Writer handle of the current socket
///
/// Replaced on every reconnect so that long-lived writers (the heartbeat)
/// always reach the live socket.
#[derive(Debug, Clone, Default)]
pub struct OutboundSlot {
    inner: Arc<RwLock<Option<mpsc::Sender<Frame>>>>,
}

impl OutboundSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the writer of a new socket
    pub fn replace(&self, sender: mpsc::Sender<Frame>) {
        *self.inner.write() = Some(sender);
    }

    pub fn clear(&self) {
        *self.inner.write() = None;
    }

    pub fn is_connected(&self) -> bool {
        self.inner.read().as_ref().is_some_and(|tx| !tx.is_closed())
    }

    /// Send a frame through the current socket
    pub async fn send(&self, frame: Frame) -> GatewayResult<()> {
        let sender = self.inner.read().clone().ok_or(GatewayError::NotConnected)?;
        sender
            .send(frame)
            .await
            .map_err(|_| GatewayError::NotConnected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_send_without_socket() {
        let slot = OutboundSlot::new();
        assert!(!slot.is_connected());
        assert!(matches!(
            slot.send(Frame::heartbeat(0)).await,
            Err(GatewayError::NotConnected)
        ));
    }

    #[tokio::test]
    async fn test_send_reaches_latest_socket() {
        let slot = OutboundSlot::new();
        let (old_tx, mut old_rx) = mpsc::channel(4);
        let (new_tx, mut new_rx) = mpsc::channel(4);

        slot.replace(old_tx);
        slot.send(Frame::heartbeat(1)).await.unwrap();
        slot.replace(new_tx);
        slot.send(Frame::heartbeat(2)).await.unwrap();

        assert_eq!(old_rx.recv().await.unwrap().heartbeat_seq(), Some(1));
        assert_eq!(new_rx.recv().await.unwrap().heartbeat_seq(), Some(2));
        assert!(old_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_send_to_closed_socket() {
        let slot = OutboundSlot::new();
        let (tx, rx) = mpsc::channel(1);
        slot.replace(tx);
        drop(rx);

        assert!(!slot.is_connected());
        assert!(slot.send(Frame::heartbeat(0)).await.is_err());

        slot.clear();
        assert!(!slot.is_connected());
    }
}
