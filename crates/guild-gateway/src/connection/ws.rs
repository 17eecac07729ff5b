//! WebSocket connector

use async_trait::async_trait;
use futures_util::{SinkExt, StreamExt};
use tokio::sync::mpsc;
use tokio_tungstenite::{connect_async, tungstenite::Message};

use super::transport::{Connector, Inbound, Transport, INBOUND_BUFFER_SIZE, OUTBOUND_BUFFER_SIZE};
use crate::error::{GatewayError, GatewayResult};
use crate::protocol::{encode, Frame};

/// Connects to the gateway over `tokio-tungstenite`
#[derive(Debug, Clone, Copy, Default)]
pub struct WsConnector;

#[async_trait]
impl Connector for WsConnector {
    async fn connect(&self, url: &str) -> GatewayResult<Transport> {
        let (stream, response) = connect_async(url).await.map_err(|e| GatewayError::Connect {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        tracing::info!(url = %url, status = %response.status(), "WebSocket connected");

        let (mut sink, mut source) = stream.split();
        let (out_tx, mut out_rx) = mpsc::channel::<Frame>(OUTBOUND_BUFFER_SIZE);
        let (in_tx, in_rx) = mpsc::channel::<Inbound>(INBOUND_BUFFER_SIZE);

        // Writer: the only task touching the sink
        tokio::spawn(async move {
            while let Some(frame) = out_rx.recv().await {
                let text = match encode(&frame) {
                    Ok(text) => text,
                    Err(e) => {
                        tracing::warn!(op = %frame.op, error = %e, "Failed to encode frame");
                        continue;
                    }
                };
                tracing::trace!(op = frame.op.as_u8(), "Sending frame");
                if let Err(e) = sink.send(Message::Text(text)).await {
                    tracing::warn!(error = %e, "Failed to write to WebSocket");
                    break;
                }
            }
            let _ = sink.close().await;
        });

        // Reader: forwards everything until the socket ends
        tokio::spawn(async move {
            while let Some(msg) = source.next().await {
                let inbound = match msg {
                    Ok(Message::Text(text)) => Inbound::Text(text),
                    Ok(Message::Binary(bytes)) => Inbound::Binary(bytes),
                    Ok(Message::Close(frame)) => {
                        Inbound::Close(frame.map(|f| u16::from(f.code)))
                    }
                    Ok(Message::Ping(_) | Message::Pong(_) | Message::Frame(_)) => continue,
                    Err(e) => Inbound::Error(e.to_string()),
                };
                let terminal = matches!(inbound, Inbound::Close(_) | Inbound::Error(_));
                if in_tx.send(inbound).await.is_err() || terminal {
                    return;
                }
            }
            let _ = in_tx.send(Inbound::Error("stream ended".to_string())).await;
        });

        Ok(Transport {
            outbound: out_tx,
            inbound: in_rx,
        })
    }
}
