//! Fake platform
//!
//! Serves `GET /gateway`, a few REST endpoints and a WebSocket gateway on an
//! ephemeral port. Every accepted WebSocket is handed to the test as a
//! [`PlatformSocket`] so the test plays the server side of the protocol.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::extract::ws::{CloseFrame, Message, WebSocket, WebSocketUpgrade};
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use futures_util::{SinkExt, StreamExt};
use parking_lot::Mutex;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::fixtures::{bot_user, AUTHORIZATION};

/// How long helpers wait before failing a test
pub const WAIT: Duration = Duration::from_secs(10);

#[derive(Clone)]
struct PlatformState {
    gateway_url: Arc<str>,
    sockets: mpsc::UnboundedSender<PlatformSocket>,
    gateway_requests: Arc<AtomicUsize>,
    sent_messages: Arc<Mutex<Vec<(String, Value)>>>,
}

/// In-process stand-in for the platform
pub struct FakePlatform {
    pub addr: SocketAddr,
    state: PlatformState,
    sockets: mpsc::UnboundedReceiver<PlatformSocket>,
    _handle: JoinHandle<()>,
}

impl FakePlatform {
    /// Start serving on an ephemeral port
    pub async fn start() -> Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let (tx, rx) = mpsc::unbounded_channel();

        let state = PlatformState {
            gateway_url: format!("ws://{addr}/websocket").into(),
            sockets: tx,
            gateway_requests: Arc::new(AtomicUsize::new(0)),
            sent_messages: Arc::new(Mutex::new(Vec::new())),
        };

        let app = Router::new()
            .route("/gateway", get(gateway))
            .route("/users/@me", get(me))
            .route("/channels/:channel_id/messages", post(send_message))
            .route("/websocket", get(websocket))
            .with_state(state.clone());

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Ok(Self {
            addr,
            state,
            sockets: rx,
            _handle: handle,
        })
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Number of `GET /gateway` calls served
    pub fn gateway_requests(&self) -> usize {
        self.state.gateway_requests.load(Ordering::SeqCst)
    }

    /// `(channel_id, body)` of every `POST /channels/{id}/messages`
    pub fn sent_messages(&self) -> Vec<(String, Value)> {
        self.state.sent_messages.lock().clone()
    }

    /// Wait for the bot to open the next WebSocket
    pub async fn next_socket(&mut self) -> Result<PlatformSocket> {
        tokio::time::timeout(WAIT, self.sockets.recv())
            .await
            .context("timed out waiting for a gateway connection")?
            .context("platform stopped")
    }
}

enum ServerCommand {
    Text(String),
    Close(u16),
}

/// The platform's end of one gateway WebSocket
pub struct PlatformSocket {
    commands: mpsc::UnboundedSender<ServerCommand>,
    frames: mpsc::UnboundedReceiver<Value>,
}

impl PlatformSocket {
    pub fn send_json(&self, frame: &Value) -> Result<()> {
        self.send_text(&frame.to_string())
    }

    /// Raw text, e.g. a bare close code such as `"4009"`
    pub fn send_text(&self, text: &str) -> Result<()> {
        self.commands
            .send(ServerCommand::Text(text.to_string()))
            .map_err(|_| anyhow::anyhow!("socket closed"))
    }

    /// WebSocket close frame carrying `code`
    pub fn close(&self, code: u16) -> Result<()> {
        self.commands
            .send(ServerCommand::Close(code))
            .map_err(|_| anyhow::anyhow!("socket closed"))
    }

    /// Next frame sent by the bot
    pub async fn recv(&mut self) -> Result<Value> {
        tokio::time::timeout(WAIT, self.frames.recv())
            .await
            .context("timed out waiting for a client frame")?
            .context("client disconnected")
    }

    /// Next frame with the given opcode, skipping anything else
    pub async fn recv_op(&mut self, op: u64) -> Result<Value> {
        loop {
            let frame = self.recv().await?;
            if frame["op"] == op {
                return Ok(frame);
            }
        }
    }
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == AUTHORIZATION)
}

async fn gateway(State(state): State<PlatformState>, headers: HeaderMap) -> impl IntoResponse {
    if !authorized(&headers) {
        return (StatusCode::UNAUTHORIZED, Json(json!({"code": 11241}))).into_response();
    }
    state.gateway_requests.fetch_add(1, Ordering::SeqCst);
    Json(json!({"url": state.gateway_url.as_ref()})).into_response()
}

async fn me(headers: HeaderMap) -> impl IntoResponse {
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    Json(bot_user()).into_response()
}

async fn send_message(
    State(state): State<PlatformState>,
    Path(channel_id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    state
        .sent_messages
        .lock()
        .push((channel_id.clone(), body.clone()));

    Json(json!({
        "id": "reply-1",
        "channel_id": channel_id,
        "guild_id": "g1",
        "content": body.get("content").cloned().unwrap_or(Value::Null),
        "timestamp": "2024-05-01T12:00:01+08:00",
        "author": bot_user()
    }))
    .into_response()
}

async fn websocket(State(state): State<PlatformState>, ws: WebSocketUpgrade) -> impl IntoResponse {
    ws.on_upgrade(move |socket| bridge(state, socket))
}

/// Connect one accepted WebSocket to a [`PlatformSocket`]
async fn bridge(state: PlatformState, socket: WebSocket) {
    let (mut sink, mut stream) = socket.split();
    let (command_tx, mut command_rx) = mpsc::unbounded_channel();
    let (frame_tx, frame_rx) = mpsc::unbounded_channel();

    let handed_over = state.sockets.send(PlatformSocket {
        commands: command_tx,
        frames: frame_rx,
    });
    if handed_over.is_err() {
        return;
    }

    let writer = tokio::spawn(async move {
        while let Some(command) = command_rx.recv().await {
            let (message, closing) = match command {
                ServerCommand::Text(text) => (Message::Text(text), false),
                ServerCommand::Close(code) => (
                    Message::Close(Some(CloseFrame {
                        code,
                        reason: "".into(),
                    })),
                    true,
                ),
            };
            if sink.send(message).await.is_err() || closing {
                break;
            }
        }
    });

    while let Some(Ok(message)) = stream.next().await {
        if let Message::Text(text) = message {
            let Ok(frame) = serde_json::from_str::<Value>(&text) else {
                continue;
            };
            if frame_tx.send(frame).is_err() {
                break;
            }
        }
    }
    writer.abort();
}
