//! Session runner
//!
//! Owns the socket for one `run`: resolves the gateway, connects, feeds every
//! inbound message through the codec and handlers in arrival order, and
//! replaces the socket when the connection drops in a resumable way.

use std::sync::Arc;
use tokio::sync::{mpsc, watch};

use super::{ReconnectPolicy, Recovery, SessionContext};
use crate::client::GatewayResolver;
use crate::connection::{Connector, Inbound, SessionPhase};
use crate::error::{GatewayError, GatewayResult};
use crate::handlers::{AuthHandler, FrameDispatcher};
use crate::protocol::{decode, CloseCode, DecodeError, Decoded};

/// How one socket ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SocketExit {
    Reconnect,
    Shutdown,
}

/// One gateway session, from first connect to termination
pub struct GatewaySession<C> {
    ctx: SessionContext<C>,
    resolver: Arc<dyn GatewayResolver>,
    connector: Arc<dyn Connector>,
    policy: ReconnectPolicy,
    shutdown: watch::Receiver<bool>,
}

impl<C> GatewaySession<C>
where
    C: Clone + Send + Sync + 'static,
{
    pub fn new(
        ctx: SessionContext<C>,
        resolver: Arc<dyn GatewayResolver>,
        connector: Arc<dyn Connector>,
        policy: ReconnectPolicy,
        shutdown: watch::Receiver<bool>,
    ) -> Self {
        Self {
            ctx,
            resolver,
            connector,
            policy,
            shutdown,
        }
    }

    /// Run until shutdown or a terminal failure
    pub async fn run(mut self) -> GatewayResult<()> {
        let result = self.run_loop().await;

        self.ctx.heartbeat.stop();
        self.ctx.outbound.clear();
        match &result {
            Ok(()) => {
                self.ctx.state.set_phase(SessionPhase::Disconnected);
                tracing::info!("Gateway session shut down");
            }
            Err(e) => {
                self.ctx.state.set_phase(SessionPhase::Terminated);
                tracing::error!(error = %e, "Gateway session terminated");
            }
        }
        result
    }

    async fn run_loop(&mut self) -> GatewayResult<()> {
        let mut connected_once = false;

        loop {
            if *self.shutdown.borrow() {
                return Ok(());
            }

            let inbound = match self.open().await {
                Ok(inbound) => {
                    self.policy.record_success();
                    connected_once = true;
                    inbound
                }
                Err(e) if !connected_once => return Err(e),
                Err(e) => {
                    let retry = self.policy.record_failure();
                    tracing::warn!(
                        attempt = self.policy.failures(),
                        error = %e,
                        "Reconnect attempt failed"
                    );
                    if !retry {
                        return Err(GatewayError::ReconnectExhausted {
                            attempts: self.policy.failures(),
                            last_error: e.to_string(),
                        });
                    }
                    if self.pause().await {
                        return Ok(());
                    }
                    continue;
                }
            };

            match self.drive(inbound).await? {
                SocketExit::Shutdown => return Ok(()),
                SocketExit::Reconnect => {
                    self.ctx.stats.record_reconnect();
                    self.ctx.outbound.clear();
                    tracing::info!(
                        session_id = ?self.ctx.state.session_id(),
                        seq = self.ctx.state.sequence(),
                        delay_ms = self.policy.delay().as_millis() as u64,
                        "Reconnecting"
                    );
                    if self.pause().await {
                        return Ok(());
                    }
                }
            }
        }
    }

    /// Resolve the gateway URL and open a socket
    async fn open(&mut self) -> GatewayResult<mpsc::Receiver<Inbound>> {
        let url = self.resolver.resolve().await.map_err(GatewayError::Resolve)?;
        let transport = self.connector.connect(&url).await?;

        self.ctx.outbound.replace(transport.outbound);
        self.ctx.state.set_phase(SessionPhase::AwaitingHello);
        tracing::info!(url = %url, "Gateway connected, awaiting Hello");
        Ok(transport.inbound)
    }

    /// Process one socket until it ends
    async fn drive(&mut self, mut inbound: mpsc::Receiver<Inbound>) -> GatewayResult<SocketExit> {
        loop {
            let message = tokio::select! {
                biased;
                () = wait_shutdown(&mut self.shutdown) => return Ok(SocketExit::Shutdown),
                message = inbound.recv() => message,
            };

            let exit = match message {
                Some(Inbound::Text(text)) => self.handle_raw(text.as_bytes()).await?,
                Some(Inbound::Binary(bytes)) => self.handle_raw(&bytes).await?,
                Some(Inbound::Close(Some(code))) => Some(self.handle_close(i64::from(code))?),
                Some(Inbound::Close(None)) => {
                    Some(self.transport_lost("closed without code").await)
                }
                Some(Inbound::Error(reason)) => Some(self.transport_lost(&reason).await),
                None => Some(self.transport_lost("socket dropped").await),
            };

            if let Some(exit) = exit {
                return Ok(exit);
            }
        }
    }

    async fn handle_raw(&self, bytes: &[u8]) -> GatewayResult<Option<SocketExit>> {
        self.ctx.stats.record_frame();

        match decode(bytes) {
            Ok(Decoded::Frame(frame)) => match FrameDispatcher::dispatch(&self.ctx, frame).await {
                Ok(()) => Ok(None),
                Err(e) if e.is_transport() => Ok(Some(self.transport_lost(&e.to_string()).await)),
                Err(e) => Err(e),
            },
            Ok(Decoded::Close(code)) => self.handle_close(code).map(Some),
            Err(DecodeError::UnknownOpcode(op)) => {
                tracing::error!(op, "Unknown op code from server");
                Err(GatewayError::UnknownOpcode(op))
            }
            Err(e) => {
                self.ctx.stats.record_decode_failure();
                if let Some(seq) = e.sequence() {
                    self.ctx.state.set_sequence(seq);
                }
                tracing::warn!(
                    error = %e,
                    raw = %String::from_utf8_lossy(bytes),
                    "Failed to decode frame"
                );
                Ok(None)
            }
        }
    }

    fn handle_close(&self, code: i64) -> GatewayResult<SocketExit> {
        match Recovery::for_close_code(code) {
            Recovery::ReplaceSocket => {
                tracing::warn!(
                    close_code = code,
                    reason = %CloseCode::describe(code),
                    "Gateway closed, will resume on a new connection"
                );
                Ok(SocketExit::Reconnect)
            }
            Recovery::Terminate => {
                tracing::error!(
                    close_code = code,
                    reason = %CloseCode::describe(code),
                    "Gateway closed with non-resumable code"
                );
                Err(GatewayError::UnexpectedCloseCode(code))
            }
        }
    }

    /// Best-effort re-auth on the old handle, then replace the socket
    async fn transport_lost(&self, reason: &str) -> SocketExit {
        tracing::info!(reason = %reason, "Connection lost");
        if let Err(e) = AuthHandler::send(&self.ctx).await {
            tracing::debug!(error = %e, "Re-auth on lost connection failed");
        }
        SocketExit::Reconnect
    }

    /// Sleep the reconnect delay; `true` if shutdown was requested meanwhile
    async fn pause(&mut self) -> bool {
        self.ctx.state.set_phase(SessionPhase::Reconnecting);
        tokio::select! {
            () = tokio::time::sleep(self.policy.delay()) => false,
            () = wait_shutdown(&mut self.shutdown) => true,
        }
    }
}

/// Resolves once the shutdown flag is set
async fn wait_shutdown(shutdown: &mut watch::Receiver<bool>) {
    loop {
        if *shutdown.borrow_and_update() {
            return;
        }
        if shutdown.changed().await.is_err() {
            // Sender gone without signalling: never shut down
            std::future::pending::<()>().await;
        }
    }
}
