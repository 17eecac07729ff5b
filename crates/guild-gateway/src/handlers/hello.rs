//! Hello handler (op 10)

use super::AuthHandler;
use crate::error::GatewayResult;
use crate::protocol::{Frame, Payload};
use crate::session::SessionContext;

pub struct HelloHandler;

impl HelloHandler {
    /// Store the heartbeat interval, then authenticate
    pub async fn handle<C>(ctx: &SessionContext<C>, frame: Frame) -> GatewayResult<()> {
        match frame.d {
            Some(Payload::Hello(hello)) => {
                ctx.state.set_heartbeat_interval(hello.heartbeat_interval);
                tracing::debug!(
                    heartbeat_interval_ms = hello.heartbeat_interval,
                    "Hello received"
                );
            }
            other => {
                tracing::warn!(payload = ?other, "Hello without heartbeat interval");
            }
        }

        AuthHandler::send(ctx).await
    }
}
