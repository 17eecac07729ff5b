//! Heartbeat request (op 1) and ACK (op 11)

use crate::error::GatewayResult;
use crate::protocol::Frame;
use crate::session::SessionContext;

pub struct HeartbeatHandler;

impl HeartbeatHandler {
    /// The server asked for a heartbeat: answer right away
    pub async fn handle_request<C>(ctx: &SessionContext<C>) -> GatewayResult<()> {
        let seq = ctx.state.sequence();
        tracing::debug!(seq, "Server requested heartbeat");
        ctx.outbound.send(Frame::heartbeat(seq)).await?;
        ctx.stats.record_heartbeat();
        Ok(())
    }

    pub fn handle_ack<C>(ctx: &SessionContext<C>) {
        ctx.state.record_ack();
        ctx.stats.record_heartbeat_ack();
        tracing::trace!("Heartbeat ACK received");
    }
}
