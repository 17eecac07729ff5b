//! Op code handlers
//!
//! Handles inbound frames based on their operation code.

mod auth;
mod dispatch;
mod heartbeat;
mod hello;

pub use auth::AuthHandler;
pub use dispatch::DispatchHandler;
pub use heartbeat::HeartbeatHandler;
pub use hello::HelloHandler;

use crate::error::GatewayResult;
use crate::protocol::{Frame, OpCode};
use crate::session::SessionContext;

/// Route inbound server frames to the appropriate handler
pub struct FrameDispatcher;

impl FrameDispatcher {
    /// Handle one decoded frame
    ///
    /// Errors are transport failures from writing a reply.
    pub async fn dispatch<C>(ctx: &SessionContext<C>, frame: Frame) -> GatewayResult<()>
    where
        C: Clone + Send + Sync + 'static,
    {
        tracing::trace!(
            op = frame.op.as_u8(),
            seq = ?frame.s,
            event_type = ?frame.t,
            "Frame received"
        );

        if !frame.op.is_server_op() {
            tracing::warn!(op = %frame.op, "Received client-only op code from server");
            return Ok(());
        }

        match frame.op {
            OpCode::Hello => HelloHandler::handle(ctx, frame).await,
            OpCode::Dispatch => {
                DispatchHandler::handle(ctx, frame);
                Ok(())
            }
            OpCode::Heartbeat => HeartbeatHandler::handle_request(ctx).await,
            OpCode::HeartbeatAck => {
                HeartbeatHandler::handle_ack(ctx);
                Ok(())
            }
            OpCode::Reconnect => {
                tracing::info!("Server requested reconnect, re-authenticating");
                AuthHandler::send(ctx).await
            }
            OpCode::InvalidSession => {
                tracing::warn!(
                    session_id = ?ctx.state.session_id(),
                    "Invalid session, identifying again"
                );
                ctx.state.clear_session();
                AuthHandler::send(ctx).await
            }
            // Filtered by is_server_op above
            OpCode::Identify | OpCode::Resume => Ok(()),
        }
    }
}
