//! Identify / Resume

use crate::connection::{SessionPhase, SessionState};
use crate::error::GatewayResult;
use crate::protocol::{Frame, IdentifyPayload, ResumePayload};
use crate::session::{AuthKind, SessionContext, SessionIdentity};

/// Builds and sends the handshake for the current session state
pub struct AuthHandler;

impl AuthHandler {
    /// Identify without a stored session, Resume with one
    pub fn build(identity: &SessionIdentity, state: &SessionState) -> (AuthKind, Frame) {
        let session_id = state.session_id();
        let kind = AuthKind::for_session(session_id.as_deref());
        let frame = match (kind, session_id) {
            (AuthKind::Resume, Some(session_id)) => Frame::resume(ResumePayload {
                token: identity.token.clone(),
                session_id,
                seq: state.sequence(),
            }),
            _ => Frame::identify(IdentifyPayload::new(
                identity.token.clone(),
                identity.intents,
                identity.shard,
            )),
        };
        (kind, frame)
    }

    /// Send the handshake through the current socket
    pub async fn send<C>(ctx: &SessionContext<C>) -> GatewayResult<()> {
        let (kind, frame) = Self::build(&ctx.identity, &ctx.state);
        let phase = match kind {
            AuthKind::Identify => SessionPhase::Identifying,
            AuthKind::Resume => SessionPhase::Resuming,
        };
        ctx.state.set_phase(phase);

        tracing::debug!(
            auth = ?kind,
            seq = ctx.state.sequence(),
            intents = %ctx.identity.intents,
            "Sending auth"
        );
        ctx.outbound.send(frame).await
    }
}
