//! Dispatch handler (op 0)

use std::sync::Arc;

use crate::connection::SessionPhase;
use crate::events::{Event, GatewayEventType};
use crate::protocol::{Frame, Payload};
use crate::session::SessionContext;

pub struct DispatchHandler;

impl DispatchHandler {
    /// Record the sequence, track READY/RESUMED, and hand the event to the registry
    pub fn handle<C>(ctx: &SessionContext<C>, frame: Frame)
    where
        C: Clone + Send + Sync + 'static,
    {
        if let Some(seq) = frame.s {
            ctx.state.set_sequence(seq);
        }

        match frame.t.as_deref().and_then(GatewayEventType::from_str) {
            Some(GatewayEventType::Ready) => match &frame.d {
                Some(Payload::Ready(ready)) => {
                    ctx.state.set_session(ready.session_id.clone(), ready.user.clone());
                    ctx.state.set_phase(SessionPhase::Active);
                    ctx.heartbeat.restart();
                    tracing::info!(
                        session_id = %ready.session_id,
                        user_id = %ready.user.id,
                        username = %ready.user.username,
                        "Connected"
                    );
                }
                other => tracing::warn!(payload = ?other, "READY without session"),
            },
            Some(GatewayEventType::Resumed) => {
                ctx.state.set_phase(SessionPhase::Active);
                tracing::info!(
                    session_id = ?ctx.state.session_id(),
                    seq = ctx.state.sequence(),
                    "Session resumed"
                );
            }
            _ => {}
        }

        ctx.stats.record_dispatch();
        if let Some(event) = Event::from_frame(frame) {
            let started = ctx.registry.dispatch(&ctx.app, Arc::new(event));
            tracing::trace!(handlers = started, "Event dispatched");
        }
    }
}
