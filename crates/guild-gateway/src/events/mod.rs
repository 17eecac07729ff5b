//! Gateway events
//!
//! Event type names carried in the `t` field and the decoded event handed to
//! handlers.

mod event;
mod event_types;

pub use event::Event;
pub use event_types::GatewayEventType;
