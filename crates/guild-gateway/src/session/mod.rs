//! Gateway session
//!
//! The receive loop, its heartbeat, and the rules for recovering a dropped
//! connection.

mod context;
mod heartbeat;
mod runner;
mod supervisor;

pub use context::{SessionContext, SessionIdentity};
pub use heartbeat::Heartbeat;
pub use runner::GatewaySession;
pub use supervisor::{AuthKind, ReconnectPolicy, Recovery};
