//! Connection management
//!
//! The socket abstraction, its WebSocket implementation, and the shared
//! session state read by the heartbeat and written by the receive loop.

mod state;
mod stats;
mod transport;
mod ws;

pub use state::{SessionPhase, SessionState};
pub use stats::{GatewayStats, StatsSnapshot};
pub use transport::{Connector, Inbound, OutboundSlot, Transport};
pub use ws::WsConnector;
