//! # guild-gateway
//!
//! Gateway client for the guild bot platform: frame codec, session state
//! machine (identify/resume), heartbeat, event dispatch, and the
//! [`GuildBot`] facade.
//!
//! ```no_run
//! use guild_common::BotConfig;
//! use guild_gateway::GuildBot;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let bot = GuildBot::new(BotConfig::from_env()?)?;
//! bot.on("AT_MESSAGE_CREATE", |_bot, event| async move {
//!     if let Some(message) = event.as_message() {
//!         tracing::info!(content = %message.content(), "Mentioned");
//!     }
//!     anyhow::Ok(())
//! });
//! bot.run().await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod connection;
pub mod dispatch;
pub mod error;
pub mod events;
pub mod handlers;
pub mod protocol;
pub mod session;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types at crate root
pub use client::{GatewayResolver, GuildBot, GuildBotBuilder, StaticResolver};
pub use connection::{
    Connector, GatewayStats, Inbound, OutboundSlot, SessionPhase, SessionState, StatsSnapshot,
    Transport, WsConnector,
};
pub use dispatch::EventRegistry;
pub use error::{GatewayError, GatewayResult};
pub use events::{Event, GatewayEventType};
pub use protocol::{decode, encode, CloseCode, DecodeError, Decoded, Frame, OpCode, Payload};
