//! Bot facade
//!
//! [`GuildBot`] ties configuration, the REST client, the handler registry
//! and the gateway session together.

mod bot;
mod resolver;

pub use bot::{GuildBot, GuildBotBuilder};
pub use resolver::{GatewayResolver, StaticResolver};
