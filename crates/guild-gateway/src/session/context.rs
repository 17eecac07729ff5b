//! Everything a frame handler can touch

use guild_common::BotConfig;
use guild_core::Intents;
use std::sync::Arc;

use super::Heartbeat;
use crate::connection::{GatewayStats, OutboundSlot, SessionState};
use crate::dispatch::EventRegistry;

/// Credentials and subscription sent in Identify/Resume
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionIdentity {
    /// `Bot <app_id>.<token>`
    pub token: String,
    pub intents: Intents,
    /// `[shard_id, shard_count]`
    pub shard: [u32; 2],
}

impl SessionIdentity {
    pub fn from_config(config: &BotConfig) -> Self {
        Self {
            token: config.bot_token(),
            intents: config.intents,
            shard: [config.shard_id, config.shard_count],
        }
    }
}

/// Shared state of one `run`
///
/// `app` is the value handed to every event handler.
pub struct SessionContext<C> {
    pub identity: SessionIdentity,
    pub state: Arc<SessionState>,
    pub stats: Arc<GatewayStats>,
    pub registry: Arc<EventRegistry<C>>,
    pub outbound: OutboundSlot,
    pub heartbeat: Heartbeat,
    pub app: C,
}

impl<C> SessionContext<C> {
    pub fn new(
        identity: SessionIdentity,
        state: Arc<SessionState>,
        stats: Arc<GatewayStats>,
        registry: Arc<EventRegistry<C>>,
        app: C,
    ) -> Self {
        let outbound = OutboundSlot::new();
        let heartbeat = Heartbeat::new(Arc::clone(&state), Arc::clone(&stats), outbound.clone());
        Self {
            identity,
            state,
            stats,
            registry,
            outbound,
            heartbeat,
            app,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_from_config() {
        let config = BotConfig::new("1001", "secret")
            .with_intents(Intents::GUILDS)
            .with_shard(1, 4);
        let identity = SessionIdentity::from_config(&config);

        assert_eq!(identity.token, "Bot 1001.secret");
        assert_eq!(identity.intents, Intents::GUILDS);
        assert_eq!(identity.shard, [1, 4]);
    }
}
