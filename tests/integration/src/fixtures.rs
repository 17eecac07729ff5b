//! Test fixtures
//!
//! Gateway frames and REST bodies the fake platform sends.

use guild_common::BotConfig;
use guild_core::Intents;
use serde_json::{json, Value};
use std::time::Duration;

pub const APP_ID: &str = "1001";
pub const TOKEN: &str = "secret";
pub const AUTHORIZATION: &str = "Bot 1001.secret";
pub const BOT_USER_ID: &str = "42";

/// Bot configuration pointing at a fake platform
pub fn test_config(base_url: &str) -> BotConfig {
    BotConfig::new(APP_ID, TOKEN)
        .with_api_base_url(base_url)
        .with_intents(Intents::GUILDS | Intents::AT_MESSAGES | Intents::DIRECT_MESSAGE)
        .with_rest_timeout(Duration::from_secs(5))
        .with_reconnect(Duration::from_millis(50), 3)
}

pub fn bot_user() -> Value {
    json!({"id": BOT_USER_ID, "username": "test-bot", "bot": true})
}

pub fn hello_frame(heartbeat_interval: u64) -> Value {
    json!({"op": 10, "d": {"heartbeat_interval": heartbeat_interval}})
}

pub fn ready_frame(seq: u64, session_id: &str) -> Value {
    json!({
        "op": 0,
        "s": seq,
        "t": "READY",
        "d": {"version": 1, "session_id": session_id, "user": bot_user(), "shard": [0, 1]}
    })
}

pub fn resumed_frame(seq: u64) -> Value {
    json!({"op": 0, "s": seq, "t": "RESUMED", "d": ""})
}

/// `AT_MESSAGE_CREATE` from user `7` in channel `c1`
pub fn at_message_frame(seq: u64, message_id: &str, content: &str) -> Value {
    json!({
        "op": 0,
        "s": seq,
        "t": "AT_MESSAGE_CREATE",
        "d": {
            "id": message_id,
            "channel_id": "c1",
            "guild_id": "g1",
            "content": format!("<@!{BOT_USER_ID}> {content}"),
            "timestamp": "2024-05-01T12:00:00+08:00",
            "author": {"id": "7", "username": "alice"},
            "mentions": [bot_user()]
        }
    })
}
