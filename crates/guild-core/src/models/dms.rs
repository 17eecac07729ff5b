//! Direct message session model

use serde::{Deserialize, Serialize};

/// A direct-message session; `guild_id` is the DM pseudo-guild messages are sent to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectMessageSession {
    pub guild_id: String,
    pub channel_id: String,
    #[serde(default)]
    pub create_time: String,
}
