//! Announcement model

use serde::{Deserialize, Serialize};

/// A pinned guild or channel announcement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announces {
    pub guild_id: String,
    pub channel_id: String,
    pub message_id: String,
}
