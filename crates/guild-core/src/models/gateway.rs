//! Gateway endpoint discovery models

use serde::{Deserialize, Serialize};

/// Response of `GET /gateway`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayUrl {
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStartLimit {
    pub total: u32,
    pub remaining: u32,
    /// Milliseconds until `remaining` resets
    pub reset_after: u64,
    pub max_concurrency: u32,
}

/// Response of `GET /gateway/bot`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shards {
    pub url: String,
    pub shards: u32,
    pub session_start_limit: SessionStartLimit,
}
