//! Mute endpoints

use chrono::{DateTime, Utc};
use guild_core::{ModelError, ModelResult};
use serde::Serialize;

use crate::client::RestClient;
use crate::error::RestResult;

/// How long a mute lasts
///
/// The platform takes either an absolute end (epoch seconds) or a duration,
/// both as strings; an end timestamp takes precedence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mute {
    #[serde(skip_serializing_if = "Option::is_none")]
    mute_end_timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    mute_seconds: Option<String>,
}

impl Mute {
    pub fn new(end_timestamp: Option<i64>, seconds: Option<u64>) -> ModelResult<Self> {
        match (end_timestamp, seconds) {
            (Some(end), _) => Ok(Self {
                mute_end_timestamp: Some(end.to_string()),
                mute_seconds: None,
            }),
            (None, Some(seconds)) => Ok(Self::for_seconds(seconds)),
            (None, None) => Err(ModelError::MissingMuteDuration),
        }
    }

    pub fn until(end: DateTime<Utc>) -> Self {
        Self {
            mute_end_timestamp: Some(end.timestamp().to_string()),
            mute_seconds: None,
        }
    }

    pub fn for_seconds(seconds: u64) -> Self {
        Self {
            mute_end_timestamp: None,
            mute_seconds: Some(seconds.to_string()),
        }
    }

    /// Zero-length mute, which lifts an existing one
    pub fn lift() -> Self {
        Self::for_seconds(0)
    }
}

impl RestClient {
    /// `PATCH /guilds/{guild_id}/mute`: mute every member
    pub async fn mute_all(&self, guild_id: &str, mute: &Mute) -> RestResult<()> {
        self.patch(&format!("/guilds/{guild_id}/mute"), mute).await?;
        Ok(())
    }

    pub async fn unmute_all(&self, guild_id: &str) -> RestResult<()> {
        self.mute_all(guild_id, &Mute::lift()).await
    }

    /// `PATCH /guilds/{guild_id}/members/{user_id}/mute`
    pub async fn mute_member(&self, guild_id: &str, user_id: &str, mute: &Mute) -> RestResult<()> {
        self.patch(&format!("/guilds/{guild_id}/members/{user_id}/mute"), mute)
            .await?;
        Ok(())
    }

    pub async fn unmute_member(&self, guild_id: &str, user_id: &str) -> RestResult<()> {
        self.mute_member(guild_id, user_id, &Mute::lift()).await
    }
}
