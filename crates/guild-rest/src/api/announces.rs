//! Announcement endpoints

use guild_core::Announces;
use serde_json::json;

use crate::client::{decode, RestClient};
use crate::error::RestResult;

impl RestClient {
    /// `POST /guilds/{guild_id}/announces`
    pub async fn create_guild_announce(
        &self,
        guild_id: &str,
        channel_id: &str,
        message_id: &str,
    ) -> RestResult<Announces> {
        let endpoint = format!("/guilds/{guild_id}/announces");
        let body = json!({ "channel_id": channel_id, "message_id": message_id });
        decode(&endpoint, self.post(&endpoint, &body).await?)
    }

    /// `DELETE /guilds/{guild_id}/announces/{message_id}`
    pub async fn delete_guild_announce(
        &self,
        guild_id: &str,
        message_id: &str,
    ) -> RestResult<bool> {
        self.delete(&format!("/guilds/{guild_id}/announces/{message_id}"), None)
            .await
    }

    /// `POST /channels/{channel_id}/announces`
    pub async fn create_channel_announce(
        &self,
        channel_id: &str,
        message_id: &str,
    ) -> RestResult<Announces> {
        let endpoint = format!("/channels/{channel_id}/announces");
        let body = json!({ "message_id": message_id });
        decode(&endpoint, self.post(&endpoint, &body).await?)
    }

    /// `DELETE /channels/{channel_id}/announces/{message_id}`
    pub async fn delete_channel_announce(
        &self,
        channel_id: &str,
        message_id: &str,
    ) -> RestResult<bool> {
        self.delete(&format!("/channels/{channel_id}/announces/{message_id}"), None)
            .await
    }
}
