//! Direct message endpoints

use guild_core::{DirectMessageSession, Message};
use serde_json::json;

use super::SendMessage;
use crate::client::{decode, RestClient};
use crate::error::RestResult;

impl RestClient {
    /// `POST /users/@me/dms`: open a DM session with a member of `source_guild_id`
    pub async fn create_direct_message(
        &self,
        recipient_id: &str,
        source_guild_id: &str,
    ) -> RestResult<DirectMessageSession> {
        let endpoint = "/users/@me/dms";
        let body = json!({
            "recipient_id": recipient_id,
            "source_guild_id": source_guild_id,
        });
        decode(endpoint, self.post(endpoint, &body).await?)
    }

    /// `POST /dms/{guild_id}/messages`, where `guild_id` is the DM session's guild
    pub async fn send_direct_message(
        &self,
        guild_id: &str,
        message: &SendMessage,
    ) -> RestResult<Message> {
        message.validate()?;
        let endpoint = format!("/dms/{guild_id}/messages");
        decode(&endpoint, self.post(&endpoint, message).await?)
    }
}
