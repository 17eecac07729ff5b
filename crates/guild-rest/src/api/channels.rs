//! Channel endpoints

use guild_core::{Channel, ChannelSubType, ChannelType, PrivateType, SpeakPermission};
use serde::Serialize;

use crate::client::{decode, RestClient};
use crate::error::RestResult;

/// Body of `POST /guilds/{guild_id}/channels`
#[derive(Debug, Clone, Serialize)]
pub struct CreateChannel {
    pub name: String,
    #[serde(rename = "type")]
    pub channel_type: ChannelType,
    pub sub_type: ChannelSubType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_type: Option<PrivateType>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub private_user_ids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speak_permission: Option<SpeakPermission>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_id: Option<String>,
}

impl CreateChannel {
    /// A plain chat text channel
    pub fn text(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            channel_type: ChannelType::Text,
            sub_type: ChannelSubType::Chat,
            position: None,
            parent_id: None,
            private_type: None,
            private_user_ids: Vec::new(),
            speak_permission: None,
            application_id: None,
        }
    }

    pub fn with_type(mut self, channel_type: ChannelType) -> Self {
        self.channel_type = channel_type;
        self
    }

    pub fn with_parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    pub fn with_position(mut self, position: i64) -> Self {
        self.position = Some(position);
        self
    }

    /// Restrict visibility to admins plus the given members
    pub fn private_to<I, S>(mut self, user_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.private_type = Some(PrivateType::AdminsAndMembers);
        self.private_user_ids = user_ids.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_speak_permission(mut self, permission: SpeakPermission) -> Self {
        self.speak_permission = Some(permission);
        self
    }

    pub fn with_application(mut self, application_id: impl Into<String>) -> Self {
        self.application_id = Some(application_id.into());
        self
    }
}

/// Body of `PATCH /channels/{channel_id}`; unset fields are left unchanged
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateChannel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub channel_type: Option<ChannelType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_type: Option<ChannelSubType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_type: Option<PrivateType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speak_permission: Option<SpeakPermission>,
}

impl UpdateChannel {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_position(mut self, position: i64) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    pub fn with_private_type(mut self, private_type: PrivateType) -> Self {
        self.private_type = Some(private_type);
        self
    }

    pub fn with_speak_permission(mut self, permission: SpeakPermission) -> Self {
        self.speak_permission = Some(permission);
        self
    }
}

impl RestClient {
    /// `GET /guilds/{guild_id}/channels`
    pub async fn channels(&self, guild_id: &str) -> RestResult<Vec<Channel>> {
        let endpoint = format!("/guilds/{guild_id}/channels");
        decode(&endpoint, self.get(&endpoint, &[]).await?)
    }

    /// `GET /channels/{channel_id}`
    pub async fn channel(&self, channel_id: &str) -> RestResult<Channel> {
        let endpoint = format!("/channels/{channel_id}");
        decode(&endpoint, self.get(&endpoint, &[]).await?)
    }

    /// `POST /guilds/{guild_id}/channels`
    pub async fn create_channel(
        &self,
        guild_id: &str,
        request: &CreateChannel,
    ) -> RestResult<Channel> {
        let endpoint = format!("/guilds/{guild_id}/channels");
        decode(&endpoint, self.post(&endpoint, request).await?)
    }

    /// `PATCH /channels/{channel_id}`
    pub async fn update_channel(
        &self,
        channel_id: &str,
        request: &UpdateChannel,
    ) -> RestResult<Channel> {
        let endpoint = format!("/channels/{channel_id}");
        decode(&endpoint, self.patch(&endpoint, request).await?)
    }

    /// `DELETE /channels/{channel_id}`
    pub async fn delete_channel(&self, channel_id: &str) -> RestResult<bool> {
        self.delete(&format!("/channels/{channel_id}"), None).await
    }
}
