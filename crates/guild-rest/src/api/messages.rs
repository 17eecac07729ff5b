//! Channel message endpoints and the shared message body

use guild_core::{Message, MessageArk, MessageEmbed, ModelError, ModelResult};
use serde::Serialize;

use crate::client::{decode, RestClient};
use crate::error::RestResult;

/// Body of an outbound channel or direct message
///
/// At least one of content, embed, ark or image is required. Setting
/// `msg_id` sends a passive reply to that message.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SendMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embed: Option<MessageEmbed>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ark: Option<MessageArk>,
    /// Image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msg_id: Option<String>,
}

impl SendMessage {
    pub fn text(content: impl Into<String>) -> Self {
        Self::default().with_content(content)
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_embed(mut self, embed: MessageEmbed) -> Self {
        self.embed = Some(embed);
        self
    }

    pub fn with_ark(mut self, ark: MessageArk) -> Self {
        self.ark = Some(ark);
        self
    }

    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image = Some(url.into());
        self
    }

    /// Reply to the given message
    pub fn reply_to(mut self, message_id: impl Into<String>) -> Self {
        self.msg_id = Some(message_id.into());
        self
    }

    pub fn validate(&self) -> ModelResult<()> {
        if self.content.is_none()
            && self.embed.is_none()
            && self.ark.is_none()
            && self.image.is_none()
        {
            return Err(ModelError::EmptyMessage);
        }
        Ok(())
    }
}

impl RestClient {
    /// `GET /channels/{channel_id}/messages/{message_id}`
    pub async fn message(&self, channel_id: &str, message_id: &str) -> RestResult<Message> {
        let endpoint = format!("/channels/{channel_id}/messages/{message_id}");
        let value = self.get(&endpoint, &[]).await?;
        // Single-message responses wrap the message in a `message` field
        let value = value.map(|mut v| match v.get_mut("message") {
            Some(inner) if inner.is_object() => inner.take(),
            _ => v,
        });
        decode(&endpoint, value)
    }

    /// `POST /channels/{channel_id}/messages`
    pub async fn send_message(
        &self,
        channel_id: &str,
        message: &SendMessage,
    ) -> RestResult<Message> {
        message.validate()?;
        let endpoint = format!("/channels/{channel_id}/messages");
        decode(&endpoint, self.post(&endpoint, message).await?)
    }
}
