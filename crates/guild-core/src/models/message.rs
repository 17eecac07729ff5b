//! Message models: messages, embeds, ark templates and audit results

use serde::{Deserialize, Serialize};

use super::{Member, User};

/// A message posted in a channel or direct-message session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub channel_id: String,
    pub guild_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edited_timestamp: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mention_everyone: Option<bool>,
    pub author: User,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<MessageAttachment>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub embeds: Vec<MessageEmbed>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mentions: Vec<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member: Option<Member>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ark: Option<MessageArk>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seq: Option<u64>,
    /// Source guild of a direct message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src_guild_id: Option<String>,
}

impl Message {
    pub fn content(&self) -> &str {
        self.content.as_deref().unwrap_or("")
    }

    /// Whether the given user is @-mentioned in this message
    pub fn mentions_user(&self, user_id: &str) -> bool {
        self.mentions.iter().any(|u| u.id == user_id)
    }

    /// Content with every `<@id>` / `<@!id>` mention of `user_id` removed and trimmed
    pub fn content_without_mention(&self, user_id: &str) -> String {
        self.content()
            .replace(&format!("<@!{user_id}>"), "")
            .replace(&format!("<@{user_id}>"), "")
            .trim()
            .to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageEmbedField {
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageEmbed {
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Notification text shown in the message list
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub prompt: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<MessageEmbedField>,
}

impl MessageEmbed {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push(MessageEmbedField {
            name: name.into(),
            value: value.into(),
        });
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageAttachment {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageArkObjKv {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageArkObj {
    pub obj: Vec<MessageArkObjKv>,
}

/// Templated rich message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageArk {
    pub template_id: u32,
    #[serde(default)]
    pub kv: Vec<MessageArkObj>,
}

impl MessageArk {
    pub fn new(template_id: u32) -> Self {
        Self {
            template_id,
            kv: Vec::new(),
        }
    }

    /// Append one object made of the given key/value pairs
    pub fn with_obj<K, V>(mut self, pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.kv.push(MessageArkObj {
            obj: pairs
                .into_iter()
                .map(|(key, value)| MessageArkObjKv {
                    key: key.into(),
                    value: value.into(),
                })
                .collect(),
        });
        self
    }
}

/// Payload of `MESSAGE_AUDIT_PASS` / `MESSAGE_AUDIT_REJECT`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageAudit {
    pub audit_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    pub guild_id: String,
    pub channel_id: String,
    #[serde(default)]
    pub audit_time: String,
    #[serde(default)]
    pub create_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seq_in_channel: Option<String>,
}

impl MessageAudit {
    /// Rejected audits carry no message id
    pub fn is_passed(&self) -> bool {
        self.message_id.is_some()
    }
}
