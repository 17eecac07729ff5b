//! Channel model and its numeric enumerations

use serde::{Deserialize, Serialize};

/// A sub-channel inside a guild
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub id: String,
    pub guild_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub channel_type: ChannelType,
    #[serde(default)]
    pub sub_type: ChannelSubType,
    #[serde(default)]
    pub position: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_type: Option<PrivateType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speak_permission: Option<SpeakPermission>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_id: Option<String>,
    /// Operator of the event that produced this payload (gateway events only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub op_user_id: Option<String>,
}

impl Channel {
    #[inline]
    pub fn is_text(&self) -> bool {
        self.channel_type == ChannelType::Text
    }

    #[inline]
    pub fn is_category(&self) -> bool {
        self.channel_type == ChannelType::Category
    }
}

/// Channel type
///
/// Unrecognized values are preserved in `Other` so new platform types never
/// fail decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub enum ChannelType {
    Text,
    Voice,
    Category,
    Live,
    Application,
    Forum,
    Other(u32),
}

impl From<u32> for ChannelType {
    fn from(value: u32) -> Self {
        match value {
            0 => Self::Text,
            2 => Self::Voice,
            4 => Self::Category,
            10005 => Self::Live,
            10006 => Self::Application,
            10007 => Self::Forum,
            other => Self::Other(other),
        }
    }
}

impl From<ChannelType> for u32 {
    fn from(value: ChannelType) -> Self {
        match value {
            ChannelType::Text => 0,
            ChannelType::Voice => 2,
            ChannelType::Category => 4,
            ChannelType::Live => 10005,
            ChannelType::Application => 10006,
            ChannelType::Forum => 10007,
            ChannelType::Other(other) => other,
        }
    }
}

/// Sub-type of a text channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub enum ChannelSubType {
    #[default]
    Chat,
    Notice,
    Guide,
    Game,
    Other(u32),
}

impl From<u32> for ChannelSubType {
    fn from(value: u32) -> Self {
        match value {
            0 => Self::Chat,
            1 => Self::Notice,
            2 => Self::Guide,
            3 => Self::Game,
            other => Self::Other(other),
        }
    }
}

impl From<ChannelSubType> for u32 {
    fn from(value: ChannelSubType) -> Self {
        match value {
            ChannelSubType::Chat => 0,
            ChannelSubType::Notice => 1,
            ChannelSubType::Guide => 2,
            ChannelSubType::Game => 3,
            ChannelSubType::Other(other) => other,
        }
    }
}

/// Who can see a channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub enum PrivateType {
    Public,
    AdminsOnly,
    AdminsAndMembers,
    Other(u32),
}

impl From<u32> for PrivateType {
    fn from(value: u32) -> Self {
        match value {
            0 => Self::Public,
            1 => Self::AdminsOnly,
            2 => Self::AdminsAndMembers,
            other => Self::Other(other),
        }
    }
}

impl From<PrivateType> for u32 {
    fn from(value: PrivateType) -> Self {
        match value {
            PrivateType::Public => 0,
            PrivateType::AdminsOnly => 1,
            PrivateType::AdminsAndMembers => 2,
            PrivateType::Other(other) => other,
        }
    }
}

/// Who can speak in a channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub enum SpeakPermission {
    Invalid,
    Everyone,
    AdminsAndMembers,
    Other(u32),
}

impl From<u32> for SpeakPermission {
    fn from(value: u32) -> Self {
        match value {
            0 => Self::Invalid,
            1 => Self::Everyone,
            2 => Self::AdminsAndMembers,
            other => Self::Other(other),
        }
    }
}

impl From<SpeakPermission> for u32 {
    fn from(value: SpeakPermission) -> Self {
        match value {
            SpeakPermission::Invalid => 0,
            SpeakPermission::Everyone => 1,
            SpeakPermission::AdminsAndMembers => 2,
            SpeakPermission::Other(other) => other,
        }
    }
}
