//! Emoji reaction models

use serde::{Deserialize, Serialize};

/// What a reaction was attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub enum ReactionTargetType {
    Message,
    Forum,
    Comment,
    Reply,
    Other(u32),
}

impl From<u32> for ReactionTargetType {
    fn from(value: u32) -> Self {
        match value {
            0 => Self::Message,
            1 => Self::Forum,
            2 => Self::Comment,
            3 => Self::Reply,
            other => Self::Other(other),
        }
    }
}

impl From<ReactionTargetType> for u32 {
    fn from(value: ReactionTargetType) -> Self {
        match value {
            ReactionTargetType::Message => 0,
            ReactionTargetType::Forum => 1,
            ReactionTargetType::Comment => 2,
            ReactionTargetType::Reply => 3,
            ReactionTargetType::Other(other) => other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionTarget {
    pub id: String,
    #[serde(rename = "type")]
    pub target_type: ReactionTargetType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub enum EmojiType {
    System,
    Emoji,
    Other(u32),
}

impl From<u32> for EmojiType {
    fn from(value: u32) -> Self {
        match value {
            1 => Self::System,
            2 => Self::Emoji,
            other => Self::Other(other),
        }
    }
}

impl From<EmojiType> for u32 {
    fn from(value: EmojiType) -> Self {
        match value {
            EmojiType::System => 1,
            EmojiType::Emoji => 2,
            EmojiType::Other(other) => other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Emoji {
    pub id: String,
    #[serde(rename = "type")]
    pub emoji_type: EmojiType,
}

/// Payload of `MESSAGE_REACTION_ADD` / `MESSAGE_REACTION_REMOVE`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageReaction {
    pub user_id: String,
    pub guild_id: String,
    pub channel_id: String,
    pub target: ReactionTarget,
    pub emoji: Emoji,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_reaction() {
        let reaction: MessageReaction = serde_json::from_str(
            r#"{"user_id":"u","guild_id":"g","channel_id":"c","target":{"id":"m1","type":0},"emoji":{"id":"4","type":1}}"#,
        )
        .unwrap();
        assert_eq!(reaction.target.target_type, ReactionTargetType::Message);
        assert_eq!(reaction.emoji.emoji_type, EmojiType::System);
    }
}
