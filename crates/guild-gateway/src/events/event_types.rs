//! Gateway event types
//!
//! Defines all event type names for dispatch frames.

use guild_core::Intents;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::protocol::PayloadKind;

/// Gateway event types
///
/// These are the event names sent in the `t` field of dispatch frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GatewayEventType {
    // Connection events
    /// Sent after successful Identify
    Ready,
    /// Sent after successful Resume
    Resumed,

    // Guild events
    GuildCreate,
    GuildUpdate,
    GuildDelete,

    // Channel events
    ChannelCreate,
    ChannelUpdate,
    ChannelDelete,

    // Member events
    GuildMemberAdd,
    GuildMemberUpdate,
    GuildMemberRemove,

    // Reaction events
    MessageReactionAdd,
    MessageReactionRemove,

    // Message events
    /// Message that @-mentions the bot
    AtMessageCreate,
    /// Any message in a private-domain guild
    MessageCreate,
    /// Direct message to the bot
    DirectMessageCreate,

    // Audit events
    MessageAuditPass,
    MessageAuditReject,

    // Audio events
    AudioStart,
    AudioFinish,
    AudioOnMic,
    AudioOffMic,

    // Forum events
    ForumThreadCreate,
    ForumThreadUpdate,
    ForumThreadDelete,
    ForumPostCreate,
    ForumPostDelete,
    ForumReplyCreate,
    ForumReplyDelete,
}

impl GatewayEventType {
    /// Every known event type
    pub const ALL: &'static [GatewayEventType] = &[
        Self::Ready,
        Self::Resumed,
        Self::GuildCreate,
        Self::GuildUpdate,
        Self::GuildDelete,
        Self::ChannelCreate,
        Self::ChannelUpdate,
        Self::ChannelDelete,
        Self::GuildMemberAdd,
        Self::GuildMemberUpdate,
        Self::GuildMemberRemove,
        Self::MessageReactionAdd,
        Self::MessageReactionRemove,
        Self::AtMessageCreate,
        Self::MessageCreate,
        Self::DirectMessageCreate,
        Self::MessageAuditPass,
        Self::MessageAuditReject,
        Self::AudioStart,
        Self::AudioFinish,
        Self::AudioOnMic,
        Self::AudioOffMic,
        Self::ForumThreadCreate,
        Self::ForumThreadUpdate,
        Self::ForumThreadDelete,
        Self::ForumPostCreate,
        Self::ForumPostDelete,
        Self::ForumReplyCreate,
        Self::ForumReplyDelete,
    ];

    /// Get the string representation of the event type
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ready => "READY",
            Self::Resumed => "RESUMED",
            Self::GuildCreate => "GUILD_CREATE",
            Self::GuildUpdate => "GUILD_UPDATE",
            Self::GuildDelete => "GUILD_DELETE",
            Self::ChannelCreate => "CHANNEL_CREATE",
            Self::ChannelUpdate => "CHANNEL_UPDATE",
            Self::ChannelDelete => "CHANNEL_DELETE",
            Self::GuildMemberAdd => "GUILD_MEMBER_ADD",
            Self::GuildMemberUpdate => "GUILD_MEMBER_UPDATE",
            Self::GuildMemberRemove => "GUILD_MEMBER_REMOVE",
            Self::MessageReactionAdd => "MESSAGE_REACTION_ADD",
            Self::MessageReactionRemove => "MESSAGE_REACTION_REMOVE",
            Self::AtMessageCreate => "AT_MESSAGE_CREATE",
            Self::MessageCreate => "MESSAGE_CREATE",
            Self::DirectMessageCreate => "DIRECT_MESSAGE_CREATE",
            Self::MessageAuditPass => "MESSAGE_AUDIT_PASS",
            Self::MessageAuditReject => "MESSAGE_AUDIT_REJECT",
            Self::AudioStart => "AUDIO_START",
            Self::AudioFinish => "AUDIO_FINISH",
            Self::AudioOnMic => "AUDIO_ON_MIC",
            Self::AudioOffMic => "AUDIO_OFF_MIC",
            Self::ForumThreadCreate => "FORUM_THREAD_CREATE",
            Self::ForumThreadUpdate => "FORUM_THREAD_UPDATE",
            Self::ForumThreadDelete => "FORUM_THREAD_DELETE",
            Self::ForumPostCreate => "FORUM_POST_CREATE",
            Self::ForumPostDelete => "FORUM_POST_DELETE",
            Self::ForumReplyCreate => "FORUM_REPLY_CREATE",
            Self::ForumReplyDelete => "FORUM_REPLY_DELETE",
        }
    }

    /// Parse an event type from a string
    #[must_use]
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|event| event.as_str() == s)
    }

    /// Shape of the `d` field for this event
    #[must_use]
    pub const fn payload_kind(self) -> PayloadKind {
        match self {
            Self::Ready => PayloadKind::Ready,
            Self::Resumed => PayloadKind::Scalar,
            Self::GuildCreate | Self::GuildUpdate | Self::GuildDelete => PayloadKind::Guild,
            Self::ChannelCreate | Self::ChannelUpdate | Self::ChannelDelete => PayloadKind::Channel,
            Self::GuildMemberAdd | Self::GuildMemberUpdate | Self::GuildMemberRemove => {
                PayloadKind::Member
            }
            Self::MessageReactionAdd | Self::MessageReactionRemove => PayloadKind::MessageReaction,
            Self::AtMessageCreate | Self::MessageCreate | Self::DirectMessageCreate => {
                PayloadKind::Message
            }
            Self::MessageAuditPass | Self::MessageAuditReject => PayloadKind::MessageAudit,
            Self::AudioStart | Self::AudioFinish | Self::AudioOnMic | Self::AudioOffMic => {
                PayloadKind::AudioAction
            }
            Self::ForumThreadCreate
            | Self::ForumThreadUpdate
            | Self::ForumThreadDelete
            | Self::ForumPostCreate
            | Self::ForumPostDelete
            | Self::ForumReplyCreate
            | Self::ForumReplyDelete => PayloadKind::Raw,
        }
    }

    /// Intent that must be requested to receive this event
    ///
    /// `None` for connection events, which are always delivered, and for
    /// `MESSAGE_CREATE`, whose private-domain intent is not modelled.
    #[must_use]
    pub const fn intent(self) -> Option<Intents> {
        match self {
            Self::Ready | Self::Resumed | Self::MessageCreate => None,
            Self::GuildCreate
            | Self::GuildUpdate
            | Self::GuildDelete
            | Self::ChannelCreate
            | Self::ChannelUpdate
            | Self::ChannelDelete => Some(Intents::GUILDS),
            Self::GuildMemberAdd | Self::GuildMemberUpdate | Self::GuildMemberRemove => {
                Some(Intents::GUILD_MEMBERS)
            }
            Self::MessageReactionAdd | Self::MessageReactionRemove => {
                Some(Intents::GUILD_MESSAGE_REACTIONS)
            }
            Self::AtMessageCreate => Some(Intents::AT_MESSAGES),
            Self::DirectMessageCreate => Some(Intents::DIRECT_MESSAGE),
            Self::MessageAuditPass | Self::MessageAuditReject => Some(Intents::MESSAGE_AUDIT),
            Self::AudioStart | Self::AudioFinish | Self::AudioOnMic | Self::AudioOffMic => {
                Some(Intents::AUDIO_ACTION)
            }
            Self::ForumThreadCreate
            | Self::ForumThreadUpdate
            | Self::ForumThreadDelete
            | Self::ForumPostCreate
            | Self::ForumPostDelete
            | Self::ForumReplyCreate
            | Self::ForumReplyDelete => Some(Intents::FORUM_EVENT),
        }
    }
}

impl fmt::Display for GatewayEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<GatewayEventType> for String {
    fn from(event: GatewayEventType) -> Self {
        event.as_str().to_string()
    }
}
