//! # guild-core
//!
//! Domain layer containing the platform's data models, the gateway intents
//! bitmask, and request validation errors.
//! This crate has zero dependencies on infrastructure (HTTP, WebSocket, runtime).

pub mod error;
pub mod models;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use error::{ModelError, ModelResult};
pub use models::{
    Announces, AudioAction, AudioControl, AudioStatus, Channel, ChannelPermissions, ChannelSubType,
    ChannelType, CreatedRole, DefaultRole, DirectMessageSession, Emoji, EmojiType, GatewayUrl,
    Guild, Member, MemberWithGuildId, Message, MessageArk, MessageArkObj, MessageArkObjKv,
    MessageAttachment, MessageAudit, MessageEmbed, MessageEmbedField, MessageReaction,
    PrivateType, ReactionTarget, ReactionTargetType, RemindType, Role, RoleFilter, RoleInfo,
    RoleList, Schedule, SessionStartLimit, Shards, SpeakPermission, UpdatedRole, User,
};
pub use value_objects::{ChannelPermissionFlags, Intents};
