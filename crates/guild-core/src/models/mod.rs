//! Platform data models

mod announce;
mod audio;
mod channel;
mod dms;
mod gateway;
mod guild;
mod member;
mod message;
mod permissions;
mod reaction;
mod role;
mod schedule;
mod user;

pub use announce::Announces;
pub use audio::{AudioAction, AudioControl, AudioStatus};
pub use channel::{Channel, ChannelSubType, ChannelType, PrivateType, SpeakPermission};
pub use dms::DirectMessageSession;
pub use gateway::{GatewayUrl, SessionStartLimit, Shards};
pub use guild::Guild;
pub use member::{Member, MemberWithGuildId};
pub use message::{
    Message, MessageArk, MessageArkObj, MessageArkObjKv, MessageAttachment, MessageAudit,
    MessageEmbed, MessageEmbedField,
};
pub use permissions::ChannelPermissions;
pub use reaction::{Emoji, EmojiType, MessageReaction, ReactionTarget, ReactionTargetType};
pub use role::{CreatedRole, DefaultRole, Role, RoleFilter, RoleInfo, RoleList, UpdatedRole};
pub use schedule::{RemindType, Schedule};
pub use user::User;
