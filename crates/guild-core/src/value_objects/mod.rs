//! Value objects

mod channel_permissions;
mod intents;

pub use channel_permissions::ChannelPermissionFlags;
pub use intents::Intents;
