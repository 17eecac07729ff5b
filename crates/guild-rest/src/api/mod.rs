//! Endpoint families
//!
//! Each module adds one group of typed calls to [`RestClient`](crate::RestClient).

mod announces;
mod audio;
mod channels;
mod dms;
mod gateway;
mod guilds;
mod members;
mod messages;
mod mute;
mod permissions;
mod roles;
mod schedules;
mod users;

pub use channels::{CreateChannel, UpdateChannel};
pub use messages::SendMessage;
pub use mute::Mute;
pub use permissions::PermissionChange;
