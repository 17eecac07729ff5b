//! Channel permission model

use serde::{Deserialize, Serialize};

use crate::value_objects::ChannelPermissionFlags;

/// Permissions of one user or role in one channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelPermissions {
    pub channel_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_id: Option<String>,
    /// Decimal string of [`ChannelPermissionFlags`] bits
    pub permissions: String,
}

impl ChannelPermissions {
    /// Parsed flags; unparsable strings yield no permissions
    pub fn flags(&self) -> ChannelPermissionFlags {
        ChannelPermissionFlags::parse(&self.permissions).unwrap_or_default()
    }
}
