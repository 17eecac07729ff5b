//! Channel permission endpoints

use guild_core::{ChannelPermissionFlags, ChannelPermissions};
use serde_json::{json, Value};

use crate::client::{decode, RestClient};
use crate::error::RestResult;

/// Permissions to add and remove in one update
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PermissionChange {
    pub add: ChannelPermissionFlags,
    pub remove: ChannelPermissionFlags,
}

impl PermissionChange {
    pub fn grant(flags: ChannelPermissionFlags) -> Self {
        Self {
            add: flags,
            remove: ChannelPermissionFlags::empty(),
        }
    }

    pub fn revoke(flags: ChannelPermissionFlags) -> Self {
        Self {
            add: ChannelPermissionFlags::empty(),
            remove: flags,
        }
    }

    fn to_body(self) -> Value {
        json!({ "add": self.add.to_wire(), "remove": self.remove.to_wire() })
    }
}

impl RestClient {
    /// `GET /channels/{channel_id}/members/{user_id}/permissions`
    pub async fn member_permissions(
        &self,
        channel_id: &str,
        user_id: &str,
    ) -> RestResult<ChannelPermissions> {
        let endpoint = format!("/channels/{channel_id}/members/{user_id}/permissions");
        decode(&endpoint, self.get(&endpoint, &[]).await?)
    }

    /// `PUT /channels/{channel_id}/members/{user_id}/permissions`
    pub async fn update_member_permissions(
        &self,
        channel_id: &str,
        user_id: &str,
        change: PermissionChange,
    ) -> RestResult<bool> {
        self.put(
            &format!("/channels/{channel_id}/members/{user_id}/permissions"),
            Some(change.to_body()),
        )
        .await
    }

    /// `GET /channels/{channel_id}/roles/{role_id}/permissions`
    pub async fn role_permissions(
        &self,
        channel_id: &str,
        role_id: &str,
    ) -> RestResult<ChannelPermissions> {
        let endpoint = format!("/channels/{channel_id}/roles/{role_id}/permissions");
        decode(&endpoint, self.get(&endpoint, &[]).await?)
    }

    /// `PUT /channels/{channel_id}/roles/{role_id}/permissions`
    pub async fn update_role_permissions(
        &self,
        channel_id: &str,
        role_id: &str,
        change: PermissionChange,
    ) -> RestResult<bool> {
        self.put(
            &format!("/channels/{channel_id}/roles/{role_id}/permissions"),
            Some(change.to_body()),
        )
        .await
    }
}
