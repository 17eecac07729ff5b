//! Guild role endpoints

use guild_core::{
    CreatedRole, DefaultRole, ModelError, ModelResult, RoleFilter, RoleInfo, RoleList, UpdatedRole,
};
use serde_json::{json, Value};

use crate::client::{decode, RestClient};
use crate::error::RestResult;

/// Body for role membership changes; the channel-admin role needs a channel
fn role_member_body(role_id: &str, channel_id: Option<&str>) -> ModelResult<Option<Value>> {
    match (DefaultRole::from_role_id(role_id), channel_id) {
        (Some(DefaultRole::ChannelAdmin), None) => Err(ModelError::ChannelRequired {
            role_id: role_id.to_string(),
        }),
        (_, Some(channel_id)) => Ok(Some(json!({ "channel": { "id": channel_id } }))),
        (_, None) => Ok(None),
    }
}

fn role_body(info: &RoleInfo) -> Value {
    json!({
        "filter": RoleFilter::for_info(info),
        "info": info,
    })
}

impl RestClient {
    /// `GET /guilds/{guild_id}/roles`
    pub async fn roles(&self, guild_id: &str) -> RestResult<RoleList> {
        let endpoint = format!("/guilds/{guild_id}/roles");
        decode(&endpoint, self.get(&endpoint, &[]).await?)
    }

    /// `POST /guilds/{guild_id}/roles`
    pub async fn create_role(&self, guild_id: &str, info: &RoleInfo) -> RestResult<CreatedRole> {
        let endpoint = format!("/guilds/{guild_id}/roles");
        decode(&endpoint, self.post(&endpoint, &role_body(info)).await?)
    }

    /// `PATCH /guilds/{guild_id}/roles/{role_id}`
    pub async fn update_role(
        &self,
        guild_id: &str,
        role_id: &str,
        info: &RoleInfo,
    ) -> RestResult<UpdatedRole> {
        let endpoint = format!("/guilds/{guild_id}/roles/{role_id}");
        decode(&endpoint, self.patch(&endpoint, &role_body(info)).await?)
    }

    /// `DELETE /guilds/{guild_id}/roles/{role_id}`
    pub async fn delete_role(&self, guild_id: &str, role_id: &str) -> RestResult<bool> {
        self.delete(&format!("/guilds/{guild_id}/roles/{role_id}"), None)
            .await
    }

    /// `PUT /guilds/{guild_id}/members/{user_id}/roles/{role_id}`
    ///
    /// `channel_id` is required for the channel-admin role (`5`).
    pub async fn add_role_member(
        &self,
        guild_id: &str,
        user_id: &str,
        role_id: &str,
        channel_id: Option<&str>,
    ) -> RestResult<bool> {
        let body = role_member_body(role_id, channel_id)?;
        self.put(&format!("/guilds/{guild_id}/members/{user_id}/roles/{role_id}"), body)
            .await
    }

    /// `DELETE /guilds/{guild_id}/members/{user_id}/roles/{role_id}`
    pub async fn remove_role_member(
        &self,
        guild_id: &str,
        user_id: &str,
        role_id: &str,
        channel_id: Option<&str>,
    ) -> RestResult<bool> {
        let body = role_member_body(role_id, channel_id)?;
        self.delete(&format!("/guilds/{guild_id}/members/{user_id}/roles/{role_id}"), body)
            .await
    }
}
