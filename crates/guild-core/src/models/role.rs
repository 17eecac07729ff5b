//! Guild role models

use serde::{Deserialize, Serialize};

/// Built-in guild roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DefaultRole {
    /// Every member
    All = 1,
    /// Guild owner
    GuildOwner = 2,
    /// Administrator
    Admin = 4,
    /// Channel administrator (scoped to one channel)
    ChannelAdmin = 5,
}

impl DefaultRole {
    #[must_use]
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::All),
            2 => Some(Self::GuildOwner),
            4 => Some(Self::Admin),
            5 => Some(Self::ChannelAdmin),
            _ => None,
        }
    }

    /// Look up a built-in role by its role id string
    #[must_use]
    pub fn from_role_id(role_id: &str) -> Option<Self> {
        role_id.parse::<u8>().ok().and_then(Self::from_u8)
    }

    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Role id string used in request paths
    #[must_use]
    pub fn role_id(self) -> String {
        self.as_u8().to_string()
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::GuildOwner => "GuildOwner",
            Self::Admin => "Admin",
            Self::ChannelAdmin => "ChannelAdmin",
        }
    }
}

impl std::fmt::Display for DefaultRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name(), self.as_u8())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: String,
    pub name: String,
    /// ARGB color
    #[serde(default)]
    pub color: u32,
    /// 1 when shown separately in the member list
    #[serde(default)]
    pub hoist: u8,
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub member_limit: u32,
}

impl Role {
    #[inline]
    pub fn is_hoisted(&self) -> bool {
        self.hoist == 1
    }
}

/// Response of `GET /guilds/{guild_id}/roles`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleList {
    pub guild_id: String,
    #[serde(default)]
    pub roles: Vec<Role>,
    #[serde(default)]
    pub role_num_limit: String,
}

/// Which `RoleInfo` fields a create/update applies (1 = apply)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleFilter {
    pub name: u8,
    pub color: u8,
    pub hoist: u8,
}

impl RoleFilter {
    /// Filter selecting every field that is set on `info`
    pub fn for_info(info: &RoleInfo) -> Self {
        Self {
            name: u8::from(info.name.is_some()),
            color: u8::from(info.color.is_some()),
            hoist: u8::from(info.hoist.is_some()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hoist: Option<u8>,
}

impl RoleInfo {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_color(mut self, color: u32) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_hoist(mut self, hoist: bool) -> Self {
        self.hoist = Some(u8::from(hoist));
        self
    }
}

/// Response of `POST /guilds/{guild_id}/roles`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedRole {
    pub role_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

/// Response of `PATCH /guilds/{guild_id}/roles/{role_id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatedRole {
    pub guild_id: String,
    pub role_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}
