//! Guild member models

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::User;

/// Parse the RFC 3339 `joined_at` timestamp carried by member payloads
fn parse_joined_at(raw: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(raw).ok()
}

/// A member of a guild
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nick: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub joined_at: String,
}

impl Member {
    /// Display name: nickname if set, otherwise the username
    pub fn display_name(&self) -> Option<&str> {
        self.nick
            .as_deref()
            .filter(|n| !n.is_empty())
            .or_else(|| self.user.as_ref().map(|u| u.username.as_str()))
    }

    pub fn has_role(&self, role_id: &str) -> bool {
        self.roles.iter().any(|r| r == role_id)
    }

    pub fn joined_at_time(&self) -> Option<DateTime<FixedOffset>> {
        parse_joined_at(&self.joined_at)
    }
}

/// Member payload of the `GUILD_MEMBER_*` gateway events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberWithGuildId {
    pub guild_id: String,
    pub user: User,
    #[serde(default)]
    pub nick: String,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub joined_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub op_user_id: Option<String>,
}

impl MemberWithGuildId {
    pub fn joined_at_time(&self) -> Option<DateTime<FixedOffset>> {
        parse_joined_at(&self.joined_at)
    }
}

impl From<MemberWithGuildId> for Member {
    fn from(m: MemberWithGuildId) -> Self {
        Self {
            user: Some(m.user),
            nick: Some(m.nick),
            roles: m.roles,
            joined_at: m.joined_at,
        }
    }
}
