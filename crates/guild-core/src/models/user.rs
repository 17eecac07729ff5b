//! User model

use serde::{Deserialize, Serialize};

/// A platform user (or bot)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bot: Option<bool>,
    /// Cross-app identifier for bots bound to an open platform account
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub union_openid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub union_user_account: Option<String>,
}

impl User {
    /// Message markup that @-mentions this user
    #[must_use]
    pub fn mention(&self) -> String {
        format!("<@{}>", self.id)
    }

    #[inline]
    pub fn is_bot(&self) -> bool {
        self.bot.unwrap_or(false)
    }
}
