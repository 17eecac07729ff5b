//! Gateway intents bitflags
//!
//! Declares which event categories the bot wishes to receive over the gateway.

use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::error::{ModelError, ModelResult};

bitflags! {
    /// Gateway intent flags
    ///
    /// Sent verbatim as an integer in the Identify payload.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Intents: u32 {
        /// Guild create/update/delete, channel create/update/delete
        const GUILDS                  = 1 << 0;
        /// Guild member add/update/remove
        const GUILD_MEMBERS           = 1 << 1;
        /// Message reaction add/remove
        const GUILD_MESSAGE_REACTIONS = 1 << 10;
        /// Direct message create
        const DIRECT_MESSAGE          = 1 << 12;
        /// Message audit pass/reject
        const MESSAGE_AUDIT           = 1 << 27;
        /// Forum thread/post/reply events
        const FORUM_EVENT             = 1 << 28;
        /// Audio start/finish/on-mic/off-mic
        const AUDIO_ACTION            = 1 << 29;
        /// Messages that @-mention the bot
        const AT_MESSAGES             = 1 << 30;
    }
}

impl Intents {
    /// Intent names accepted by [`Intents::from_names`], paired with their flag
    pub const NAMES: &'static [(&'static str, Intents)] = &[
        ("guilds", Self::GUILDS),
        ("guild_members", Self::GUILD_MEMBERS),
        ("guild_message_reactions", Self::GUILD_MESSAGE_REACTIONS),
        ("direct_message", Self::DIRECT_MESSAGE),
        ("message_audit", Self::MESSAGE_AUDIT),
        ("forum_event", Self::FORUM_EVENT),
        ("audio_action", Self::AUDIO_ACTION),
        ("at_messages", Self::AT_MESSAGES),
    ];

    /// Look up a single intent by its snake_case name
    pub fn parse_name(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();
        Self::NAMES
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, flag)| *flag)
    }

    /// Parse a comma-separated list of intent names (e.g. `"guilds,at_messages"`)
    ///
    /// Empty segments are ignored, so an empty string yields no intents.
    pub fn from_names(list: &str) -> ModelResult<Self> {
        list.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .try_fold(Self::empty(), |acc, name| {
                Self::parse_name(name)
                    .map(|flag| acc | flag)
                    .ok_or_else(|| ModelError::UnknownIntent(name.to_string()))
            })
    }

    /// Get the names of all intents that are set
    pub fn names(&self) -> Vec<&'static str> {
        Self::NAMES
            .iter()
            .filter(|(_, flag)| self.contains(*flag))
            .map(|(name, _)| *name)
            .collect()
    }
}

impl Default for Intents {
    /// Guild, member, audio and @-message events
    fn default() -> Self {
        Self::GUILDS | Self::GUILD_MEMBERS | Self::AUDIO_ACTION | Self::AT_MESSAGES
    }
}

impl fmt::Display for Intents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bits())
    }
}

impl Serialize for Intents {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u32(self.bits())
    }
}

impl<'de> Deserialize<'de> for Intents {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bits = u32::deserialize(deserializer)?;
        Ok(Self::from_bits_truncate(bits))
    }
}

impl From<Intents> for u32 {
    fn from(intents: Intents) -> Self {
        intents.bits()
    }
}
