//! Audio channel models

use serde::{Deserialize, Serialize};

/// Playback state requested by an [`AudioControl`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum AudioStatus {
    Start = 0,
    Pause = 1,
    Resume = 2,
    Stop = 3,
}

impl AudioStatus {
    #[must_use]
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Start),
            1 => Some(Self::Pause),
            2 => Some(Self::Resume),
            3 => Some(Self::Stop),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

impl Serialize for AudioStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u8(self.as_u8())
    }
}

impl<'de> Deserialize<'de> for AudioStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = u8::deserialize(deserializer)?;
        Self::from_u8(value)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid audio status: {value}")))
    }
}

/// Payload of the `AUDIO_*` gateway events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioAction {
    pub guild_id: String,
    pub channel_id: String,
    #[serde(default)]
    pub audio_url: String,
    #[serde(default)]
    pub text: String,
}

/// Playback control for an audio channel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioControl {
    #[serde(default)]
    pub audio_url: String,
    #[serde(default)]
    pub text: String,
    pub status: AudioStatus,
}
