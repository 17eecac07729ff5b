//! Schedule (calendar event) models
//!
//! Timestamps travel as millisecond epoch strings.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::Member;

/// When members are reminded of a schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum RemindType {
    #[default]
    None = 0,
    AtStart = 1,
    FiveMinutesBefore = 2,
    FifteenMinutesBefore = 3,
    ThirtyMinutesBefore = 4,
    SixtyMinutesBefore = 5,
}

impl RemindType {
    #[must_use]
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::None),
            1 => Some(Self::AtStart),
            2 => Some(Self::FiveMinutesBefore),
            3 => Some(Self::FifteenMinutesBefore),
            4 => Some(Self::ThirtyMinutesBefore),
            5 => Some(Self::SixtyMinutesBefore),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }
}

impl Serialize for RemindType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.as_u8().to_string())
    }
}

impl<'de> Deserialize<'de> for RemindType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse::<u8>()
            .ok()
            .and_then(Self::from_u8)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid remind type: {raw}")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub start_timestamp: String,
    pub end_timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<Member>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jump_channel_id: Option<String>,
    #[serde(default)]
    pub remind_type: RemindType,
}

impl Schedule {
    /// New schedule spanning `[start, end)`
    pub fn new(name: impl Into<String>, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            id: None,
            name: name.into(),
            description: String::new(),
            start_timestamp: start.timestamp_millis().to_string(),
            end_timestamp: end.timestamp_millis().to_string(),
            creator: None,
            jump_channel_id: None,
            remind_type: RemindType::None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_jump_channel(mut self, channel_id: impl Into<String>) -> Self {
        self.jump_channel_id = Some(channel_id.into());
        self
    }

    pub fn with_remind(mut self, remind_type: RemindType) -> Self {
        self.remind_type = remind_type;
        self
    }

    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        parse_millis(&self.start_timestamp)
    }

    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        parse_millis(&self.end_timestamp)
    }

    /// Whether the end is strictly after the start
    pub fn is_valid_window(&self) -> bool {
        matches!((self.start_time(), self.end_time()), (Some(s), Some(e)) if e > s)
    }
}

fn parse_millis(raw: &str) -> Option<DateTime<Utc>> {
    raw.parse::<i64>()
        .ok()
        .and_then(|ms| Utc.timestamp_millis_opt(ms).single())
}
