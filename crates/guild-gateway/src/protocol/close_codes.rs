//! WebSocket close codes
//!
//! Close codes the platform sends when it ends a gateway connection.

/// Close codes at or above this value signal a platform-side internal error
pub const INTERNAL_ERROR_MIN: i64 = 4900;

/// Gateway WebSocket close codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum CloseCode {
    /// Invalid opcode sent
    InvalidOpcode = 4001,
    /// Invalid payload
    InvalidPayload = 4002,
    /// Invalid session id on Resume
    InvalidSessionId = 4006,
    /// Invalid sequence number on Resume
    InvalidSequence = 4007,
    /// Frames sent too quickly
    RateLimited = 4008,
    /// Session has timed out
    SessionTimeout = 4009,
    /// Invalid shard configuration
    InvalidShard = 4010,
    /// Too many guilds for one connection
    ShardingRequired = 4011,
    /// Invalid gateway version
    InvalidVersion = 4012,
    /// Invalid intent value
    InvalidIntent = 4013,
    /// Intent not granted to this bot
    DisallowedIntent = 4014,
}

impl CloseCode {
    /// Create a `CloseCode` from a raw u16 value
    #[must_use]
    pub fn from_u16(value: u16) -> Option<Self> {
        match value {
            4001 => Some(Self::InvalidOpcode),
            4002 => Some(Self::InvalidPayload),
            4006 => Some(Self::InvalidSessionId),
            4007 => Some(Self::InvalidSequence),
            4008 => Some(Self::RateLimited),
            4009 => Some(Self::SessionTimeout),
            4010 => Some(Self::InvalidShard),
            4011 => Some(Self::ShardingRequired),
            4012 => Some(Self::InvalidVersion),
            4013 => Some(Self::InvalidIntent),
            4014 => Some(Self::DisallowedIntent),
            _ => None,
        }
    }

    /// Get the raw u16 value
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self as u16
    }

    /// Whether a raw close code lets the client reconnect and resume
    ///
    /// Only session timeouts and platform internal errors qualify; every other
    /// code, including a normal `1000` close or a negative value, ends the
    /// session. Raw codes arrive as arbitrary JSON integers, hence `i64`.
    #[must_use]
    pub fn is_resumable(code: i64) -> bool {
        code == i64::from(Self::SessionTimeout.as_u16()) || code >= INTERNAL_ERROR_MIN
    }

    /// Get the description for this close code
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidOpcode => "Invalid opcode",
            Self::InvalidPayload => "Invalid payload",
            Self::InvalidSessionId => "Invalid session id",
            Self::InvalidSequence => "Invalid sequence number",
            Self::RateLimited => "Sending too fast",
            Self::SessionTimeout => "Session timed out",
            Self::InvalidShard => "Invalid shard",
            Self::ShardingRequired => "Too many guilds, sharding required",
            Self::InvalidVersion => "Invalid version",
            Self::InvalidIntent => "Invalid intent",
            Self::DisallowedIntent => "Intent not permitted",
        }
    }

    /// Get the name of this close code
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::InvalidOpcode => "InvalidOpcode",
            Self::InvalidPayload => "InvalidPayload",
            Self::InvalidSessionId => "InvalidSessionId",
            Self::InvalidSequence => "InvalidSequence",
            Self::RateLimited => "RateLimited",
            Self::SessionTimeout => "SessionTimeout",
            Self::InvalidShard => "InvalidShard",
            Self::ShardingRequired => "ShardingRequired",
            Self::InvalidVersion => "InvalidVersion",
            Self::InvalidIntent => "InvalidIntent",
            Self::DisallowedIntent => "DisallowedIntent",
        }
    }

    /// Human-readable description of any raw close code
    #[must_use]
    pub fn describe(code: i64) -> String {
        match u16::try_from(code).ok().and_then(Self::from_u16) {
            Some(known) => known.to_string(),
            None if code >= INTERNAL_ERROR_MIN => format!("InternalError ({code})"),
            None => format!("Unknown ({code})"),
        }
    }
}

impl std::fmt::Display for CloseCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}): {}", self.name(), self.as_u16(), self.description())
    }
}

impl From<CloseCode> for u16 {
    fn from(code: CloseCode) -> Self {
        code.as_u16()
    }
}
