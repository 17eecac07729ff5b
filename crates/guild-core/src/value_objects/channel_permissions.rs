//! Channel permission bitflags
//!
//! The platform transports channel permissions as decimal strings.

use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// Per-channel permission flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ChannelPermissionFlags: u64 {
        /// View the channel
        const VIEW  = 1 << 0;
        /// Manage the channel
        const MANAGE = 1 << 1;
        /// Speak in the channel
        const SPEAK = 1 << 2;
        /// Start a live stream
        const LIVE  = 1 << 3;
    }
}

impl ChannelPermissionFlags {
    /// Parse from the decimal string form used on the wire
    pub fn parse(s: &str) -> Result<Self, std::num::ParseIntError> {
        s.trim().parse::<u64>().map(Self::from_bits_truncate)
    }

    /// Decimal string form used on the wire
    pub fn to_wire(self) -> String {
        self.bits().to_string()
    }
}

impl Default for ChannelPermissionFlags {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for ChannelPermissionFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bits())
    }
}
