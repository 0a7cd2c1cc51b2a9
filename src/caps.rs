//! Chat capability negotiation.
//!
//! The service unlocks its extra message shapes through three capabilities
//! requested with a single `CAP REQ` line after connecting.
//!
//! # Reference
//! - <https://dev.twitch.tv/docs/irc/capabilities>

use std::fmt;

/// A service-specific IRC capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Capability {
    /// JOIN, PART, MODE and NAMES for other chatters.
    Membership,
    /// CLEARCHAT, HOSTTARGET, NOTICE, RECONNECT, ROOMSTATE, USERNOTICE,
    /// USERSTATE and GLOBALUSERSTATE.
    Commands,
    /// Tag blocks on PRIVMSG and the commands above.
    Tags,
}

impl Capability {
    /// Every capability, in the order they are usually requested.
    pub const ALL: [Capability; 3] = [Self::Tags, Self::Commands, Self::Membership];

    /// Wire name, e.g. `twitch.tv/tags`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Membership => "twitch.tv/membership",
            Self::Commands => "twitch.tv/commands",
            Self::Tags => "twitch.tv/tags",
        }
    }

    /// Parse a wire name.
    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "twitch.tv/membership" => Some(Self::Membership),
            "twitch.tv/commands" => Some(Self::Commands),
            "twitch.tv/tags" => Some(Self::Tags),
            _ => None,
        }
    }
}

impl AsRef<str> for Capability {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
