//! Parser and client configuration.
//!
//! [`ParserConfig`] holds the per-deployment choices the wire format leaves
//! open. [`ClientConfig`] describes one chat connection.

use std::time::Duration;

use crate::caps::Capability;
use crate::error::ConfigError;
use crate::fields::TimestampUnit;

/// Decoding choices fixed once per deployment.
///
/// The service has emitted `tmi-sent-ts` in different units over time and
/// has introduced badges after clients were written. Neither can be inferred
/// from a single line, so both are configured here instead of guessed.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParserConfig {
    /// Unit of every `tmi-sent-ts` tag.
    pub tmi_sent_ts_unit: TimestampUnit,
    /// Decode `premium` badges as [`Badge::Premium`](crate::fields::Badge::Premium)
    /// instead of folding them into `Badge::Unhandled`.
    pub recognize_premium_badge: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            tmi_sent_ts_unit: TimestampUnit::Seconds,
            recognize_premium_badge: true,
        }
    }
}

impl ParserConfig {
    /// Set the `tmi-sent-ts` unit.
    pub fn with_timestamp_unit(mut self, unit: TimestampUnit) -> Self {
        self.tmi_sent_ts_unit = unit;
        self
    }

    /// Choose whether `premium` is a known badge.
    pub fn with_premium_badge(mut self, recognize: bool) -> Self {
        self.recognize_premium_badge = recognize;
        self
    }
}

/// Default chat host.
pub const DEFAULT_SERVER: &str = "irc.chat.twitch.tv";
/// Default plaintext port.
pub const DEFAULT_PORT: u16 = 6667;
/// Default delay between two outbound lines (20 messages per 30 seconds,
/// rounded up).
pub const DEFAULT_WRITE_DELAY: Duration = Duration::from_millis(1500);

/// Settings for one chat connection.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClientConfig {
    /// Server host name.
    pub server: String,
    /// Server port.
    pub port: u16,
    /// Channel to join, including the leading `#`.
    pub channel: String,
    /// Login name. Lower-cased by [`validate`](Self::validate).
    pub nick: String,
    /// OAuth token, including the `oauth:` prefix.
    pub token: String,
    /// Minimum delay between two outbound lines.
    #[cfg_attr(feature = "serde", serde(default = "default_write_delay"))]
    pub write_delay: Duration,
    /// Capabilities requested after connecting.
    #[cfg_attr(feature = "serde", serde(default = "default_capabilities"))]
    pub capabilities: Vec<Capability>,
    /// Decoding choices for received lines.
    #[cfg_attr(feature = "serde", serde(default))]
    pub parser: ParserConfig,
}

#[cfg(feature = "serde")]
fn default_write_delay() -> Duration {
    DEFAULT_WRITE_DELAY
}

#[cfg(feature = "serde")]
fn default_capabilities() -> Vec<Capability> {
    Capability::ALL.to_vec()
}

impl ClientConfig {
    /// Create a configuration for the default server with every capability
    /// requested.
    pub fn new(channel: impl Into<String>, nick: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            server: DEFAULT_SERVER.to_string(),
            port: DEFAULT_PORT,
            channel: channel.into(),
            nick: nick.into(),
            token: token.into(),
            write_delay: DEFAULT_WRITE_DELAY,
            capabilities: Capability::ALL.to_vec(),
            parser: ParserConfig::default(),
        }
    }

    /// Check every setting and normalize the nick to lower case.
    pub fn validate(mut self) -> Result<Self, ConfigError> {
        for (name, value) in [
            ("server", &self.server),
            ("channel", &self.channel),
            ("nick", &self.nick),
            ("token", &self.token),
        ] {
            if value.is_empty() {
                return Err(ConfigError::Empty(name));
            }
        }

        if !self.channel.starts_with('#') {
            return Err(ConfigError::ChannelPrefix(self.channel));
        }
        if !self.token.starts_with("oauth:") {
            return Err(ConfigError::TokenPrefix);
        }

        self.nick = self.nick.to_ascii_lowercase();
        Ok(self)
    }

    /// `host:port` for connecting.
    pub fn address(&self) -> String {
        format!("{}:{}", self.server, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_parser_config() {
        let config = ParserConfig::default();
        assert_eq!(config.tmi_sent_ts_unit, TimestampUnit::Seconds);
        assert!(config.recognize_premium_badge);

        let config = config
            .with_timestamp_unit(TimestampUnit::Milliseconds)
            .with_premium_badge(false);
        assert_eq!(config.tmi_sent_ts_unit, TimestampUnit::Milliseconds);
        assert!(!config.recognize_premium_badge);
    }

    #[test]
    fn test_validate_lowercases_nick() {
        let config = ClientConfig::new("#dallas", "RonniBot", "oauth:abc")
            .validate()
            .unwrap();
        assert_eq!(config.nick, "ronnibot");
        assert_eq!(config.address(), "irc.chat.twitch.tv:6667");
    }

    #[test]
    fn test_validate_rejects_bad_settings() {
        assert_eq!(
            ClientConfig::new("dallas", "ronni", "oauth:abc").validate().unwrap_err(),
            ConfigError::ChannelPrefix("dallas".to_string())
        );
        assert_eq!(
            ClientConfig::new("#dallas", "ronni", "abc").validate().unwrap_err(),
            ConfigError::TokenPrefix
        );
        assert_eq!(
            ClientConfig::new("#dallas", "", "oauth:abc").validate().unwrap_err(),
            ConfigError::Empty("nick")
        );
    }
}
