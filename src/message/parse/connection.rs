//! Connection keepalive and lifecycle lines.

use crate::config::ParserConfig;
use crate::encode;
use crate::error::DecodeError;
use crate::message::nom_parser::Line;

use super::{expect_command, params, tmi_source, untagged, Shape};

/// `PING :<host>`; the server expects a matching `PONG`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ping {
    pub host: String,
}

impl Ping {
    /// The reply line owed to the server.
    pub fn pong(&self) -> String {
        encode::pong(&self.host)
    }
}

impl Shape for Ping {
    const COMMAND: &'static str = "PING";

    fn decode(line: &Line<'_>, _config: &ParserConfig) -> Result<Self, DecodeError> {
        expect_command(line, Self::COMMAND)?;
        untagged(line)?;
        if line.source.is_some() {
            return Err(DecodeError::BadSource(line.source.map(str::to_owned)));
        }
        let [host] = params::<1>(line, Self::COMMAND)?;
        if host.is_empty() {
            return Err(DecodeError::BadParams(Self::COMMAND));
        }
        Ok(Ping {
            host: host.to_owned(),
        })
    }
}

/// `RECONNECT`: the server is about to drop the connection and the client
/// should open a new session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reconnect;

impl Shape for Reconnect {
    const COMMAND: &'static str = "RECONNECT";

    fn decode(line: &Line<'_>, _config: &ParserConfig) -> Result<Self, DecodeError> {
        expect_command(line, Self::COMMAND)?;
        untagged(line)?;
        if line.source.is_some() {
            tmi_source(line)?;
        }
        params::<0>(line, Self::COMMAND)?;
        Ok(Reconnect)
    }
}
