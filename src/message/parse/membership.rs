//! Membership events, sent with the `membership` capability.

use crate::config::ParserConfig;
use crate::error::DecodeError;
use crate::fields::{self, END_OF_NAMES};
use crate::message::nom_parser::Line;
use crate::prefix::{Source, JTV, TMI_HOST};

use super::{channel, expect_command, params, server_source, source, untagged, user_source, Shape};

/// Membership lines come from `<nick>!<nick>@<nick>.tmi.twitch.tv`.
fn member<'a>(line: &Line<'a>) -> Result<&'a str, DecodeError> {
    let (nick, _, host) = user_source(line)?;
    match host.strip_suffix(TMI_HOST) {
        Some(sub) if sub.len() > 1 && sub.ends_with('.') => Ok(nick),
        _ => Err(DecodeError::BadSource(line.source.map(str::to_owned))),
    }
}

fn membership<'a>(line: &Line<'a>, command: &'static str) -> Result<(&'a str, &'a str), DecodeError> {
    expect_command(line, command)?;
    untagged(line)?;
    let user = member(line)?;
    let [chan] = params::<1>(line, command)?;
    Ok((user, channel(chan, command)?))
}

/// A chatter joined a channel.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Join {
    pub user: String,
    pub channel: String,
}

impl Shape for Join {
    const COMMAND: &'static str = "JOIN";

    fn decode(line: &Line<'_>, _config: &ParserConfig) -> Result<Self, DecodeError> {
        let (user, channel) = membership(line, Self::COMMAND)?;
        Ok(Join {
            user: user.to_owned(),
            channel: channel.to_owned(),
        })
    }
}

/// A chatter left a channel.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Part {
    pub user: String,
    pub channel: String,
}

impl Shape for Part {
    const COMMAND: &'static str = "PART";

    fn decode(line: &Line<'_>, _config: &ParserConfig) -> Result<Self, DecodeError> {
        let (user, channel) = membership(line, Self::COMMAND)?;
        Ok(Part {
            user: user.to_owned(),
            channel: channel.to_owned(),
        })
    }
}

/// A chatter gained or lost operator status: `:jtv MODE #chan +o user`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModeChange {
    pub channel: String,
    /// `true` for `+o`, `false` for `-o`.
    pub gained: bool,
    pub user: String,
}

impl Shape for ModeChange {
    const COMMAND: &'static str = "MODE";

    fn decode(line: &Line<'_>, _config: &ParserConfig) -> Result<Self, DecodeError> {
        expect_command(line, Self::COMMAND)?;
        untagged(line)?;
        server_source(line, JTV)?;
        let [chan, mode, user] = params::<3>(line, Self::COMMAND)?;
        let gained = match mode {
            "+o" => true,
            "-o" => false,
            _ => return Err(DecodeError::BadParams(Self::COMMAND)),
        };
        if user.is_empty() {
            return Err(DecodeError::BadParams(Self::COMMAND));
        }

        Ok(ModeChange {
            channel: channel(chan, Self::COMMAND)?.to_owned(),
            gained,
            user: user.to_owned(),
        })
    }
}

/// Which NAMES reply a [`Names`] came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NamesKind {
    /// `353`, one page of the listing.
    List,
    /// `366`, the end of the listing.
    End,
}

impl NamesKind {
    pub fn numeric(&self) -> &'static str {
        match self {
            NamesKind::List => "353",
            NamesKind::End => "366",
        }
    }
}

/// A page of the channel member listing, or its terminator.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Names {
    /// The connected user the listing is addressed to.
    pub user: String,
    pub kind: NamesKind,
    pub channel: String,
    /// Member names in wire order; empty for the end-of-list reply.
    pub names: Vec<String>,
}

impl Names {
    pub fn is_end_of_list(&self) -> bool {
        self.kind == NamesKind::End
    }
}

impl Shape for Names {
    const COMMAND: &'static str = "353";

    fn decode(line: &Line<'_>, _config: &ParserConfig) -> Result<Self, DecodeError> {
        let kind = match line.command {
            "353" => NamesKind::List,
            "366" => NamesKind::End,
            got => {
                return Err(DecodeError::WrongCommand {
                    expected: Self::COMMAND,
                    got: got.to_owned(),
                })
            }
        };
        untagged(line)?;

        let user = match source(line)? {
            Source::Server(host) => host
                .strip_suffix(TMI_HOST)
                .and_then(|user| user.strip_suffix('.'))
                .filter(|user| !user.is_empty()),
            Source::User { .. } => None,
        }
        .ok_or_else(|| DecodeError::BadSource(line.source.map(str::to_owned)))?;

        let (chan, names) = match kind {
            NamesKind::List => {
                let [_, "=", chan, list] = params::<4>(line, "353")? else {
                    return Err(DecodeError::BadParams("353"));
                };
                (chan, fields::names(list))
            }
            NamesKind::End => {
                let [_, chan, END_OF_NAMES] = params::<3>(line, "366")? else {
                    return Err(DecodeError::BadParams("366"));
                };
                (chan, Vec::new())
            }
        };

        Ok(Names {
            user: user.to_owned(),
            kind,
            channel: channel(chan, kind.numeric())?.to_owned(),
            names,
        })
    }
}
