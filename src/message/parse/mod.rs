//! One decoder per message shape.
//!
//! Every shape checks the structural parts of a lexed [`Line`] first
//! (command, tag block presence, source, parameter layout) and only then
//! decodes fields. Structural mismatches come back as "no match" errors;
//! field failures as [`DecodeError::MissingTag`] or [`DecodeError::Field`].

mod chat;
mod connection;
mod membership;
mod room;
mod user;
mod usernotice;

pub use self::chat::{PlainMessage, PrivMsg};
pub use self::connection::{Ping, Reconnect};
pub use self::membership::{Join, ModeChange, Names, NamesKind, Part};
pub use self::room::{
    ClearChat, ClearKind, HostTarget, Notice, PlainClearChat, PlainRoomState, RoomSettings,
    RoomState,
};
pub use self::user::{GlobalUserState, PlainUserState, UserState};
pub use self::usernotice::{
    PlainUserNotice, Raid, Recipient, Ritual, Sub, SubGift, UserNotice, UserNoticePayload,
};

use crate::config::ParserConfig;
use crate::error::DecodeError;
use crate::message::nom_parser::Line;
use crate::message::tags::Tags;
use crate::prefix::{Source, TMI_HOST};

/// A message shape that can be recognized and decoded from a lexed line.
pub trait Shape: Sized {
    /// Wire command this shape matches.
    const COMMAND: &'static str;

    /// Decode `line` as this shape.
    fn decode(line: &Line<'_>, config: &ParserConfig) -> Result<Self, DecodeError>;

    /// Lex and decode `raw` with the default [`ParserConfig`].
    fn parse(raw: &str) -> Option<Self> {
        Self::parse_with(raw, &ParserConfig::default())
    }

    /// Lex and decode `raw`, returning `None` on any failure.
    fn parse_with(raw: &str, config: &ParserConfig) -> Option<Self> {
        let line = Line::lex(raw)?;
        Self::decode(&line, config).ok()
    }
}

pub(crate) fn expect_command(line: &Line<'_>, expected: &'static str) -> Result<(), DecodeError> {
    if line.command == expected {
        Ok(())
    } else {
        Err(DecodeError::WrongCommand {
            expected,
            got: line.command.to_owned(),
        })
    }
}

/// Reject a line carrying a tag block.
pub(crate) fn untagged(line: &Line<'_>) -> Result<(), DecodeError> {
    match line.tags {
        None => Ok(()),
        Some(_) => Err(DecodeError::UnexpectedTags),
    }
}

/// Require and parse the tag block.
pub(crate) fn tagged<'a>(line: &Line<'a>) -> Result<Tags<'a>, DecodeError> {
    let raw = line.tags.ok_or(DecodeError::MissingTags)?;
    Tags::parse(raw).ok_or(DecodeError::Malformed)
}

pub(crate) fn source<'a>(line: &Line<'a>) -> Result<Source<'a>, DecodeError> {
    line.source
        .and_then(Source::parse)
        .ok_or_else(|| DecodeError::BadSource(line.source.map(str::to_owned)))
}

/// Require the source to be the named server.
pub(crate) fn server_source(line: &Line<'_>, name: &str) -> Result<(), DecodeError> {
    match source(line)? {
        src if src.is_server(name) => Ok(()),
        _ => Err(DecodeError::BadSource(line.source.map(str::to_owned))),
    }
}

pub(crate) fn tmi_source(line: &Line<'_>) -> Result<(), DecodeError> {
    server_source(line, TMI_HOST)
}

/// Require a `nick!user@host` source.
pub(crate) fn user_source<'a>(line: &Line<'a>) -> Result<(&'a str, &'a str, &'a str), DecodeError> {
    match source(line)? {
        Source::User { nick, user, host } => Ok((nick, user, host)),
        Source::Server(_) => Err(DecodeError::BadSource(line.source.map(str::to_owned))),
    }
}

/// Parameters as a fixed-size array, or [`DecodeError::BadParams`].
pub(crate) fn params<'a, const N: usize>(
    line: &Line<'a>,
    shape: &'static str,
) -> Result<[&'a str; N], DecodeError> {
    <[&'a str; N]>::try_from(line.params.as_slice()).map_err(|_| DecodeError::BadParams(shape))
}

/// Require a `#channel` parameter.
pub(crate) fn channel<'a>(raw: &'a str, shape: &'static str) -> Result<&'a str, DecodeError> {
    if raw.len() > 1 && raw.starts_with('#') {
        Ok(raw)
    } else {
        Err(DecodeError::BadParams(shape))
    }
}
