//! State of the connected user, per channel and global.

use crate::config::ParserConfig;
use crate::error::DecodeError;
use crate::fields::{self, Badges, Color, UserType};
use crate::message::nom_parser::Line;
use crate::message::tags::Tags;

use super::{channel, expect_command, params, tagged, tmi_source, untagged, Shape};

/// The `badges` key is left out for some users; `badges=` is an empty set.
fn badges(tags: &Tags<'_>, config: &ParserConfig) -> Result<Option<Badges>, DecodeError> {
    tags.optional_field("badges", |raw| Badges::decode(raw, config))
}

/// `USERSTATE`: the connected user's state in one channel.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserState {
    pub channel: String,
    /// `None` when the line carried no `badges` key.
    pub badges: Option<Badges>,
    pub color: Option<Color>,
    pub display_name: String,
    /// Comma-separated emote set ids, kept as sent.
    pub emote_sets: String,
    pub moderator: bool,
    pub subscriber: bool,
    pub user_type: UserType,
}

impl Shape for UserState {
    const COMMAND: &'static str = "USERSTATE";

    fn decode(line: &Line<'_>, config: &ParserConfig) -> Result<Self, DecodeError> {
        expect_command(line, Self::COMMAND)?;
        let tags = tagged(line)?;
        tmi_source(line)?;
        let [chan] = params::<1>(line, Self::COMMAND)?;

        Ok(UserState {
            channel: channel(chan, Self::COMMAND)?.to_owned(),
            badges: badges(&tags, config)?,
            color: tags.field("color", Color::decode_optional)?,
            display_name: tags.string("display-name")?,
            emote_sets: tags.string("emote-sets")?,
            moderator: tags.field("mod", fields::flag)?,
            subscriber: tags.field("subscriber", fields::flag)?,
            user_type: UserType::from_wire(tags.required("user-type")?),
        })
    }
}

/// `USERSTATE` sent without the `tags` capability; only the channel is known.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlainUserState {
    pub channel: String,
}

impl Shape for PlainUserState {
    const COMMAND: &'static str = "USERSTATE";

    fn decode(line: &Line<'_>, _config: &ParserConfig) -> Result<Self, DecodeError> {
        expect_command(line, Self::COMMAND)?;
        untagged(line)?;
        tmi_source(line)?;
        let [chan] = params::<1>(line, Self::COMMAND)?;

        Ok(PlainUserState {
            channel: channel(chan, Self::COMMAND)?.to_owned(),
        })
    }
}

/// `GLOBALUSERSTATE`: the connected user's state after login.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GlobalUserState {
    pub badges: Option<Badges>,
    pub color: Option<Color>,
    pub display_name: String,
    pub emote_sets: String,
    /// `None` when the line carried no `turbo` key.
    pub turbo: Option<bool>,
    pub user_id: String,
    pub user_type: UserType,
}

impl Shape for GlobalUserState {
    const COMMAND: &'static str = "GLOBALUSERSTATE";

    fn decode(line: &Line<'_>, config: &ParserConfig) -> Result<Self, DecodeError> {
        expect_command(line, Self::COMMAND)?;
        let tags = tagged(line)?;
        tmi_source(line)?;
        params::<0>(line, Self::COMMAND)?;

        Ok(GlobalUserState {
            badges: badges(&tags, config)?,
            color: tags.field("color", Color::decode_optional)?,
            display_name: tags.string("display-name")?,
            emote_sets: tags.string("emote-sets")?,
            turbo: tags.optional_field("turbo", fields::flag)?,
            user_id: tags.field("user-id", fields::non_empty)?.to_owned(),
            user_type: UserType::from_wire(tags.required("user-type")?),
        })
    }
}
