//! Channel chat messages, with and without a tag block.

use crate::config::ParserConfig;
use crate::error::DecodeError;
use crate::fields::{self, Badges, Color, Privilege, Timestamp, UserType};
use crate::message::nom_parser::Line;

use super::{channel, expect_command, params, tagged, untagged, user_source, Shape};

/// A chat line as sent without the `tags` capability.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlainMessage {
    pub nick: String,
    pub user: String,
    pub host: String,
    /// Channel the message was sent to, including the `#`.
    pub target: String,
    pub text: String,
}

impl PlainMessage {
    /// Decode the identity, target and text shared by both chat shapes.
    fn decode_parts(line: &Line<'_>) -> Result<Self, DecodeError> {
        expect_command(line, Self::COMMAND)?;
        let (nick, user, host) = user_source(line)?;
        let [target, text] = params::<2>(line, Self::COMMAND)?;
        let target = channel(target, Self::COMMAND)?;
        if text.is_empty() {
            return Err(DecodeError::BadParams(Self::COMMAND));
        }

        Ok(PlainMessage {
            nick: nick.to_owned(),
            user: user.to_owned(),
            host: host.to_owned(),
            target: target.to_owned(),
            text: text.to_owned(),
        })
    }
}

impl Shape for PlainMessage {
    const COMMAND: &'static str = "PRIVMSG";

    fn decode(line: &Line<'_>, _config: &ParserConfig) -> Result<Self, DecodeError> {
        untagged(line)?;
        Self::decode_parts(line)
    }
}

/// A chat line carrying the full tag block.
///
/// The untagged identity and text live in [`PrivMsg::plain`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrivMsg {
    pub plain: PlainMessage,
    pub badges: Badges,
    /// Bits cheered with this message, 0 for a regular message.
    pub bits: u32,
    pub color: Option<Color>,
    pub display_name: String,
    pub emote_only: bool,
    /// Emote positions, kept as sent.
    pub emotes: String,
    pub id: String,
    pub moderator: bool,
    pub room_id: String,
    pub subscriber: bool,
    pub tmi_sent_ts: Timestamp,
    pub turbo: bool,
    pub user_id: String,
    pub user_type: UserType,
}

impl PrivMsg {
    pub fn is_cheer(&self) -> bool {
        self.bits > 0
    }

    /// Privilege of the sender, derived from their badges.
    pub fn privilege(&self) -> Privilege {
        self.badges.privilege()
    }
}

impl Shape for PrivMsg {
    const COMMAND: &'static str = "PRIVMSG";

    fn decode(line: &Line<'_>, config: &ParserConfig) -> Result<Self, DecodeError> {
        let tags = tagged(line)?;
        let plain = PlainMessage::decode_parts(line)?;

        Ok(PrivMsg {
            plain,
            badges: tags.field("badges", |raw| Badges::decode(raw, config))?,
            bits: tags.optional_field("bits", fields::number)?.unwrap_or(0),
            color: tags.field("color", Color::decode_optional)?,
            display_name: tags.string("display-name")?,
            emote_only: tags.optional_field("emote-only", fields::flag)?.unwrap_or(false),
            emotes: tags.string("emotes")?,
            id: tags.field("id", fields::non_empty)?.to_owned(),
            moderator: tags.field("mod", fields::flag)?,
            room_id: tags.field("room-id", fields::non_empty)?.to_owned(),
            subscriber: tags.field("subscriber", fields::flag)?,
            tmi_sent_ts: tags.field("tmi-sent-ts", |raw| {
                Timestamp::decode(raw, config.tmi_sent_ts_unit)
            })?,
            turbo: tags.field("turbo", fields::flag)?,
            user_id: tags.field("user-id", fields::non_empty)?.to_owned(),
            user_type: UserType::from_wire(tags.required("user-type")?),
        })
    }
}
