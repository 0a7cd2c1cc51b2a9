//! `USERNOTICE` and its event payloads.
//!
//! The outer message decodes the same way for every event. The payload is
//! picked from `msg-id` and the matching `msg-param-*` keys; a payload that
//! is unknown or incomplete becomes [`UserNoticePayload::Unrecognized`]
//! without failing the outer message.

use crate::config::ParserConfig;
use crate::error::DecodeError;
use crate::fields::{self, Badges, Color, Privilege, Timestamp, UserType};
use crate::message::nom_parser::Line;
use crate::message::tags::Tags;

use super::{channel, expect_command, tagged, tmi_source, untagged, Shape};

/// A subscription or resubscription.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sub {
    pub months: u32,
    /// Plan id: `Prime`, `1000`, `2000` or `3000`.
    pub plan: String,
    pub plan_name: String,
}

/// The user receiving a gifted subscription.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Recipient {
    pub display_name: String,
    pub id: String,
    pub login: String,
}

/// A subscription gifted to another user.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubGift {
    pub months: u32,
    pub recipient: Recipient,
    pub plan: String,
    pub plan_name: String,
}

/// Another channel raided this one.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Raid {
    pub display_name: String,
    pub login: String,
    pub viewer_count: u32,
}

/// A channel ritual, such as a new chatter's first message.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ritual {
    /// `msg-param-ritual-name`, when the line names the ritual.
    pub name: Option<String>,
}

/// The event a [`UserNotice`] announces.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UserNoticePayload {
    Sub(Sub),
    SubGift(SubGift),
    Raid(Raid),
    Ritual(Ritual),
    /// The `msg-id` of an event without a decoder, or whose parameters
    /// were incomplete.
    Unrecognized(String),
}

fn param<'a>(tags: &Tags<'a>, key: &str) -> Option<&'a str> {
    tags.get(key).filter(|value| !value.is_empty())
}

fn count(tags: &Tags<'_>, key: &str) -> Option<u32> {
    param(tags, key).and_then(|raw| fields::number(raw).ok())
}

impl Sub {
    fn from_tags(msg_id: &str, tags: &Tags<'_>) -> Option<Self> {
        if !matches!(msg_id, "sub" | "resub") {
            return None;
        }
        Some(Sub {
            months: count(tags, "msg-param-months")?,
            plan: param(tags, "msg-param-sub-plan")?.to_owned(),
            plan_name: fields::unescape(tags.get("msg-param-sub-plan-name")?),
        })
    }
}

impl SubGift {
    fn from_tags(msg_id: &str, tags: &Tags<'_>) -> Option<Self> {
        if msg_id != "subgift" {
            return None;
        }
        let login = param(tags, "msg-param-recipient-user-name")
            .or_else(|| param(tags, "msg-param-recipient-name"))?;

        Some(SubGift {
            months: count(tags, "msg-param-months")?,
            recipient: Recipient {
                display_name: tags.get("msg-param-recipient-display-name")?.to_owned(),
                id: param(tags, "msg-param-recipient-id")?.to_owned(),
                login: login.to_owned(),
            },
            plan: param(tags, "msg-param-sub-plan")?.to_owned(),
            plan_name: fields::unescape(tags.get("msg-param-sub-plan-name")?),
        })
    }
}

impl Raid {
    fn from_tags(msg_id: &str, tags: &Tags<'_>) -> Option<Self> {
        if msg_id != "raid" {
            return None;
        }
        Some(Raid {
            display_name: fields::unescape(tags.get("msg-param-displayName")?),
            login: param(tags, "msg-param-login")?.to_owned(),
            viewer_count: count(tags, "msg-param-viewerCount")?,
        })
    }
}

impl Ritual {
    fn from_tags(msg_id: &str, tags: &Tags<'_>) -> Option<Self> {
        if msg_id != "ritual" {
            return None;
        }
        Some(Ritual {
            name: param(tags, "msg-param-ritual-name").map(str::to_owned),
        })
    }
}

impl UserNoticePayload {
    /// Pick the payload for `msg_id`, trying each event in turn.
    pub(crate) fn from_tags(msg_id: &str, tags: &Tags<'_>) -> Self {
        Sub::from_tags(msg_id, tags)
            .map(UserNoticePayload::Sub)
            .or_else(|| SubGift::from_tags(msg_id, tags).map(UserNoticePayload::SubGift))
            .or_else(|| Raid::from_tags(msg_id, tags).map(UserNoticePayload::Raid))
            .or_else(|| Ritual::from_tags(msg_id, tags).map(UserNoticePayload::Ritual))
            .unwrap_or_else(|| UserNoticePayload::Unrecognized(msg_id.to_owned()))
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, UserNoticePayload::Unrecognized(_))
    }
}

/// `USERNOTICE`: a subscription, gift, raid or ritual announced in a
/// channel, optionally with a message from the user.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserNotice {
    pub channel: String,
    /// Text the user attached, if any.
    pub message: Option<String>,
    /// The server's description of the event, unescaped.
    pub system_msg: String,
    pub badges: Badges,
    pub color: Option<Color>,
    pub display_name: String,
    pub emotes: String,
    pub id: String,
    pub login: String,
    pub moderator: bool,
    pub msg_id: String,
    pub room_id: String,
    pub subscriber: bool,
    pub tmi_sent_ts: Timestamp,
    pub turbo: bool,
    pub user_id: String,
    pub user_type: UserType,
    pub payload: UserNoticePayload,
}

impl UserNotice {
    pub fn privilege(&self) -> Privilege {
        self.badges.privilege()
    }
}

/// Channel and optional user text of a `USERNOTICE`.
fn notice_params<'a>(line: &Line<'a>) -> Result<(&'a str, Option<&'a str>), DecodeError> {
    let (chan, message) = match line.params.as_slice() {
        [chan] => (*chan, None),
        [chan, message] => (*chan, Some(*message)),
        _ => return Err(DecodeError::BadParams(UserNotice::COMMAND)),
    };
    Ok((channel(chan, UserNotice::COMMAND)?, message))
}

impl Shape for UserNotice {
    const COMMAND: &'static str = "USERNOTICE";

    fn decode(line: &Line<'_>, config: &ParserConfig) -> Result<Self, DecodeError> {
        expect_command(line, Self::COMMAND)?;
        let tags = tagged(line)?;
        tmi_source(line)?;

        let (chan, message) = notice_params(line)?;
        let msg_id = tags.field("msg-id", fields::non_empty)?;

        Ok(UserNotice {
            channel: chan.to_owned(),
            message: message.map(str::to_owned),
            system_msg: fields::unescape(tags.required("system-msg")?),
            badges: tags.field("badges", |raw| Badges::decode(raw, config))?,
            color: tags.field("color", Color::decode_optional)?,
            display_name: tags.string("display-name")?,
            emotes: tags.string("emotes")?,
            id: tags.field("id", fields::non_empty)?.to_owned(),
            login: tags.field("login", fields::non_empty)?.to_owned(),
            moderator: tags.field("mod", fields::flag)?,
            msg_id: msg_id.to_owned(),
            room_id: tags.field("room-id", fields::non_empty)?.to_owned(),
            subscriber: tags.field("subscriber", fields::flag)?,
            tmi_sent_ts: tags.field("tmi-sent-ts", |raw| {
                Timestamp::decode(raw, config.tmi_sent_ts_unit)
            })?,
            turbo: tags.field("turbo", fields::flag)?,
            user_id: tags.field("user-id", fields::non_empty)?.to_owned(),
            user_type: UserType::from_wire(tags.required("user-type")?),
            payload: UserNoticePayload::from_tags(msg_id, &tags),
        })
    }
}

/// `USERNOTICE` sent without the `tags` capability.
///
/// Without tags the event itself is unknown; only the channel and any text
/// the user attached remain.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlainUserNotice {
    pub channel: String,
    pub message: Option<String>,
}

impl Shape for PlainUserNotice {
    const COMMAND: &'static str = "USERNOTICE";

    fn decode(line: &Line<'_>, _config: &ParserConfig) -> Result<Self, DecodeError> {
        expect_command(line, Self::COMMAND)?;
        untagged(line)?;
        tmi_source(line)?;
        let (chan, message) = notice_params(line)?;

        Ok(PlainUserNotice {
            channel: chan.to_owned(),
            message: message.map(str::to_owned),
        })
    }
}
