//! Channel-wide events: chat clears, room settings, hosting and notices.
//!
//! `CLEARCHAT` and `ROOMSTATE` also arrive without a tag block when only the
//! `commands` capability was requested; those decode as [`PlainClearChat`]
//! and [`PlainRoomState`].

use crate::config::ParserConfig;
use crate::error::DecodeError;
use crate::fields::{self, Timestamp};
use crate::message::nom_parser::Line;

use super::{channel, expect_command, params, tagged, tmi_source, untagged, Shape};

/// What a [`ClearChat`] removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClearKind {
    /// The whole chat was cleared.
    Clear,
    /// One user was timed out.
    Timeout,
    /// One user was banned.
    Permanent,
}

/// `CLEARCHAT`: a chat clear, a timeout or a ban.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClearChat {
    pub channel: String,
    /// Target of a timeout or ban; `None` when the whole chat was cleared.
    pub user: Option<String>,
    /// Timeout length in seconds.
    pub ban_duration: Option<u64>,
    pub ban_reason: Option<String>,
    pub room_id: String,
    pub target_user_id: Option<String>,
    pub tmi_sent_ts: Timestamp,
}

impl ClearChat {
    pub fn kind(&self) -> ClearKind {
        match (&self.user, self.ban_duration) {
            (None, _) => ClearKind::Clear,
            (Some(_), Some(_)) => ClearKind::Timeout,
            (Some(_), None) => ClearKind::Permanent,
        }
    }

    pub fn is_clear(&self) -> bool {
        self.kind() == ClearKind::Clear
    }

    pub fn is_timeout(&self) -> bool {
        self.kind() == ClearKind::Timeout
    }

    pub fn is_perm(&self) -> bool {
        self.kind() == ClearKind::Permanent
    }
}

impl Shape for ClearChat {
    const COMMAND: &'static str = "CLEARCHAT";

    fn decode(line: &Line<'_>, config: &ParserConfig) -> Result<Self, DecodeError> {
        expect_command(line, Self::COMMAND)?;
        let tags = tagged(line)?;
        tmi_source(line)?;
        let (chan, user) = clear_target(line)?;

        Ok(ClearChat {
            channel: chan.to_owned(),
            user: user.map(str::to_owned),
            ban_duration: tags
                .optional_field("ban-duration", fields::optional_number)?
                .flatten(),
            ban_reason: tags.get("ban-reason").map(fields::unescape),
            room_id: tags.field("room-id", fields::non_empty)?.to_owned(),
            target_user_id: tags.get("target-user-id").map(str::to_owned),
            tmi_sent_ts: tags.field("tmi-sent-ts", |raw| {
                Timestamp::decode(raw, config.tmi_sent_ts_unit)
            })?,
        })
    }
}

/// Channel and optional target user of a `CLEARCHAT`.
fn clear_target<'a>(line: &Line<'a>) -> Result<(&'a str, Option<&'a str>), DecodeError> {
    let (chan, user) = match line.params.as_slice() {
        [chan] => (*chan, None),
        [chan, user] if !user.is_empty() => (*chan, Some(*user)),
        _ => return Err(DecodeError::BadParams(ClearChat::COMMAND)),
    };
    Ok((channel(chan, ClearChat::COMMAND)?, user))
}

/// `CLEARCHAT` sent without the `tags` capability.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlainClearChat {
    pub channel: String,
    /// Target of a timeout or ban; `None` when the whole chat was cleared.
    pub user: Option<String>,
}

impl PlainClearChat {
    pub fn is_clear(&self) -> bool {
        self.user.is_none()
    }
}

impl Shape for PlainClearChat {
    const COMMAND: &'static str = "CLEARCHAT";

    fn decode(line: &Line<'_>, _config: &ParserConfig) -> Result<Self, DecodeError> {
        expect_command(line, Self::COMMAND)?;
        untagged(line)?;
        tmi_source(line)?;
        let (chan, user) = clear_target(line)?;

        Ok(PlainClearChat {
            channel: chan.to_owned(),
            user: user.map(str::to_owned),
        })
    }
}

/// Room settings carried by a `ROOMSTATE`.
///
/// On join the server sends every setting; afterwards it sends only the one
/// that changed. Each field is `None` when the line left it out.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoomSettings {
    /// `broadcaster-lang`; `Some("")` when the broadcaster set none.
    pub language: Option<String>,
    pub emote_only: Option<bool>,
    /// Minutes a chatter must follow before talking; `-1` when disabled.
    pub followers_only: Option<i64>,
    /// `r9k` mode.
    pub unique_chat: Option<bool>,
    pub rituals: Option<bool>,
    /// Seconds between messages from one chatter.
    pub slow: Option<u64>,
    pub subs_only: Option<bool>,
}

impl RoomSettings {
    /// Number of settings present on the line.
    pub fn present_count(&self) -> usize {
        [
            self.language.is_some(),
            self.emote_only.is_some(),
            self.followers_only.is_some(),
            self.unique_chat.is_some(),
            self.rituals.is_some(),
            self.slow.is_some(),
            self.subs_only.is_some(),
        ]
        .iter()
        .filter(|present| **present)
        .count()
    }
}

/// `ROOMSTATE`: the settings of a channel, in full or as a single change.
///
/// A line may also carry none of the settings, or several but not all of
/// them. Such a line is neither [`is_snapshot`](Self::is_snapshot) nor
/// [`is_update`](Self::is_update), so `!is_update()` does not imply a
/// snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoomState {
    pub channel: String,
    pub room_id: Option<String>,
    pub settings: RoomSettings,
}

impl RoomState {
    const SETTINGS: usize = 7;

    pub fn present_count(&self) -> usize {
        self.settings.present_count()
    }

    /// A single setting changed.
    pub fn is_update(&self) -> bool {
        self.present_count() == 1
    }

    /// Every setting is present, as sent on join.
    pub fn is_snapshot(&self) -> bool {
        self.present_count() == Self::SETTINGS
    }
}

impl Shape for RoomState {
    const COMMAND: &'static str = "ROOMSTATE";

    fn decode(line: &Line<'_>, _config: &ParserConfig) -> Result<Self, DecodeError> {
        expect_command(line, Self::COMMAND)?;
        let tags = tagged(line)?;
        tmi_source(line)?;
        let [chan] = params::<1>(line, Self::COMMAND)?;

        let settings = RoomSettings {
            language: tags.get("broadcaster-lang").map(str::to_owned),
            emote_only: tags.optional_field("emote-only", fields::optional_flag)?.flatten(),
            followers_only: tags
                .optional_field("followers-only", fields::optional_number)?
                .flatten(),
            unique_chat: tags.optional_field("r9k", fields::optional_flag)?.flatten(),
            rituals: tags.optional_field("rituals", fields::optional_flag)?.flatten(),
            slow: tags.optional_field("slow", fields::optional_number)?.flatten(),
            subs_only: tags.optional_field("subs-only", fields::optional_flag)?.flatten(),
        };

        Ok(RoomState {
            channel: channel(chan, Self::COMMAND)?.to_owned(),
            room_id: tags.get("room-id").map(str::to_owned),
            settings,
        })
    }
}

/// `ROOMSTATE` sent without the `tags` capability; only the channel is known.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlainRoomState {
    pub channel: String,
}

impl Shape for PlainRoomState {
    const COMMAND: &'static str = "ROOMSTATE";

    fn decode(line: &Line<'_>, _config: &ParserConfig) -> Result<Self, DecodeError> {
        expect_command(line, Self::COMMAND)?;
        untagged(line)?;
        tmi_source(line)?;
        let [chan] = params::<1>(line, Self::COMMAND)?;

        Ok(PlainRoomState {
            channel: channel(chan, Self::COMMAND)?.to_owned(),
        })
    }
}

/// `HOSTTARGET`: the channel started or stopped hosting another one.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HostTarget {
    /// The hosting channel.
    pub channel: String,
    /// The hosted channel; `None` when hosting stopped.
    pub target: Option<String>,
    pub viewers: Option<u32>,
}

impl HostTarget {
    pub fn is_stopped(&self) -> bool {
        self.target.is_none()
    }
}

impl Shape for HostTarget {
    const COMMAND: &'static str = "HOSTTARGET";

    fn decode(line: &Line<'_>, _config: &ParserConfig) -> Result<Self, DecodeError> {
        expect_command(line, Self::COMMAND)?;
        untagged(line)?;
        tmi_source(line)?;

        let (chan, target, viewers) = match line.params.as_slice() {
            [chan, rest] => match rest.split_once(' ') {
                Some((target, viewers)) => (*chan, target, Some(viewers)),
                None => (*chan, *rest, None),
            },
            [chan, target, viewers] => (*chan, *target, Some(*viewers)),
            _ => return Err(DecodeError::BadParams(Self::COMMAND)),
        };

        let target = match target {
            "" => return Err(DecodeError::BadParams(Self::COMMAND)),
            "-" => None,
            target => Some(target.to_owned()),
        };

        // Viewer counts are sometimes bracketed, `[12]`.
        let viewers = viewers
            .map(|raw| {
                raw.strip_prefix('[')
                    .and_then(|raw| raw.strip_suffix(']'))
                    .unwrap_or(raw)
            })
            .map(fields::optional_number)
            .transpose()
            .map_err(|source| DecodeError::Field {
                key: "viewers",
                source,
            })?
            .flatten();

        Ok(HostTarget {
            channel: channel(chan, Self::COMMAND)?.to_owned(),
            target,
            viewers,
        })
    }
}

/// `NOTICE`: a server message about the channel, identified by `msg-id`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Notice {
    pub msg_id: String,
    pub channel: String,
    pub text: String,
}

impl Shape for Notice {
    const COMMAND: &'static str = "NOTICE";

    fn decode(line: &Line<'_>, _config: &ParserConfig) -> Result<Self, DecodeError> {
        expect_command(line, Self::COMMAND)?;
        let tags = tagged(line)?;
        tmi_source(line)?;
        let [chan, text] = params::<2>(line, Self::COMMAND)?;

        Ok(Notice {
            msg_id: tags.field("msg-id", fields::non_empty)?.to_owned(),
            channel: channel(chan, Self::COMMAND)?.to_owned(),
            text: text.to_owned(),
        })
    }
}
