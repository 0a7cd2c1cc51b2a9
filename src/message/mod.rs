//! Message lexing, per-shape decoding and the [`Message`] result type.

pub mod nom_parser;
pub mod parse;
pub mod tags;

pub use self::nom_parser::Line;
pub use self::parse::{
    ClearChat, ClearKind, GlobalUserState, HostTarget, Join, ModeChange, Names, NamesKind, Notice,
    Part, Ping, PlainClearChat, PlainMessage, PlainRoomState, PlainUserNotice, PlainUserState,
    PrivMsg, Raid, Reconnect, Recipient, Ritual, RoomSettings, RoomState, Shape, Sub, SubGift,
    UserNotice, UserNoticePayload, UserState,
};
pub use self::tags::Tags;

use crate::error::ParseError;

/// One classified line: a decoded message shape, or the line itself when no
/// shape matched.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(clippy::large_enum_variant)]
pub enum Message {
    Ping(Ping),
    Reconnect(Reconnect),
    PrivMsg(PrivMsg),
    PlainMessage(PlainMessage),
    ClearChat(ClearChat),
    GlobalUserState(GlobalUserState),
    RoomState(RoomState),
    UserNotice(UserNotice),
    UserState(UserState),
    Notice(Notice),
    HostTarget(HostTarget),
    Join(Join),
    Part(Part),
    ModeChange(ModeChange),
    Names(Names),
    PlainClearChat(PlainClearChat),
    PlainRoomState(PlainRoomState),
    PlainUserNotice(PlainUserNotice),
    PlainUserState(PlainUserState),
    ParseError(ParseError),
}

impl Message {
    /// Short name of the variant, for logs and metrics labels.
    pub fn kind(&self) -> &'static str {
        match self {
            Message::Ping(_) => "ping",
            Message::Reconnect(_) => "reconnect",
            Message::PrivMsg(_) => "privmsg",
            Message::PlainMessage(_) => "plain_message",
            Message::ClearChat(_) => "clear_chat",
            Message::GlobalUserState(_) => "global_user_state",
            Message::RoomState(_) => "room_state",
            Message::UserNotice(_) => "user_notice",
            Message::UserState(_) => "user_state",
            Message::Notice(_) => "notice",
            Message::HostTarget(_) => "host_target",
            Message::Join(_) => "join",
            Message::Part(_) => "part",
            Message::ModeChange(_) => "mode_change",
            Message::Names(_) => "names",
            Message::PlainClearChat(_) => "plain_clear_chat",
            Message::PlainRoomState(_) => "plain_room_state",
            Message::PlainUserNotice(_) => "plain_user_notice",
            Message::PlainUserState(_) => "plain_user_state",
            Message::ParseError(_) => "parse_error",
        }
    }

    pub fn is_parse_error(&self) -> bool {
        matches!(self, Message::ParseError(_))
    }

    /// The channel the message concerns, if it names one.
    pub fn channel(&self) -> Option<&str> {
        match self {
            Message::PrivMsg(msg) => Some(&msg.plain.target),
            Message::PlainMessage(msg) => Some(&msg.target),
            Message::ClearChat(msg) => Some(&msg.channel),
            Message::RoomState(msg) => Some(&msg.channel),
            Message::UserNotice(msg) => Some(&msg.channel),
            Message::UserState(msg) => Some(&msg.channel),
            Message::Notice(msg) => Some(&msg.channel),
            Message::HostTarget(msg) => Some(&msg.channel),
            Message::Join(msg) => Some(&msg.channel),
            Message::Part(msg) => Some(&msg.channel),
            Message::ModeChange(msg) => Some(&msg.channel),
            Message::Names(msg) => Some(&msg.channel),
            Message::PlainClearChat(msg) => Some(&msg.channel),
            Message::PlainRoomState(msg) => Some(&msg.channel),
            Message::PlainUserNotice(msg) => Some(&msg.channel),
            Message::PlainUserState(msg) => Some(&msg.channel),
            Message::Ping(_)
            | Message::Reconnect(_)
            | Message::GlobalUserState(_)
            | Message::ParseError(_) => None,
        }
    }
}

macro_rules! impl_from_shape {
    ($($shape:ident),* $(,)?) => {
        $(
            impl From<$shape> for Message {
                fn from(msg: $shape) -> Self {
                    Message::$shape(msg)
                }
            }
        )*
    };
}

impl_from_shape!(
    Ping,
    Reconnect,
    PrivMsg,
    PlainMessage,
    ClearChat,
    GlobalUserState,
    RoomState,
    UserNotice,
    UserState,
    Notice,
    HostTarget,
    Join,
    Part,
    ModeChange,
    Names,
    PlainClearChat,
    PlainRoomState,
    PlainUserNotice,
    PlainUserState,
    ParseError,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_and_channel() {
        let msg = Message::from(Join {
            user: "ronni".to_string(),
            channel: "#dallas".to_string(),
        });
        assert_eq!(msg.kind(), "join");
        assert_eq!(msg.channel(), Some("#dallas"));
        assert!(!msg.is_parse_error());

        let msg = Message::from(ParseError {
            raw: "GARBAGE".to_string(),
        });
        assert_eq!(msg.kind(), "parse_error");
        assert_eq!(msg.channel(), None);
        assert!(msg.is_parse_error());
    }
}
