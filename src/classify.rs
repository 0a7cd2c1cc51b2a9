//! Line classification.
//!
//! A line is lexed once and then offered to every message shape in a fixed
//! order. Tagged shapes come before the untagged shape sharing their
//! command, so the first shape to accept a line is the most specific one.

use crate::config::ParserConfig;
use crate::error::{DecodeError, ParseError};
use crate::message::{
    ClearChat, GlobalUserState, HostTarget, Join, Line, Message, ModeChange, Names, Notice, Part,
    Ping, PlainClearChat, PlainMessage, PlainRoomState, PlainUserNotice, PlainUserState, PrivMsg,
    Reconnect, RoomState, Shape, UserNotice, UserState,
};

type Decoder = fn(&Line<'_>, &ParserConfig) -> Result<Message, DecodeError>;

fn decode_as<S>(line: &Line<'_>, config: &ParserConfig) -> Result<Message, DecodeError>
where
    S: Shape + Into<Message>,
{
    S::decode(line, config).map(Into::into)
}

/// Shapes in the order they are tried.
const SHAPES: [(&str, Decoder); 19] = [
    ("ping", decode_as::<Ping> as Decoder),
    ("reconnect", decode_as::<Reconnect> as Decoder),
    ("privmsg", decode_as::<PrivMsg> as Decoder),
    ("plain_message", decode_as::<PlainMessage> as Decoder),
    ("clear_chat", decode_as::<ClearChat> as Decoder),
    ("global_user_state", decode_as::<GlobalUserState> as Decoder),
    ("room_state", decode_as::<RoomState> as Decoder),
    ("user_notice", decode_as::<UserNotice> as Decoder),
    ("user_state", decode_as::<UserState> as Decoder),
    ("notice", decode_as::<Notice> as Decoder),
    ("host_target", decode_as::<HostTarget> as Decoder),
    ("join", decode_as::<Join> as Decoder),
    ("part", decode_as::<Part> as Decoder),
    ("mode_change", decode_as::<ModeChange> as Decoder),
    ("names", decode_as::<Names> as Decoder),
    // Sent in place of the tagged forms when only `commands` was requested.
    ("plain_clear_chat", decode_as::<PlainClearChat> as Decoder),
    ("plain_room_state", decode_as::<PlainRoomState> as Decoder),
    ("plain_user_notice", decode_as::<PlainUserNotice> as Decoder),
    ("plain_user_state", decode_as::<PlainUserState> as Decoder),
];

/// Stateless line classifier.
///
/// Holds only the [`ParserConfig`] it was built with, so one instance can
/// be shared freely between threads.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Classifier {
    config: ParserConfig,
}

impl Classifier {
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Classify one line, with or without its terminator.
    ///
    /// Never fails: a line no shape accepts comes back as
    /// [`Message::ParseError`] holding the input verbatim.
    pub fn classify(&self, raw: &str) -> Message {
        Line::lex(raw)
            .and_then(|line| {
                SHAPES
                    .iter()
                    .find_map(|(_, decode)| decode(&line, &self.config).ok())
            })
            .unwrap_or_else(|| unrecognized(raw))
    }

    /// Why each shape tried before the accepting one (or every shape, if
    /// none accepted) rejected `raw`.
    pub fn explain(&self, raw: &str) -> Vec<(&'static str, DecodeError)> {
        let line = match Line::lex(raw) {
            Some(line) => line,
            None => return vec![("line", DecodeError::Malformed)],
        };

        let mut rejections = Vec::new();
        for (kind, decode) in SHAPES.iter() {
            match decode(&line, &self.config) {
                Ok(_) => break,
                Err(err) => rejections.push((*kind, err)),
            }
        }
        rejections
    }
}

fn unrecognized(raw: &str) -> Message {
    Message::ParseError(ParseError {
        raw: raw.to_owned(),
    })
}

/// Classify `raw` with the default [`ParserConfig`].
pub fn classify(raw: &str) -> Message {
    Classifier::default().classify(raw)
}

impl From<&str> for Message {
    fn from(raw: &str) -> Self {
        classify(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{Timestamp, TimestampUnit};

    #[test]
    fn test_shape_kinds_match_message_kinds() {
        let samples = [
            "PING :tmi.twitch.tv",
            "RECONNECT",
            ":ronni!ronni@ronni.tmi.twitch.tv PRIVMSG #dallas :hi",
            ":ronni!ronni@ronni.tmi.twitch.tv JOIN #dallas",
            ":jtv MODE #dallas +o ronni",
        ];
        for raw in samples {
            let msg = classify(raw);
            let accepted = SHAPES
                .iter()
                .find(|(_, decode)| decode(&Line::lex(raw).unwrap(), &ParserConfig::default()).is_ok())
                .map(|(kind, _)| *kind);
            assert_eq!(accepted, Some(msg.kind()), "{raw}");
        }
    }

    #[test]
    fn test_garbage_is_parse_error() {
        let raw = "GARBAGE not a real irc line";
        assert_eq!(
            classify(raw),
            Message::ParseError(ParseError {
                raw: raw.to_string(),
            })
        );
    }

    #[test]
    fn test_unlexable_line_keeps_terminator() {
        let raw = "@broken\r\n";
        assert_eq!(
            classify(raw),
            Message::ParseError(ParseError {
                raw: raw.to_string(),
            })
        );
    }

    #[test]
    fn test_tagged_privmsg_wins_over_plain() {
        let raw = "@badges=;color=;display-name=ronni;emotes=;id=1;mod=0;room-id=1;subscriber=0;tmi-sent-ts=1;turbo=0;user-id=1;user-type= :ronni!ronni@ronni.tmi.twitch.tv PRIVMSG #dallas :hi";
        assert_eq!(classify(raw).kind(), "privmsg");
    }

    #[test]
    fn test_untagged_forms_are_recognized() {
        let samples = [
            (":tmi.twitch.tv CLEARCHAT #dallas :ronni", "plain_clear_chat"),
            (":tmi.twitch.tv ROOMSTATE #dallas", "plain_room_state"),
            (":tmi.twitch.tv USERNOTICE #dallas :hi", "plain_user_notice"),
            (":tmi.twitch.tv USERSTATE #dallas", "plain_user_state"),
        ];
        for (raw, kind) in samples {
            let msg = classify(raw);
            assert_eq!(msg.kind(), kind, "{raw}");
            assert_eq!(msg.channel(), Some("#dallas"));
        }
    }

    #[test]
    fn test_config_is_applied() {
        let classifier =
            Classifier::new(ParserConfig::default().with_timestamp_unit(TimestampUnit::Milliseconds));
        let raw = "@room-id=1;tmi-sent-ts=1524962471755 :tmi.twitch.tv CLEARCHAT #dallas";
        match classifier.classify(raw) {
            Message::ClearChat(clear) => {
                assert_eq!(clear.tmi_sent_ts, Timestamp::milliseconds(1524962471755))
            }
            other => panic!("expected CLEARCHAT, got {:?}", other),
        }
    }

    #[test]
    fn test_explain() {
        let rejections = Classifier::default().explain(":jtv MODE #dallas +o ronni");
        assert_eq!(rejections.len(), 13);
        assert!(rejections.iter().all(|(_, err)| err.is_no_match()));

        let rejections = Classifier::default().explain("PING :tmi.twitch.tv");
        assert!(rejections.is_empty());

        let rejections = Classifier::default().explain("GARBAGE not a real irc line");
        assert_eq!(rejections.len(), SHAPES.len());

        assert_eq!(
            Classifier::default().explain(""),
            vec![("line", DecodeError::Malformed)]
        );
    }

    #[test]
    fn test_from_str() {
        let msg: Message = "PING :tmi.twitch.tv".into();
        assert_eq!(msg.kind(), "ping");
    }

    #[test]
    fn test_classifier_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Classifier>();
    }
}
