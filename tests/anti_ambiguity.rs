//! No line is accepted by more than one shape.
//!
//! The classifier returns the first shape that accepts a line, so any
//! overlap between shapes would make the answer depend on trial order.

mod common;

use common::{FIXTURES, UNRECOGNIZED};
use tmi_proto::{
    ClearChat, Classifier, GlobalUserState, HostTarget, Join, ModeChange, Names, Notice, Part,
    Ping, PlainClearChat, PlainMessage, PlainRoomState, PlainUserNotice, PlainUserState, PrivMsg,
    Reconnect, RoomState, Shape, UserNotice, UserState,
};

const KINDS: [&str; 19] = [
    "ping",
    "reconnect",
    "privmsg",
    "plain_message",
    "clear_chat",
    "global_user_state",
    "room_state",
    "user_notice",
    "user_state",
    "notice",
    "host_target",
    "join",
    "part",
    "mode_change",
    "names",
    "plain_clear_chat",
    "plain_room_state",
    "plain_user_notice",
    "plain_user_state",
];

fn accepts(kind: &str, raw: &str) -> bool {
    match kind {
        "ping" => Ping::parse(raw).is_some(),
        "reconnect" => Reconnect::parse(raw).is_some(),
        "privmsg" => PrivMsg::parse(raw).is_some(),
        "plain_message" => PlainMessage::parse(raw).is_some(),
        "clear_chat" => ClearChat::parse(raw).is_some(),
        "global_user_state" => GlobalUserState::parse(raw).is_some(),
        "room_state" => RoomState::parse(raw).is_some(),
        "user_notice" => UserNotice::parse(raw).is_some(),
        "user_state" => UserState::parse(raw).is_some(),
        "notice" => Notice::parse(raw).is_some(),
        "host_target" => HostTarget::parse(raw).is_some(),
        "join" => Join::parse(raw).is_some(),
        "part" => Part::parse(raw).is_some(),
        "mode_change" => ModeChange::parse(raw).is_some(),
        "names" => Names::parse(raw).is_some(),
        "plain_clear_chat" => PlainClearChat::parse(raw).is_some(),
        "plain_room_state" => PlainRoomState::parse(raw).is_some(),
        "plain_user_notice" => PlainUserNotice::parse(raw).is_some(),
        "plain_user_state" => PlainUserState::parse(raw).is_some(),
        other => panic!("unknown kind {other}"),
    }
}

#[test]
fn test_every_fixture_has_a_known_kind() {
    for (kind, raw) in FIXTURES {
        assert!(KINDS.contains(kind), "{kind}: {raw}");
    }
}

#[test]
fn test_each_fixture_accepted_by_exactly_its_shape() {
    for (kind, raw) in FIXTURES {
        let accepting: Vec<&str> = KINDS
            .iter()
            .copied()
            .filter(|candidate| accepts(candidate, raw))
            .collect();
        assert_eq!(accepting, vec![*kind], "{raw}");
    }
}

#[test]
fn test_unrecognized_lines_accepted_by_no_shape() {
    for raw in UNRECOGNIZED {
        for kind in KINDS {
            assert!(!accepts(kind, raw), "{kind} accepted {raw:?}");
        }
    }
}

#[test]
fn test_every_other_shape_reports_no_match() {
    // Shapes tried ahead of the accepting one must reject on structure, not
    // on a field value.
    let classifier = Classifier::default();
    for (kind, raw) in FIXTURES {
        let rejections = classifier.explain(raw);
        let position = KINDS
            .iter()
            .position(|candidate| candidate == kind)
            .unwrap();
        assert_eq!(rejections.len(), position, "{raw}");
        for (rejected, err) in rejections {
            assert!(err.is_no_match(), "{rejected} on {raw}: {err}");
        }
    }
}
