//! # tmi-proto
//!
//! A Rust library for classifying and parsing Twitch chat (TMI) IRC lines
//! into strongly-typed messages.
//!
//! ## Features
//!
//! - One decoder per message shape, from `PING` to `USERNOTICE` payloads
//! - A stateless classifier that never fails on bad input
//! - Typed badges, colors, timestamps and room settings
//! - Optional Tokio integration: line codec, transports, write queue and a
//!   minimal client

#![deny(clippy::all)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! ## Quick Start
//!
//! ### Classifying lines
//!
//! ```rust
//! use tmi_proto::{classify, Message};
//!
//! let raw = "@ban-duration=600;room-id=99999999;target-user-id=99999999;tmi-sent-ts=1524962471755 :tmi.twitch.tv CLEARCHAT #channel :nick";
//!
//! match classify(raw) {
//!     Message::ClearChat(clear) => {
//!         assert!(clear.is_timeout());
//!         assert_eq!(clear.ban_duration, Some(600));
//!     }
//!     other => panic!("unexpected {}", other.kind()),
//! }
//!
//! assert!(classify("GARBAGE not a real irc line").is_parse_error());
//! ```
//!
//! ### Decoding a single shape
//!
//! ```rust
//! use tmi_proto::{Names, Shape};
//!
//! let names = Names::parse(":ronni.tmi.twitch.tv 353 ronni = #dallas :ronni fred wilma").unwrap();
//! assert_eq!(names.names, ["ronni", "fred", "wilma"]);
//! assert!(!names.is_end_of_list());
//! ```
//!
//! ### Per-deployment decoding choices
//!
//! ```rust
//! use tmi_proto::{Classifier, ParserConfig, TimestampUnit};
//!
//! let classifier = Classifier::new(
//!     ParserConfig::default().with_timestamp_unit(TimestampUnit::Milliseconds),
//! );
//! let msg = classifier.classify("PING :tmi.twitch.tv");
//! assert_eq!(msg.kind(), "ping");
//! ```

pub mod caps;
pub mod classify;
pub mod config;
pub mod encode;
pub mod error;
pub mod fields;
pub mod message;
pub mod prefix;

pub use self::caps::Capability;
pub use self::classify::{classify, Classifier};
pub use self::config::{ClientConfig, ParserConfig};
pub use self::error::{ConfigError, DecodeError, FieldError, ParseError, ProtocolError};
pub use self::fields::{
    Badge, BadgeLevel, Badges, Color, Privilege, Timestamp, TimestampUnit, UserType,
};
pub use self::message::{
    ClearChat, ClearKind, GlobalUserState, HostTarget, Join, Line, Message, ModeChange, Names,
    NamesKind, Notice, Part, Ping, PlainClearChat, PlainMessage, PlainRoomState, PlainUserNotice,
    PlainUserState, PrivMsg, Raid, Reconnect, Recipient, Ritual, RoomSettings, RoomState, Shape,
    Sub, SubGift, UserNotice, UserNoticePayload, UserState,
};
pub use self::prefix::Source;

#[cfg(feature = "tokio")]
pub mod client;
#[cfg(feature = "tokio")]
pub mod codec;
#[cfg(feature = "tokio")]
pub mod line;
#[cfg(feature = "tokio")]
pub mod queue;
#[cfg(feature = "tokio")]
pub mod transport;

#[cfg(feature = "tokio")]
pub use self::client::{Client, Handler};
#[cfg(feature = "tokio")]
pub use self::codec::TmiCodec;
#[cfg(feature = "tokio")]
pub use self::line::LineCodec;
#[cfg(feature = "tokio")]
pub use self::queue::{OutboundQueue, Throttle};
#[cfg(feature = "tokio")]
pub use self::transport::{Endpoint, Transport, TransportReadError};
