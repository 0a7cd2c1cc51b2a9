//! Error types for the TMI protocol library.
//!
//! Field decoding, per-shape decoding, unrecognized lines, client
//! configuration and transport failures each get their own type so callers
//! can tell a line that simply is not a given shape apart from one that is
//! malformed.

use thiserror::Error;

/// Convenience type alias for Results using [`ProtocolError`].
pub type Result<T, E = ProtocolError> = std::result::Result<T, E>;

/// Transport-level errors raised by the line codec and the transport.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProtocolError {
    /// I/O error during reading or writing.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// UTF-8 decoding error.
    #[error("decode error: {0}")]
    Decode(#[from] std::string::FromUtf8Error),

    /// Line exceeded the maximum allowed length.
    #[error("message too long: {actual} bytes (limit {limit})")]
    MessageTooLong {
        /// Length of the offending line.
        actual: usize,
        /// Configured limit.
        limit: usize,
    },

    /// Illegal control character in a line.
    #[error("illegal control character: {0:?}")]
    IllegalControlChar(char),
}

/// Failure to decode a single captured field into its typed value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum FieldError {
    /// A boolean flag was neither `0` nor `1`.
    #[error("invalid flag: {0:?}")]
    InvalidFlag(String),

    /// A numeric field did not hold a base-10 integer.
    #[error("invalid number: {0:?}")]
    InvalidNumber(String),

    /// A color was neither empty nor `#RRGGBB`.
    #[error("invalid color: {0:?}")]
    InvalidColor(String),

    /// A badge entry was not a `name/level` pair.
    #[error("malformed badge: {0:?}")]
    MalformedBadge(String),

    /// The same badge name appeared twice in one badge list.
    #[error("duplicate badge: {0}")]
    DuplicateBadge(String),

    /// A value that must not be empty was empty.
    #[error("empty value")]
    Empty,
}

/// Why a message shape rejected a line.
///
/// The first group of variants means "not this shape" and is expected while
/// classifying; the last two mean the line looked like this shape but one of
/// its fields could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DecodeError {
    /// The line could not be split into tags, source, command and params.
    #[error("malformed line")]
    Malformed,

    /// The command did not match.
    #[error("expected command {expected}, got {got}")]
    WrongCommand {
        /// Command this shape requires.
        expected: &'static str,
        /// Command found on the line.
        got: String,
    },

    /// A tag block was present on a shape that never carries one.
    #[error("unexpected tag block")]
    UnexpectedTags,

    /// A tagged shape was given a line without a tag block.
    #[error("missing tag block")]
    MissingTags,

    /// The message source did not have the required form.
    #[error("unexpected source: {0:?}")]
    BadSource(Option<String>),

    /// Parameters did not have the required count or form.
    #[error("unexpected parameters for {0}")]
    BadParams(&'static str),

    /// A required tag key was absent.
    #[error("missing tag: {0}")]
    MissingTag(&'static str),

    /// A field was present but could not be decoded.
    #[error("invalid field {key}")]
    Field {
        /// Tag key or parameter name of the field.
        key: &'static str,
        /// The underlying field error.
        #[source]
        source: FieldError,
    },
}

impl DecodeError {
    /// Returns true when the line is structurally another shape, as opposed
    /// to a line of this shape with a bad field.
    pub fn is_no_match(&self) -> bool {
        !matches!(self, Self::MissingTag(_) | Self::Field { .. })
    }
}

/// A line that matched no known message shape.
///
/// Carries the original input verbatim for logging and diagnosis.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("unrecognized message: {raw}")]
pub struct ParseError {
    /// The raw line as received, including any line terminator.
    pub raw: String,
}

/// Client configuration validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A required setting was empty.
    #[error("{0} must not be empty")]
    Empty(&'static str),

    /// The channel did not start with `#`.
    #[error("channel must start with '#': {0}")]
    ChannelPrefix(String),

    /// The token did not start with `oauth:`.
    #[error("token must start with \"oauth:\"")]
    TokenPrefix,
}
