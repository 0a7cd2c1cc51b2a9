//! Field decoders.
//!
//! Pure functions turning one raw captured value into a typed one. Message
//! decoders call these after isolating a tag value or parameter; any
//! [`FieldError`] makes the owning message fail to decode.

mod badge;
mod color;
mod timestamp;

pub use self::badge::{Badge, BadgeLevel, Badges, Privilege, UserType};
pub use self::color::Color;
pub use self::timestamp::{Timestamp, TimestampUnit};

use std::str::FromStr;

use crate::error::FieldError;

/// Body of the `366` reply that closes a NAMES listing.
pub const END_OF_NAMES: &str = "End of /NAMES list";

/// Decode a `0`/`1` flag.
pub fn flag(raw: &str) -> Result<bool, FieldError> {
    match raw {
        "1" => Ok(true),
        "0" => Ok(false),
        other => Err(FieldError::InvalidFlag(other.to_string())),
    }
}

/// Decode a flag where an empty value means "not set".
pub fn optional_flag(raw: &str) -> Result<Option<bool>, FieldError> {
    if raw.is_empty() {
        Ok(None)
    } else {
        flag(raw).map(Some)
    }
}

/// Decode a base-10 integer.
pub fn number<T: FromStr>(raw: &str) -> Result<T, FieldError> {
    // `FromStr` for integers accepts a leading `+`, the wire never sends one.
    if raw.starts_with('+') {
        return Err(FieldError::InvalidNumber(raw.to_string()));
    }
    raw.parse()
        .map_err(|_| FieldError::InvalidNumber(raw.to_string()))
}

/// Decode an integer where an empty value means "not set".
pub fn optional_number<T: FromStr>(raw: &str) -> Result<Option<T>, FieldError> {
    if raw.is_empty() {
        Ok(None)
    } else {
        number(raw).map(Some)
    }
}

/// Reject an empty value.
pub fn non_empty(raw: &str) -> Result<&str, FieldError> {
    if raw.is_empty() {
        Err(FieldError::Empty)
    } else {
        Ok(raw)
    }
}

/// Decode a space-separated name list.
///
/// The end-of-list text yields an empty list rather than a list holding the
/// sentinel.
pub fn names(raw: &str) -> Vec<String> {
    if raw == END_OF_NAMES {
        return Vec::new();
    }
    raw.split(' ')
        .filter(|name| !name.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Replace every `\s` with a space.
///
/// `\s` is the only escape the service uses in tag values. Every other
/// backslash is kept as-is.
pub fn unescape(raw: &str) -> String {
    if !raw.contains('\\') {
        return raw.to_owned();
    }
    raw.replace("\\s", " ")
}
