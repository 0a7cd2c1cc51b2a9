//! Display colors.

use std::fmt;

use nom::{
    bytes::complete::take_while_m_n,
    character::complete::char,
    combinator::{all_consuming, map_res},
    sequence::{preceded, tuple},
    IResult,
};

use crate::error::FieldError;

/// A chatter's display color.
///
/// A chatter who never picked a color has no `Color` at all; message types
/// store `Option<Color>` for that case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

fn hex_component(input: &str) -> IResult<&str, u8> {
    map_res(
        take_while_m_n(2, 2, |c: char| c.is_ascii_hexdigit()),
        |hex| u8::from_str_radix(hex, 16),
    )(input)
}

fn hex_color(input: &str) -> IResult<&str, Color> {
    let (rest, (r, g, b)) = all_consuming(preceded(
        char('#'),
        tuple((hex_component, hex_component, hex_component)),
    ))(input)?;
    Ok((rest, Color { r, g, b }))
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Decode `#RRGGBB`.
    pub fn decode(raw: &str) -> Result<Self, FieldError> {
        hex_color(raw)
            .map(|(_, color)| color)
            .map_err(|_| FieldError::InvalidColor(raw.to_owned()))
    }

    /// Decode a color tag, where an empty value means no color is set.
    pub fn decode_optional(raw: &str) -> Result<Option<Self>, FieldError> {
        if raw.is_empty() {
            Ok(None)
        } else {
            Self::decode(raw).map(Some)
        }
    }
}

/// Writes `#RRGGBB` in upper case.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}
