//! Tag block parsing.
//!
//! A tag block is the `key=value;key=value` text between the leading `@`
//! and the first space of a line. Keys are unique; a value may be empty and
//! a key may appear without `=` at all, which reads as an empty value.

use nom::{
    bytes::complete::{take_while, take_while1},
    character::complete::char,
    combinator::{all_consuming, opt},
    error::{context, VerboseError},
    multi::separated_list1,
    sequence::preceded,
    IResult,
};

use crate::error::{DecodeError, FieldError};

type TagResult<I, O> = IResult<I, O, VerboseError<I>>;

fn tag_pair(input: &str) -> TagResult<&str, (&str, &str)> {
    let (input, key) =
        context("parsing tag key", take_while1(|c: char| c != '=' && c != ';'))(input)?;
    let (input, value) = opt(preceded(char('='), take_while(|c: char| c != ';')))(input)?;
    Ok((input, (key, value.unwrap_or(""))))
}

fn tag_block(input: &str) -> TagResult<&str, Vec<(&str, &str)>> {
    all_consuming(separated_list1(char(';'), tag_pair))(input)
}

/// Borrowed view of a decoded tag block, in wire order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tags<'a> {
    pairs: Vec<(&'a str, &'a str)>,
}

impl<'a> Tags<'a> {
    /// Parse a raw tag block (without the leading `@`).
    ///
    /// Returns `None` for an empty block, an empty key, or a repeated key.
    pub fn parse(raw: &'a str) -> Option<Self> {
        let (_, pairs) = tag_block(raw).ok()?;
        for (i, (key, _)) in pairs.iter().enumerate() {
            if pairs[..i].iter().any(|(seen, _)| seen == key) {
                return None;
            }
        }
        Some(Self { pairs })
    }

    /// Raw value of `key`, if present.
    pub fn get(&self, key: &str) -> Option<&'a str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a str)> + '_ {
        self.pairs.iter().copied()
    }

    /// Raw value of a required key.
    pub fn required(&self, key: &'static str) -> Result<&'a str, DecodeError> {
        self.get(key).ok_or(DecodeError::MissingTag(key))
    }

    /// Decode a required key with `decode`.
    pub fn field<T, F>(&self, key: &'static str, decode: F) -> Result<T, DecodeError>
    where
        F: FnOnce(&'a str) -> Result<T, FieldError>,
    {
        decode(self.required(key)?).map_err(|source| DecodeError::Field { key, source })
    }

    /// Decode a key that may be missing from the line entirely.
    pub fn optional_field<T, F>(&self, key: &'static str, decode: F) -> Result<Option<T>, DecodeError>
    where
        F: FnOnce(&'a str) -> Result<T, FieldError>,
    {
        self.get(key)
            .map(decode)
            .transpose()
            .map_err(|source| DecodeError::Field { key, source })
    }

    /// Owned copy of a required value.
    pub fn string(&self, key: &'static str) -> Result<String, DecodeError> {
        self.required(key).map(str::to_owned)
    }
}
