//! `tmi-sent-ts` timestamps.

use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::error::FieldError;

use super::number;

/// Unit of a timestamp count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TimestampUnit {
    Seconds,
    Milliseconds,
}

/// A count since the Unix epoch in an explicit unit.
///
/// The raw count is kept as received; conversions honor the unit the parser
/// was configured with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timestamp {
    count: u64,
    unit: TimestampUnit,
}

impl Timestamp {
    pub const fn new(count: u64, unit: TimestampUnit) -> Self {
        Self { count, unit }
    }

    pub const fn seconds(count: u64) -> Self {
        Self::new(count, TimestampUnit::Seconds)
    }

    pub const fn milliseconds(count: u64) -> Self {
        Self::new(count, TimestampUnit::Milliseconds)
    }

    /// Decode a base-10 count in `unit`.
    pub fn decode(raw: &str, unit: TimestampUnit) -> Result<Self, FieldError> {
        number(raw).map(|count| Self::new(count, unit))
    }

    /// The raw count.
    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn unit(&self) -> TimestampUnit {
        self.unit
    }

    /// Time since the Unix epoch.
    pub fn as_duration(&self) -> Duration {
        match self.unit {
            TimestampUnit::Seconds => Duration::from_secs(self.count),
            TimestampUnit::Milliseconds => Duration::from_millis(self.count),
        }
    }

    /// Calendar time, or `None` when the count is out of chrono's range.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        let count = i64::try_from(self.count).ok()?;
        match self.unit {
            TimestampUnit::Seconds => DateTime::from_timestamp(count, 0),
            TimestampUnit::Milliseconds => DateTime::from_timestamp_millis(count),
        }
    }
}
