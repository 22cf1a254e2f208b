//! Date and time value types for the Aplos wire formats.
//!
//! Aplos encodes calendar dates as `YYYY-MM-DD` strings and timestamps
//! as `YYYY-MM-DDThh:mm:ss.fff-0700` (fractional seconds, then a signed
//! four-digit UTC offset with no colon). Neither format matches what
//! `chrono`'s serde integration expects, so both get dedicated value
//! types with their own parse/format logic.
//!
//! A JSON `null` for either type is a no-op during deserialization: the
//! field keeps its default value rather than failing. This mirrors the
//! API's habit of sending explicit nulls for unset date fields.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Utc};
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::{Error, Result};

/// Wire format for [`Timestamp`] fields, e.g. `2021-03-04T05:06:07.890-0800`.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%z";

/// A calendar date as Aplos represents it.
///
/// The canonical string form is `YYYY-MM-DD`, with the year zero-padded
/// to at least four digits. `format!("{}", date)` and
/// [`Date::from_str`] round-trip for every valid date.
///
/// # Example
///
/// ```
/// use aplos_client::Date;
///
/// let date: Date = "2020-01-02".parse().unwrap();
/// assert_eq!(date, Date::new(2020, 1, 2));
/// assert_eq!(date.to_string(), "2020-01-02");
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Date {
    /// Four-digit (or fewer, zero-padded) year.
    pub year: i32,
    /// Month of year, 1-12.
    pub month: u32,
    /// Day of month, 1-31.
    pub day: u32,
}

impl Date {
    /// Create a date from its components. No calendar validation is
    /// performed here; parsing validates, formatting does not.
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for Date {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let parsed = NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|e| Error::Decode(format!("invalid date {s:?}: {e}")))?;
        Ok(Self {
            year: parsed.year(),
            month: parsed.month(),
            day: parsed.day(),
        })
    }
}

impl Serialize for Date {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        // null is an explicit "unset" on the wire, not an error.
        match Option::<String>::deserialize(deserializer)? {
            Some(s) => s.parse().map_err(serde::de::Error::custom),
            None => Ok(Self::default()),
        }
    }
}

/// A point in time parsed from the Aplos timestamp encoding.
///
/// The offset present on the wire is preserved rather than normalized
/// to UTC. Timestamps are never sent back to the API, so there is no
/// string serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamp(
    /// The parsed instant, offset preserved as it appeared on the wire.
    pub DateTime<FixedOffset>,
);

impl Default for Timestamp {
    fn default() -> Self {
        Self(DateTime::<Utc>::UNIX_EPOCH.fixed_offset())
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIMESTAMP_FORMAT))
    }
}

impl FromStr for Timestamp {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        DateTime::parse_from_str(s, TIMESTAMP_FORMAT)
            .map(Self)
            .map_err(|e| Error::Decode(format!("invalid timestamp {s:?}: {e}")))
    }
}

impl From<DateTime<FixedOffset>> for Timestamp {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        Self(dt)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        match Option::<String>::deserialize(deserializer)? {
            Some(s) => s.parse().map_err(serde::de::Error::custom),
            None => Ok(Self::default()),
        }
    }
}
