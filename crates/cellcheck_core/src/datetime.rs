//! Date recognition and precision truncation.

use crate::{CellValue, LocaleProfile, ParseError};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

const ISO_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Granularity to which date/time values are truncated before comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatePrecision {
    /// Calendar day
    #[default]
    Day,
    /// Full hour
    Hour,
    /// Full minute
    Minute,
    /// Full second (sub-second digits dropped)
    Second,
}

impl DatePrecision {
    fn granularity_secs(self) -> u32 {
        match self {
            DatePrecision::Day => 86_400,
            DatePrecision::Hour => 3_600,
            DatePrecision::Minute => 60,
            DatePrecision::Second => 1,
        }
    }

    /// Truncates a date/time to this precision.
    pub fn truncate(self, value: NaiveDateTime) -> NaiveDateTime {
        let secs = value.num_seconds_from_midnight();
        let truncated = secs - secs % self.granularity_secs();
        NaiveTime::from_num_seconds_from_midnight_opt(truncated, 0)
            .map(|time| value.date().and_time(time))
            .unwrap_or(value)
    }
}

impl fmt::Display for DatePrecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DatePrecision::Day => "day",
            DatePrecision::Hour => "hour",
            DatePrecision::Minute => "minute",
            DatePrecision::Second => "second",
        };
        f.write_str(name)
    }
}

/// Parses text as a date or date/time.
///
/// ISO 8601 forms are always recognized (with `T` or space separator, with
/// or without seconds and fractions, RFC 3339 offsets normalized to UTC);
/// the profile's `date_formats` are tried afterwards.
pub fn parse_datetime(raw: &str, profile: &LocaleProfile) -> Result<NaiveDateTime, ParseError> {
    let text = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN));
    }
    for format in ISO_DATETIME_FORMATS {
        if let Ok(value) = NaiveDateTime::parse_from_str(text, format) {
            return Ok(value);
        }
    }
    if let Ok(value) = DateTime::parse_from_rfc3339(text) {
        return Ok(value.naive_utc());
    }
    for format in &profile.date_formats {
        if let Ok(value) = NaiveDateTime::parse_from_str(text, format) {
            return Ok(value);
        }
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return Ok(date.and_time(NaiveTime::MIN));
        }
    }

    Err(ParseError::UnknownDate(raw.to_string()))
}

/// Converts a cell value to a date/time.
pub fn to_datetime(value: &CellValue, profile: &LocaleProfile) -> Result<NaiveDateTime, ParseError> {
    match value {
        CellValue::DateTime(dt) => Ok(*dt),
        CellValue::Date(d) => Ok(d.and_time(NaiveTime::MIN)),
        CellValue::Text(s) => parse_datetime(s, profile),
        other => Err(ParseError::WrongKind {
            kind: other.type_name(),
            value: other.to_string(),
            target: "date",
        }),
    }
}
