//! Timestamp parsing for the tolerant entry point
//!
//! Report rows arrive as text in a handful of encodings. Rather than
//! sniffing formats, resolution is an explicit ordered chain of parse
//! attempts; the first success wins and exhaustion is a parse failure:
//!
//! 1. RFC 3339 (`2024-01-08T10:00:00Z`, `...+05:30`)
//! 2. ISO-8601 with a UTC offset, `T` or space separator, seconds and
//!    fractional seconds optional
//! 3. naive ISO-8601, same separator/seconds flexibility
//! 4. the legacy `"YYYY-MM-DD HH:MM"` form emitted by older exports
//!
//! Offset-bearing values keep their offset so the caller can apply the
//! equal-offsets check; computation itself happens on the wall-clock value.

use crate::error::{Result, WorkhoursError};
use chrono::{DateTime, FixedOffset, NaiveDateTime};

/// ISO-8601 variants carrying a UTC offset, tried after RFC 3339
const ZONED_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%d %H:%M:%S%.f%#z",
    "%Y-%m-%dT%H:%M%#z",
    "%Y-%m-%d %H:%M%#z",
];

/// Naive ISO-8601 variants; seconds and fractions optional
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// The fallback format kept for rows written by older exports
const LEGACY_FORMAT: &str = "%Y-%m-%d %H:%M";

/// A resolved timestamp, offset kept when the input carried one
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParsedTimestamp {
    /// No offset in the input
    Naive(NaiveDateTime),
    /// Input carried an explicit UTC offset
    Zoned(DateTime<FixedOffset>),
}

impl ParsedTimestamp {
    /// The local wall-clock value all calendar math runs on
    pub fn wall_clock(&self) -> NaiveDateTime {
        match self {
            Self::Naive(dt) => *dt,
            Self::Zoned(dt) => dt.naive_local(),
        }
    }

    /// The UTC offset the input carried, if any
    pub fn offset(&self) -> Option<FixedOffset> {
        match self {
            Self::Naive(_) => None,
            Self::Zoned(dt) => Some(*dt.offset()),
        }
    }
}

/// Resolve a timestamp string through the ordered parse chain
///
/// # Examples
/// ```
/// use workhours_core::parse::parse_timestamp;
///
/// let ts = parse_timestamp("2024-01-08 07:00").unwrap();
/// assert_eq!(ts.wall_clock().to_string(), "2024-01-08 07:00:00");
/// assert!(ts.offset().is_none());
///
/// let ts = parse_timestamp("2024-01-08T07:00:00+05:30").unwrap();
/// assert!(ts.offset().is_some());
///
/// assert!(parse_timestamp("next tuesday").is_err());
/// ```
pub fn parse_timestamp(value: &str) -> Result<ParsedTimestamp> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(ParsedTimestamp::Zoned(dt));
    }
    for format in ZONED_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(value, format) {
            return Ok(ParsedTimestamp::Zoned(dt));
        }
    }
    for format in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(ParsedTimestamp::Naive(dt));
        }
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, LEGACY_FORMAT) {
        return Ok(ParsedTimestamp::Naive(dt));
    }
    Err(WorkhoursError::ParseTimestamp(value.to_string()))
}
