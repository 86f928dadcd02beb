//! Core domain types for workhours
//!
//! These types give strong typing to the engine's two central concepts: the
//! validated business window and the business-time segment. They carry their
//! invariants in their constructors, so anything holding a value of these
//! types can rely on `start < end` without re-checking.

use crate::error::{Result, WorkhoursError};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Utc};
use serde::Serialize;
use std::fmt;

/// A validated daily business window
///
/// Holds the time-of-day bounds of the work day (no date or zone component).
/// The invariant `start < end` is enforced at construction; a window can
/// never be observed in a half-updated or inverted state because the fields
/// are private and the whole value is replaced on reconfiguration.
///
/// # Examples
/// ```
/// use workhours_core::BusinessHours;
/// use chrono::NaiveTime;
///
/// let window = BusinessHours::new(
///     NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
/// ).unwrap();
/// assert_eq!(window.start().to_string(), "09:00:00");
///
/// // Inverted windows are rejected, not clamped
/// assert!(BusinessHours::new(window.end(), window.start()).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BusinessHours {
    start: NaiveTime,
    end: NaiveTime,
}

impl BusinessHours {
    /// Create a new window, rejecting `start >= end`
    pub fn new(start: NaiveTime, end: NaiveTime) -> Result<Self> {
        if start >= end {
            return Err(WorkhoursError::InvalidConfiguration { start, end });
        }
        Ok(Self { start, end })
    }

    /// Start of the business day
    pub fn start(&self) -> NaiveTime {
        self.start
    }

    /// End of the business day
    pub fn end(&self) -> NaiveTime {
        self.end
    }

    /// The window start anchored to a concrete date
    pub fn day_start(&self, date: NaiveDate) -> NaiveDateTime {
        date.and_time(self.start)
    }

    /// The window end anchored to a concrete date
    pub fn day_end(&self, date: NaiveDate) -> NaiveDateTime {
        date.and_time(self.end)
    }
}

impl Default for BusinessHours {
    /// The 07:00-22:00 window the process starts with
    fn default() -> Self {
        Self {
            start: NaiveTime::from_hms_opt(7, 0, 0).expect("07:00 is a valid time"),
            end: NaiveTime::from_hms_opt(22, 0, 0).expect("22:00 is a valid time"),
        }
    }
}

impl fmt::Display for BusinessHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}",
            self.start.format("%H:%M"),
            self.end.format("%H:%M")
        )
    }
}

/// One contiguous span of business time
///
/// Both endpoints fall on the same calendar day and `start < end`. Segments
/// are produced fresh by every breakdown call; they are never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Segment {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl Segment {
    /// Build a segment; callers uphold `start < end` and same-day bounds
    pub(crate) fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        debug_assert!(start < end);
        debug_assert_eq!(start.date(), end.date());
        Self { start, end }
    }

    /// Start of the span
    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    /// End of the span
    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Length of the span, always positive
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} .. {}",
            self.start.format("%Y-%m-%d %H:%M:%S"),
            self.end.format("%Y-%m-%d %H:%M:%S")
        )
    }
}

/// Tolerant timestamp input accepted by [`crate::hours::calculate_hours`]
///
/// Report rows come out of storage either as already-parsed timestamps or as
/// strings in a handful of encodings, so the tolerant entry point accepts
/// both and resolves the text forms through the parse chain in
/// [`crate::parse`].
#[derive(Debug, Clone, PartialEq)]
pub enum TimestampInput {
    /// Already-parsed timestamp with no offset
    DateTime(NaiveDateTime),
    /// Already-parsed timestamp carrying a fixed UTC offset
    Zoned(DateTime<FixedOffset>),
    /// Unparsed text, resolved through the ISO/legacy parse chain
    Text(String),
}

impl From<NaiveDateTime> for TimestampInput {
    fn from(dt: NaiveDateTime) -> Self {
        Self::DateTime(dt)
    }
}

impl From<DateTime<FixedOffset>> for TimestampInput {
    fn from(dt: DateTime<FixedOffset>) -> Self {
        Self::Zoned(dt)
    }
}

impl From<DateTime<Utc>> for TimestampInput {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::Zoned(dt.fixed_offset())
    }
}

impl From<&str> for TimestampInput {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for TimestampInput {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}
