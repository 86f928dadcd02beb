//! Calendar segmentation and duration aggregation
//!
//! The foundation primitive is [`BusinessHours::breakdown`]: it walks a
//! cursor through the requested interval one calendar day at a time and
//! emits every maximal contiguous span that falls inside the window on a
//! weekday. Everything else — the business-time delta and the
//! business/after-hours split — is defined as a sum over that breakdown.
//!
//! The window-taking methods here are strict and pure: they accept only
//! already-valid timestamps and perform no logging. The free functions at
//! the bottom snapshot the process-wide window once and delegate, so a
//! multi-day walk never sees a half-updated configuration.

use crate::config;
use crate::types::{BusinessHours, Segment};
use chrono::{Datelike, NaiveDateTime, TimeDelta, Weekday};

impl BusinessHours {
    /// Every business-time segment of `[start, end)`, in chronological order
    ///
    /// The cursor loop advances exactly one calendar day per iteration and
    /// re-checks the weekday at the top, so a two-day weekend costs two
    /// iterations that emit nothing. Time on a weekday before the window
    /// start is skipped by snapping the cursor forward; time at or past the
    /// window end rolls over to the next day's window start.
    ///
    /// Returns an empty vector when `start >= end` or when the whole
    /// interval is weekend or after-hours time. The result is recomputed
    /// from scratch on every call.
    ///
    /// # Examples
    /// ```
    /// use workhours_core::BusinessHours;
    /// use chrono::NaiveDate;
    ///
    /// let window = BusinessHours::default();
    /// // Friday 16:00 through Monday 10:00 crosses a whole weekend
    /// let start = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap().and_hms_opt(16, 0, 0).unwrap();
    /// let end = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap().and_hms_opt(10, 0, 0).unwrap();
    ///
    /// let segments = window.breakdown(start, end);
    /// assert_eq!(segments.len(), 2);
    /// assert_eq!(segments[0].end().to_string(), "2024-01-05 22:00:00");
    /// assert_eq!(segments[1].start().to_string(), "2024-01-08 07:00:00");
    /// ```
    pub fn breakdown(&self, start: NaiveDateTime, end: NaiveDateTime) -> Vec<Segment> {
        let mut segments = Vec::new();
        let mut cursor = start;

        while cursor < end {
            // Skip weekends entirely, one calendar day per iteration
            if is_weekend(cursor) {
                match self.next_day_start(cursor) {
                    Some(next) => cursor = next,
                    None => break,
                }
                continue;
            }

            let day_start = self.day_start(cursor.date());
            let day_end = self.day_end(cursor.date());

            if cursor < day_start {
                cursor = day_start;
            }
            if cursor >= day_end {
                match self.next_day_start(cursor) {
                    Some(next) => cursor = next,
                    None => break,
                }
                continue;
            }

            // Snapping to day_start can carry the cursor past end when the
            // interval closes before the window opens; such a day
            // contributes nothing.
            let segment_end = day_end.min(end);
            if cursor < segment_end {
                segments.push(Segment::new(cursor, segment_end));
            }
            match self.next_day_start(cursor) {
                Some(next) => cursor = next,
                None => break,
            }
        }

        segments
    }

    /// Total business time in `[start, end)`
    ///
    /// Zero when `start >= end`; otherwise the sum of the breakdown's
    /// segment lengths. Always non-negative and bounded by `end - start`.
    pub fn delta(&self, start: NaiveDateTime, end: NaiveDateTime) -> TimeDelta {
        if start >= end {
            return TimeDelta::zero();
        }
        self.breakdown(start, end)
            .iter()
            .fold(TimeDelta::zero(), |total, segment| {
                total + segment.duration()
            })
    }

    /// Split `[start, end)` into `(business, after_hours)` durations
    ///
    /// The two components always sum exactly to `end - start`; both are
    /// zero when `start >= end`.
    pub fn split(&self, start: NaiveDateTime, end: NaiveDateTime) -> (TimeDelta, TimeDelta) {
        if start >= end {
            return (TimeDelta::zero(), TimeDelta::zero());
        }
        let business = self.delta(start, end);
        (business, (end - start) - business)
    }

    /// The next calendar day at the window start
    ///
    /// Does not skip weekends itself; the breakdown loop re-checks the
    /// weekday after every advance. `None` only at the end of the
    /// representable calendar, which terminates the walk.
    fn next_day_start(&self, cursor: NaiveDateTime) -> Option<NaiveDateTime> {
        cursor.date().succ_opt().map(|next| self.day_start(next))
    }
}

fn is_weekend(dt: NaiveDateTime) -> bool {
    matches!(dt.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Breakdown against the process-wide window
///
/// Snapshots the configuration once, then delegates to
/// [`BusinessHours::breakdown`].
pub fn business_hours_breakdown(start: NaiveDateTime, end: NaiveDateTime) -> Vec<Segment> {
    config::business_hours().breakdown(start, end)
}

/// Business-time delta against the process-wide window
pub fn business_hours_delta(start: NaiveDateTime, end: NaiveDateTime) -> TimeDelta {
    config::business_hours().delta(start, end)
}

/// Business/after-hours split against the process-wide window
pub fn hours_breakdown(start: NaiveDateTime, end: NaiveDateTime) -> (TimeDelta, TimeDelta) {
    config::business_hours().split(start, end)
}
