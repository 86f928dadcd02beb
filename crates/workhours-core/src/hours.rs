//! Tolerant business-hours calculation
//!
//! [`calculate_hours`] is the boundary the reporting surfaces call once per
//! row. Reports must never crash on a single malformed record, so this is
//! the one place where failures are absorbed: every error from the strict
//! inner path is logged and reported as `0.0`. Missing endpoints are the
//! benign in-progress-job case and produce no log at all.
//!
//! The strict logic lives in [`calculate_hours_checked`], which fails
//! loudly; the tolerance is this one deliberate wrapper, not scattered
//! defensive handling.

use crate::calendar;
use crate::error::{Result, WorkhoursError};
use crate::parse::{ParsedTimestamp, parse_timestamp};
use crate::types::TimestampInput;
use tracing::error;

/// Business hours between two points, rounded to two decimals
///
/// Accepts native timestamps or text in any encoding the parse chain
/// understands. `None` or blank text on either side yields `0.0` silently;
/// any parse failure, mismatched UTC offsets, reversed range, or internal
/// failure is logged as an error and also yields `0.0`. This function never
/// panics and never surfaces an error.
///
/// # Examples
/// ```
/// use workhours_core::calculate_hours;
/// use workhours_core::types::TimestampInput;
///
/// // Friday afternoon through Monday morning, default 07:00-22:00 window
/// let hours = calculate_hours(Some("2024-01-05T16:00:00"), Some("2024-01-08T10:00:00"));
/// assert_eq!(hours, 9.0);
///
/// // An in-progress job has no end timestamp yet
/// assert_eq!(calculate_hours(Some("2024-01-05T16:00:00"), None::<TimestampInput>), 0.0);
///
/// // Malformed rows degrade to zero instead of failing the report
/// assert_eq!(calculate_hours(Some("bad"), Some("2024-01-08T10:00:00")), 0.0);
/// ```
pub fn calculate_hours<S, E>(start: Option<S>, end: Option<E>) -> f64
where
    S: Into<TimestampInput>,
    E: Into<TimestampInput>,
{
    let (Some(start), Some(end)) = (start, end) else {
        return 0.0;
    };
    let (start, end) = (start.into(), end.into());
    if is_blank(&start) || is_blank(&end) {
        return 0.0;
    }
    match calculate_hours_checked(start, end) {
        Ok(hours) => hours,
        Err(e) => {
            error!("error calculating hours: {e}");
            0.0
        }
    }
}

/// Strict variant of [`calculate_hours`]
///
/// Resolves both inputs through the parse chain, validates them, and
/// computes the business-time delta against one snapshot of the
/// process-wide window. Validation order:
///
/// 1. both endpoints carrying differing UTC offsets is a
///    [`WorkhoursError::TimezoneMismatch`];
/// 2. exactly one endpoint carrying an offset maps to
///    [`WorkhoursError::Internal`] — the offset check deliberately fires
///    only when both sides are offset-aware, and the mixed case is refused
///    as incomparable rather than validated more strictly (see the note on
///    this asymmetry in DESIGN.md);
/// 3. a resolved end before the resolved start is a
///    [`WorkhoursError::ReversedRange`].
///
/// When both offsets are present and equal, the difference of the
/// wall-clock readings equals the difference of the instants, so the
/// calendar math runs on wall-clock values in both cases.
pub fn calculate_hours_checked(start: TimestampInput, end: TimestampInput) -> Result<f64> {
    let start = resolve(start)?;
    let end = resolve(end)?;

    match (start.offset(), end.offset()) {
        (Some(s), Some(e)) if s != e => {
            return Err(WorkhoursError::TimezoneMismatch { start: s, end: e });
        }
        (Some(_), None) | (None, Some(_)) => {
            return Err(WorkhoursError::Internal(
                "cannot compare offset-aware and naive timestamps".to_string(),
            ));
        }
        _ => {}
    }

    let start = start.wall_clock();
    let end = end.wall_clock();
    if end < start {
        return Err(WorkhoursError::ReversedRange { start, end });
    }

    let delta = calendar::business_hours_delta(start, end);
    Ok(round_hours(delta.num_milliseconds() as f64 / 3_600_000.0))
}

fn resolve(input: TimestampInput) -> Result<ParsedTimestamp> {
    match input {
        TimestampInput::DateTime(dt) => Ok(ParsedTimestamp::Naive(dt)),
        TimestampInput::Zoned(dt) => Ok(ParsedTimestamp::Zoned(dt)),
        TimestampInput::Text(text) => parse_timestamp(&text),
    }
}

fn is_blank(input: &TimestampInput) -> bool {
    matches!(input, TimestampInput::Text(text) if text.trim().is_empty())
}

/// Round to two decimals, nudging past float representation error first
///
/// A value that is mathematically exactly `.xx5` can sit a hair below the
/// boundary in binary floating point and round down; the `1e-9` nudge keeps
/// such values on the expected side.
fn round_hours(hours: f64) -> f64 {
    ((hours + 1e-9) * 100.0).round() / 100.0
}
