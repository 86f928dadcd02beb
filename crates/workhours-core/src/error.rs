//! Error types for workhours
//!
//! The failure modes of the engine form a small closed set. Only
//! [`WorkhoursError::InvalidConfiguration`] is ever surfaced to callers as a
//! hard error; every other variant is absorbed by the tolerant
//! [`crate::hours::calculate_hours`] boundary, which logs it and reports a
//! zero result so a single malformed record cannot take down an aggregate
//! report.
//!
//! Missing input (a `None` or empty endpoint) is deliberately *not* an error
//! variant: in-progress jobs legitimately have no end timestamp, so absence
//! is handled before the strict path and produces no log entry.

use chrono::{FixedOffset, NaiveDateTime, NaiveTime};
use thiserror::Error;

/// Main error type for workhours operations
#[derive(Error, Debug)]
pub enum WorkhoursError {
    /// Business window rejected because the start is not before the end
    #[error("invalid business hours: start {start} must be before end {end}")]
    InvalidConfiguration {
        /// Proposed window start
        start: NaiveTime,
        /// Proposed window end
        end: NaiveTime,
    },

    /// Timestamp matched none of the accepted encodings
    #[error("unrecognized timestamp: {0:?}")]
    ParseTimestamp(String),

    /// Both endpoints carry a UTC offset and the offsets differ
    #[error("start and end UTC offsets differ ({start} vs {end})")]
    TimezoneMismatch {
        /// Offset on the start endpoint
        start: FixedOffset,
        /// Offset on the end endpoint
        end: FixedOffset,
    },

    /// Resolved end precedes the resolved start
    #[error("end {end} precedes start {start}")]
    ReversedRange {
        /// Resolved start of the interval
        start: NaiveDateTime,
        /// Resolved end of the interval
        end: NaiveDateTime,
    },

    /// Any other failure during resolution or computation
    #[error("internal failure: {0}")]
    Internal(String),

    /// Invalid argument from a caller-facing surface
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Convenience type alias for Results in workhours
pub type Result<T> = std::result::Result<T, WorkhoursError>;
