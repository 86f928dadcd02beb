//! workhours - business-hours calendar engine and CLI
//!
//! This crate wraps [`workhours_core`] in a terminal front-end:
//! - compute billable business hours between two timestamps,
//! - list the business-time segments of an interval,
//! - split an interval into business and after-hours portions.
//!
//! The engine applies a configurable weekly work window (default
//! 07:00-22:00, Monday-Friday) to raw wall-clock intervals; weekends and
//! time outside the window count as after-hours.
//!
//! # Examples
//!
//! ```
//! use workhours::calculate_hours;
//!
//! // Friday 16:00 through Monday 10:00 spans a weekend; only the Friday
//! // evening and Monday morning window time is billable.
//! let hours = calculate_hours(Some("2024-01-05 16:00"), Some("2024-01-08 10:00"));
//! assert_eq!(hours, 9.0);
//! ```

pub mod cli;
pub mod output;

// Re-export the engine API
pub use workhours_core::{
    BusinessHours, Result, Segment, TimestampInput, WorkhoursError, business_end, business_hours,
    business_start, calculate_hours, set_business_hours,
};
pub use workhours_core::calendar::{business_hours_breakdown, business_hours_delta, hours_breakdown};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
