//! Core business-hours calendar engine for workhours
//!
//! This crate turns raw wall-clock intervals into billable business time.
//! A configurable weekly work window (default 07:00-22:00, Monday-Friday)
//! is applied to an interval to produce:
//!
//! - a [`calendar`] breakdown: every contiguous span of the interval that
//!   falls inside the window on a weekday,
//! - a business-time delta and its after-hours complement,
//! - a tolerant [`hours::calculate_hours`] entry point that accepts native
//!   timestamps or several string encodings and never fails its caller.
//!
//! The window lives in a single process-wide configuration cell (see
//! [`config`]); every computation takes one snapshot of it up front, so a
//! concurrent settings change can never tear a running breakdown.

pub mod calendar;
pub mod config;
pub mod error;
pub mod hours;
pub mod parse;
pub mod types;

// Re-export commonly used types
pub use config::{business_end, business_hours, business_start, set_business_hours};
pub use error::{Result, WorkhoursError};
pub use hours::calculate_hours;
pub use types::{BusinessHours, Segment, TimestampInput};
