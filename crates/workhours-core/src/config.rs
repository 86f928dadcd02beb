//! Process-wide business-hours configuration
//!
//! One window exists for the lifetime of the process. It starts at the
//! default 07:00-22:00 and is replaced wholesale by [`set_business_hours`];
//! the two bounds are never written independently, so a reader can never
//! observe a torn window. Readers take a value snapshot per call — a
//! breakdown that spans many loop iterations computes every segment against
//! the same window even if a settings change lands mid-computation.

use crate::error::Result;
use crate::types::BusinessHours;
use chrono::NaiveTime;
use once_cell::sync::Lazy;
use std::sync::RwLock;
use tracing::info;

static CONFIG: Lazy<RwLock<BusinessHours>> = Lazy::new(|| RwLock::new(BusinessHours::default()));

/// Snapshot the current business window
///
/// The returned value is a copy; later reconfiguration does not affect it.
pub fn business_hours() -> BusinessHours {
    *CONFIG.read().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Start of the configured business day
pub fn business_start() -> NaiveTime {
    business_hours().start()
}

/// End of the configured business day
pub fn business_end() -> NaiveTime {
    business_hours().end()
}

/// Replace the business window
///
/// Validates `start < end` before touching the shared cell, so a rejected
/// update leaves the prior window in place. On success the new window is
/// published atomically and is visible to every subsequent call.
///
/// # Examples
/// ```
/// use workhours_core::config::set_business_hours;
/// use chrono::NaiveTime;
///
/// let nine = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
/// let five = NaiveTime::from_hms_opt(17, 0, 0).unwrap();
/// assert!(set_business_hours(nine, five).is_ok());
/// assert!(set_business_hours(five, nine).is_err());
/// ```
pub fn set_business_hours(start: NaiveTime, end: NaiveTime) -> Result<()> {
    let window = BusinessHours::new(start, end)?;
    *CONFIG.write().unwrap_or_else(|poisoned| poisoned.into_inner()) = window;
    info!("business hours set to {window}");
    Ok(())
}
