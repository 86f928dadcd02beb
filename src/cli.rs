//! CLI interface for workhours
//!
//! Defines the command-line surface using clap and the small parsers it
//! needs: the business-window argument (`--window "07:00-22:00"`, also
//! `7AM-10PM` forms, matching what the settings screens historically
//! accepted) and strict timestamp arguments for the breakdown and split
//! commands.
//!
//! # Example
//!
//! ```bash
//! # Billable hours between two step timestamps
//! workhours hours "2024-01-05 16:00" "2024-01-08 10:00"
//!
//! # Segment listing with a custom window, as JSON
//! workhours --window 9AM-5PM breakdown "2024-01-05 16:00" "2024-01-08 10:00" --json
//! ```

use chrono::{NaiveDateTime, NaiveTime};
use clap::{Parser, Subcommand};
use workhours_core::parse::parse_timestamp;
use workhours_core::{BusinessHours, Result, WorkhoursError};

/// Compute business hours between job timestamps
#[derive(Parser, Debug, Clone)]
#[command(name = "workhours")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Business window, e.g. "07:00-22:00" or "7AM-10PM" (default 07:00-22:00)
    #[arg(long, short = 'w', global = true, env = "WORKHOURS_WINDOW")]
    pub window: Option<String>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Show informational output (default is warnings and errors only)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Business hours between two timestamps, rounded to two decimals
    ///
    /// Tolerant like the reports: malformed or inconsistent inputs are
    /// logged and reported as 0.00 instead of failing.
    Hours {
        /// Interval start (ISO-8601 or "YYYY-MM-DD HH:MM")
        start: String,
        /// Interval end
        end: String,
    },
    /// List every business-time segment of an interval
    Breakdown {
        /// Interval start (ISO-8601 or "YYYY-MM-DD HH:MM")
        start: String,
        /// Interval end
        end: String,
    },
    /// Split an interval into business and after-hours durations
    Split {
        /// Interval start (ISO-8601 or "YYYY-MM-DD HH:MM")
        start: String,
        /// Interval end
        end: String,
    },
}

/// Parse a `--window` argument into a validated business window
///
/// Accepts `START-END` where each side is a 24-hour `HH:MM` or a 12-hour
/// form like `7AM` or `7:30PM`. The `start < end` invariant is enforced by
/// [`BusinessHours::new`].
///
/// # Examples
/// ```
/// use workhours::cli::parse_window;
///
/// let window = parse_window("09:00-17:30").unwrap();
/// assert_eq!(window.to_string(), "09:00-17:30");
///
/// let window = parse_window("7AM-10PM").unwrap();
/// assert_eq!(window.to_string(), "07:00-22:00");
///
/// assert!(parse_window("10PM-7AM").is_err());
/// assert!(parse_window("sometime").is_err());
/// ```
pub fn parse_window(window_str: &str) -> Result<BusinessHours> {
    let (start_str, end_str) = window_str.split_once('-').ok_or_else(|| {
        WorkhoursError::InvalidArgument(format!(
            "window '{window_str}' must look like '07:00-22:00' or '7AM-10PM'"
        ))
    })?;
    BusinessHours::new(
        parse_window_time(start_str.trim())?,
        parse_window_time(end_str.trim())?,
    )
}

/// Parse one side of a window argument
fn parse_window_time(time_str: &str) -> Result<NaiveTime> {
    for format in ["%H:%M", "%I:%M%p"] {
        if let Ok(time) = NaiveTime::parse_from_str(time_str, format) {
            return Ok(time);
        }
    }
    // Hour-only forms like "7AM": chrono cannot build a time without a
    // minute field, so splice one in before the meridiem suffix.
    let digits = time_str.chars().take_while(char::is_ascii_digit).count();
    if digits > 0 {
        let (hour, meridiem) = time_str.split_at(digits);
        if let Ok(time) = NaiveTime::parse_from_str(&format!("{hour}:00{meridiem}"), "%I:%M%p") {
            return Ok(time);
        }
    }
    Err(WorkhoursError::InvalidArgument(format!(
        "unrecognized time '{time_str}'; use '07:00', '7AM' or '7:30PM'"
    )))
}

/// Parse a strict timestamp argument for the breakdown and split commands
///
/// These commands accept only already-valid timestamps; the value still
/// goes through the same parse chain as the tolerant path, but a failure is
/// a hard CLI error. Offset-bearing inputs contribute their wall-clock
/// reading.
pub fn parse_cli_timestamp(value: &str) -> Result<NaiveDateTime> {
    Ok(parse_timestamp(value)?.wall_clock())
}
