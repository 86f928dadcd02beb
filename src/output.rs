//! Output formatting for the workhours CLI
//!
//! Two formats, matching the rest of the reporting tooling:
//! - table output for terminal reading (prettytable),
//! - JSON output for piping into other tools (`--json`).

use chrono::{NaiveDateTime, TimeDelta};
use prettytable::{Table, format, row};
use serde_json::json;
use workhours_core::{BusinessHours, Segment};

/// Render a duration as `9h 05m`
///
/// Sub-minute remainders are truncated; the billable figures are carried by
/// the two-decimal hour values, not by this display form.
pub fn format_duration(delta: TimeDelta) -> String {
    let minutes = delta.num_minutes();
    format!("{}h {:02}m", minutes / 60, minutes % 60)
}

/// Render the result of the `hours` command
pub fn format_hours(hours: f64, json: bool) -> String {
    if json {
        json!({ "business_hours": hours }).to_string()
    } else {
        format!("{hours:.2}")
    }
}

/// Render the result of the `breakdown` command
pub fn format_breakdown(window: &BusinessHours, segments: &[Segment], json: bool) -> String {
    let total = segments
        .iter()
        .fold(TimeDelta::zero(), |acc, s| acc + s.duration());

    if json {
        return json!({
            "window": window,
            "segments": segments,
            "total_minutes": total.num_minutes(),
        })
        .to_string();
    }

    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);
    table.set_titles(row![b -> "Start", b -> "End", b -> "Duration"]);
    for segment in segments {
        table.add_row(row![
            segment.start().format("%Y-%m-%d %H:%M"),
            segment.end().format("%Y-%m-%d %H:%M"),
            format_duration(segment.duration()),
        ]);
    }
    table.add_row(row![b -> "TOTAL", "", b -> format_duration(total)]);
    format!("Business window {window}, Mon-Fri\n{table}")
}

/// Render the result of the `split` command
pub fn format_split(
    window: &BusinessHours,
    start: NaiveDateTime,
    end: NaiveDateTime,
    business: TimeDelta,
    after_hours: TimeDelta,
    json: bool,
) -> String {
    if json {
        return json!({
            "window": window,
            "start": start,
            "end": end,
            "business_minutes": business.num_minutes(),
            "after_hours_minutes": after_hours.num_minutes(),
            "total_minutes": (business + after_hours).num_minutes(),
        })
        .to_string();
    }

    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);
    table.set_titles(row![b -> "Portion", b -> "Duration"]);
    table.add_row(row!["Business", format_duration(business)]);
    table.add_row(row!["After-hours", format_duration(after_hours)]);
    table.add_row(row![b -> "TOTAL", b -> format_duration(business + after_hours)]);
    format!("Business window {window}, Mon-Fri\n{table}")
}
