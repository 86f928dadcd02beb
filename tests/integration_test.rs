//! Integration tests for workhours
//!
//! Exercises the public API end to end: the process-wide window, the
//! segmentation and aggregation surface, and the tolerant calculation
//! boundary the reports call per row.

mod common;

use chrono::TimeDelta;
use common::{config_guard, dt, t};
use workhours::{
    BusinessHours, TimestampInput, WorkhoursError, business_end, business_hours,
    business_hours_breakdown, business_hours_delta, business_start, calculate_hours,
    hours_breakdown, set_business_hours,
};

#[test]
fn default_window_is_applied() {
    let _guard = config_guard();
    assert_eq!(business_start(), t(7, 0));
    assert_eq!(business_end(), t(22, 0));
    assert_eq!(business_hours().to_string(), "07:00-22:00");
}

#[test]
fn friday_to_monday_crosses_the_weekend() {
    let _guard = config_guard();
    let start = dt(2024, 1, 5, 16, 0);
    let end = dt(2024, 1, 8, 10, 0);

    assert_eq!(business_hours_delta(start, end), TimeDelta::hours(9));

    let segments = business_hours_breakdown(start, end);
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0].start(), dt(2024, 1, 5, 16, 0));
    assert_eq!(segments[0].end(), dt(2024, 1, 5, 22, 0));
    assert_eq!(segments[1].start(), dt(2024, 1, 8, 7, 0));
    assert_eq!(segments[1].end(), dt(2024, 1, 8, 10, 0));

    let (business, after_hours) = hours_breakdown(start, end);
    assert_eq!(business, TimeDelta::hours(9));
    assert_eq!(after_hours, TimeDelta::hours(57));
    assert_eq!(business + after_hours, end - start);
}

#[test]
fn weekend_only_interval_is_all_after_hours() {
    let _guard = config_guard();
    let start = dt(2024, 1, 6, 0, 0);
    let end = dt(2024, 1, 8, 0, 0);

    assert!(business_hours_breakdown(start, end).is_empty());
    assert_eq!(business_hours_delta(start, end), TimeDelta::zero());

    let (business, after_hours) = hours_breakdown(start, end);
    assert_eq!(business, TimeDelta::zero());
    assert_eq!(after_hours, TimeDelta::hours(48));
}

#[test]
fn reconfigured_window_changes_results() {
    let _guard = config_guard();
    set_business_hours(t(9, 0), t(17, 0)).unwrap();
    assert_eq!(
        business_hours_delta(dt(2024, 1, 5, 8, 30), dt(2024, 1, 5, 9, 30)),
        TimeDelta::minutes(30)
    );
    assert_eq!(
        calculate_hours(Some("2024-01-05 08:00:00"), Some("2024-01-05 10:00:00")),
        1.0
    );
}

#[test]
fn invalid_window_is_rejected_and_previous_kept() {
    let _guard = config_guard();
    set_business_hours(t(8, 0), t(18, 0)).unwrap();
    let err = set_business_hours(t(18, 0), t(8, 0)).unwrap_err();
    assert!(matches!(err, WorkhoursError::InvalidConfiguration { .. }));
    assert_eq!(business_start(), t(8, 0));
    assert_eq!(business_end(), t(18, 0));
}

#[test]
fn calculate_hours_accepts_every_documented_encoding() {
    let _guard = config_guard();
    // native naive timestamps
    assert_eq!(
        calculate_hours(Some(dt(2024, 1, 8, 7, 0)), Some(dt(2024, 1, 8, 22, 0))),
        15.0
    );
    // ISO with seconds
    assert_eq!(
        calculate_hours(Some("2024-01-05T16:00:00"), Some("2024-01-08T10:00:00")),
        9.0
    );
    // ISO without seconds, space separator
    assert_eq!(
        calculate_hours(Some("2024-01-08 07:00"), Some("2024-01-08 22:00")),
        15.0
    );
    // equal offsets on both sides
    assert_eq!(
        calculate_hours(
            Some("2024-01-08T10:00:00+01:00"),
            Some("2024-01-08T12:00:00+01:00")
        ),
        2.0
    );
}

#[test]
fn calculate_hours_matches_worked_example() {
    let _guard = config_guard();
    assert_eq!(
        calculate_hours(Some("2025-08-14 15:47"), Some("2025-08-15 16:08")),
        15.35
    );
}

#[test]
fn calculate_hours_failure_modes_all_report_zero() {
    let _guard = config_guard();
    // missing endpoints, silent
    assert_eq!(calculate_hours(None::<TimestampInput>, Some("2024-01-08 10:00")), 0.0);
    assert_eq!(calculate_hours(Some(""), Some("2024-01-08 10:00")), 0.0);
    // malformed value
    assert_eq!(calculate_hours(Some("bad"), Some("2024-01-01T10:00")), 0.0);
    // mismatched offsets
    assert_eq!(
        calculate_hours(
            Some("2024-01-01T10:00:00+00:00"),
            Some("2024-01-01T11:00:00+01:00")
        ),
        0.0
    );
    // reversed range
    assert_eq!(
        calculate_hours(Some("2025-01-01 10:00:00"), Some("2025-01-01 09:00:00")),
        0.0
    );
    // mixed naive and offset-aware endpoints (documented asymmetry: refused
    // as incomparable, not validated as a timezone mismatch)
    assert_eq!(
        calculate_hours(Some("2024-01-08T10:00:00+01:00"), Some("2024-01-08T12:00")),
        0.0
    );
}

#[derive(Clone, Default)]
struct LogBuffer(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

impl std::io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Run `f` with an error-level subscriber installed, returning what it logged
fn capture_error_logs(f: impl FnOnce()) -> String {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::ERROR)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    let bytes = buffer.0.lock().unwrap().clone();
    String::from_utf8(bytes).expect("log output is utf-8")
}

#[test]
fn failure_modes_log_errors_but_missing_input_stays_silent() {
    let _guard = config_guard();

    // missing or blank endpoints: zero and no log entry at all
    let logs = capture_error_logs(|| {
        assert_eq!(
            calculate_hours(None::<TimestampInput>, Some("2024-01-08 10:00")),
            0.0
        );
        assert_eq!(calculate_hours(Some(""), Some("2024-01-08 10:00")), 0.0);
    });
    assert!(logs.is_empty(), "missing input must not log, got: {logs}");

    // malformed value: zero plus an error entry naming the input
    let logs = capture_error_logs(|| {
        assert_eq!(calculate_hours(Some("bad"), Some("2024-01-01T10:00")), 0.0);
    });
    assert!(logs.contains("ERROR"));
    assert!(logs.contains("unrecognized timestamp"));

    // mismatched offsets
    let logs = capture_error_logs(|| {
        assert_eq!(
            calculate_hours(
                Some("2024-01-01T10:00:00+00:00"),
                Some("2024-01-01T11:00:00+01:00")
            ),
            0.0
        );
    });
    assert!(logs.contains("ERROR"));
    assert!(logs.contains("offsets differ"));

    // reversed range
    let logs = capture_error_logs(|| {
        assert_eq!(
            calculate_hours(Some("2025-01-01 10:00:00"), Some("2025-01-01 09:00:00")),
            0.0
        );
    });
    assert!(logs.contains("ERROR"));
    assert!(logs.contains("precedes"));

    // mixed naive and offset-aware endpoints
    let logs = capture_error_logs(|| {
        assert_eq!(
            calculate_hours(Some("2024-01-08T10:00:00+01:00"), Some("2024-01-08T12:00")),
            0.0
        );
    });
    assert!(logs.contains("ERROR"));
    assert!(logs.contains("internal failure"));
}

#[test]
fn explicit_window_api_is_independent_of_the_global() {
    let _guard = config_guard();
    let window = BusinessHours::new(t(9, 0), t(17, 0)).unwrap();
    // global window stays at the default while an explicit window computes
    assert_eq!(
        window.delta(dt(2024, 1, 8, 8, 0), dt(2024, 1, 8, 10, 0)),
        TimeDelta::hours(1)
    );
    assert_eq!(
        business_hours_delta(dt(2024, 1, 8, 8, 0), dt(2024, 1, 8, 10, 0)),
        TimeDelta::hours(2)
    );
}

#[test]
fn after_hours_complement_holds_across_a_long_interval() {
    let _guard = config_guard();
    let start = dt(2024, 2, 1, 3, 17);
    let end = dt(2024, 2, 19, 23, 44);
    let (business, after_hours) = hours_breakdown(start, end);
    assert_eq!(business + after_hours, end - start);
    assert_eq!(business, business_hours_delta(start, end));
    assert!(business >= TimeDelta::zero());
}
