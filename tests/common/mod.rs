//! Common test utilities for workhours tests
//!
//! The business window is process-wide state, so every test that touches it
//! (or depends on the default) goes through [`config_guard`], which
//! serializes those tests and resets the default window both on entry and
//! when the guard drops.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use once_cell::sync::Lazy;
use std::sync::{Mutex, MutexGuard};
use workhours::{BusinessHours, set_business_hours};

static CONFIG_MUTEX: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

pub struct ConfigGuard(#[allow(dead_code)] MutexGuard<'static, ()>);

impl Drop for ConfigGuard {
    fn drop(&mut self) {
        reset_window();
    }
}

pub fn config_guard() -> ConfigGuard {
    let guard = CONFIG_MUTEX
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    reset_window();
    ConfigGuard(guard)
}

fn reset_window() {
    let default = BusinessHours::default();
    set_business_hours(default.start(), default.end()).expect("default window is valid");
}

#[allow(dead_code)]
pub fn dt(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .unwrap()
        .and_hms_opt(h, mi, 0)
        .unwrap()
}

#[allow(dead_code)]
pub fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}
