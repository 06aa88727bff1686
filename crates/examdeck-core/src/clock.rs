#![forbid(unsafe_code)]

//! Wall-clock access and display formatting.
//!
//! The [`Clock`] trait is the one seam between the dashboard and real time.
//! Domain decisions (greeting, schedule visibility, auto-theme) read the
//! host-local wall clock; only the long date display is pinned to UTC+7,
//! the zone the schedule is published in, so every viewer sees the same
//! date line. [`FixedClock`] stands in for the system clock in tests.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Datelike, Duration, Local, NaiveDateTime, NaiveTime, Timelike, Utc};

/// Offset of the schedule's home zone (WIB, UTC+7, no DST).
const HOME_ZONE_OFFSET_HOURS: i64 = 7;

/// Indonesian weekday names, indexed from Monday.
const WEEKDAYS: [&str; 7] = [
    "Senin", "Selasa", "Rabu", "Kamis", "Jumat", "Sabtu", "Minggu",
];

/// Indonesian month names, indexed from January.
const MONTHS: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// A source of the current time.
pub trait Clock {
    /// The host-local wall-clock time, without zone information.
    fn now_local(&self) -> NaiveDateTime;

    /// The current instant in UTC.
    fn now_utc(&self) -> DateTime<Utc>;
}

/// The real system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_local(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }

    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A settable clock for deterministic tests.
///
/// Clones share the same underlying time, so a test can keep one handle and
/// move time forward while the model reads through another.
#[derive(Debug, Clone)]
pub struct FixedClock {
    inner: Arc<Mutex<(NaiveDateTime, DateTime<Utc>)>>,
}

impl FixedClock {
    /// A clock frozen at the given local wall time.
    ///
    /// The UTC reading is derived by treating the wall time as UTC, which
    /// is enough for tests that do not inspect the date line.
    #[must_use]
    pub fn at(local: NaiveDateTime) -> Self {
        let utc = DateTime::<Utc>::from_naive_utc_and_offset(local, Utc);
        Self {
            inner: Arc::new(Mutex::new((local, utc))),
        }
    }

    /// A clock frozen at an explicit local/UTC pair.
    #[must_use]
    pub fn at_instant(local: NaiveDateTime, utc: DateTime<Utc>) -> Self {
        Self {
            inner: Arc::new(Mutex::new((local, utc))),
        }
    }

    /// Move the local wall time.
    pub fn set_local(&self, local: NaiveDateTime) {
        self.inner.lock().unwrap().0 = local;
    }

    /// Move the UTC instant.
    pub fn set_utc(&self, utc: DateTime<Utc>) {
        self.inner.lock().unwrap().1 = utc;
    }
}

impl Clock for FixedClock {
    fn now_local(&self) -> NaiveDateTime {
        self.inner.lock().unwrap().0
    }

    fn now_utc(&self) -> DateTime<Utc> {
        self.inner.lock().unwrap().1
    }
}

/// Clock display text: hours, minutes, and seconds each zero-padded to two
/// digits.
#[must_use]
pub fn format_clock(t: NaiveTime) -> String {
    format!("{:02}:{:02}:{:02}", t.hour(), t.minute(), t.second())
}

/// Long-form date in the schedule's home zone: full weekday, numeric day,
/// full month, numeric year. `"Selasa, 28 Oktober 2025"`.
#[must_use]
pub fn format_long_date(now: DateTime<Utc>) -> String {
    let wall = (now + Duration::hours(HOME_ZONE_OFFSET_HOURS)).naive_utc();
    let weekday = WEEKDAYS[wall.weekday().num_days_from_monday() as usize];
    let month = MONTHS[wall.month0() as usize];
    format!("{weekday}, {} {month} {}", wall.day(), wall.year())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn local(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .and_then(|date| date.and_hms_opt(h, min, s))
            .unwrap()
    }

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        DateTime::<Utc>::from_naive_utc_and_offset(local(y, m, d, h, min, 0), Utc)
    }

    #[test]
    fn clock_text_zero_pads_every_field() {
        let t = NaiveTime::from_hms_opt(9, 5, 3).unwrap();
        assert_eq!(format_clock(t), "09:05:03");
    }

    #[test]
    fn clock_text_keeps_wide_fields() {
        let t = NaiveTime::from_hms_opt(23, 59, 58).unwrap();
        assert_eq!(format_clock(t), "23:59:58");
    }

    #[test]
    fn date_line_is_pinned_to_the_home_zone() {
        // 18:30 UTC is already the 28th in UTC+7.
        assert_eq!(
            format_long_date(utc(2025, 10, 27, 18, 30)),
            "Selasa, 28 Oktober 2025"
        );
        // 16:59 UTC on the 28th is still the 28th there...
        assert_eq!(
            format_long_date(utc(2025, 10, 28, 16, 59)),
            "Selasa, 28 Oktober 2025"
        );
        // ...and one minute later it is the 29th.
        assert_eq!(
            format_long_date(utc(2025, 10, 28, 17, 0)),
            "Rabu, 29 Oktober 2025"
        );
    }

    #[test]
    fn fixed_clock_clones_share_time() {
        let clock = FixedClock::at(local(2025, 10, 28, 8, 0, 0));
        let handle = clock.clone();
        handle.set_local(local(2025, 10, 28, 9, 30, 0));
        assert_eq!(clock.now_local(), local(2025, 10, 28, 9, 30, 0));
    }
}
