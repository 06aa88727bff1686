#![forbid(unsafe_code)]

//! Exam schedule windows.
//!
//! Each window maps one page element to a half-open time interval: the
//! element is visible from `start` (inclusive) until `end` (exclusive).
//! Windows are static configuration (operators edit the table below) and
//! are evaluated independently of each other, so overlap is fine.
//!
//! Timestamps are naive wall-clock values interpreted in the host-local
//! zone, matching how the schedule was published.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime};

/// A fixed interval during which one schedule element is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleWindow {
    /// Key of the page element this window controls.
    pub key: &'static str,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl ScheduleWindow {
    /// Whether the window is open at `now`: `start <= now < end`.
    #[must_use]
    pub fn is_open(&self, now: NaiveDateTime) -> bool {
        self.start <= now && now < self.end
    }
}

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(h, min, 0))
        .expect("schedule table holds valid calendar dates")
}

static WINDOWS: LazyLock<[ScheduleWindow; 10]> = LazyLock::new(|| {
    [
        ScheduleWindow {
            key: "jadwal-2025-10-28",
            start: at(2025, 10, 28, 7, 55),
            end: at(2025, 10, 28, 17, 0),
        },
        ScheduleWindow {
            key: "jadwal-2025-10-29",
            start: at(2025, 10, 29, 9, 55),
            end: at(2025, 10, 29, 17, 0),
        },
        ScheduleWindow {
            key: "jadwal-2025-10-30",
            start: at(2025, 10, 30, 7, 55),
            end: at(2025, 10, 30, 17, 0),
        },
        ScheduleWindow {
            key: "jadwal-2025-10-31",
            start: at(2025, 10, 31, 9, 55),
            end: at(2025, 10, 31, 17, 0),
        },
        ScheduleWindow {
            key: "jadwal-2025-11-4",
            start: at(2025, 11, 4, 9, 55),
            end: at(2025, 11, 4, 17, 0),
        },
        ScheduleWindow {
            key: "jadwal-2025-11-5",
            start: at(2025, 11, 5, 7, 55),
            end: at(2025, 11, 5, 17, 0),
        },
        ScheduleWindow {
            key: "jadwal-2025-11-6",
            start: at(2025, 11, 6, 7, 55),
            end: at(2025, 11, 6, 17, 0),
        },
        ScheduleWindow {
            key: "jadwal-2025-11-7",
            start: at(2025, 11, 7, 9, 55),
            end: at(2025, 11, 7, 17, 0),
        },
        ScheduleWindow {
            key: "jadwal-2025-11-10",
            start: at(2025, 11, 10, 13, 50),
            end: at(2025, 11, 10, 17, 0),
        },
        ScheduleWindow {
            key: "jadwal-2025-12-22",
            start: at(2025, 12, 22, 9, 55),
            end: at(2026, 1, 15, 17, 0),
        },
    ]
});

/// The published exam schedule.
#[must_use]
pub fn exam_windows() -> &'static [ScheduleWindow] {
    &*WINDOWS
}
