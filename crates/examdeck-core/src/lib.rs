#![forbid(unsafe_code)]

//! Domain rules for the examdeck dashboard.
//!
//! Everything in this crate is a pure function of a wall-clock instant or a
//! stored preference value: the time-of-day greeting partition, the
//! light/dark theme rules, the exam schedule windows, clock and date
//! formatting, and the Safe Exam Browser link rewrite. No I/O happens here;
//! the application crate owns the terminal and the preference file.

pub mod clock;
pub mod greeting;
pub mod links;
pub mod schedule;
pub mod theme;

pub use clock::{Clock, FixedClock, SystemClock, format_clock, format_long_date};
pub use greeting::GreetingPeriod;
pub use links::to_seb_url;
pub use schedule::{ScheduleWindow, exam_windows};
pub use theme::{ThemePreference, dark_for_hour};
