#![forbid(unsafe_code)]

//! Time-of-day greeting periods.
//!
//! The 24-hour clock is partitioned into four fixed buckets. Exactly one
//! period is active at any hour; a boundary hour belongs to the period that
//! starts there.
//!
//! # Example
//! ```
//! use examdeck_core::GreetingPeriod;
//!
//! assert_eq!(GreetingPeriod::from_hour(5), GreetingPeriod::Morning);
//! assert_eq!(GreetingPeriod::from_hour(16), GreetingPeriod::Afternoon);
//! assert_eq!(GreetingPeriod::from_hour(23), GreetingPeriod::Night);
//! ```

/// One of the four fixed time-of-day buckets used to pick a greeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GreetingPeriod {
    /// [5, 12)
    Morning,
    /// [12, 17)
    Afternoon,
    /// [17, 21)
    Evening,
    /// [21, 24) ∪ [0, 5)
    Night,
}

impl GreetingPeriod {
    /// The period containing the given hour (0..=23).
    ///
    /// Hours outside the clock range fold into `Night`, which is also where
    /// the wrap-around segment lives.
    #[must_use]
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=11 => Self::Morning,
            12..=16 => Self::Afternoon,
            17..=20 => Self::Evening,
            _ => Self::Night,
        }
    }

    /// Key of the page section this period reveals.
    #[must_use]
    pub fn section_key(self) -> &'static str {
        match self {
            Self::Morning => "morning-message",
            Self::Afternoon => "afternoon-message",
            Self::Evening => "evening-message",
            Self::Night => "night-message",
        }
    }

    /// All four periods, in clock order starting from morning.
    #[must_use]
    pub fn all() -> [Self; 4] {
        [Self::Morning, Self::Afternoon, Self::Evening, Self::Night]
    }
}
