#![forbid(unsafe_code)]

//! Light/dark theme rules.
//!
//! A viewer either has an explicit stored preference or none at all. With no
//! stored value the theme follows the time of day: dark outside [5, 17).
//! Presence of the stored key is what disables the automatic rule; the
//! value only picks which theme to apply.

/// Storage key for the persisted theme choice.
pub const THEME_KEY: &str = "theme";

/// Stored sentinel for the dark theme.
pub const DARK_VALUE: &str = "dark";

/// Stored sentinel for the light theme.
pub const LIGHT_VALUE: &str = "light";

/// The viewer's persisted theme choice, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemePreference {
    Dark,
    Light,
    /// No explicit choice has ever been stored.
    Unset,
}

impl ThemePreference {
    /// Interpret a raw stored value.
    ///
    /// Any stored value other than the dark sentinel selects the light
    /// theme; only a missing key is `Unset`.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some(v) if v == DARK_VALUE => Self::Dark,
            Some(_) => Self::Light,
            None => Self::Unset,
        }
    }

    /// The sentinel to persist for this preference, if it is explicit.
    #[must_use]
    pub fn stored_value(self) -> Option<&'static str> {
        match self {
            Self::Dark => Some(DARK_VALUE),
            Self::Light => Some(LIGHT_VALUE),
            Self::Unset => None,
        }
    }

    /// Whether this preference selects the dark theme, given a fallback for
    /// the unset case.
    #[must_use]
    pub fn is_dark_or(self, fallback: bool) -> bool {
        match self {
            Self::Dark => true,
            Self::Light => false,
            Self::Unset => fallback,
        }
    }
}

/// Automatic theme rule for viewers with no stored preference: dark from
/// 17:00 through 04:59, light from 05:00 through 16:59.
#[must_use]
pub fn dark_for_hour(hour: u32) -> bool {
    hour >= 17 || hour < 5
}
