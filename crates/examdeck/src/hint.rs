#![forbid(unsafe_code)]

//! System color-scheme hint.
//!
//! Desktop environments expose a light/dark preference; `dark-light` knows
//! how to ask each of them. `None` means the platform gave no answer, in
//! which case the time-of-day rule decides.

use dark_light::Mode;

/// Whether the system currently prefers a dark color scheme.
#[must_use]
pub fn system_prefers_dark() -> Option<bool> {
    match dark_light::detect() {
        Ok(Mode::Dark) => Some(true),
        Ok(Mode::Light) => Some(false),
        Ok(Mode::Unspecified) => None,
        Err(error) => {
            tracing::debug!(%error, "color-scheme detection failed");
            None
        }
    }
}
