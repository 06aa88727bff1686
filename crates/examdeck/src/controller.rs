#![forbid(unsafe_code)]

//! Page-behavior routines.
//!
//! Each routine is a direct mapping from the wall clock or the stored
//! preference to element state, recomputed in full on every call; there is
//! no cached derived state to invalidate. All of them tolerate missing
//! elements.

use chrono::{DateTime, NaiveDateTime, Utc};
use examdeck_core::{
    GreetingPeriod, ScheduleWindow, dark_for_hour, format_clock, format_long_date, theme,
    to_seb_url,
};
use examdeck_runtime::PreferenceStore;

use crate::page::{classes, ids};
use crate::surface::Surface;

/// Put the page into dark or light dress: root marker, the two toggle
/// icons, and the toggle control's style-class pairs.
///
/// The icon left visible names the *next* action, so the sun shows while
/// dark. Silently does nothing when any of the toggle elements is missing.
pub fn apply_theme(surface: &mut dyn Surface, is_dark: bool) {
    let required = [ids::THEME_TOGGLE, ids::THEME_DARK_ICON, ids::THEME_LIGHT_ICON];
    if required.iter().any(|key| !surface.has(key)) {
        return;
    }

    surface.set_night_mode(is_dark);
    surface.set_visible(ids::THEME_DARK_ICON, !is_dark);
    surface.set_visible(ids::THEME_LIGHT_ICON, is_dark);
    if is_dark {
        surface.swap_classes(
            ids::THEME_TOGGLE,
            &[classes::CHIP_LIGHT, classes::INK_LIGHT],
            &[classes::CHIP_DARK, classes::INK_DARK],
        );
    } else {
        surface.swap_classes(
            ids::THEME_TOGGLE,
            &[classes::CHIP_DARK, classes::INK_DARK],
            &[classes::CHIP_LIGHT, classes::INK_LIGHT],
        );
    }
    tracing::debug!(night = is_dark, "theme applied");
}

/// Write the zero-padded `HH:MM:SS` clock text. Safe at any frequency.
pub fn update_clock(surface: &mut dyn Surface, now: NaiveDateTime) {
    surface.set_text(ids::LIVE_CLOCK, &format_clock(now.time()));
}

/// Write the long-form date line, pinned to the schedule's home zone.
pub fn set_current_date(surface: &mut dyn Surface, now: DateTime<Utc>) {
    surface.set_text(ids::LIVE_DATE, &format_long_date(now));
}

/// Reveal the greeting for the current hour, hiding the other three and
/// the loading title.
///
/// While no theme preference is stored the theme also follows the clock
/// here: dark outside [5, 17). Presence of the stored key, not its value,
/// is what hands control back to the viewer.
pub fn show_affirmative_message(
    surface: &mut dyn Surface,
    store: &dyn PreferenceStore,
    hour: u32,
) {
    for period in GreetingPeriod::all() {
        surface.set_visible(period.section_key(), false);
    }
    surface.set_visible(ids::GREETING_TITLE, false);

    let active = GreetingPeriod::from_hour(hour);
    surface.set_visible(active.section_key(), true);

    if store.get(theme::THEME_KEY).is_none() {
        apply_theme(surface, dark_for_hour(hour));
    }
}

/// Show every schedule element whose window is open (`start <= now < end`),
/// hide the rest, and show the placeholder exactly when nothing is open.
pub fn show_exam_schedules(
    surface: &mut dyn Surface,
    windows: &[ScheduleWindow],
    now: NaiveDateTime,
) {
    let mut active = 0usize;
    for window in windows {
        if !surface.has(window.key) {
            continue;
        }
        let open = window.is_open(now);
        if open {
            active += 1;
        }
        surface.set_visible(window.key, open);
    }
    surface.set_visible(ids::SCHEDULE_PLACEHOLDER, active == 0);
}

/// Rewrite one element's `https://` link to the `sebs://` scheme.
///
/// Links on other schemes, including ones already rewritten, are left
/// alone, so the routine is idempotent.
pub fn convert_to_seb_link(surface: &mut dyn Surface, key: &str) {
    let Some(href) = surface.link_target(key) else {
        return;
    };
    if let Some(rewritten) = to_seb_url(&href) {
        tracing::debug!(key, from = %href, to = %rewritten, "seb link rewritten");
        surface.set_link_target(key, &rewritten);
    }
}

/// One-time startup pass: rewrite the dedicated SEB element and every
/// element carrying the SEB marker class.
pub fn rewrite_seb_links(surface: &mut dyn Surface) {
    convert_to_seb_link(surface, ids::SEB_LINK);
    for key in surface.keys_with_class(classes::SEB) {
        convert_to_seb_link(surface, &key);
    }
}
