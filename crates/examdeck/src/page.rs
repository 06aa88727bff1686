#![forbid(unsafe_code)]

//! The in-memory page.
//!
//! [`Page`] is the element tree the behavior routines mutate and the
//! renderer paints: an ordered list of keyed elements plus the root
//! night-mode marker. It doubles as the substitutable fake for tests,
//! which read element state back directly.

use chrono::Datelike;
use examdeck_core::{ScheduleWindow, exam_windows};

use crate::surface::Surface;

/// Well-known element keys.
pub mod ids {
    pub const THEME_TOGGLE: &str = "theme-toggle";
    pub const THEME_DARK_ICON: &str = "theme-toggle-dark-icon";
    pub const THEME_LIGHT_ICON: &str = "theme-toggle-light-icon";
    pub const LIVE_CLOCK: &str = "live-clock";
    pub const LIVE_DATE: &str = "live-date";
    pub const GREETING_TITLE: &str = "affirmative-title";
    pub const SCHEDULE_PLACEHOLDER: &str = "jadwal-placeholder";
    pub const SEB_LINK: &str = "seb";
}

/// Style classes the routines and the renderer agree on.
pub mod classes {
    /// Marker for links that must open in the Safe Exam Browser.
    pub const SEB: &str = "seb";

    /// Toggle-control style pairs, swapped as a unit when the theme flips.
    pub const CHIP_LIGHT: &str = "chip-light";
    pub const CHIP_DARK: &str = "chip-dark";
    pub const INK_LIGHT: &str = "ink-light";
    pub const INK_DARK: &str = "ink-dark";
}

/// One keyed element on the page.
#[derive(Debug, Clone)]
pub struct Element {
    pub key: String,
    pub text: String,
    pub visible: bool,
    pub classes: Vec<String>,
    pub href: Option<String>,
}

impl Element {
    fn new(key: &str, text: &str) -> Self {
        Self {
            key: key.to_owned(),
            text: text.to_owned(),
            visible: true,
            classes: Vec::new(),
            href: None,
        }
    }

    fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    fn with_classes(mut self, classes: &[&str]) -> Self {
        self.classes = classes.iter().map(|c| (*c).to_owned()).collect();
        self
    }

    fn with_href(mut self, href: &str) -> Self {
        self.href = Some(href.to_owned());
        self
    }

    /// Whether this element carries the given style class.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// The element tree, in render order.
#[derive(Debug, Clone, Default)]
pub struct Page {
    night_mode: bool,
    elements: Vec<Element>,
}

const MONTHS_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "Mei", "Jun", "Jul", "Agu", "Sep", "Okt", "Nov", "Des",
];

fn short_date(date: chrono::NaiveDate) -> String {
    format!(
        "{} {} {}",
        date.day(),
        MONTHS_SHORT[date.month0() as usize],
        date.year()
    )
}

fn schedule_label(window: &ScheduleWindow) -> String {
    use chrono::Timelike;
    let start = window.start;
    let end = window.end;
    if start.date() == end.date() {
        format!(
            "Ujian {} · {:02}.{:02}–{:02}.{:02}",
            short_date(start.date()),
            start.hour(),
            start.minute(),
            end.hour(),
            end.minute()
        )
    } else {
        format!(
            "Ujian susulan {} – {}",
            short_date(start.date()),
            short_date(end.date())
        )
    }
}

fn schedule_href(window: &ScheduleWindow) -> String {
    let slug = window.key.strip_prefix("jadwal-").unwrap_or(window.key);
    format!("https://ujian.contoh.sch.id/seb/{slug}")
}

impl Page {
    /// A page with no elements at all; every routine must tolerate it.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The exam-day landing page.
    #[must_use]
    pub fn exam_landing() -> Self {
        let mut elements = vec![
            Element::new(ids::GREETING_TITLE, "Memuat pesan..."),
            Element::new(
                "morning-message",
                "Selamat pagi! Semoga lancar ujiannya hari ini.",
            )
            .hidden(),
            Element::new(
                "afternoon-message",
                "Selamat siang! Tetap fokus dan teliti sampai akhir.",
            )
            .hidden(),
            Element::new(
                "evening-message",
                "Selamat sore! Jangan lupa beristirahat setelah ujian.",
            )
            .hidden(),
            Element::new(
                "night-message",
                "Selamat malam! Istirahat yang cukup untuk besok.",
            )
            .hidden(),
            Element::new(ids::LIVE_CLOCK, "--:--:--"),
            Element::new(ids::LIVE_DATE, ""),
            Element::new(ids::THEME_TOGGLE, "Mode tampilan")
                .with_classes(&[classes::CHIP_LIGHT, classes::INK_LIGHT]),
            Element::new(ids::THEME_DARK_ICON, "☾"),
            Element::new(ids::THEME_LIGHT_ICON, "☀").hidden(),
        ];

        for window in exam_windows() {
            elements.push(
                Element::new(window.key, &schedule_label(window))
                    .hidden()
                    .with_classes(&[classes::SEB])
                    .with_href(&schedule_href(window)),
            );
        }

        elements.push(Element::new(
            ids::SCHEDULE_PLACEHOLDER,
            "Tidak ada jadwal ujian yang sedang berlangsung.",
        ));
        elements.push(
            Element::new(ids::SEB_LINK, "Buka peramban ujian (Safe Exam Browser)")
                .with_href("https://ujian.contoh.sch.id/seb/start"),
        );

        Self {
            night_mode: false,
            elements,
        }
    }

    fn find(&self, key: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.key == key)
    }

    fn find_mut(&mut self, key: &str) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.key == key)
    }

    /// Whether the root carries the night-mode marker.
    #[must_use]
    pub fn night_mode(&self) -> bool {
        self.night_mode
    }

    /// Look up an element by key.
    #[must_use]
    pub fn element(&self, key: &str) -> Option<&Element> {
        self.find(key)
    }

    /// Whether the element exists and is visible.
    #[must_use]
    pub fn is_visible(&self, key: &str) -> bool {
        self.find(key).is_some_and(|e| e.visible)
    }

    /// All elements, in render order.
    #[must_use]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }
}

impl Surface for Page {
    fn has(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    fn set_text(&mut self, key: &str, text: &str) {
        if let Some(element) = self.find_mut(key) {
            element.text = text.to_owned();
        }
    }

    fn set_visible(&mut self, key: &str, visible: bool) {
        if let Some(element) = self.find_mut(key) {
            element.visible = visible;
        }
    }

    fn night_mode(&self) -> bool {
        self.night_mode
    }

    fn set_night_mode(&mut self, on: bool) {
        self.night_mode = on;
    }

    fn swap_classes(&mut self, key: &str, remove: &[&str], add: &[&str]) {
        if let Some(element) = self.find_mut(key) {
            element.classes.retain(|c| !remove.contains(&c.as_str()));
            for class in add {
                if !element.classes.iter().any(|c| c == class) {
                    element.classes.push((*class).to_owned());
                }
            }
        }
    }

    fn link_target(&self, key: &str) -> Option<String> {
        self.find(key).and_then(|e| e.href.clone())
    }

    fn set_link_target(&mut self, key: &str, href: &str) {
        if let Some(element) = self.find_mut(key) {
            if element.href.is_some() {
                element.href = Some(href.to_owned());
            }
        }
    }

    fn keys_with_class(&self, class: &str) -> Vec<String> {
        self.elements
            .iter()
            .filter(|e| e.has_class(class))
            .map(|e| e.key.clone())
            .collect()
    }
}
