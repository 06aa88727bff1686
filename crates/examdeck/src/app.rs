#![forbid(unsafe_code)]

//! The dashboard model.
//!
//! Owns the page, the preference store, and the clock, and maps messages to
//! the behavior routines. Startup applies the stored theme (or the system
//! hint), rewrites the SEB links once, and runs every display routine a
//! first time; after that only the tickers and two key events drive work.

use std::io::{self, Write};
use std::time::Duration;

use chrono::Timelike;
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use examdeck_core::{Clock, ThemePreference, exam_windows, theme};
use examdeck_runtime::{Cmd, Model, PreferenceStore, Subscription, Ticker};

use crate::page::Page;
use crate::{controller, hint, render};

/// Ticker ids. Duplicates would be skipped by the subscription set, so
/// every recurring concern gets its own.
mod ticks {
    use examdeck_runtime::SubId;

    pub const CLOCK: SubId = 1;
    pub const SCHEDULE: SubId = 2;
    pub const GREETING: SubId = 3;
    pub const SCHEME: SubId = 4;
}

/// Everything that can happen to the dashboard.
pub enum Msg {
    /// A raw terminal event.
    Term(Event),
    /// 1 s cadence: repaint the clock text.
    ClockTick,
    /// 1 s cadence: sweep the schedule windows.
    ScheduleTick,
    /// 60 s cadence: re-pick the greeting (and auto-theme).
    GreetingTick,
    /// The current system color-scheme reading.
    SchemeHint(Option<bool>),
}

impl From<Event> for Msg {
    fn from(event: Event) -> Self {
        Self::Term(event)
    }
}

/// The exam-day dashboard.
pub struct ExamDeck<P: PreferenceStore, C: Clock> {
    page: Page,
    store: P,
    clock: C,
    last_hint: Option<bool>,
}

impl<P: PreferenceStore, C: Clock> ExamDeck<P, C> {
    #[must_use]
    pub fn new(page: Page, store: P, clock: C) -> Self {
        Self {
            page,
            store,
            clock,
            last_hint: None,
        }
    }

    /// The current page state.
    #[must_use]
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// The preference store.
    #[must_use]
    pub fn store(&self) -> &P {
        &self.store
    }

    fn toggle_theme(&mut self) {
        let to_dark = !self.page.night_mode();
        controller::apply_theme(&mut self.page, to_dark);
        let value = if to_dark {
            theme::DARK_VALUE
        } else {
            theme::LIGHT_VALUE
        };
        self.store.set(theme::THEME_KEY, value);
        tracing::info!(theme = value, "theme preference stored");
    }

    fn on_scheme_hint(&mut self, reading: Option<bool>) {
        if reading == self.last_hint {
            return;
        }
        self.last_hint = reading;
        // An explicit choice outranks the system from the moment it exists.
        if self.store.get(theme::THEME_KEY).is_some() {
            return;
        }
        if let Some(dark) = reading {
            tracing::debug!(prefers_dark = dark, "following system color scheme");
            controller::apply_theme(&mut self.page, dark);
        }
    }

    fn on_terminal_event(&mut self, event: Event) -> Cmd<Msg> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') => Cmd::Quit,
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Cmd::Quit,
                KeyCode::Char('t') => {
                    self.toggle_theme();
                    Cmd::None
                }
                _ => Cmd::None,
            },
            _ => Cmd::None,
        }
    }
}

impl<P: PreferenceStore, C: Clock> Model for ExamDeck<P, C> {
    type Message = Msg;

    fn init(&mut self) -> Cmd<Msg> {
        let stored = self.store.get(theme::THEME_KEY);
        let preference = ThemePreference::from_stored(stored.as_deref());
        self.last_hint = hint::system_prefers_dark();
        controller::apply_theme(
            &mut self.page,
            preference.is_dark_or(self.last_hint.unwrap_or(false)),
        );

        controller::rewrite_seb_links(&mut self.page);

        let now = self.clock.now_local();
        controller::update_clock(&mut self.page, now);
        controller::set_current_date(&mut self.page, self.clock.now_utc());
        controller::show_affirmative_message(&mut self.page, &self.store, now.hour());
        controller::show_exam_schedules(&mut self.page, exam_windows(), now);

        tracing::info!(night = self.page.night_mode(), "dashboard ready");
        Cmd::None
    }

    fn update(&mut self, msg: Msg) -> Cmd<Msg> {
        match msg {
            Msg::Term(event) => self.on_terminal_event(event),
            Msg::ClockTick => {
                controller::update_clock(&mut self.page, self.clock.now_local());
                Cmd::None
            }
            Msg::ScheduleTick => {
                controller::show_exam_schedules(
                    &mut self.page,
                    exam_windows(),
                    self.clock.now_local(),
                );
                Cmd::None
            }
            Msg::GreetingTick => {
                controller::show_affirmative_message(
                    &mut self.page,
                    &self.store,
                    self.clock.now_local().hour(),
                );
                Cmd::None
            }
            Msg::SchemeHint(reading) => {
                self.on_scheme_hint(reading);
                Cmd::None
            }
        }
    }

    fn subscriptions(&self) -> Vec<Box<dyn Subscription<Msg>>> {
        vec![
            Box::new(Ticker::new(ticks::CLOCK, Duration::from_secs(1), || {
                Msg::ClockTick
            })),
            Box::new(Ticker::new(ticks::SCHEDULE, Duration::from_secs(1), || {
                Msg::ScheduleTick
            })),
            Box::new(Ticker::new(ticks::GREETING, Duration::from_secs(60), || {
                Msg::GreetingTick
            })),
            Box::new(Ticker::new(ticks::SCHEME, Duration::from_secs(60), || {
                Msg::SchemeHint(hint::system_prefers_dark())
            })),
        ]
    }

    fn view(&self, out: &mut dyn Write) -> io::Result<()> {
        render::draw(&self.page, out)
    }
}
