//! End-to-end model tests: a fixed clock, an in-memory store, and the real
//! page, driven through the same messages the tickers and the terminal
//! would send.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use examdeck::app::{ExamDeck, Msg};
use examdeck::page::{Page, ids};
use examdeck_core::theme::{DARK_VALUE, LIGHT_VALUE, THEME_KEY};
use examdeck_core::{FixedClock, exam_windows};
use examdeck_runtime::{Cmd, MemoryStore, Model, PreferenceStore};

fn local(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(h, min, 0))
        .unwrap()
}

fn key(c: char) -> Msg {
    Msg::Term(Event::Key(KeyEvent::new(
        KeyCode::Char(c),
        KeyModifiers::NONE,
    )))
}

fn deck_at(
    now: NaiveDateTime,
    store: MemoryStore,
) -> (ExamDeck<MemoryStore, FixedClock>, FixedClock) {
    let clock = FixedClock::at(now);
    let mut deck = ExamDeck::new(Page::exam_landing(), store, clock.clone());
    let _ = deck.init();
    (deck, clock)
}

#[test]
fn init_with_no_preference_follows_the_hour() {
    let (deck, _) = deck_at(local(2025, 10, 28, 22, 0), MemoryStore::new());
    assert!(deck.page().night_mode(), "22:00 is dark territory");

    let (deck, _) = deck_at(local(2025, 10, 28, 10, 0), MemoryStore::new());
    assert!(!deck.page().night_mode(), "10:00 is light territory");
}

#[test]
fn init_honors_a_stored_dark_preference_at_noon() {
    let store = MemoryStore::with(THEME_KEY, DARK_VALUE);
    let (deck, _) = deck_at(local(2025, 10, 28, 12, 0), store);
    assert!(deck.page().night_mode());
}

#[test]
fn init_honors_a_stored_light_preference_at_midnight() {
    let store = MemoryStore::with(THEME_KEY, LIGHT_VALUE);
    let (deck, _) = deck_at(local(2025, 10, 29, 0, 0), store);
    assert!(!deck.page().night_mode());
}

#[test]
fn init_shows_the_greeting_for_the_current_hour() {
    let (deck, _) = deck_at(local(2025, 10, 28, 8, 0), MemoryStore::new());
    assert!(deck.page().is_visible("morning-message"));
    assert!(!deck.page().is_visible("night-message"));
    assert!(!deck.page().is_visible(ids::GREETING_TITLE));
}

#[test]
fn init_rewrites_every_seb_link() {
    let (deck, _) = deck_at(local(2025, 10, 28, 8, 0), MemoryStore::new());
    for window in exam_windows() {
        let href = deck.page().element(window.key).unwrap().href.clone().unwrap();
        assert!(href.starts_with("sebs://"), "{} kept {href}", window.key);
    }
}

#[test]
fn init_writes_clock_and_date_text() {
    let clock = FixedClock::at_instant(
        local(2025, 10, 28, 9, 5),
        DateTime::<Utc>::from_naive_utc_and_offset(local(2025, 10, 28, 2, 5), Utc),
    );
    let mut deck = ExamDeck::new(Page::exam_landing(), MemoryStore::new(), clock);
    let _ = deck.init();

    assert_eq!(
        deck.page().element(ids::LIVE_CLOCK).unwrap().text,
        "09:05:00"
    );
    // 02:05 UTC is 09:05 the same day in the schedule's home zone.
    assert_eq!(
        deck.page().element(ids::LIVE_DATE).unwrap().text,
        "Selasa, 28 Oktober 2025"
    );
}

#[test]
fn clock_tick_tracks_the_moving_clock() {
    let (mut deck, clock) = deck_at(local(2025, 10, 28, 9, 5), MemoryStore::new());
    clock.set_local(local(2025, 10, 28, 9, 5) + chrono::Duration::seconds(3));
    let _ = deck.update(Msg::ClockTick);
    assert_eq!(
        deck.page().element(ids::LIVE_CLOCK).unwrap().text,
        "09:05:03"
    );
}

#[test]
fn schedule_tick_opens_and_closes_windows_half_open() {
    let (mut deck, clock) = deck_at(local(2025, 10, 28, 7, 54), MemoryStore::new());
    let key = "jadwal-2025-10-28";
    assert!(!deck.page().is_visible(key));
    assert!(deck.page().is_visible(ids::SCHEDULE_PLACEHOLDER));

    clock.set_local(local(2025, 10, 28, 7, 55));
    let _ = deck.update(Msg::ScheduleTick);
    assert!(deck.page().is_visible(key), "inclusive start");
    assert!(!deck.page().is_visible(ids::SCHEDULE_PLACEHOLDER));

    clock.set_local(local(2025, 10, 28, 16, 59));
    let _ = deck.update(Msg::ScheduleTick);
    assert!(deck.page().is_visible(key));

    clock.set_local(local(2025, 10, 28, 17, 0));
    let _ = deck.update(Msg::ScheduleTick);
    assert!(!deck.page().is_visible(key), "exclusive end");
    assert!(deck.page().is_visible(ids::SCHEDULE_PLACEHOLDER));
}

#[test]
fn toggle_stores_the_preference_and_flips_the_page() {
    let (mut deck, _) = deck_at(local(2025, 10, 28, 10, 0), MemoryStore::new());
    assert!(!deck.page().night_mode());

    let _ = deck.update(key('t'));
    assert!(deck.page().night_mode());
    assert_eq!(deck.store().get(THEME_KEY).as_deref(), Some(DARK_VALUE));

    let _ = deck.update(key('t'));
    assert!(!deck.page().night_mode());
    assert_eq!(deck.store().get(THEME_KEY).as_deref(), Some(LIGHT_VALUE));
}

#[test]
fn greeting_tick_cannot_override_an_explicit_choice() {
    let (mut deck, clock) = deck_at(local(2025, 10, 28, 10, 0), MemoryStore::new());
    let _ = deck.update(key('t'));
    assert!(deck.page().night_mode());

    // Noon would force light under the automatic rule.
    clock.set_local(local(2025, 10, 28, 12, 0));
    let _ = deck.update(Msg::GreetingTick);
    assert!(deck.page().night_mode(), "stored choice must win");
    assert!(deck.page().is_visible("afternoon-message"));
}

#[test]
fn greeting_tick_keeps_following_the_clock_until_a_choice_is_made() {
    let (mut deck, clock) = deck_at(local(2025, 10, 28, 16, 0), MemoryStore::new());
    assert!(!deck.page().night_mode());

    clock.set_local(local(2025, 10, 28, 17, 0));
    let _ = deck.update(Msg::GreetingTick);
    assert!(deck.page().night_mode());
    assert!(deck.page().is_visible("evening-message"));
}

#[test]
fn scheme_hint_applies_only_without_a_stored_preference() {
    let (mut deck, _) = deck_at(local(2025, 10, 28, 10, 0), MemoryStore::new());

    let _ = deck.update(Msg::SchemeHint(Some(false)));
    let _ = deck.update(Msg::SchemeHint(Some(true)));
    assert!(deck.page().night_mode(), "hint flips an undecided page");

    // Toggling off dark stores "light"; further hints must bounce off.
    let _ = deck.update(key('t'));
    assert!(!deck.page().night_mode());
    let _ = deck.update(Msg::SchemeHint(Some(false)));
    let _ = deck.update(Msg::SchemeHint(Some(true)));
    assert!(!deck.page().night_mode());
}

#[test]
fn q_and_ctrl_c_quit() {
    let (mut deck, _) = deck_at(local(2025, 10, 28, 10, 0), MemoryStore::new());
    assert!(matches!(deck.update(key('q')), Cmd::Quit));

    let ctrl_c = Msg::Term(Event::Key(KeyEvent::new(
        KeyCode::Char('c'),
        KeyModifiers::CONTROL,
    )));
    assert!(matches!(deck.update(ctrl_c), Cmd::Quit));

    assert!(matches!(deck.update(key('x')), Cmd::None));
}

#[test]
fn model_declares_all_four_tickers() {
    let (deck, _) = deck_at(local(2025, 10, 28, 10, 0), MemoryStore::new());
    let subs = deck.subscriptions();
    assert_eq!(subs.len(), 4);
    let mut sub_ids: Vec<_> = subs.iter().map(|s| s.id()).collect();
    sub_ids.sort_unstable();
    sub_ids.dedup();
    assert_eq!(sub_ids.len(), 4, "ticker ids must be distinct");
}
