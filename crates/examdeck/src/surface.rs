#![forbid(unsafe_code)]

//! The view-port seam.
//!
//! Behavior routines talk to the page through this trait instead of
//! touching the renderer, so the decision logic can be exercised against an
//! in-memory page. Elements are addressed by stable string keys and every
//! one of them is optional: an operation on a missing key is a silent
//! no-op, never an error, because the dashboard may run with widgets
//! removed from the page.

/// Named mutations and lookups over the page's elements.
pub trait Surface {
    /// Whether an element with this key exists on the page.
    fn has(&self, key: &str) -> bool;

    /// Replace an element's text. Missing key: no-op.
    fn set_text(&mut self, key: &str, text: &str);

    /// Show or hide an element. Missing key: no-op.
    fn set_visible(&mut self, key: &str, visible: bool);

    /// Whether the page root carries the night-mode marker.
    fn night_mode(&self) -> bool;

    /// Set or clear the root night-mode marker.
    fn set_night_mode(&mut self, on: bool);

    /// Remove one set of style classes from an element and add another.
    /// Missing key: no-op.
    fn swap_classes(&mut self, key: &str, remove: &[&str], add: &[&str]);

    /// An element's link target, if it has one.
    fn link_target(&self, key: &str) -> Option<String>;

    /// Replace an element's link target. Missing key or linkless element:
    /// no-op.
    fn set_link_target(&mut self, key: &str, href: &str);

    /// Keys of every element carrying the given style class.
    fn keys_with_class(&self, class: &str) -> Vec<String>;
}
