#![forbid(unsafe_code)]

//! Runtime plumbing for the examdeck dashboard.
//!
//! The pieces here are deliberately generic over the message type so the
//! application model can be driven deterministically in tests:
//!
//! - [`program`]: a small Elm-style loop. A [`Model`](program::Model)
//!   receives messages, returns commands, and paints the screen after each
//!   batch of work. Handlers run to completion; nothing is re-entrant.
//! - [`subscription`]: fixed-interval tickers feeding the loop through a
//!   channel, stopped as a set when the program shuts down.
//! - [`store`]: the persisted preference key-value contract, with a file
//!   implementation and an in-memory one for tests.

pub mod error;
pub mod program;
pub mod store;
pub mod subscription;

pub use error::{Result, RuntimeError};
pub use program::{Cmd, Event, Model, Program, ProgramConfig};
pub use store::{FilePreferenceStore, MemoryStore, PreferenceStore};
pub use subscription::{ManualSubscription, StopSignal, SubId, Subscription, SubscriptionSet, Ticker};
