#![forbid(unsafe_code)]

//! examdeck binary.
//!
//! # Running
//!
//! ```sh
//! cargo run -p examdeck
//! ```
//!
//! # Controls
//!
//! - t: toggle light/dark theme (persisted)
//! - q / Ctrl+C: quit
//!
//! Logs go to stderr; set `EXAMDECK_LOG` (or `RUST_LOG`) to see them.

use examdeck::app::ExamDeck;
use examdeck::page::Page;
use examdeck_core::SystemClock;
use examdeck_runtime::{FilePreferenceStore, Program};
use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::try_from_env("EXAMDECK_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let store = FilePreferenceStore::open_default();
    let model = ExamDeck::new(Page::exam_landing(), store, SystemClock);
    let mut program = Program::new(model);
    if let Err(error) = program.run() {
        eprintln!("examdeck: {error}");
        std::process::exit(1);
    }
}
