#![forbid(unsafe_code)]

//! Runtime error type.

use std::io;
use std::path::PathBuf;

/// Convenience alias used throughout the runtime crate.
pub type Result<T> = std::result::Result<T, RuntimeError>;

/// Everything that can go wrong outside the pure domain logic.
///
/// UI lookups that miss are not errors; absent page elements degrade to a
/// no-op by contract. What remains is terminal I/O and the preference file.
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    #[error("terminal i/o failed: {source}")]
    Terminal {
        #[from]
        source: io::Error,
    },

    #[error("preference store at {}: {source}", path.display())]
    Store { path: PathBuf, source: io::Error },
}
