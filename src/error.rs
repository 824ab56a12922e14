//! Error type shared by the state machine and the runtime.
//!
//! Every variant is terminal: nothing in the app retries.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Terminal failures of the application.
#[derive(Debug, Error)]
pub enum AppError {
    /// The type list reported a highlight that does not map back to a label.
    #[error("selected list item could not be recovered (index {index:?})")]
    SelectionLost { index: Option<usize> },

    /// The terminal could not be set up, drawn to, or read from.
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),

    /// The log file could not be opened.
    #[error("cannot open log file {path}: {source}")]
    Logging {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
