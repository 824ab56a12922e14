//! Tracing setup.
//!
//! The TUI owns stdout and stderr while it runs, so tracing output only goes
//! to a file, and only when one is asked for. Without a log file no
//! subscriber is installed and the `tracing` macros cost nothing.

use std::fs::{self, OpenOptions};
use std::path::Path;

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::EnvFilter;

use crate::error::AppError;

/// Filter used when `RUST_LOG` is unset or invalid.
const DEFAULT_FILTER: &str = "info";

/// Install a file subscriber when `log_file` is set.
///
/// Returns the [`WorkerGuard`] that must be held for the lifetime of the
/// program so buffered lines are flushed on exit.
///
/// # Errors
///
/// Returns [`AppError::Logging`] if the file or its parent directory cannot
/// be created.
pub fn init_logging(log_file: Option<&Path>) -> Result<Option<WorkerGuard>, AppError> {
    let Some(path) = log_file else {
        return Ok(None);
    };

    let (writer, guard) = open_log_writer(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .init();

    tracing::debug!(path = %path.display(), "logging initialized");
    Ok(Some(guard))
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Create parent directories, open the file for appending, and wrap it in a
/// non-blocking writer.
fn open_log_writer(path: &Path) -> Result<(NonBlocking, WorkerGuard), AppError> {
    let logging_error = |source| AppError::Logging {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(logging_error)?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(logging_error)?;

    Ok(tracing_appender::non_blocking(file))
}
