//! Runtime configuration, assembled from CLI flags in `main`.

use std::path::PathBuf;

use crate::tui::theme::Theme;

/// How `esc` walks back through the screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackMode {
    /// Step the screen enumeration down by one. Can land on screens that
    /// were never visited.
    #[default]
    Decrement,
    /// Return to the screen that was actually shown before.
    History,
}

/// Output format for the `rows` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Aligned plain-text table.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}

/// Settings for an interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Draw on the alternate screen (restored on exit).
    pub alt_screen: bool,
    pub back_mode: BackMode,
    /// Use the colored theme.
    pub color: bool,
    /// Write tracing output here; logging is off when None.
    pub log_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            alt_screen: true,
            back_mode: BackMode::Decrement,
            color: true,
            log_file: None,
        }
    }
}

impl AppConfig {
    /// Build the theme this configuration asks for.
    pub fn theme(&self) -> Theme {
        Theme::for_color(self.color)
    }
}
