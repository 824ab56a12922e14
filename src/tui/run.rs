//! TUI effects boundary: event loop and terminal lifecycle.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui.
//! Kept minimal: all intelligence lives in the pure layers.
//!
//! Single-threaded: the loop blocks on the next terminal event, hands it to
//! the program, and redraws.

use std::io;

use crossterm::ExecutableCommand;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::backend::CrosstermBackend;
use ratatui::{Frame, Terminal, TerminalOptions, Viewport};

use crate::config::AppConfig;
use crate::error::AppError;

use super::state::{Command, Model};
use super::theme::Theme;
use super::update::update;
use super::view::render;

/// Lines used by the inline (non alternate screen) viewport.
const INLINE_HEIGHT: u16 = 22;

// ============================================================================
// PROGRAM CONTRACT
// ============================================================================

/// Hooks the event loop drives.
pub trait Program {
    /// Called once before the first frame.
    fn init(&mut self) -> Command {
        Command::Noop
    }

    /// Handle one terminal event.
    fn update(&mut self, event: Event) -> Command;

    /// Draw the current state. Must not change state.
    fn view(&self, frame: &mut Frame);
}

/// The application program: the model plus the theme it renders with.
#[derive(Debug)]
pub struct App<'t> {
    pub model: Model,
    theme: &'t Theme,
}

impl<'t> App<'t> {
    pub fn new(model: Model, theme: &'t Theme) -> Self {
        App { model, theme }
    }
}

impl Program for App<'_> {
    fn init(&mut self) -> Command {
        tracing::info!(back_mode = ?self.model.back_mode, "session started");
        self.model.apply_focus();
        Command::Noop
    }

    fn update(&mut self, event: Event) -> Command {
        match event {
            // Release/repeat events only arrive on some platforms; act on presses.
            Event::Key(key) if key.kind == KeyEventKind::Press => update(&mut self.model, key),
            // Resize and friends just trigger the redraw.
            _ => Command::Noop,
        }
    }

    fn view(&self, frame: &mut Frame) {
        render(&self.model, self.theme, frame);
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

type Term = Terminal<CrosstermBackend<io::Stdout>>;

/// Set up the terminal for TUI mode.
fn setup_terminal(alt_screen: bool) -> io::Result<Term> {
    enable_raw_mode()?;
    let backend = CrosstermBackend::new(io::stdout());
    if alt_screen {
        io::stdout().execute(EnterAlternateScreen)?;
        Terminal::new(backend)
    } else {
        Terminal::with_options(
            backend,
            TerminalOptions {
                viewport: Viewport::Inline(INLINE_HEIGHT),
            },
        )
    }
}

/// Restore the terminal to normal mode.
fn restore_terminal(alt_screen: bool) -> io::Result<()> {
    disable_raw_mode()?;
    if alt_screen {
        io::stdout().execute(LeaveAlternateScreen)?;
    }
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook(alt_screen: bool) {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal(alt_screen);
        original_hook(panic_info);
    }));
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run a program until it returns `Command::Quit`.
///
/// The terminal is restored on every exit path that returns, including a
/// setup that failed halfway.
pub fn run<P: Program>(program: &mut P, config: &AppConfig) -> Result<(), AppError> {
    install_panic_hook(config.alt_screen);
    let mut terminal = match setup_terminal(config.alt_screen) {
        Ok(terminal) => terminal,
        Err(err) => {
            let _ = restore_terminal(config.alt_screen);
            return Err(err.into());
        }
    };

    let result = event_loop(program, &mut terminal);
    settle(result, restore_terminal(config.alt_screen))
}

/// Combine the loop outcome with the restore outcome. A loop error is
/// reported in preference to a restore error.
fn settle(result: Result<(), AppError>, restored: io::Result<()>) -> Result<(), AppError> {
    result?;
    restored?;
    Ok(())
}

fn event_loop<P: Program>(program: &mut P, terminal: &mut Term) -> Result<(), AppError> {
    if program.init() == Command::Quit {
        return Ok(());
    }

    loop {
        terminal.draw(|frame| program.view(frame))?;

        let event = event::read()?;
        if program.update(event) == Command::Quit {
            tracing::info!("event loop stopped");
            return Ok(());
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
