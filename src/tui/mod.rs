//! TUI module for the interactive terminal interface.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: the model, screen enumeration and commands
//! - `update`: key handling and transitions (pure over the model)
//! - `view`: rendering (pure)
//! - `widgets`: table, list and text-input adapters
//! - `theme`: immutable styling
//! - `run`: terminal effects and the event loop

pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;
pub mod widgets;
