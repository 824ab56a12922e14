//! subnet-views: a multi-view terminal demo (menu, subnet table, address
//! form, type picker).

pub mod config;
pub mod data;
pub mod error;
pub mod logging;
pub mod report;
pub mod tui;
