//! agentdash-tui - Terminal UI for agentdash
//!
//! This crate provides the ratatui-based terminal interface and the theme
//! system every widget draws with. The runner owns a single [`theme::Theme`]
//! and passes it by reference into the view.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

// Re-export main entry points
pub use runner::run;
pub use theme::Theme;
