//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// One-line title and session summary
    pub header: Rect,

    /// Bordered session list (remaining space)
    pub sessions: Rect,

    /// One-line keybinding hints
    pub status_bar: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(1), // Header
        Constraint::Min(3),    // Sessions (border + at least one row)
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        sessions: chunks[1],
        status_bar: chunks[2],
    }
}
