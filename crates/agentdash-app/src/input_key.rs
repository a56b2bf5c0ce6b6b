//! Abstract input key event, independent of terminal library.
//!
//! Keeps agentdash-app free of crossterm; the TUI converts at its boundary.

/// Abstract input key event, independent of terminal library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKey {
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+c, ...)
    CharCtrl(char),

    Up,
    Down,
    Home,
    End,

    Enter,
    Esc,
    Tab,
}
