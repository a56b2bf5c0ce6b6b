//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Leave the dashboard
    Quit,

    /// Switch between the dark and light theme
    ToggleTheme,

    /// Move the session selection down one row
    SelectNext,
    /// Move the session selection up one row
    SelectPrevious,
    /// Jump to the first session
    SelectFirst,
    /// Jump to the last session
    SelectLast,
}
