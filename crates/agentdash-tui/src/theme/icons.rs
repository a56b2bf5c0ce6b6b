//! Status glyphs and tool icons.
//!
//! Both tables are total: `SessionStatus::Unknown` shares the idle glyph and
//! `Tool::Other` shares the shell icon.

use agentdash_core::{SessionStatus, Tool};

// --- Status glyphs ---
pub const STATUS_RUNNING: &str = "●";
pub const STATUS_WAITING: &str = "○";
pub const STATUS_IDLE: &str = "◌";
pub const STATUS_ERROR: &str = "✕";

// --- Tool icons ---
pub const ICON_CLAUDE: &str = "🤖";
pub const ICON_GEMINI: &str = "✨";
pub const ICON_OPENCODE: &str = "🌐";
pub const ICON_CODEX: &str = "💻";
pub const ICON_SHELL: &str = "🐚";

/// Single-character indicator for a session status
pub fn status_indicator(status: SessionStatus) -> &'static str {
    match status {
        SessionStatus::Running => STATUS_RUNNING,
        SessionStatus::Waiting => STATUS_WAITING,
        SessionStatus::Error => STATUS_ERROR,
        SessionStatus::Idle | SessionStatus::Unknown => STATUS_IDLE,
    }
}

/// Indicator for a status name, e.g. from a config file or external process
pub fn status_indicator_for(name: &str) -> &'static str {
    status_indicator(SessionStatus::from(name))
}

/// Icon for the tool driving a session
pub fn tool_icon(tool: &Tool) -> &'static str {
    match tool {
        Tool::Claude => ICON_CLAUDE,
        Tool::Gemini => ICON_GEMINI,
        Tool::OpenCode => ICON_OPENCODE,
        Tool::Codex => ICON_CODEX,
        Tool::Shell | Tool::Other(_) => ICON_SHELL,
    }
}

pub fn tool_icon_for(name: &str) -> &'static str {
    tool_icon(&Tool::from(name))
}
