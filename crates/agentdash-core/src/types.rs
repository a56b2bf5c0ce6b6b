//! Core domain types
//!
//! Every lookup key the dashboard renders is a closed enum with one explicit
//! catch-all, so name parsing is total and renderers match exhaustively.

use serde::{Deserialize, Serialize};
use std::fmt;

// ─────────────────────────────────────────────────────────────────
// Theme identity
// ─────────────────────────────────────────────────────────────────

/// Selectable theme identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeId {
    /// Dark palette (default and fallback)
    #[default]
    Dark,
    /// Light palette
    Light,
}

impl ThemeId {
    /// All known themes, in display order
    pub const ALL: [ThemeId; 2] = [ThemeId::Dark, ThemeId::Light];

    /// Parse a theme name, returning `None` for unrecognized names.
    ///
    /// Matching ignores ASCII case and surrounding whitespace.
    pub fn parse(name: &str) -> Option<ThemeId> {
        let name = name.trim();
        ThemeId::ALL
            .into_iter()
            .find(|id| id.name().eq_ignore_ascii_case(name))
    }

    /// Resolve a theme name; anything unrecognized (including "") is Dark.
    pub fn from_name(name: &str) -> ThemeId {
        Self::parse(name).unwrap_or_default()
    }

    /// Canonical lowercase name, as accepted by `from_name`
    pub fn name(&self) -> &'static str {
        match self {
            ThemeId::Dark => "dark",
            ThemeId::Light => "light",
        }
    }

    /// The other theme
    pub fn toggle(self) -> ThemeId {
        match self {
            ThemeId::Dark => ThemeId::Light,
            ThemeId::Light => ThemeId::Dark,
        }
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ─────────────────────────────────────────────────────────────────
// Session status
// ─────────────────────────────────────────────────────────────────

/// Status of an agent session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SessionStatus {
    /// Agent is actively working
    Running,
    /// Agent is waiting for user input
    Waiting,
    /// Session is open but quiet
    #[default]
    Idle,
    /// Agent or its process failed
    Error,
    /// Any status name we don't recognize
    Unknown,
}

impl SessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Running => "running",
            SessionStatus::Waiting => "waiting",
            SessionStatus::Idle => "idle",
            SessionStatus::Error => "error",
            SessionStatus::Unknown => "unknown",
        }
    }
}

impl From<&str> for SessionStatus {
    fn from(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "running" => SessionStatus::Running,
            "waiting" => SessionStatus::Waiting,
            "idle" => SessionStatus::Idle,
            "error" => SessionStatus::Error,
            _ => SessionStatus::Unknown,
        }
    }
}

impl From<String> for SessionStatus {
    fn from(s: String) -> Self {
        SessionStatus::from(s.as_str())
    }
}

impl From<SessionStatus> for String {
    fn from(status: SessionStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─────────────────────────────────────────────────────────────────
// Tool
// ─────────────────────────────────────────────────────────────────

/// The coding agent (or plain shell) running inside a session
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Tool {
    Claude,
    Gemini,
    OpenCode,
    Codex,
    #[default]
    Shell,
    /// Unrecognized tool, keeps the name it was given
    Other(String),
}

impl Tool {
    pub fn as_str(&self) -> &str {
        match self {
            Tool::Claude => "claude",
            Tool::Gemini => "gemini",
            Tool::OpenCode => "opencode",
            Tool::Codex => "codex",
            Tool::Shell => "shell",
            Tool::Other(name) => name,
        }
    }
}

impl From<&str> for Tool {
    fn from(s: &str) -> Self {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "claude" => Tool::Claude,
            "gemini" => Tool::Gemini,
            "opencode" => Tool::OpenCode,
            "codex" => Tool::Codex,
            "shell" => Tool::Shell,
            _ => Tool::Other(trimmed.to_string()),
        }
    }
}

impl From<String> for Tool {
    fn from(s: String) -> Self {
        Tool::from(s.as_str())
    }
}

impl From<Tool> for String {
    fn from(tool: Tool) -> Self {
        match tool {
            Tool::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
