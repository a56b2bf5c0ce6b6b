//! Configuration types for agentdash
//!
//! Defines:
//! - `Settings` - Global application settings
//! - `UiSettings` - Theme and rendering options
//! - `SessionConfig` - A session shown on the dashboard

use agentdash_core::{SessionStatus, Tool};
use serde::{Deserialize, Serialize};

/// Global settings from `.agentdash/config.toml`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub sessions: Vec<SessionConfig>,
}

/// UI settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    /// Theme name. Unknown names render with the dark palette.
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Prefix session rows with the tool icon
    #[serde(default = "default_true")]
    pub show_icons: bool,

    /// Idle redraw interval in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            show_icons: true,
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

fn default_theme() -> String {
    "dark".to_string()
}

fn default_true() -> bool {
    true
}

fn default_tick_rate_ms() -> u64 {
    250
}

/// A session listed on the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SessionConfig {
    pub title: String,

    #[serde(default)]
    pub tool: Tool,

    #[serde(default)]
    pub status: SessionStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert_eq!(settings.ui.theme, "dark");
        assert!(settings.ui.show_icons);
        assert_eq!(settings.ui.tick_rate_ms, 250);
        assert!(settings.sessions.is_empty());
    }

    #[test]
    fn test_partial_ui_table_uses_defaults() {
        let settings: Settings = toml::from_str("[ui]\ntheme = \"light\"\n").unwrap();
        assert_eq!(settings.ui.theme, "light");
        assert!(settings.ui.show_icons);
        assert_eq!(settings.ui.tick_rate_ms, 250);
    }

    #[test]
    fn test_session_defaults() {
        let settings: Settings = toml::from_str(
            r#"
[[sessions]]
title = "scratch"
"#,
        )
        .unwrap();
        assert_eq!(
            settings.sessions,
            vec![SessionConfig {
                title: "scratch".to_string(),
                tool: Tool::Shell,
                status: SessionStatus::Idle,
            }]
        );
    }
}
