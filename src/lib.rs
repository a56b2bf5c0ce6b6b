//! agentdash Library
//!
//! A terminal dashboard for AI coding-agent sessions.

pub use agentdash_app as app;
pub use agentdash_core as core;
pub use agentdash_tui as tui;

use std::path::Path;

use agentdash_app::config::{load_settings, Settings};
use agentdash_core::prelude::*;

/// Load settings for `base_path`, letting a command-line theme win over the file
pub fn resolve_settings(base_path: &Path, theme_override: Option<&str>) -> Settings {
    let mut settings = load_settings(base_path);
    if let Some(theme) = theme_override {
        debug!(
            "Theme override {:?} replaces configured {:?}",
            theme, settings.ui.theme
        );
        settings.ui.theme = theme.to_string();
    }
    settings
}

/// Run the dashboard for the project at `base_path`
pub fn run_with_project(base_path: &Path, theme_override: Option<&str>) -> Result<()> {
    let settings = resolve_settings(base_path, theme_override);
    info!(
        "Loaded {} sessions from {}",
        settings.sessions.len(),
        base_path.display()
    );
    agentdash_tui::run(&settings)
}
