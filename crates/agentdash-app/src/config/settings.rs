//! Settings loader for `.agentdash/config.toml`

use std::path::{Path, PathBuf};

use agentdash_core::prelude::*;

use super::types::Settings;

const CONFIG_FILENAME: &str = "config.toml";
const AGENTDASH_DIR: &str = ".agentdash";

const DEFAULT_CONFIG: &str = r#"# agentdash configuration

[ui]
theme = "dark"        # "dark" or "light"; unknown names use dark
show_icons = true     # prefix sessions with the tool icon
tick_rate_ms = 250

# Sessions shown on the dashboard
# [[sessions]]
# title = "api refactor"
# tool = "claude"       # claude | gemini | opencode | codex | shell
# status = "running"    # running | waiting | idle | error
"#;

/// Path of the config file for a project directory
pub fn config_path(project_path: &Path) -> PathBuf {
    project_path.join(AGENTDASH_DIR).join(CONFIG_FILENAME)
}

/// Load settings from `.agentdash/config.toml`
///
/// Never fails: a missing, unreadable or invalid file yields defaults.
pub fn load_settings(project_path: &Path) -> Settings {
    let config_path = config_path(project_path);

    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Create `.agentdash/config.toml` with commented defaults if it doesn't exist
pub fn init_config_dir(project_path: &Path) -> Result<()> {
    let agentdash_dir = project_path.join(AGENTDASH_DIR);

    if !agentdash_dir.exists() {
        std::fs::create_dir_all(&agentdash_dir)
            .map_err(|e| Error::config(format!("Failed to create .agentdash dir: {}", e)))?;
    }

    let config_path = agentdash_dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        std::fs::write(&config_path, DEFAULT_CONFIG)
            .with_context(|| format!("Failed to write {}", config_path.display()))?;
        info!("Created default config at {:?}", config_path);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use agentdash_core::{SessionStatus, Tool};
    use tempfile::tempdir;

    #[test]
    fn test_load_settings_defaults() {
        let temp = tempdir().unwrap();
        let settings = load_settings(temp.path());

        assert_eq!(settings.ui.theme, "dark");
        assert!(settings.ui.show_icons);
        assert!(settings.sessions.is_empty());
    }

    #[test]
    fn test_load_settings_custom() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join(".agentdash");
        std::fs::create_dir_all(&dir).unwrap();

        let config = r#"
[ui]
theme = "light"
show_icons = false

[[sessions]]
title = "api refactor"
tool = "claude"
status = "running"

[[sessions]]
title = "docs"
tool = "aider"
status = "asleep"
"#;
        std::fs::write(dir.join("config.toml"), config).unwrap();

        let settings = load_settings(temp.path());

        assert_eq!(settings.ui.theme, "light");
        assert!(!settings.ui.show_icons);
        assert_eq!(settings.sessions.len(), 2);
        assert_eq!(settings.sessions[0].tool, Tool::Claude);
        assert_eq!(settings.sessions[0].status, SessionStatus::Running);
        assert_eq!(settings.sessions[1].tool, Tool::Other("aider".to_string()));
        assert_eq!(settings.sessions[1].status, SessionStatus::Unknown);
    }

    #[test]
    fn test_load_settings_invalid_toml() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join(".agentdash");
        std::fs::create_dir_all(&dir).unwrap();

        std::fs::write(dir.join("config.toml"), "not valid toml {{{{").unwrap();

        // Should return defaults
        let settings = load_settings(temp.path());
        assert_eq!(settings.ui.theme, "dark");
    }

    #[test]
    fn test_init_config_dir() {
        let temp = tempdir().unwrap();
        init_config_dir(temp.path()).unwrap();

        let path = config_path(temp.path());
        assert!(path.exists());

        // The generated file parses back to the defaults
        let settings = load_settings(temp.path());
        assert_eq!(settings.ui.theme, "dark");
        assert_eq!(settings.ui.tick_rate_ms, 250);
    }

    #[test]
    fn test_init_config_dir_keeps_existing_file() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join(".agentdash");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("config.toml"), "[ui]\ntheme = \"light\"\n").unwrap();

        init_config_dir(temp.path()).unwrap();

        assert_eq!(load_settings(temp.path()).ui.theme, "light");
    }

    #[test]
    fn test_init_config_dir_reports_config_error() {
        let temp = tempdir().unwrap();
        let not_a_dir = temp.path().join("project");
        std::fs::write(&not_a_dir, "plain file").unwrap();

        let err = init_config_dir(&not_a_dir).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
        assert!(err.to_string().contains(".agentdash"));
    }
}
