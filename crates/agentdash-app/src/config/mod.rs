//! Configuration file parsing for agentdash
//!
//! Supports:
//! - `.agentdash/config.toml` - UI settings and the session list

pub mod settings;
pub mod types;

pub use settings::{config_path, init_config_dir, load_settings};
pub use types::*;
