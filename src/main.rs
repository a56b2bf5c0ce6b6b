//! agentdash - A terminal dashboard for AI coding-agent sessions
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;

/// agentdash - A terminal dashboard for AI coding-agent sessions
#[derive(Parser, Debug)]
#[command(name = "agentdash")]
#[command(about = "A terminal dashboard for AI coding-agent sessions", long_about = None)]
struct Args {
    /// Project directory holding .agentdash/config.toml
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Theme to start with (dark or light), overrides the config file
    #[arg(long)]
    theme: Option<String>,

    /// Write a default .agentdash/config.toml and exit
    #[arg(long)]
    init_config: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    agentdash::core::logging::init()?;

    // Get base path from args or use current directory
    let base_path = args
        .path
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    if args.init_config {
        agentdash::app::config::init_config_dir(&base_path)?;
        eprintln!(
            "Wrote {}",
            agentdash::app::config::config_path(&base_path).display()
        );
        return Ok(());
    }

    agentdash::run_with_project(&base_path, args.theme.as_deref())?;
    Ok(())
}
