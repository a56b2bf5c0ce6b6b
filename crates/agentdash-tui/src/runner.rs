//! Main event loop: draw, poll, update, apply actions

use std::time::Duration;

use agentdash_app::config::Settings;
use agentdash_app::{update, AppState, Message, UpdateAction};
use agentdash_core::prelude::*;
use ratatui::DefaultTerminal;

use crate::theme::Theme;
use crate::{event, render, terminal};

/// Run the dashboard until the user quits.
///
/// The starting theme is `settings.ui.theme`; unknown names use Dark.
pub fn run(settings: &Settings) -> Result<()> {
    let theme = Theme::new(&settings.ui.theme);
    let mut state = AppState::new(settings);
    info!(
        "Starting dashboard with {} sessions, theme {}",
        state.sessions.len(),
        theme.current_theme()
    );

    terminal::install_panic_hook();
    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;

    let tick = Duration::from_millis(settings.ui.tick_rate_ms.max(1));
    let result = run_loop(&mut term, &mut state, &theme, tick);

    ratatui::try_restore().map_err(|e| Error::TerminalRestore(e.to_string()))?;
    result
}

fn run_loop(
    term: &mut DefaultTerminal,
    state: &mut AppState,
    theme: &Theme,
    tick: Duration,
) -> Result<()> {
    while !state.should_quit {
        term.draw(|frame| render::view(frame, state, theme))?;

        if let Some(message) = event::poll(tick)? {
            process_message(state, theme, message);
        }
    }
    Ok(())
}

/// Run `message` and its follow-ups through `update`, applying each action
pub fn process_message(state: &mut AppState, theme: &Theme, message: Message) {
    let mut next = Some(message);
    while let Some(msg) = next.take() {
        let result = update(state, msg);
        if let Some(action) = result.action {
            handle_action(theme, action);
        }
        next = result.message;
    }
}

fn handle_action(theme: &Theme, action: UpdateAction) {
    match action {
        UpdateAction::ToggleTheme => {
            let target = theme.current_theme().toggle();
            let applied = theme.init_theme(target.name());
            info!("Switched theme to {}", applied);
        }
    }
}
