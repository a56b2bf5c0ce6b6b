//! Main update function - handles state transitions (TEA pattern)

use tracing::debug;

use crate::message::Message;
use crate::state::AppState;

use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => match handle_key(key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Tick => UpdateResult::none(),

        Message::Quit => {
            state.should_quit = true;
            UpdateResult::none()
        }

        Message::ToggleTheme => {
            debug!("Theme toggle requested");
            UpdateResult::action(UpdateAction::ToggleTheme)
        }

        Message::SelectNext => {
            state.select_next();
            UpdateResult::none()
        }
        Message::SelectPrevious => {
            state.select_previous();
            UpdateResult::none()
        }
        Message::SelectFirst => {
            state.select_first();
            UpdateResult::none()
        }
        Message::SelectLast => {
            state.select_last();
            UpdateResult::none()
        }
    }
}
