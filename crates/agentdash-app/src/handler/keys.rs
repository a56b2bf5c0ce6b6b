//! Key event handlers

use crate::input_key::InputKey;
use crate::message::Message;

/// Convert key events to messages
pub fn handle_key(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc | InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Char('t') => Some(Message::ToggleTheme),
        InputKey::Char('j') | InputKey::Down | InputKey::Tab => Some(Message::SelectNext),
        InputKey::Char('k') | InputKey::Up => Some(Message::SelectPrevious),
        InputKey::Char('g') | InputKey::Home => Some(Message::SelectFirst),
        InputKey::Char('G') | InputKey::End => Some(Message::SelectLast),
        _ => None,
    }
}
