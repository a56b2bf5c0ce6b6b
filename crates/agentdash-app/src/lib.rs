//! agentdash-app - Application state and orchestration for agentdash
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state management
//! and configuration loading. It has no terminal dependencies; the TUI crate
//! translates terminal events into [`Message`]s and applies [`UpdateAction`]s.

pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod state;

// Re-export primary types
pub use handler::{update, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppState, SessionRow};
