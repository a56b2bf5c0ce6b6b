//! # agentdash-core - Core Domain Types
//!
//! Foundation crate for agentdash. Provides domain types, error handling and
//! logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`ThemeId`] - Selectable theme identity (Dark, Light)
//! - [`SessionStatus`] - Agent session status (Running, Waiting, Idle, Error, Unknown)
//! - [`Tool`] - The coding agent driving a session (Claude, Gemini, ...)
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum for config, terminal and IO failures
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait that logs errors with context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use agentdash_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod prelude;
pub mod types;

pub use error::{Error, Result, ResultExt};
pub use types::{SessionStatus, ThemeId, Tool};
