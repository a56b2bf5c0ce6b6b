//! Theme system: palettes, derived styles and glyphs.
//!
//! This module provides:
//! - `palette`: Built-in color tables and theme-name resolution
//! - `state`: [`Theme`], the active palette plus the tool style cache
//! - `cache`: Version-tagged style cache used by [`Theme`]
//! - `styles`: Semantic style builders over a palette
//! - `icons`: Status glyphs and tool icons

mod cache;
pub mod icons;
pub mod palette;
pub mod state;
pub mod styles;

pub use icons::{status_indicator, status_indicator_for, tool_icon, tool_icon_for};
pub use palette::{resolve_palette, Palette};
pub use state::Theme;
