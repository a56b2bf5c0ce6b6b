//! Built-in color palettes.
//!
//! Palettes are `const` tables; nothing here is constructed at runtime.

use agentdash_core::ThemeId;
use ratatui::style::Color;

/// Named colors for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    // --- Background layers ---
    pub bg: Color,
    pub surface: Color,

    // --- Chrome ---
    pub border: Color,
    pub accent: Color,

    // --- Text ---
    pub text: Color,
    pub text_dim: Color,

    // --- Status ---
    pub green: Color,
    pub yellow: Color,
    pub red: Color,
}

/// Tokyo Night (dark)
pub const DARK: Palette = Palette {
    bg: Color::Rgb(26, 27, 38),        // #1a1b26
    surface: Color::Rgb(36, 40, 59),   // #24283b
    border: Color::Rgb(65, 72, 104),   // #414868
    accent: Color::Rgb(122, 162, 247), // #7aa2f7
    text: Color::Rgb(192, 202, 245),   // #c0caf5
    text_dim: Color::Rgb(86, 95, 137), // #565f89
    green: Color::Rgb(158, 206, 106),  // #9ece6a
    yellow: Color::Rgb(224, 175, 104), // #e0af68
    red: Color::Rgb(247, 118, 142),    // #f7768e
};

/// Tokyo Night Day (light)
pub const LIGHT: Palette = Palette {
    bg: Color::Rgb(213, 214, 219),       // #d5d6db
    surface: Color::Rgb(203, 204, 209),  // #cbccd1
    border: Color::Rgb(168, 174, 203),   // #a8aecb
    accent: Color::Rgb(52, 84, 138),     // #34548a
    text: Color::Rgb(52, 59, 88),        // #343b58
    text_dim: Color::Rgb(150, 153, 163), // #9699a3
    green: Color::Rgb(72, 94, 48),       // #485e30
    yellow: Color::Rgb(143, 94, 21),     // #8f5e15
    red: Color::Rgb(140, 67, 81),        // #8c4351
};

impl Palette {
    /// The built-in palette for a theme identifier
    pub fn for_theme(id: ThemeId) -> &'static Palette {
        match id {
            ThemeId::Dark => &DARK,
            ThemeId::Light => &LIGHT,
        }
    }
}

/// Resolve a theme name to its palette; unrecognized or empty names get Dark.
pub fn resolve_palette(name: &str) -> &'static Palette {
    Palette::for_theme(ThemeId::from_name(name))
}
