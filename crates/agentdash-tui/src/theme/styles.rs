//! Semantic style builders.
//!
//! Every builder is a pure function of a [`Palette`]. Widgets normally reach
//! these through [`Theme`](super::Theme), which supplies the active palette.

use agentdash_core::SessionStatus;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette::Palette;

// --- Text styles ---
pub fn text(p: &Palette) -> Style {
    Style::default().fg(p.text)
}

pub fn text_dim(p: &Palette) -> Style {
    Style::default().fg(p.text_dim)
}

pub fn accent(p: &Palette) -> Style {
    Style::default().fg(p.accent)
}

/// Full-screen base: palette background with primary text
pub fn background(p: &Palette) -> Style {
    Style::default().bg(p.bg).fg(p.text)
}

// --- Tool labels ---

/// Label style shared by every tool.
///
/// Labels stay dim so the status glyph next to them is the brightest thing
/// on the row.
pub fn tool_label(p: &Palette) -> Style {
    Style::default().fg(p.text_dim)
}

// --- Status ---
pub fn status(p: &Palette, status: SessionStatus) -> Style {
    match status {
        SessionStatus::Running => Style::default().fg(p.green).add_modifier(Modifier::BOLD),
        SessionStatus::Waiting => Style::default().fg(p.yellow),
        SessionStatus::Error => Style::default().fg(p.red).add_modifier(Modifier::BOLD),
        SessionStatus::Idle | SessionStatus::Unknown => Style::default().fg(p.text_dim),
    }
}

// --- Borders and selection ---
pub fn border(p: &Palette, focused: bool) -> Style {
    if focused {
        Style::default().fg(p.accent)
    } else {
        Style::default().fg(p.border)
    }
}

pub fn selected(p: &Palette) -> Style {
    Style::default().bg(p.surface).add_modifier(Modifier::BOLD)
}

pub fn block(p: &Palette, focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border(p, focused))
        .style(Style::default().bg(p.bg))
}

// --- Keybinding hints ---

/// `key label` hint with the key emphasized in the accent color.
///
/// Empty parts are left out, so the line is only empty when both are.
pub fn menu_key(p: &Palette, key: &str, label: &str) -> Line<'static> {
    let mut spans = Vec::with_capacity(3);
    if !key.is_empty() {
        spans.push(Span::styled(
            key.to_string(),
            Style::default().fg(p.accent).add_modifier(Modifier::BOLD),
        ));
    }
    if !key.is_empty() && !label.is_empty() {
        spans.push(Span::raw(" "));
    }
    if !label.is_empty() {
        spans.push(Span::styled(label.to_string(), text_dim(p)));
    }
    Line::from(spans)
}
