//! Status bar widget
//!
//! Keybinding hints rendered with `Theme::menu_key`.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::Theme;

/// Hints shown in the status bar, in order
pub const KEY_HINTS: [(&str, &str); 4] = [
    ("q", "Quit"),
    ("t", "Theme"),
    ("j/k", "Move"),
    ("g/G", "Top/Bottom"),
];

pub struct StatusBar<'a> {
    theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    fn line(&self) -> Line<'static> {
        let mut spans: Vec<Span<'static>> = vec![Span::raw(" ")];
        for (i, (key, label)) in KEY_HINTS.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.extend(self.theme.menu_key(key, label).spans);
        }
        Line::from(spans)
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = self.theme.colors();
        Paragraph::new(self.line())
            .style(Style::default().bg(colors.surface))
            .render(area, buf);
    }
}
