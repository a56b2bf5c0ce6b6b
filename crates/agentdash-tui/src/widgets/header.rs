//! Header bar widget
//!
//! Shows the app title, a per-status session count and the active theme.

use agentdash_app::state::AppState;
use agentdash_core::SessionStatus;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{icons, Theme};

const SUMMARY: [(SessionStatus, &str); 3] = [
    (SessionStatus::Running, "running"),
    (SessionStatus::Waiting, "waiting"),
    (SessionStatus::Error, "error"),
];

pub struct Header<'a> {
    state: &'a AppState,
    theme: &'a Theme,
}

impl<'a> Header<'a> {
    pub fn new(state: &'a AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    fn spans(&self) -> Vec<Span<'static>> {
        let mut spans = vec![
            Span::styled(
                " agentdash",
                self.theme.accent().add_modifier(Modifier::BOLD),
            ),
            Span::styled(" │ ", self.theme.border(false)),
        ];

        for (status, label) in SUMMARY {
            spans.push(Span::styled(
                icons::status_indicator(status),
                self.theme.status_style(status),
            ));
            spans.push(Span::styled(
                format!(" {} {}  ", self.state.count_status(status), label),
                self.theme.text_dim(),
            ));
        }

        spans.push(Span::styled("│ ", self.theme.border(false)));
        spans.push(Span::styled("theme: ", self.theme.text_dim()));
        spans.push(Span::styled(
            self.theme.current_theme().name(),
            self.theme.text(),
        ));
        spans
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = self.theme.background();
        Paragraph::new(Line::from(self.spans()))
            .style(style)
            .render(area, buf);
    }
}
