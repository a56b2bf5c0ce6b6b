//! Session list widget
//!
//! One row per session: status glyph, optional tool icon, title and tool name.
//! Titles use the cached per-tool style; glyphs use the status colors.

use agentdash_app::state::{AppState, SessionRow};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{icons, Theme};

const EMPTY_HINT: &str = "No sessions configured. Add [[sessions]] to .agentdash/config.toml";

pub struct SessionList<'a> {
    state: &'a AppState,
    theme: &'a Theme,
}

impl<'a> SessionList<'a> {
    pub fn new(state: &'a AppState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    fn row(&self, session: &SessionRow, selected: bool) -> Line<'static> {
        let mut spans = vec![
            Span::raw(" "),
            Span::styled(
                icons::status_indicator(session.status),
                self.theme.status_style(session.status),
            ),
            Span::raw(" "),
        ];

        if self.state.show_icons {
            spans.push(Span::raw(format!("{} ", icons::tool_icon(&session.tool))));
        }

        spans.push(Span::styled(
            session.title.clone(),
            self.theme.tool_style(&session.tool),
        ));
        spans.push(Span::styled(
            format!("  {}", session.tool),
            self.theme.border(false),
        ));

        let line = Line::from(spans);
        if selected {
            line.style(self.theme.selected())
        } else {
            line
        }
    }

    /// First visible row so that the selection stays on screen
    fn scroll_offset(&self, visible_rows: usize) -> usize {
        if visible_rows == 0 {
            return 0;
        }
        self.state.selected.saturating_sub(visible_rows - 1)
    }
}

impl Widget for SessionList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = self.theme.block(true).title(" Sessions ");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if self.state.sessions.is_empty() {
            Paragraph::new(Line::from(Span::styled(
                format!(" {}", EMPTY_HINT),
                self.theme.text_dim(),
            )))
            .render(inner, buf);
            return;
        }

        let visible = inner.height as usize;
        let offset = self.scroll_offset(visible);
        let lines: Vec<Line> = self
            .state
            .sessions
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible)
            .map(|(i, session)| self.row(session, i == self.state.selected))
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::palette::{DARK, LIGHT};
    use agentdash_app::config::{SessionConfig, Settings};
    use agentdash_core::{SessionStatus, Tool};
    use ratatui::{backend::TestBackend, style::Color, Terminal};

    fn state(rows: &[(&str, Tool, SessionStatus)]) -> AppState {
        let settings = Settings {
            sessions: rows
                .iter()
                .map(|(title, tool, status)| SessionConfig {
                    title: title.to_string(),
                    tool: tool.clone(),
                    status: *status,
                })
                .collect(),
            ..Default::default()
        };
        let mut state = AppState::new(&settings);
        state.show_icons = false;
        state
    }

    fn render(state: &AppState, theme: &Theme, height: u16) -> Terminal<TestBackend> {
        let backend = TestBackend::new(60, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| f.render_widget(SessionList::new(state, theme), f.area()))
            .unwrap();
        terminal
    }

    fn content(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    /// Foreground of the first cell in `row` where `text` starts
    fn fg_at(terminal: &Terminal<TestBackend>, row: u16, text: &str) -> Option<Color> {
        let buf = terminal.backend().buffer();
        let cells: Vec<String> = (0..buf.area.width)
            .map(|x| buf[(x, row)].symbol().to_string())
            .collect();
        let wanted: Vec<String> = text.chars().map(String::from).collect();
        let col = (0..cells.len()).find(|&x| cells[x..].starts_with(&wanted))?;
        Some(buf[(col as u16, row)].fg)
    }

    #[test]
    fn test_rows_show_glyphs_and_titles() {
        let state = state(&[
            ("api refactor", Tool::Claude, SessionStatus::Running),
            ("flaky tests", Tool::Gemini, SessionStatus::Waiting),
            ("deploy", Tool::Shell, SessionStatus::Error),
        ]);
        let theme = Theme::new("dark");
        let text = content(&render(&state, &theme, 6));

        assert!(text.contains("● api refactor"));
        assert!(text.contains("○ flaky tests"));
        assert!(text.contains("✕ deploy"));
        assert!(text.contains("Sessions"));
    }

    #[test]
    fn test_title_uses_tool_style_of_active_theme() {
        let state = state(&[("api refactor", Tool::Claude, SessionStatus::Idle)]);
        let theme = Theme::new("dark");

        let terminal = render(&state, &theme, 4);
        assert_eq!(fg_at(&terminal, 1, "api"), Some(DARK.text_dim));

        theme.init_theme("light");
        let terminal = render(&state, &theme, 4);
        assert_eq!(fg_at(&terminal, 1, "api"), Some(LIGHT.text_dim));
    }

    #[test]
    fn test_status_glyph_colored_by_status() {
        let state = state(&[("deploy", Tool::Shell, SessionStatus::Error)]);
        let theme = Theme::new("dark");
        let terminal = render(&state, &theme, 4);
        assert_eq!(fg_at(&terminal, 1, "✕"), Some(DARK.red));
    }

    #[test]
    fn test_icons_shown_when_enabled() {
        let mut state = state(&[("api", Tool::Codex, SessionStatus::Idle)]);
        state.show_icons = true;
        let theme = Theme::new("dark");
        let text = content(&render(&state, &theme, 4));
        assert!(text.contains(icons::ICON_CODEX));
    }

    #[test]
    fn test_empty_list_shows_hint() {
        let state = state(&[]);
        let theme = Theme::new("dark");
        let text = content(&render(&state, &theme, 4));
        assert!(text.contains("No sessions configured"));
    }

    #[test]
    fn test_selection_scrolls_into_view() {
        let rows: Vec<(String, Tool, SessionStatus)> = (0..10)
            .map(|i| (format!("session-{i}"), Tool::Shell, SessionStatus::Idle))
            .collect();
        let borrowed: Vec<(&str, Tool, SessionStatus)> = rows
            .iter()
            .map(|(t, tool, s)| (t.as_str(), tool.clone(), *s))
            .collect();
        let mut state = state(&borrowed);
        state.selected = 9;

        let theme = Theme::new("dark");
        // 5 rows total, 3 visible inside the border
        let text = content(&render(&state, &theme, 5));
        assert!(text.contains("session-9"));
        assert!(text.contains("session-7"));
        assert!(!text.contains("session-6"));
    }
}
