//! Main render/view function (View in TEA pattern)

use agentdash_app::state::AppState;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::layout;
use crate::theme::Theme;
use crate::widgets::{Header, SessionList, StatusBar};

/// Render the complete UI (View function in TEA)
///
/// Every color comes from `theme`; nothing here mutates state.
pub fn view(frame: &mut Frame, state: &AppState, theme: &Theme) {
    let area = frame.area();

    // Fill the terminal with the palette background first
    frame.render_widget(Block::default().style(theme.background()), area);

    let areas = layout::create(area);
    frame.render_widget(Header::new(state, theme), areas.header);
    frame.render_widget(SessionList::new(state, theme), areas.sessions);
    frame.render_widget(StatusBar::new(theme), areas.status_bar);
}
