//! Application state (Model in TEA pattern)

use agentdash_core::{SessionStatus, Tool};

use crate::config::{SessionConfig, Settings};

/// A session as displayed on the dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRow {
    pub title: String,
    pub tool: Tool,
    pub status: SessionStatus,
}

impl From<&SessionConfig> for SessionRow {
    fn from(config: &SessionConfig) -> Self {
        Self {
            title: config.title.clone(),
            tool: config.tool.clone(),
            status: config.status,
        }
    }
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    pub sessions: Vec<SessionRow>,

    /// Index into `sessions`; 0 when the list is empty
    pub selected: usize,

    pub show_icons: bool,

    pub should_quit: bool,
}

impl AppState {
    pub fn new(settings: &Settings) -> Self {
        Self {
            sessions: settings.sessions.iter().map(SessionRow::from).collect(),
            selected: 0,
            show_icons: settings.ui.show_icons,
            should_quit: false,
        }
    }

    pub fn selected_session(&self) -> Option<&SessionRow> {
        self.sessions.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if self.sessions.is_empty() {
            return;
        }
        self.selected = (self.selected + 1) % self.sessions.len();
    }

    pub fn select_previous(&mut self) {
        if self.sessions.is_empty() {
            return;
        }
        self.selected = self
            .selected
            .checked_sub(1)
            .unwrap_or(self.sessions.len() - 1);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.sessions.len().saturating_sub(1);
    }

    /// Count of sessions per status, for the header summary
    pub fn count_status(&self, status: SessionStatus) -> usize {
        self.sessions.iter().filter(|s| s.status == status).count()
    }
}
