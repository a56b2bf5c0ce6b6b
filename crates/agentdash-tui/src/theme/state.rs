//! Active theme and derived-style cache.
//!
//! [`Theme`] is the single source of truth for which palette is active. It is
//! created already initialized, owned by the runner and passed by reference
//! to every widget. One mutex guards the theme id, the active colors, the
//! theme version and the style cache together, so a switch is observed as a
//! whole by every reader.

use std::sync::{Mutex, MutexGuard, PoisonError};

use agentdash_core::{SessionStatus, ThemeId, Tool};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::Block;
use tracing::{debug, warn};

use super::cache::StyleCache;
use super::palette::Palette;
use super::styles;

#[derive(Debug)]
struct ThemeState {
    id: ThemeId,
    colors: Palette,
    /// Bumped on every `init_theme`; cache entries from older versions are stale
    version: u64,
    tool_styles: StyleCache<Tool>,
}

impl ThemeState {
    fn new(id: ThemeId) -> Self {
        Self {
            id,
            colors: *Palette::for_theme(id),
            version: 0,
            tool_styles: StyleCache::new(),
        }
    }
}

/// The active theme and everything derived from it
#[derive(Debug)]
pub struct Theme {
    state: Mutex<ThemeState>,
}

impl Theme {
    /// Create a theme context with `name` active. Unknown names use Dark.
    pub fn new(name: &str) -> Self {
        let id = resolve_logged(name);
        Self {
            state: Mutex::new(ThemeState::new(id)),
        }
    }

    // Writers replace whole fields, so a poisoned guard still holds a
    // consistent state.
    fn lock(&self) -> MutexGuard<'_, ThemeState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Make `name` the active theme and invalidate every cached style.
    ///
    /// Returns the theme that was actually applied.
    pub fn init_theme(&self, name: &str) -> ThemeId {
        let id = resolve_logged(name);
        let colors = *Palette::for_theme(id);

        let mut state = self.lock();
        let previous = state.id;
        state.id = id;
        state.colors = colors;
        state.version = state.version.wrapping_add(1);
        let version = state.version;
        drop(state);

        debug!("Theme {} -> {} (version {})", previous, id, version);
        id
    }

    pub fn current_theme(&self) -> ThemeId {
        self.lock().id
    }

    /// Snapshot of the active colors
    pub fn colors(&self) -> Palette {
        self.lock().colors
    }

    /// Theme generation, incremented by every `init_theme`
    pub fn version(&self) -> u64 {
        self.lock().version
    }

    /// Label style for a tool, built once per theme version.
    pub fn tool_style(&self, tool: &Tool) -> Style {
        let mut state = self.lock();
        let ThemeState {
            colors,
            version,
            tool_styles,
            ..
        } = &mut *state;
        let (style, built) =
            tool_styles.get_or_build(tool, *version, || styles::tool_label(colors));
        if built {
            tracing::trace!("Built style for tool {} at version {}", tool, version);
        }
        style
    }

    /// Number of tool styles held by the cache, stale ones included
    pub fn cached_tool_styles(&self) -> usize {
        self.lock().tool_styles.len()
    }

    pub fn status_style(&self, status: SessionStatus) -> Style {
        styles::status(&self.colors(), status)
    }

    /// Keybinding hint, e.g. `menu_key("q", "Quit")`
    pub fn menu_key(&self, key: &str, label: &str) -> Line<'static> {
        styles::menu_key(&self.colors(), key, label)
    }

    pub fn text(&self) -> Style {
        styles::text(&self.colors())
    }

    pub fn text_dim(&self) -> Style {
        styles::text_dim(&self.colors())
    }

    pub fn accent(&self) -> Style {
        styles::accent(&self.colors())
    }

    pub fn background(&self) -> Style {
        styles::background(&self.colors())
    }

    pub fn border(&self, focused: bool) -> Style {
        styles::border(&self.colors(), focused)
    }

    pub fn selected(&self) -> Style {
        styles::selected(&self.colors())
    }

    pub fn block(&self, focused: bool) -> Block<'static> {
        styles::block(&self.colors(), focused)
    }
}

fn resolve_logged(name: &str) -> ThemeId {
    match ThemeId::parse(name) {
        Some(id) => id,
        None => {
            if !name.trim().is_empty() {
                warn!(
                    "Unknown theme {:?}, falling back to {}",
                    name,
                    ThemeId::default()
                );
            }
            ThemeId::default()
        }
    }
}
