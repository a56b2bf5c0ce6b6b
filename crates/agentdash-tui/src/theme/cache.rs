//! Version-tagged style cache.
//!
//! Entries remember the theme version they were built under. A lookup with a
//! newer version rebuilds the entry in place, so a theme switch only has to
//! bump the version; nothing is cleared eagerly.

use std::collections::HashMap;
use std::hash::Hash;

use ratatui::style::Style;

#[derive(Debug, Clone, Copy)]
struct CachedStyle {
    version: u64,
    style: Style,
}

#[derive(Debug)]
pub struct StyleCache<K> {
    entries: HashMap<K, CachedStyle>,
}

impl<K> Default for StyleCache<K> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> StyleCache<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the style for `key` built under `version`.
    ///
    /// The second element is `true` when `build` ran, either because the key
    /// was missing or because its entry was tagged with another version.
    pub fn get_or_build<F>(&mut self, key: &K, version: u64, build: F) -> (Style, bool)
    where
        F: FnOnce() -> Style,
    {
        if let Some(entry) = self.entries.get(key) {
            if entry.version == version {
                return (entry.style, false);
            }
        }

        let style = build();
        self.entries.insert(key.clone(), CachedStyle { version, style });
        (style, true)
    }

    /// Number of stored entries, stale ones included
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    fn fg(color: Color) -> Style {
        Style::default().fg(color)
    }

    #[test]
    fn test_first_lookup_builds() {
        let mut cache = StyleCache::new();
        let (style, built) = cache.get_or_build(&"claude", 0, || fg(Color::Red));
        assert!(built);
        assert_eq!(style.fg, Some(Color::Red));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_same_version_hits() {
        let mut cache = StyleCache::new();
        cache.get_or_build(&"claude", 3, || fg(Color::Red));

        let (style, built) = cache.get_or_build(&"claude", 3, || fg(Color::Blue));
        assert!(!built);
        assert_eq!(style.fg, Some(Color::Red));
    }

    #[test]
    fn test_new_version_rebuilds_in_place() {
        let mut cache = StyleCache::new();
        cache.get_or_build(&"claude", 1, || fg(Color::Red));

        let (style, built) = cache.get_or_build(&"claude", 2, || fg(Color::Blue));
        assert!(built);
        assert_eq!(style.fg, Some(Color::Blue));
        assert_eq!(cache.len(), 1);

        // The rebuilt entry is now the current one
        let (style, built) = cache.get_or_build(&"claude", 2, || fg(Color::Green));
        assert!(!built);
        assert_eq!(style.fg, Some(Color::Blue));
    }

    #[test]
    fn test_older_version_also_rebuilds() {
        let mut cache = StyleCache::new();
        cache.get_or_build(&"gemini", 2, || fg(Color::Red));

        let (style, built) = cache.get_or_build(&"gemini", 1, || fg(Color::Blue));
        assert!(built);
        assert_eq!(style.fg, Some(Color::Blue));
    }

    #[test]
    fn test_keys_are_independent() {
        let mut cache = StyleCache::new();
        cache.get_or_build(&"claude", 1, || fg(Color::Red));
        let (_, built) = cache.get_or_build(&"codex", 1, || fg(Color::Red));
        assert!(built);
        assert_eq!(cache.len(), 2);
    }
}
