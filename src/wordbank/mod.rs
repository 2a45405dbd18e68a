//! Themed word catalogs for hangman
//!
//! Provides embedded themes compiled into the binary plus a loader for
//! custom theme files.

mod embedded;
pub mod loader;

pub use embedded::{THEME_COUNT, THEMES};

use crate::core::WordEntry;

/// A named, ordered collection of word entries, unique by word
#[derive(Debug, Clone)]
pub struct Theme {
    name: String,
    entries: Vec<WordEntry>,
}

impl Theme {
    /// Build a theme from `(word, hint)` pairs
    ///
    /// Invalid pairs are skipped; duplicate words keep their first occurrence.
    #[must_use]
    pub fn from_pairs(name: impl Into<String>, pairs: &[(&str, &str)]) -> Self {
        let mut entries: Vec<WordEntry> = Vec::with_capacity(pairs.len());

        for &(word, hint) in pairs {
            if let Ok(entry) = WordEntry::new(word, hint)
                && !entries.iter().any(|e| e.text() == entry.text())
            {
                entries.push(entry);
            }
        }

        Self {
            name: name.into(),
            entries,
        }
    }

    /// Theme name as shown in menus
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All entries in catalog order
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    /// Number of entries in the theme
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the theme has no entries
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries whose word has exactly `length` letters
    #[must_use]
    pub fn entries_of_len(&self, length: usize) -> Vec<&WordEntry> {
        self.entries.iter().filter(|e| e.len() == length).collect()
    }
}

/// Look up an embedded theme by name
#[must_use]
pub fn theme(name: &str) -> Option<Theme> {
    THEMES
        .iter()
        .find(|(theme_name, _)| *theme_name == name)
        .map(|&(theme_name, pairs)| Theme::from_pairs(theme_name, pairs))
}

/// Names of all embedded themes, in menu order
#[must_use]
pub fn theme_names() -> Vec<&'static str> {
    THEMES.iter().map(|&(name, _)| name).collect()
}

/// All embedded themes, in menu order
#[must_use]
pub fn all() -> Vec<Theme> {
    THEMES
        .iter()
        .map(|&(name, pairs)| Theme::from_pairs(name, pairs))
        .collect()
}
