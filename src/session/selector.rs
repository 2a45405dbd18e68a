//! Non-repeating word selection
//!
//! Picks a word uniformly at random from a theme, remembering what was
//! already played so rounds cycle through the whole theme before any
//! word repeats.

use super::rng::RandomSource;
use crate::core::WordEntry;
use crate::wordbank::Theme;
use rustc_hash::FxHashSet;

/// Valid custom word lengths; anything outside is ignored
pub const WORD_LENGTH_RANGE: std::ops::RangeInclusive<usize> = 4..=10;

/// Selects words from themes without repetition
///
/// The used-word history spans rounds; it is only cleared for a theme
/// once that theme is exhausted.
#[derive(Debug, Default, Clone)]
pub struct WordSelector {
    used: FxHashSet<String>,
}

impl WordSelector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pick the next word from `theme`
    ///
    /// When `length_filter` holds a value in `WORD_LENGTH_RANGE`, only
    /// words of exactly that length are considered; a filter that leaves
    /// nothing falls back to the whole theme rather than dead-ending.
    /// When every candidate has been played, this theme's words are
    /// cleared from the history and selection resumes from the full set.
    ///
    /// The theme must contain at least one entry.
    pub fn select<R: RandomSource>(
        &mut self,
        theme: &Theme,
        length_filter: Option<usize>,
        rng: &mut R,
    ) -> WordEntry {
        let pool: Vec<&WordEntry> = match length_filter {
            Some(len) if WORD_LENGTH_RANGE.contains(&len) => {
                let filtered = theme.entries_of_len(len);
                if filtered.is_empty() {
                    theme.entries().iter().collect()
                } else {
                    filtered
                }
            }
            _ => theme.entries().iter().collect(),
        };

        let mut candidates: Vec<&WordEntry> = pool
            .iter()
            .copied()
            .filter(|e| !self.used.contains(e.text()))
            .collect();

        if candidates.is_empty() {
            // Theme exhausted: forget its words and start the cycle over
            for entry in theme.entries() {
                self.used.remove(entry.text());
            }
            candidates = pool;
        }

        let picked = candidates[rng.pick_index(candidates.len())].clone();
        self.used.insert(picked.text().to_string());
        picked
    }

    /// Number of words currently remembered as played
    #[must_use]
    pub fn used_count(&self) -> usize {
        self.used.len()
    }
}
