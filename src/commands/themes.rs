//! Theme catalog overview
//!
//! Summarizes the embedded themes so players can pick a theme and a
//! word-length filter that actually matches something.

use crate::session::WORD_LENGTH_RANGE;
use crate::wordbank::{self, Theme};

/// Summary of one theme
pub struct ThemeOverview {
    pub name: String,
    pub word_count: usize,
    pub min_length: usize,
    pub max_length: usize,
    /// Lengths inside the custom-filter range that match at least one word
    pub filterable_lengths: Vec<usize>,
}

/// Build the overview for one theme
#[must_use]
pub fn overview(theme: &Theme) -> ThemeOverview {
    let lengths: Vec<usize> = theme.entries().iter().map(crate::core::WordEntry::len).collect();

    let filterable_lengths = WORD_LENGTH_RANGE
        .filter(|&len| lengths.contains(&len))
        .collect();

    ThemeOverview {
        name: theme.name().to_string(),
        word_count: theme.len(),
        min_length: lengths.iter().copied().min().unwrap_or(0),
        max_length: lengths.iter().copied().max().unwrap_or(0),
        filterable_lengths,
    }
}

/// Overviews for every embedded theme, in menu order
#[must_use]
pub fn theme_overviews() -> Vec<ThemeOverview> {
    wordbank::all().iter().map(overview).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_all_embedded_themes() {
        let overviews = theme_overviews();
        assert_eq!(overviews.len(), wordbank::THEME_COUNT);
        assert_eq!(overviews[0].name, "general");
    }

    #[test]
    fn animals_overview() {
        let theme = wordbank::theme("animals").unwrap();
        let overview = overview(&theme);

        assert_eq!(overview.word_count, 7);
        assert_eq!(overview.min_length, 4); // wolf
        assert_eq!(overview.max_length, 10); // salamander
        // One animal per length, so every filter value matches
        assert_eq!(overview.filterable_lengths, vec![4, 5, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn general_overview_has_a_gap() {
        let theme = wordbank::theme("general").unwrap();
        let overview = overview(&theme);

        // No 8-letter word in the general catalog
        assert!(!overview.filterable_lengths.contains(&8));
        assert!(overview.filterable_lengths.contains(&7));
    }

    #[test]
    fn filterable_lengths_stay_in_range() {
        for overview in theme_overviews() {
            for len in &overview.filterable_lengths {
                assert!(WORD_LENGTH_RANGE.contains(len));
            }
        }
    }
}
