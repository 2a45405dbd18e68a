//! Theme loading utilities
//!
//! Provides functions to load custom themes from files or build them from pair slices.

use super::Theme;
use std::fs;
use std::io;
use std::path::Path;

/// Load a theme from a `word|hint` text file
///
/// Each non-empty line holds one entry, word and hint separated by `|`.
/// Invalid lines are skipped. The theme is named after the file stem.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use hangman_arcade::wordbank::loader::load_from_file;
///
/// let theme = load_from_file("data/themes/animals.txt").unwrap();
/// println!("Loaded {} words", theme.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Theme> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let name = path
        .file_stem()
        .map_or_else(|| "custom".to_string(), |s| s.to_string_lossy().to_string());

    Ok(theme_from_lines(name, &content))
}

/// Build a theme from `word|hint` lines, skipping invalid entries
#[must_use]
pub fn theme_from_lines(name: impl Into<String>, content: &str) -> Theme {
    let pairs: Vec<(&str, &str)> = content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                trimmed.split_once('|')
            }
        })
        .collect();

    Theme::from_pairs(name, &pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_from_lines_parses_entries() {
        let content = "wolf|Wild canine.\ntiger|Large striped cat.\n";
        let theme = theme_from_lines("zoo", content);

        assert_eq!(theme.name(), "zoo");
        assert_eq!(theme.len(), 2);
        assert_eq!(theme.entries()[0].text(), "wolf");
        assert_eq!(theme.entries()[1].hint(), "Large striped cat.");
    }

    #[test]
    fn theme_from_lines_skips_invalid() {
        let content = "wolf|Wild canine.\nno separator line\n|missing word\ntiger|\nbear|Forest dweller.";
        let theme = theme_from_lines("zoo", content);

        // Only "wolf" and "bear" survive: no '|', empty word, and empty hint are dropped
        assert_eq!(theme.len(), 2);
        assert_eq!(theme.entries()[0].text(), "wolf");
        assert_eq!(theme.entries()[1].text(), "bear");
    }

    #[test]
    fn theme_from_lines_empty_content() {
        let theme = theme_from_lines("empty", "");
        assert!(theme.is_empty());
    }

    #[test]
    fn theme_from_lines_blank_lines_ignored() {
        let content = "\n\nwolf|Wild canine.\n\n";
        let theme = theme_from_lines("zoo", content);
        assert_eq!(theme.len(), 1);
    }
}
