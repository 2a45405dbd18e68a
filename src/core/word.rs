//! Hangman word entry representation
//!
//! A `WordEntry` pairs a guessable word with the hint shown to the player.

use std::fmt;

/// A guessable word together with its hint
///
/// The word is stored lowercase; hangman guesses are case-insensitive single letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    word: String,
    hint: String,
}

/// Error type for invalid word entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordEntryError {
    EmptyWord,
    NonAscii,
    InvalidCharacters,
    EmptyHint,
}

impl fmt::Display for WordEntryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyWord => write!(f, "Word must not be empty"),
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
            Self::EmptyHint => write!(f, "Hint must not be empty"),
        }
    }
}

impl std::error::Error for WordEntryError {}

impl WordEntry {
    /// Create a new entry from a word and its hint
    ///
    /// The word is normalized to lowercase; the hint is trimmed.
    ///
    /// # Errors
    /// Returns `WordEntryError` if:
    /// - The word is empty
    /// - The word contains non-ASCII characters
    /// - The word contains anything but letters
    /// - The hint is empty after trimming
    ///
    /// # Examples
    /// ```
    /// use hangman_arcade::core::WordEntry;
    ///
    /// let entry = WordEntry::new("Wolf", "Wild canine, travels in packs.").unwrap();
    /// assert_eq!(entry.text(), "wolf");
    ///
    /// assert!(WordEntry::new("ice cream", "Two words").is_err());
    /// assert!(WordEntry::new("wolf", "   ").is_err());
    /// ```
    pub fn new(word: impl Into<String>, hint: impl Into<String>) -> Result<Self, WordEntryError> {
        let word: String = word.into().to_lowercase();
        let hint: String = hint.into().trim().to_string();

        if word.is_empty() {
            return Err(WordEntryError::EmptyWord);
        }

        if !word.is_ascii() {
            return Err(WordEntryError::NonAscii);
        }

        if !word.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(WordEntryError::InvalidCharacters);
        }

        if hint.is_empty() {
            return Err(WordEntryError::EmptyHint);
        }

        Ok(Self { word, hint })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.word
    }

    /// Get the hint shown to the player
    #[inline]
    #[must_use]
    pub fn hint(&self) -> &str {
        &self.hint
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.word.len()
    }

    /// Whether the word has no letters (never true for a validated entry)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.word.contains(letter)
    }

    /// The distinct letters of the word, in first-occurrence order
    ///
    /// Guessing exactly these letters completes the word.
    #[must_use]
    pub fn distinct_letters(&self) -> Vec<char> {
        let mut letters = Vec::new();
        for c in self.word.chars() {
            if !letters.contains(&c) {
                letters.push(c);
            }
        }
        letters
    }
}

impl fmt::Display for WordEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_creation_valid() {
        let entry = WordEntry::new("wolf", "Wild canine, travels in packs.").unwrap();
        assert_eq!(entry.text(), "wolf");
        assert_eq!(entry.hint(), "Wild canine, travels in packs.");
        assert_eq!(entry.len(), 4);
    }

    #[test]
    fn entry_creation_uppercase_normalized() {
        let entry = WordEntry::new("WOLF", "A hint").unwrap();
        assert_eq!(entry.text(), "wolf");

        let entry2 = WordEntry::new("WoLf", "A hint").unwrap();
        assert_eq!(entry2.text(), "wolf");
    }

    #[test]
    fn entry_creation_hint_trimmed() {
        let entry = WordEntry::new("atom", "  The basic unit.  ").unwrap();
        assert_eq!(entry.hint(), "The basic unit.");
    }

    #[test]
    fn entry_creation_empty_word() {
        assert!(matches!(
            WordEntry::new("", "A hint"),
            Err(WordEntryError::EmptyWord)
        ));
    }

    #[test]
    fn entry_creation_invalid_characters() {
        assert!(WordEntry::new("c0de", "Leet").is_err()); // Number
        assert!(WordEntry::new("ice cream", "Space").is_err()); // Space
        assert!(WordEntry::new("it's", "Apostrophe").is_err()); // Punctuation
    }

    #[test]
    fn entry_creation_empty_hint() {
        assert!(matches!(
            WordEntry::new("wolf", ""),
            Err(WordEntryError::EmptyHint)
        ));
        assert!(matches!(
            WordEntry::new("wolf", "   "),
            Err(WordEntryError::EmptyHint)
        ));
    }

    #[test]
    fn entry_contains() {
        let entry = WordEntry::new("wolf", "A hint").unwrap();
        assert!(entry.contains('w'));
        assert!(entry.contains('f'));
        assert!(!entry.contains('z'));
    }

    #[test]
    fn distinct_letters_unique_word() {
        let entry = WordEntry::new("wolf", "A hint").unwrap();
        assert_eq!(entry.distinct_letters(), vec!['w', 'o', 'l', 'f']);
    }

    #[test]
    fn distinct_letters_with_duplicates() {
        let entry = WordEntry::new("spaghetti", "Pasta").unwrap();
        // 't' appears twice but is listed once, at its first occurrence
        assert_eq!(
            entry.distinct_letters(),
            vec!['s', 'p', 'a', 'g', 'h', 'e', 't', 'i']
        );
    }

    #[test]
    fn distinct_letters_all_same() {
        let entry = WordEntry::new("aaa", "Triple").unwrap();
        assert_eq!(entry.distinct_letters(), vec!['a']);
    }

    #[test]
    fn entry_display() {
        let entry = WordEntry::new("wolf", "A hint").unwrap();
        assert_eq!(format!("{entry}"), "wolf");
    }

    #[test]
    fn entry_equality_ignores_case_of_input() {
        let entry1 = WordEntry::new("wolf", "A hint").unwrap();
        let entry2 = WordEntry::new("WOLF", "A hint").unwrap();
        let entry3 = WordEntry::new("tiger", "A hint").unwrap();

        assert_eq!(entry1, entry2);
        assert_ne!(entry1, entry3);
    }
}
