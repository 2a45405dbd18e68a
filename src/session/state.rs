//! Mutable round state
//!
//! A `SessionState` exists only for a started round. It is created by
//! `start_round`, mutated by the guess engine and power-ups, reaches a
//! terminal phase exactly once, and is fully replaced when a new round
//! starts.

use crate::core::WordEntry;
use rustc_hash::FxHashSet;

/// Lifecycle phase of a round
///
/// `Won` and `Lost` are terminal: once reached, guesses, power-ups and
/// timer ticks are all ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    InProgress,
    Won,
    Lost,
}

/// The mutable state of one hangman round
#[derive(Debug, Clone)]
pub struct SessionState {
    entry: WordEntry,
    phase: RoundPhase,
    correct: FxHashSet<char>,
    wrong: FxHashSet<char>,
    eliminated: FxHashSet<char>,
    wrong_guesses: u8,
    max_wrong: u8,
    player_name: String,
}

impl SessionState {
    /// Start a fresh round for the given word
    ///
    /// Letter sets and the wrong-guess count start empty; the round is
    /// immediately in progress.
    #[must_use]
    pub fn start_round(entry: WordEntry, max_wrong: u8, player_name: impl Into<String>) -> Self {
        Self {
            entry,
            phase: RoundPhase::InProgress,
            correct: FxHashSet::default(),
            wrong: FxHashSet::default(),
            eliminated: FxHashSet::default(),
            wrong_guesses: 0,
            max_wrong,
            player_name: player_name.into(),
        }
    }

    /// Current lifecycle phase
    #[inline]
    #[must_use]
    pub const fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Whether the round still accepts guesses
    #[inline]
    #[must_use]
    pub fn is_in_progress(&self) -> bool {
        self.phase == RoundPhase::InProgress
    }

    /// The word being guessed
    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        self.entry.text()
    }

    /// The hint for the current word
    #[inline]
    #[must_use]
    pub fn hint(&self) -> &str {
        self.entry.hint()
    }

    /// The full word entry
    #[inline]
    #[must_use]
    pub const fn entry(&self) -> &WordEntry {
        &self.entry
    }

    /// The configured player name
    #[inline]
    #[must_use]
    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    /// Correctly guessed letters
    #[inline]
    #[must_use]
    pub const fn correct_letters(&self) -> &FxHashSet<char> {
        &self.correct
    }

    /// Wrongly guessed letters
    ///
    /// Note: `RemoveWrong` lowers the wrong-guess count without
    /// un-guessing a letter, so this set can be larger than the count.
    #[inline]
    #[must_use]
    pub const fn wrong_letters(&self) -> &FxHashSet<char> {
        &self.wrong
    }

    /// Letters disabled by the fifty-fifty power-up
    #[inline]
    #[must_use]
    pub const fn eliminated_letters(&self) -> &FxHashSet<char> {
        &self.eliminated
    }

    /// Current wrong-guess count
    #[inline]
    #[must_use]
    pub const fn wrong_guesses(&self) -> u8 {
        self.wrong_guesses
    }

    /// Configured wrong-guess limit for this round
    #[inline]
    #[must_use]
    pub const fn max_wrong(&self) -> u8 {
        self.max_wrong
    }

    /// Wrong guesses left before the round is lost
    #[inline]
    #[must_use]
    pub const fn remaining_chances(&self) -> u8 {
        self.max_wrong.saturating_sub(self.wrong_guesses)
    }

    /// Whether a letter has already been played or disabled
    #[must_use]
    pub fn is_letter_used(&self, letter: char) -> bool {
        self.correct.contains(&letter)
            || self.wrong.contains(&letter)
            || self.eliminated.contains(&letter)
    }

    /// Whether every distinct letter of the word has been guessed
    #[must_use]
    pub fn is_word_complete(&self) -> bool {
        self.entry.text().chars().all(|c| self.correct.contains(&c))
    }

    /// One slot per letter of the word: `Some` once revealed, `None` while hidden
    #[must_use]
    pub fn letter_slots(&self) -> Vec<Option<char>> {
        self.entry
            .text()
            .chars()
            .map(|c| self.correct.contains(&c).then_some(c))
            .collect()
    }

    pub(crate) fn add_correct(&mut self, letter: char) {
        self.correct.insert(letter);
    }

    pub(crate) fn add_wrong(&mut self, letter: char) {
        self.wrong.insert(letter);
        self.wrong_guesses += 1;
    }

    pub(crate) fn remove_wrong_guess(&mut self) {
        self.wrong_guesses = self.wrong_guesses.saturating_sub(1);
    }

    pub(crate) fn eliminate(&mut self, letter: char) {
        self.eliminated.insert(letter);
    }

    pub(crate) fn win(&mut self) {
        if self.phase == RoundPhase::InProgress {
            self.phase = RoundPhase::Won;
        }
    }

    /// Transition to `Lost`; a no-op on an already-ended round
    pub(crate) fn force_loss(&mut self) {
        if self.phase == RoundPhase::InProgress {
            self.phase = RoundPhase::Lost;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wolf_round() -> SessionState {
        let entry = WordEntry::new("wolf", "Wild canine, travels in packs.").unwrap();
        SessionState::start_round(entry, 6, "Ada")
    }

    #[test]
    fn start_round_is_fresh() {
        let state = wolf_round();

        assert_eq!(state.phase(), RoundPhase::InProgress);
        assert!(state.is_in_progress());
        assert!(state.correct_letters().is_empty());
        assert!(state.wrong_letters().is_empty());
        assert!(state.eliminated_letters().is_empty());
        assert_eq!(state.wrong_guesses(), 0);
        assert_eq!(state.max_wrong(), 6);
        assert_eq!(state.remaining_chances(), 6);
        assert_eq!(state.player_name(), "Ada");
    }

    #[test]
    fn word_complete_requires_all_letters() {
        let mut state = wolf_round();
        assert!(!state.is_word_complete());

        for letter in ['w', 'o', 'l'] {
            state.add_correct(letter);
        }
        assert!(!state.is_word_complete());

        state.add_correct('f');
        assert!(state.is_word_complete());
    }

    #[test]
    fn letter_slots_track_reveals() {
        let mut state = wolf_round();
        assert_eq!(state.letter_slots(), vec![None, None, None, None]);

        state.add_correct('o');
        assert_eq!(state.letter_slots(), vec![None, Some('o'), None, None]);
    }

    #[test]
    fn terminal_transitions_happen_once() {
        let mut state = wolf_round();

        state.win();
        assert_eq!(state.phase(), RoundPhase::Won);

        // Already terminal: a later forced loss must not overwrite the win
        state.force_loss();
        assert_eq!(state.phase(), RoundPhase::Won);
    }

    #[test]
    fn force_loss_only_from_in_progress() {
        let mut state = wolf_round();
        state.force_loss();
        assert_eq!(state.phase(), RoundPhase::Lost);

        state.win();
        assert_eq!(state.phase(), RoundPhase::Lost);
    }

    #[test]
    fn is_letter_used_covers_all_sets() {
        let mut state = wolf_round();
        state.add_correct('w');
        state.add_wrong('z');
        state.eliminate('q');

        assert!(state.is_letter_used('w'));
        assert!(state.is_letter_used('z'));
        assert!(state.is_letter_used('q'));
        assert!(!state.is_letter_used('a'));
    }

    #[test]
    fn remove_wrong_guess_saturates_at_zero() {
        let mut state = wolf_round();
        state.remove_wrong_guess();
        assert_eq!(state.wrong_guesses(), 0);

        state.add_wrong('z');
        state.add_wrong('x');
        state.remove_wrong_guess();
        assert_eq!(state.wrong_guesses(), 1);
        // The letters stay used even after the count drops
        assert!(state.is_letter_used('z'));
        assert!(state.is_letter_used('x'));
    }
}
