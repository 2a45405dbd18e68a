//! Guess evaluation
//!
//! Applies a single letter guess to a round and reports the outcome.
//! The engine never errors: calls that are not currently actionable
//! (ended round, non-letter input, replayed or disabled letter) are
//! no-ops returning the default outcome.

use super::state::SessionState;

/// Result of applying one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GuessOutcome {
    /// The letter occurs in the word
    pub hit: bool,
    /// The round ended with this guess
    pub round_ended: bool,
    /// The round ended in a win
    pub won: bool,
}

impl GuessOutcome {
    const fn hit_continue() -> Self {
        Self {
            hit: true,
            round_ended: false,
            won: false,
        }
    }

    const fn hit_won() -> Self {
        Self {
            hit: true,
            round_ended: true,
            won: true,
        }
    }

    const fn miss_continue() -> Self {
        Self {
            hit: false,
            round_ended: false,
            won: false,
        }
    }

    const fn miss_lost() -> Self {
        Self {
            hit: false,
            round_ended: true,
            won: false,
        }
    }
}

/// Apply a letter guess to the round
///
/// Uppercase input is normalized. A hit adds the letter to the correct
/// set and wins the round once every distinct letter of the word is
/// covered. A miss raises the wrong-guess count and loses the round when
/// the configured limit is reached.
///
/// Replaying a letter (correct or wrong) changes nothing: a repeated hit
/// must not double-reveal and a repeated miss must not double-penalize.
pub fn apply_guess(state: &mut SessionState, letter: char) -> GuessOutcome {
    let letter = letter.to_ascii_lowercase();

    if !state.is_in_progress() || !letter.is_ascii_lowercase() || state.is_letter_used(letter) {
        return GuessOutcome::default();
    }

    if state.entry().contains(letter) {
        state.add_correct(letter);

        if state.is_word_complete() {
            state.win();
            return GuessOutcome::hit_won();
        }
        return GuessOutcome::hit_continue();
    }

    state.add_wrong(letter);

    if state.wrong_guesses() >= state.max_wrong() {
        state.force_loss();
        return GuessOutcome::miss_lost();
    }
    GuessOutcome::miss_continue()
}
