//! One-shot power-ups
//!
//! Each power-up is usable at most once per round while the round is in
//! progress. Activations that cannot do anything right now (ended round,
//! already consumed, nothing to act on, difficulty gate) report
//! `Unavailable` and do not consume the charge.

use super::engine::{self, GuessOutcome};
use super::rng::RandomSource;
use super::state::SessionState;

/// Fifty-fifty is only offered on harder rounds, at most this many chances
pub const FIFTY_FIFTY_MAX_CHANCES: u8 = 5;

/// The three consumable session modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerUp {
    /// Reveal one hidden letter of the word
    Reveal,
    /// Take back one wrong guess
    RemoveWrong,
    /// Disable half of the remaining letters that are not in the word
    FiftyFifty,
}

/// Per-round one-shot flags, reset when a new round starts
#[derive(Debug, Default, Clone)]
pub struct PowerUpLedger {
    reveal_used: bool,
    remove_used: bool,
    fifty_fifty_used: bool,
}

impl PowerUpLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget all consumed charges (new round)
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether the given power-up was already consumed this round
    #[must_use]
    pub const fn is_used(&self, kind: PowerUp) -> bool {
        match kind {
            PowerUp::Reveal => self.reveal_used,
            PowerUp::RemoveWrong => self.remove_used,
            PowerUp::FiftyFifty => self.fifty_fifty_used,
        }
    }

    const fn consume(&mut self, kind: PowerUp) {
        match kind {
            PowerUp::Reveal => self.reveal_used = true,
            PowerUp::RemoveWrong => self.remove_used = true,
            PowerUp::FiftyFifty => self.fifty_fifty_used = true,
        }
    }
}

/// What a power-up activation did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PowerUpOutcome {
    /// A hidden letter was applied as if guessed (it may have won the round)
    Revealed { letter: char, guess: GuessOutcome },
    /// One wrong guess was taken back; the new count
    WrongGuessRemoved { wrong_guesses: u8 },
    /// These letters were disabled for the rest of the round, sorted
    LettersEliminated { letters: Vec<char> },
    /// Nothing happened; no charge was consumed
    Unavailable,
}

/// Activate a power-up against the current round
pub fn activate<R: RandomSource>(
    kind: PowerUp,
    state: &mut SessionState,
    ledger: &mut PowerUpLedger,
    rng: &mut R,
) -> PowerUpOutcome {
    if !state.is_in_progress() || ledger.is_used(kind) {
        return PowerUpOutcome::Unavailable;
    }

    match kind {
        PowerUp::Reveal => reveal(state, ledger, rng),
        PowerUp::RemoveWrong => remove_wrong(state, ledger),
        PowerUp::FiftyFifty => fifty_fifty(state, ledger, rng),
    }
}

fn reveal<R: RandomSource>(
    state: &mut SessionState,
    ledger: &mut PowerUpLedger,
    rng: &mut R,
) -> PowerUpOutcome {
    let hidden: Vec<char> = state
        .entry()
        .distinct_letters()
        .into_iter()
        .filter(|c| !state.correct_letters().contains(c))
        .collect();

    if hidden.is_empty() {
        return PowerUpOutcome::Unavailable;
    }

    let letter = hidden[rng.pick_index(hidden.len())];
    ledger.consume(PowerUp::Reveal);

    // Route through the guess engine so a reveal can win the round
    let guess = engine::apply_guess(state, letter);
    PowerUpOutcome::Revealed { letter, guess }
}

fn remove_wrong(state: &mut SessionState, ledger: &mut PowerUpLedger) -> PowerUpOutcome {
    if state.wrong_guesses() == 0 {
        return PowerUpOutcome::Unavailable;
    }

    ledger.consume(PowerUp::RemoveWrong);
    state.remove_wrong_guess();
    PowerUpOutcome::WrongGuessRemoved {
        wrong_guesses: state.wrong_guesses(),
    }
}

fn fifty_fifty<R: RandomSource>(
    state: &mut SessionState,
    ledger: &mut PowerUpLedger,
    rng: &mut R,
) -> PowerUpOutcome {
    if state.max_wrong() > FIFTY_FIFTY_MAX_CHANCES {
        return PowerUpOutcome::Unavailable;
    }

    let mut candidates: Vec<char> = ('a'..='z')
        .filter(|&c| !state.entry().contains(c) && !state.is_letter_used(c))
        .collect();

    ledger.consume(PowerUp::FiftyFifty);
    rng.shuffle(&mut candidates);
    candidates.truncate(candidates.len() / 2);

    for &letter in &candidates {
        state.eliminate(letter);
    }

    candidates.sort_unstable();
    PowerUpOutcome::LettersEliminated { letters: candidates }
}
