//! Game session facade
//!
//! `GameSession` is the single entry point the front ends talk to. It
//! owns the word selector (and its cross-round history), the current
//! round state, the power-up ledger and the countdown timer, and keeps
//! them consistent: one round epoch, one place that cancels the timer.

use super::accuracy;
use super::engine::{self, GuessOutcome};
use super::powerups::{self, PowerUp, PowerUpLedger, PowerUpOutcome};
use super::rng::RandomSource;
use super::selector::WordSelector;
use super::state::{RoundPhase, SessionState};
use super::timer::{RoundTimer, TimerTick};
use crate::wordbank::Theme;

/// Wrong-guess limit used when the configured value is out of range
pub const DEFAULT_CHANCES: u8 = 6;

/// Valid wrong-guess limits; anything outside falls back to the default
pub const CHANCES_RANGE: std::ops::RangeInclusive<u8> = 3..=10;

/// Player-chosen settings for a round
///
/// Raw values are kept as entered; the `effective_*` accessors apply the
/// validation rules (invalid word length ignored, invalid chances
/// replaced by the default).
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub player_name: String,
    pub word_length: Option<u8>,
    pub chances: Option<u8>,
    pub timed: bool,
}

impl SessionConfig {
    #[must_use]
    pub fn new(player_name: impl Into<String>) -> Self {
        Self {
            player_name: player_name.into(),
            word_length: None,
            chances: None,
            timed: false,
        }
    }

    /// Wrong-guess limit after validation
    #[must_use]
    pub fn effective_chances(&self) -> u8 {
        match self.chances {
            Some(n) if CHANCES_RANGE.contains(&n) => n,
            _ => DEFAULT_CHANCES,
        }
    }

    /// Word-length filter after validation, `None` when absent or invalid
    #[must_use]
    pub fn effective_word_length(&self) -> Option<usize> {
        self.word_length
            .map(usize::from)
            .filter(|len| super::selector::WORD_LENGTH_RANGE.contains(len))
    }
}

/// End-of-round report for the summary screen
#[derive(Debug, Clone, PartialEq)]
pub struct RoundSummary {
    pub won: bool,
    pub word: String,
    pub hint: String,
    pub player_name: String,
    pub accuracy: f64,
}

/// A playing session: many rounds, one word history
pub struct GameSession<R: RandomSource> {
    rng: R,
    selector: WordSelector,
    round: Option<SessionState>,
    powerups: PowerUpLedger,
    timer: RoundTimer,
    epoch: u64,
}

impl<R: RandomSource> GameSession<R> {
    /// Create a session with no round in progress
    #[must_use]
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            selector: WordSelector::new(),
            round: None,
            powerups: PowerUpLedger::new(),
            timer: RoundTimer::new(),
            epoch: 0,
        }
    }

    /// Start a round: pick a word from `theme` and reset per-round state
    ///
    /// Any countdown left over from the previous round is cancelled
    /// before the new one is armed, and the epoch is bumped so stale
    /// ticks cannot reach the new round. The word history survives,
    /// keeping the non-repetition guarantee across rounds.
    pub fn configure(&mut self, theme: &Theme, config: &SessionConfig) -> &SessionState {
        self.epoch += 1;
        self.timer.cancel();
        self.powerups.reset();

        let entry = self
            .selector
            .select(theme, config.effective_word_length(), &mut self.rng);
        let state = SessionState::start_round(
            entry,
            config.effective_chances(),
            config.player_name.clone(),
        );

        if config.timed {
            self.timer.arm(self.epoch);
        }

        self.round.insert(state)
    }

    /// Apply a letter guess to the current round
    ///
    /// A no-op (default outcome) when no round is in progress.
    pub fn guess(&mut self, letter: char) -> GuessOutcome {
        let Some(state) = self.round.as_mut() else {
            return GuessOutcome::default();
        };

        let outcome = engine::apply_guess(state, letter);
        if outcome.round_ended {
            self.timer.cancel();
        }
        outcome
    }

    /// Activate a power-up against the current round
    pub fn activate(&mut self, kind: PowerUp) -> PowerUpOutcome {
        let Some(state) = self.round.as_mut() else {
            return PowerUpOutcome::Unavailable;
        };

        let outcome = powerups::activate(kind, state, &mut self.powerups, &mut self.rng);
        if let PowerUpOutcome::Revealed { guess, .. } = &outcome
            && guess.round_ended
        {
            self.timer.cancel();
        }
        outcome
    }

    /// Advance the countdown by one second
    ///
    /// Returns `true` iff the round just ended (the clock ran out and
    /// the loss was forced). Untimed rounds always return `false`.
    pub fn tick(&mut self) -> bool {
        match self.timer.tick(self.epoch) {
            TimerTick::Expired => {
                if let Some(state) = self.round.as_mut() {
                    state.force_loss();
                }
                true
            }
            TimerTick::Disarmed | TimerTick::Running(_) | TimerTick::Stale => false,
        }
    }

    /// Whether a round is currently accepting guesses
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.round.as_ref().is_some_and(SessionState::is_in_progress)
    }

    /// Live accuracy percentage for the current round
    ///
    /// Reads 100 before any guess, like a fresh accuracy chart.
    #[must_use]
    pub fn accuracy(&self) -> f64 {
        self.round.as_ref().map_or(100.0, accuracy::live_accuracy)
    }

    /// The current round state, if any round was started
    #[must_use]
    pub const fn state(&self) -> Option<&SessionState> {
        self.round.as_ref()
    }

    /// Per-round power-up charges
    #[must_use]
    pub const fn powerups(&self) -> &PowerUpLedger {
        &self.powerups
    }

    /// Seconds left on the countdown, `None` when untimed or stopped
    #[must_use]
    pub const fn remaining_seconds(&self) -> Option<u16> {
        self.timer.remaining()
    }

    /// End-of-round report; `None` while a round is still in progress
    /// (or before the first round)
    #[must_use]
    pub fn final_summary(&self) -> Option<RoundSummary> {
        let state = self.round.as_ref()?;
        if state.is_in_progress() {
            return None;
        }

        Some(RoundSummary {
            won: state.phase() == RoundPhase::Won,
            word: state.word().to_string(),
            hint: state.hint().to_string(),
            player_name: state.player_name().to_string(),
            accuracy: accuracy::final_accuracy(state),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::rng::SeededRandom;
    use crate::wordbank;

    fn animals() -> Theme {
        wordbank::theme("animals").unwrap()
    }

    #[test]
    fn configure_starts_a_round() {
        let mut session = GameSession::new(SeededRandom::new(42));
        let config = SessionConfig::new("Ada");

        let state = session.configure(&animals(), &config);
        assert!(state.is_in_progress());
        assert_eq!(state.max_wrong(), DEFAULT_CHANCES);
        assert!(session.is_active());
        assert!(session.final_summary().is_none());
    }

    #[test]
    fn invalid_config_values_fall_back() {
        let mut config = SessionConfig::new("Ada");
        config.chances = Some(99);
        config.word_length = Some(3);

        assert_eq!(config.effective_chances(), DEFAULT_CHANCES);
        assert_eq!(config.effective_word_length(), None);

        config.chances = Some(3);
        config.word_length = Some(4);
        assert_eq!(config.effective_chances(), 3);
        assert_eq!(config.effective_word_length(), Some(4));
    }

    #[test]
    fn wolf_walkthrough_wins_with_full_accuracy() {
        let mut session = GameSession::new(SeededRandom::new(42));
        let mut config = SessionConfig::new("Ada");
        config.word_length = Some(4); // only "wolf" qualifies in animals

        let state = session.configure(&animals(), &config);
        assert_eq!(state.word(), "wolf");

        for letter in ['w', 'o', 'l'] {
            let outcome = session.guess(letter);
            assert!(outcome.hit);
            assert!(!outcome.round_ended);
        }
        let outcome = session.guess('f');
        assert!(outcome.won);

        assert!(!session.is_active());
        let summary = session.final_summary().unwrap();
        assert!(summary.won);
        assert_eq!(summary.word, "wolf");
        assert_eq!(summary.hint, "Wild canine, travels in packs.");
        assert_eq!(summary.player_name, "Ada");
        assert!((summary.accuracy - 100.0).abs() < f64::EPSILON);
        assert_eq!(session.state().unwrap().wrong_guesses(), 0);
    }

    #[test]
    fn six_misses_end_in_loss() {
        let mut session = GameSession::new(SeededRandom::new(42));
        let mut config = SessionConfig::new("Ada");
        config.word_length = Some(4);
        session.configure(&animals(), &config);

        // None of these letters appear in "wolf"
        for letter in ['a', 'b', 'c', 'e', 'i'] {
            assert!(!session.guess(letter).round_ended);
        }
        let outcome = session.guess('j');

        assert!(outcome.round_ended);
        assert!(!outcome.won);
        let summary = session.final_summary().unwrap();
        assert!(!summary.won);
        assert_eq!(session.state().unwrap().wrong_guesses(), 6);
    }

    #[test]
    fn guess_without_round_is_noop() {
        let mut session = GameSession::new(SeededRandom::new(1));
        assert_eq!(session.guess('a'), GuessOutcome::default());
        assert!(!session.is_active());
        assert!((session.accuracy() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn timer_only_armed_in_timed_mode() {
        let mut session = GameSession::new(SeededRandom::new(2));
        let config = SessionConfig::new("Ada");
        session.configure(&animals(), &config);

        assert_eq!(session.remaining_seconds(), None);
        assert!(!session.tick());
    }

    #[test]
    fn timer_expiry_forces_the_loss() {
        let mut session = GameSession::new(SeededRandom::new(2));
        let mut config = SessionConfig::new("Ada");
        config.timed = true;
        session.configure(&animals(), &config);

        assert_eq!(session.remaining_seconds(), Some(90));
        let mut ended = false;
        for _ in 0..90 {
            ended = session.tick();
            if ended {
                break;
            }
        }

        assert!(ended);
        assert!(!session.is_active());
        assert!(!session.final_summary().unwrap().won);
        // Expiry disarms the clock; further ticks change nothing
        assert!(!session.tick());
    }

    #[test]
    fn winning_cancels_the_countdown() {
        let mut session = GameSession::new(SeededRandom::new(3));
        let mut config = SessionConfig::new("Ada");
        config.timed = true;
        config.word_length = Some(4);
        session.configure(&animals(), &config);

        for letter in ['w', 'o', 'l', 'f'] {
            session.guess(letter);
        }

        assert_eq!(session.remaining_seconds(), None);
        assert!(!session.tick());
    }

    #[test]
    fn new_round_replaces_stale_countdown() {
        let mut session = GameSession::new(SeededRandom::new(4));
        let mut config = SessionConfig::new("Ada");
        config.timed = true;
        session.configure(&animals(), &config);
        session.tick();

        // Second round: fresh clock, old round's remaining time is gone
        session.configure(&animals(), &config);
        assert_eq!(session.remaining_seconds(), Some(90));
        assert!(session.is_active());
    }

    #[test]
    fn words_do_not_repeat_across_rounds() {
        let theme = animals();
        let mut session = GameSession::new(SeededRandom::new(5));
        let config = SessionConfig::new("Ada");

        let mut seen = std::collections::HashSet::new();
        for _ in 0..theme.len() {
            let word = session.configure(&theme, &config).word().to_string();
            assert!(seen.insert(word));
        }
    }

    #[test]
    fn powerups_recharge_each_round() {
        let theme = animals();
        let mut session = GameSession::new(SeededRandom::new(6));
        let config = SessionConfig::new("Ada");
        session.configure(&theme, &config);

        assert!(matches!(
            session.activate(PowerUp::Reveal),
            PowerUpOutcome::Revealed { .. }
        ));
        assert!(session.powerups().is_used(PowerUp::Reveal));

        session.configure(&theme, &config);
        assert!(!session.powerups().is_used(PowerUp::Reveal));
    }

    #[test]
    fn fifty_fifty_respects_difficulty_gate_through_facade() {
        let theme = animals();
        let mut session = GameSession::new(SeededRandom::new(7));

        // Default six chances: gated off
        let config = SessionConfig::new("Ada");
        session.configure(&theme, &config);
        assert_eq!(session.activate(PowerUp::FiftyFifty), PowerUpOutcome::Unavailable);

        // Five chances: available
        let mut hard = SessionConfig::new("Ada");
        hard.chances = Some(5);
        session.configure(&theme, &hard);
        assert!(matches!(
            session.activate(PowerUp::FiftyFifty),
            PowerUpOutcome::LettersEliminated { .. }
        ));
    }

    #[test]
    fn remove_wrong_noop_through_facade() {
        let mut session = GameSession::new(SeededRandom::new(8));
        let config = SessionConfig::new("Ada");
        session.configure(&animals(), &config);

        assert_eq!(session.activate(PowerUp::RemoveWrong), PowerUpOutcome::Unavailable);
        assert_eq!(session.state().unwrap().wrong_guesses(), 0);
    }

    #[test]
    fn reveal_win_reports_summary() {
        let mut session = GameSession::new(SeededRandom::new(9));
        let mut config = SessionConfig::new("Ada");
        config.word_length = Some(4); // forces "wolf"
        session.configure(&animals(), &config);

        for letter in ['w', 'o', 'l'] {
            session.guess(letter);
        }
        let outcome = session.activate(PowerUp::Reveal);

        assert!(matches!(
            outcome,
            PowerUpOutcome::Revealed { letter: 'f', .. }
        ));
        assert!(session.final_summary().unwrap().won);
    }
}
