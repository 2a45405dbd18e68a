//! Hangman session state machine
//!
//! This module contains the round lifecycle: word selection, guess
//! evaluation, accuracy tracking, the countdown timer, power-ups, and
//! the `GameSession` facade the front ends drive.

pub mod accuracy;
pub mod engine;
mod game;
pub mod powerups;
pub mod rng;
pub mod selector;
pub mod state;
pub mod timer;

pub use accuracy::AccuracyTier;
pub use engine::GuessOutcome;
pub use game::{CHANCES_RANGE, DEFAULT_CHANCES, GameSession, RoundSummary, SessionConfig};
pub use powerups::{FIFTY_FIFTY_MAX_CHANCES, PowerUp, PowerUpLedger, PowerUpOutcome};
pub use rng::{RandomSource, SeededRandom, ThreadRandom};
pub use selector::{WORD_LENGTH_RANGE, WordSelector};
pub use state::{RoundPhase, SessionState};
pub use timer::{ROUND_SECONDS, RoundTimer, TimerTick};
