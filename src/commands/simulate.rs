//! Simulate command
//!
//! Plays many rounds with a random guesser and reports win rate,
//! accuracy and the wrong-guess distribution for a theme and difficulty.

use crate::session::{GameSession, RandomSource, SeededRandom, SessionConfig, SessionState};
use crate::wordbank::Theme;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Settings for a simulation run
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub rounds: usize,
    pub chances: Option<u8>,
    pub seed: Option<u64>,
}

/// Outcome of one simulated round
#[derive(Debug, Clone, Copy, Default)]
struct RoundRecord {
    won: bool,
    wrong_guesses: u8,
    accuracy: f64,
}

/// Aggregate result of a simulation run
pub struct SimulationResult {
    pub total_rounds: usize,
    pub wins: usize,
    pub win_rate: f64,
    pub average_accuracy: f64,
    pub average_wrong_guesses: f64,
    pub wrong_guess_distribution: HashMap<u8, usize>,
    pub duration: Duration,
    pub rounds_per_second: f64,
}

/// Run `config.rounds` independent rounds against `theme`
///
/// Each round gets its own session and a seed derived from the run seed,
/// so a fixed `--seed` reproduces the exact same result. Rounds are
/// played in parallel.
#[must_use]
pub fn run_simulation(theme: &Theme, config: &SimulationConfig) -> SimulationResult {
    let seed = config.seed.unwrap_or_else(rand::random);
    let session_config = round_config(config);

    let pb = ProgressBar::new(config.rounds as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();

    let records: Vec<RoundRecord> = (0..config.rounds)
        .into_par_iter()
        .map(|i| {
            let record = play_round(theme, &session_config, seed.wrapping_add(i as u64));
            pb.inc(1);
            record
        })
        .collect();

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    aggregate(&records, duration)
}

fn round_config(config: &SimulationConfig) -> SessionConfig {
    let mut session_config = SessionConfig::new("simulator");
    session_config.chances = config.chances;
    session_config
}

/// Play one round, guessing shuffled alphabet letters until it ends
fn play_round(theme: &Theme, config: &SessionConfig, seed: u64) -> RoundRecord {
    let mut session = GameSession::new(SeededRandom::new(seed));
    session.configure(theme, config);

    let mut order: Vec<char> = ('a'..='z').collect();
    let mut guesser = SeededRandom::new(seed ^ 0x9e37_79b9_7f4a_7c15);
    guesser.shuffle(&mut order);

    for letter in order {
        if session.guess(letter).round_ended {
            break;
        }
    }

    // Exhausting the alphabet always ends the round, so the summary exists
    let Some(summary) = session.final_summary() else {
        return RoundRecord::default();
    };

    RoundRecord {
        won: summary.won,
        wrong_guesses: session.state().map_or(0, SessionState::wrong_guesses),
        accuracy: summary.accuracy,
    }
}

fn aggregate(records: &[RoundRecord], duration: Duration) -> SimulationResult {
    let total_rounds = records.len();
    let wins = records.iter().filter(|r| r.won).count();

    let mut wrong_guess_distribution: HashMap<u8, usize> = HashMap::new();
    for record in records {
        *wrong_guess_distribution
            .entry(record.wrong_guesses)
            .or_insert(0) += 1;
    }

    let (win_rate, average_accuracy, average_wrong_guesses) = if total_rounds == 0 {
        (0.0, 0.0, 0.0)
    } else {
        let total = total_rounds as f64;
        (
            wins as f64 / total * 100.0,
            records.iter().map(|r| r.accuracy).sum::<f64>() / total,
            records
                .iter()
                .map(|r| f64::from(r.wrong_guesses))
                .sum::<f64>()
                / total,
        )
    };

    SimulationResult {
        total_rounds,
        wins,
        win_rate,
        average_accuracy,
        average_wrong_guesses,
        wrong_guess_distribution,
        duration,
        rounds_per_second: if duration.as_secs_f64() > 0.0 {
            total_rounds as f64 / duration.as_secs_f64()
        } else {
            0.0
        },
    }
}
