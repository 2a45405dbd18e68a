//! Guess accuracy tracking
//!
//! Accuracy is the share of correct guesses among all letter guesses,
//! as a percentage. The live value shown during play defaults to 100%
//! before any guess; the final post-round value defaults to 0% instead,
//! so an untouched round never reports a perfect result.

use super::state::SessionState;

/// Qualitative accuracy band, used for display coloring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccuracyTier {
    Low,
    Medium,
    High,
}

impl AccuracyTier {
    /// Band for a percentage: `< 30` low, `< 60` medium, otherwise high
    #[must_use]
    pub fn from_percent(percent: f64) -> Self {
        if percent < 30.0 {
            Self::Low
        } else if percent < 60.0 {
            Self::Medium
        } else {
            Self::High
        }
    }
}

/// Accuracy shown while the round is running
///
/// A fresh round with no guesses reads 100%.
#[must_use]
pub fn live_accuracy(state: &SessionState) -> f64 {
    ratio(state).map_or(100.0, |r| r * 100.0)
}

/// Accuracy reported in the end-of-round summary
///
/// A round that ended with no guesses reads 0%.
#[must_use]
pub fn final_accuracy(state: &SessionState) -> f64 {
    ratio(state).map_or(0.0, |r| r * 100.0)
}

fn ratio(state: &SessionState) -> Option<f64> {
    let correct = state.correct_letters().len();
    let total = correct + usize::from(state.wrong_guesses());

    if total == 0 {
        None
    } else {
        Some(correct as f64 / total as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordEntry;
    use crate::session::engine::apply_guess;

    fn wolf_round() -> SessionState {
        let entry = WordEntry::new("wolf", "Wild canine, travels in packs.").unwrap();
        SessionState::start_round(entry, 6, "Ada")
    }

    #[test]
    fn fresh_round_defaults() {
        let state = wolf_round();
        assert!((live_accuracy(&state) - 100.0).abs() < f64::EPSILON);
        assert!(final_accuracy(&state).abs() < f64::EPSILON);
    }

    #[test]
    fn all_hits_is_hundred_percent() {
        let mut state = wolf_round();
        for letter in ['w', 'o', 'l', 'f'] {
            apply_guess(&mut state, letter);
        }

        assert!((live_accuracy(&state) - 100.0).abs() < f64::EPSILON);
        assert!((final_accuracy(&state) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn misses_lower_accuracy() {
        let mut state = wolf_round();
        apply_guess(&mut state, 'w');
        apply_guess(&mut state, 'z');

        assert!((live_accuracy(&state) - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn accuracy_moves_the_right_way() {
        let mut state = wolf_round();
        let mut previous = live_accuracy(&state);

        // A miss never raises accuracy
        apply_guess(&mut state, 'z');
        let after_miss = live_accuracy(&state);
        assert!(after_miss <= previous);
        previous = after_miss;

        // A hit never lowers it
        apply_guess(&mut state, 'w');
        let after_hit = live_accuracy(&state);
        assert!(after_hit >= previous);
    }

    #[test]
    fn accuracy_stays_in_bounds() {
        let mut state = wolf_round();

        for letter in ['a', 'b', 'w', 'c', 'o', 'e', 'l', 'g', 'f'] {
            apply_guess(&mut state, letter);
            let pct = live_accuracy(&state);
            assert!((0.0..=100.0).contains(&pct));
        }
    }

    #[test]
    fn tier_bands() {
        assert_eq!(AccuracyTier::from_percent(0.0), AccuracyTier::Low);
        assert_eq!(AccuracyTier::from_percent(29.9), AccuracyTier::Low);
        assert_eq!(AccuracyTier::from_percent(30.0), AccuracyTier::Medium);
        assert_eq!(AccuracyTier::from_percent(59.9), AccuracyTier::Medium);
        assert_eq!(AccuracyTier::from_percent(60.0), AccuracyTier::High);
        assert_eq!(AccuracyTier::from_percent(100.0), AccuracyTier::High);
    }
}
