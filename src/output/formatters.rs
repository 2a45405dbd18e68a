//! Formatting utilities for terminal output

/// Render the word progress as spaced uppercase letters and blanks
///
/// One slot per letter: revealed letters show, hidden ones are `_`.
#[must_use]
pub fn masked_word(slots: &[Option<char>]) -> String {
    slots
        .iter()
        .map(|slot| slot.map_or('_', |c| c.to_ascii_uppercase()).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format an accuracy percentage as a bar
#[must_use]
pub fn accuracy_bar(percent: f64, width: usize) -> String {
    create_progress_bar(percent, 100.0, width)
}

/// The gallows figure, one drawing per stage of completion
const GALLOWS_STAGES: [&str; 7] = [
    r"  +---+
  |   |
      |
      |
      |
      |
=========",
    r"  +---+
  |   |
  O   |
      |
      |
      |
=========",
    r"  +---+
  |   |
  O   |
  |   |
      |
      |
=========",
    r"  +---+
  |   |
  O   |
 /|   |
      |
      |
=========",
    r"  +---+
  |   |
  O   |
 /|\  |
      |
      |
=========",
    r"  +---+
  |   |
  O   |
 /|\  |
 /    |
      |
=========",
    r"  +---+
  |   |
  O   |
 /|\  |
 / \  |
      |
=========",
];

/// Gallows drawing for the current wrong-guess count
///
/// The figure has six parts; configurations with other limits scale the
/// wrong-guess fraction onto the six stages, completing the figure
/// exactly when the limit is reached.
#[must_use]
pub fn gallows(wrong_guesses: u8, max_wrong: u8) -> &'static str {
    let max = usize::from(max_wrong.max(1));
    let stage = (usize::from(wrong_guesses) * (GALLOWS_STAGES.len() - 1)) / max;

    GALLOWS_STAGES[stage.min(GALLOWS_STAGES.len() - 1)]
}
