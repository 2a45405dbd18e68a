//! Simple interactive CLI mode
//!
//! Text-based hangman round without TUI.

use crate::output::display::print_round_summary;
use crate::output::formatters::{accuracy_bar, gallows, masked_word};
use crate::session::{
    GameSession, PowerUp, PowerUpOutcome, SessionConfig, ThreadRandom,
};
use crate::wordbank::Theme;
use std::io::{self, Write};
use std::time::Instant;

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading user input or flushing stdout fails.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_simple(theme: &Theme, config: &SessionConfig) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Hangman - Interactive Mode                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the hidden word one letter at a time.");
    println!("Theme: {}\n", theme.name());
    println!("Commands:");
    println!("  - a single letter       guess it");
    println!("  - 'hint'                show the word's hint (once per round)");
    println!("  - 'reveal'              power-up: uncover a random letter");
    println!("  - 'remove'              power-up: take back one wrong guess");
    println!("  - 'split'               power-up: fifty-fifty, disable half the bad letters");
    println!("  - 'quit'                exit\n");

    // The name check is a front-end concern: block here, never in the core
    let mut config = config.clone();
    while config.player_name.trim().is_empty() {
        config.player_name = get_user_input("Enter your name")?;
        if config.player_name.trim().is_empty() {
            println!("Please enter your name!");
        }
    }
    let config = &config;

    let mut session = GameSession::new(ThreadRandom);
    session.configure(theme, config);
    let mut hint_shown = false;
    let mut last_tick = Instant::now();

    loop {
        // In timed mode the clock only advances between prompts, one tick
        // per elapsed wall-clock second
        if config.timed && session.is_active() {
            let elapsed = last_tick.elapsed().as_secs();
            last_tick = Instant::now();
            for _ in 0..elapsed {
                if session.tick() {
                    println!("\n⏰ Time's up!");
                    break;
                }
            }
        }

        if session.is_active() {
            print_board(&session, config);

            let input = get_user_input("Your guess")?.to_lowercase();
            match input.as_str() {
                "quit" | "q" | "exit" => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                // Single letters are always guesses, so commands are full words
                "hint" => {
                    if hint_shown {
                        println!("The hint is already out!\n");
                    } else if let Some(state) = session.state() {
                        hint_shown = true;
                        println!("💡 Hint: {}\n", state.hint());
                    }
                }
                "reveal" => report_powerup(session.activate(PowerUp::Reveal)),
                "remove" => report_powerup(session.activate(PowerUp::RemoveWrong)),
                "split" | "5050" => report_powerup(session.activate(PowerUp::FiftyFifty)),
                _ => {
                    let mut chars = input.chars();
                    match (chars.next(), chars.next()) {
                        (Some(letter), None) if letter.is_ascii_alphabetic() => {
                            guess_letter(&mut session, letter);
                        }
                        _ => println!("❌ Enter one letter, or a command\n"),
                    }
                }
            }
        }

        if !session.is_active() {
            let Some(summary) = session.final_summary() else {
                return Err("round ended without a summary".to_string());
            };
            print_round_summary(&summary);

            match get_user_input("Play again? (yes/no)")?.to_lowercase().as_str() {
                "yes" | "y" => {
                    session.configure(theme, config);
                    hint_shown = false;
                    last_tick = Instant::now();
                    println!("\n🔄 New round started!\n");
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }
    }
}

fn print_board(session: &GameSession<ThreadRandom>, config: &SessionConfig) {
    let Some(state) = session.state() else {
        return;
    };

    println!("────────────────────────────────────────────────────────────");
    println!("{}", gallows(state.wrong_guesses(), state.max_wrong()));
    println!("\n  {}", masked_word(&state.letter_slots()));
    println!(
        "\nWrong guesses: {} / {}",
        state.wrong_guesses(),
        state.max_wrong()
    );

    let accuracy = session.accuracy();
    println!("Accuracy: [{}] {:.0}%", accuracy_bar(accuracy, 20), accuracy);

    if config.timed
        && let Some(seconds) = session.remaining_seconds()
    {
        println!("Time: {seconds}s");
    }

    if !state.eliminated_letters().is_empty() {
        let mut gone: Vec<char> = state.eliminated_letters().iter().copied().collect();
        gone.sort_unstable();
        println!("Disabled: {}", gone.iter().collect::<String>());
    }
    println!();
}

fn guess_letter(session: &mut GameSession<ThreadRandom>, letter: char) {
    let used_before = session
        .state()
        .is_some_and(|s| s.is_letter_used(letter.to_ascii_lowercase()));
    let outcome = session.guess(letter);

    if used_before {
        println!("You already tried '{letter}'.\n");
    } else if outcome.hit {
        println!("✅ Good guess! '{letter}' is in the word.\n");
    } else {
        println!("❌ Sorry, '{letter}' is not in the word.\n");
    }
}

fn report_powerup(outcome: PowerUpOutcome) {
    match outcome {
        PowerUpOutcome::Revealed { letter, .. } => {
            println!("🔍 Revealed: '{letter}'\n");
        }
        PowerUpOutcome::WrongGuessRemoved { wrong_guesses } => {
            println!("↩️  One wrong guess removed; now at {wrong_guesses}.\n");
        }
        PowerUpOutcome::LettersEliminated { letters } => {
            println!(
                "✂️  Disabled letters: {}\n",
                letters.iter().collect::<String>()
            );
        }
        PowerUpOutcome::Unavailable => {
            println!("That power-up can't be used right now.\n");
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
