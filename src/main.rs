//! Hangman Arcade - CLI
//!
//! Themed hangman with TUI and CLI modes, consumable power-ups and an
//! optional 90-second countdown.

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use hangman_arcade::{
    commands::{SimulationConfig, run_simple, run_simulation, theme_overviews},
    output::{print_simulation_result, print_theme_overviews},
    session::SessionConfig,
    wordbank::{self, Theme, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "hangman_arcade",
    about = "Themed hangman game with power-ups, timed mode, TUI and CLI play",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Theme: general, animals, technology, food, sports, science
    #[arg(short, long, global = true, default_value = "general")]
    theme: String,

    /// Load a custom theme from a `word|hint` file instead
    #[arg(long, global = true)]
    theme_file: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (interactive round without TUI)
    Simple {
        /// Player name (prompted for when omitted)
        #[arg(short, long)]
        player: Option<String>,

        /// Wrong guesses allowed, 3-10 (default 6)
        #[arg(short, long)]
        chances: Option<u8>,

        /// Only play words of exactly this length, 4-10
        #[arg(short = 'l', long)]
        word_length: Option<u8>,

        /// Play against the 90-second clock
        #[arg(long)]
        timed: bool,
    },

    /// Simulate rounds with a random guesser and report statistics
    Simulate {
        /// Number of rounds to play
        #[arg(short = 'n', long, default_value = "200")]
        rounds: usize,

        /// Wrong guesses allowed, 3-10 (default 6)
        #[arg(short, long)]
        chances: Option<u8>,

        /// Seed for reproducible runs
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// List the embedded themes
    Themes,
}

/// Resolve the theme from the global flags
fn resolve_theme(cli: &Cli) -> Result<Theme> {
    if let Some(path) = &cli.theme_file {
        let theme =
            load_from_file(path).with_context(|| format!("Failed to load theme file {path}"))?;
        if theme.is_empty() {
            return Err(anyhow!("Theme file {path} contains no valid entries"));
        }
        return Ok(theme);
    }

    wordbank::theme(&cli.theme).ok_or_else(|| {
        anyhow!(
            "Theme '{}' not found (available: {})",
            cli.theme,
            wordbank::theme_names().join(", ")
        )
    })
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&cli),
        Commands::Simple {
            player,
            chances,
            word_length,
            timed,
        } => run_simple_command(&cli, player, chances, word_length, timed),
        Commands::Simulate {
            rounds,
            chances,
            seed,
        } => {
            run_simulate_command(&cli, rounds, chances, seed)?;
            Ok(())
        }
        Commands::Themes => {
            print_theme_overviews(&theme_overviews());
            Ok(())
        }
    }
}

fn run_play_command(cli: &Cli) -> Result<()> {
    use hangman_arcade::interactive::{App, run_tui};

    let mut themes = wordbank::all();
    let selected = if let Some(path) = &cli.theme_file {
        let theme =
            load_from_file(path).with_context(|| format!("Failed to load theme file {path}"))?;
        if theme.is_empty() {
            return Err(anyhow!("Theme file {path} contains no valid entries"));
        }
        themes.push(theme);
        themes.len() - 1
    } else {
        themes
            .iter()
            .position(|t| t.name() == cli.theme)
            .unwrap_or(0)
    };

    let app = App::new(themes, selected);
    run_tui(app)
}

fn run_simple_command(
    cli: &Cli,
    player: Option<String>,
    chances: Option<u8>,
    word_length: Option<u8>,
    timed: bool,
) -> Result<()> {
    let theme = resolve_theme(cli)?;

    let mut config = SessionConfig::new(player.unwrap_or_default());
    config.chances = chances;
    config.word_length = word_length;
    config.timed = timed;

    run_simple(&theme, &config).map_err(|e| anyhow!(e))
}

fn run_simulate_command(
    cli: &Cli,
    rounds: usize,
    chances: Option<u8>,
    seed: Option<u64>,
) -> Result<()> {
    let theme = resolve_theme(cli)?;

    println!(
        "Simulating {rounds} rounds on theme '{}' with a random guesser...",
        theme.name()
    );
    let config = SimulationConfig {
        rounds,
        chances,
        seed,
    };

    let result = run_simulation(&theme, &config);
    print_simulation_result(&result);
    Ok(())
}
