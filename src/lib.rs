//! Hangman Arcade
//!
//! A themed hangman game: guess the hidden word letter by letter within a
//! limited number of wrong guesses, optionally against a 90-second clock,
//! helped by one-shot power-ups.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman_arcade::session::{GameSession, SeededRandom, SessionConfig};
//! use hangman_arcade::wordbank;
//!
//! let theme = wordbank::theme("animals").unwrap();
//! let mut session = GameSession::new(SeededRandom::new(42));
//!
//! let mut config = SessionConfig::new("Ada");
//! config.word_length = Some(4); // only "wolf" has 4 letters
//! session.configure(&theme, &config);
//!
//! for letter in ['w', 'o', 'l', 'f'] {
//!     session.guess(letter);
//! }
//! assert!(session.final_summary().unwrap().won);
//! ```

// Core domain types
pub mod core;

// Game session state machine
pub mod session;

// Themed word catalogs
pub mod wordbank;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
