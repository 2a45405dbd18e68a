//! Core domain types for hangman
//!
//! This module contains the fundamental domain types with zero game-state dependencies.
//! All types here are pure, testable, and have clear validation rules.

mod word;

pub use word::{WordEntry, WordEntryError};
