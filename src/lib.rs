//! Motus
//!
//! A Motus-style word-guessing game: a secret French word of 5 to 9 letters
//! is drawn from a length-bucketed dictionary, and the player has ten
//! attempts to find it. Feedback is per letter (correct position, present
//! elsewhere, absent) and comparisons ignore accents.
//!
//! # Quick Start
//!
//! ```rust
//! use motus::core::{GameStatus, GuessEngine};
//!
//! let mut engine = GuessEngine::new();
//! engine.start("écrémé").unwrap();
//!
//! let feedback = engine.submit("ecreme").unwrap();
//! assert_eq!(feedback.status, GameStatus::Won);
//! ```

// Core domain types
pub mod core;

// Length-bucketed word lists
pub mod lexicon;

// Definition lookup for the secret word
pub mod explain;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
