//! Core domain types for the guessing game
//!
//! This module contains the guess-evaluation and session-state engine: text
//! normalization, the two-pass letter-matching algorithm and the round state
//! machine. Everything here is pure and synchronous; word selection,
//! rendering and the definition lookup live in the outer modules.

mod engine;
mod feedback;
mod normalize;

pub use engine::{
    EngineError, Feedback, GameStatus, GuessEngine, GuessOutcome, MAX_ATTEMPTS, SUPPORTED_LENGTHS,
};
pub use feedback::{GuessResult, LetterMark};
pub use normalize::normalize;
