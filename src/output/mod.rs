//! Terminal output formatting
//!
//! Presentation helpers: feedback cues, board-row formatting and
//! pretty-printing for the simple CLI mode.

pub mod cues;
pub mod display;
pub mod formatters;

pub use cues::Cue;
pub use display::{print_feedback, print_history, print_round_banner};
pub use formatters::{marks_to_colored, marks_to_emoji};
