//! Display functions for the simple CLI mode

use super::cues::Cue;
use super::formatters::{marks_to_colored, marks_to_emoji};
use crate::core::{Feedback, GuessOutcome, GuessResult, MAX_ATTEMPTS};
use colored::Colorize;

/// Print the banner announcing a fresh round
pub fn print_round_banner(len: usize) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "A {} word has been selected. {} attempts. Good luck!",
        format!("{len}-letter").bright_yellow().bold(),
        MAX_ATTEMPTS
    );
    println!("{}", "─".repeat(60).cyan());
}

/// Print the feedback for one submission
pub fn print_feedback(feedback: &Feedback) {
    match &feedback.outcome {
        GuessOutcome::LengthMismatch { expected } => {
            println!(
                "{}",
                format!("Expected a {expected}-letter word.").red()
            );
        }
        GuessOutcome::Scored(result) => {
            println!("  {}   {}", marks_to_colored(result), marks_to_emoji(result));
        }
    }

    match Cue::for_feedback(feedback) {
        Cue::Won => {
            if let Some(secret) = &feedback.revealed {
                println!(
                    "\n{}",
                    format!("🎉 Bravo! The word was: {secret}").green().bold()
                );
            }
        }
        Cue::Lost => {
            if let Some(secret) = &feedback.revealed {
                println!(
                    "\n{}",
                    format!("💀 Lost! The word was: {secret}").red().bold()
                );
            }
        }
        Cue::Progress => {
            let left = MAX_ATTEMPTS.saturating_sub(feedback.attempts);
            println!("{}", format!("{left} attempts left").dimmed());
        }
        Cue::RoundStart => {}
    }
}

/// Print the scored guesses of the round so far
pub fn print_history(history: &[GuessResult]) {
    if history.is_empty() {
        println!("{}", "No guesses yet.".dimmed());
        return;
    }
    for result in history {
        println!("  {result}");
    }
}
