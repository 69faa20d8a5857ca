//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI.

use crate::core::{GuessEngine, MAX_ATTEMPTS, SUPPORTED_LENGTHS};
use crate::explain;
use crate::lexicon;
use crate::output::{print_feedback, print_history, print_round_banner};
use anyhow::{Result, anyhow};
use colored::Colorize;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// Plays rounds until the player quits: pick a length (unless preset),
/// guess until the round ends, then offer a new round or the definition
/// lookup. `custom_words` overrides the embedded lexicon when a word list
/// file was supplied on the command line.
///
/// # Errors
///
/// Returns an error on I/O failures reading user input, or if no secret
/// word can be selected for the chosen length.
pub fn run_simple(preset_length: Option<usize>, custom_words: Option<&[String]>) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Motus - Interactive Mode                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the secret word in at most {MAX_ATTEMPTS} attempts.");
    println!("Correct letters come back uppercase, misplaced ones lowercase,");
    println!("absent ones as dots. Accents are ignored when comparing.\n");
    println!("Commands: 'new' for a new round, 'history' to review guesses,");
    println!("'explain' (after a round ends) for the definition, 'quit' to exit.\n");

    let mut engine = GuessEngine::new();
    let mut rng = rand::rng();

    let mut length = match preset_length {
        Some(len) => len,
        None => prompt_length()?,
    };
    start_round(&mut engine, length, custom_words, &mut rng)?;

    loop {
        if engine.is_active() {
            let input =
                get_user_input(&format!("Guess ({} left)", engine.remaining_attempts()))?;

            match input.to_lowercase().as_str() {
                "quit" | "q" | "exit" => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                "new" => {
                    if preset_length.is_none() {
                        length = prompt_length()?;
                    }
                    start_round(&mut engine, length, custom_words, &mut rng)?;
                }
                "history" | "h" => print_history(engine.history()),
                "" => {}
                guess => {
                    let feedback = engine.submit(guess)?;
                    print_feedback(&feedback);
                }
            }
        } else {
            let input =
                get_user_input("'new' for another round, 'explain' for the definition, 'quit'")?;

            match input.to_lowercase().as_str() {
                "quit" | "q" | "exit" => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                "new" | "n" => {
                    if preset_length.is_none() {
                        length = prompt_length()?;
                    }
                    start_round(&mut engine, length, custom_words, &mut rng)?;
                }
                "explain" | "e" => {
                    let word = engine.explain_target()?.to_string();
                    match explain::open_definition(&word) {
                        Ok(()) => println!("Opened the definition of '{word}' in your browser."),
                        Err(e) => println!("{}", format!("{e:#}").red()),
                    }
                }
                _ => {}
            }
        }
    }
}

fn start_round<R: Rng>(
    engine: &mut GuessEngine,
    length: usize,
    custom_words: Option<&[String]>,
    rng: &mut R,
) -> Result<()> {
    let secret = pick_word(length, custom_words, rng)?;
    engine.start(&secret)?;
    print_round_banner(length);
    Ok(())
}

fn pick_word<R: Rng>(
    length: usize,
    custom_words: Option<&[String]>,
    rng: &mut R,
) -> Result<String> {
    if let Some(words) = custom_words {
        words
            .choose(rng)
            .cloned()
            .ok_or_else(|| anyhow!("Word list has no words of length {length}"))
    } else {
        Ok(lexicon::pick_secret(length, rng)?.to_string())
    }
}

fn prompt_length() -> Result<usize> {
    loop {
        let input = get_user_input("Word length (5-9)")?;
        match input.parse::<usize>() {
            Ok(len) if SUPPORTED_LENGTHS.contains(&len) => return Ok(len),
            _ => println!("{}", "Enter a number between 5 and 9.".red()),
        }
    }
}

fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}
