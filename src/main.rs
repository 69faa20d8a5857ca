//! Motus - CLI
//!
//! Word-guessing game with TUI and plain CLI modes. Secrets come from
//! embedded length-bucketed French word lists, or from a custom list file.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use motus::{
    commands::run_simple,
    core::SUPPORTED_LENGTHS,
    interactive::{App, run_tui},
    lexicon::loader::load_from_file,
};

#[derive(Parser)]
#[command(
    name = "motus",
    about = "Guess the secret word in ten attempts (accents don't count)",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word length (5-9); prompted interactively when omitted
    #[arg(short, long, global = true)]
    length: Option<usize>,

    /// Path to a custom word list, one word per line (requires --length)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (plain text game loop)
    Simple,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(len) = cli.length
        && !SUPPORTED_LENGTHS.contains(&len)
    {
        bail!(
            "--length must be between {} and {}",
            SUPPORTED_LENGTHS.start(),
            SUPPORTED_LENGTHS.end()
        );
    }

    let custom_words = match (&cli.wordlist, cli.length) {
        (Some(path), Some(len)) => {
            let words = load_from_file(path, len)
                .with_context(|| format!("Failed to load word list from {path}"))?;
            if words.is_empty() {
                bail!("{path} contains no words of length {len}");
            }
            Some(words)
        }
        (Some(_), None) => bail!("--wordlist requires --length"),
        _ => None,
    };

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_tui(App::new(cli.length, custom_words)),
        Commands::Simple => run_simple(cli.length, custom_words.as_deref()),
    }
}
