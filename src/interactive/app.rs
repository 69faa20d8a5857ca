//! TUI application state and logic

use crate::core::{GuessEngine, GuessOutcome, MAX_ATTEMPTS, SUPPORTED_LENGTHS};
use crate::explain;
use crate::lexicon;
use crate::output::Cue;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::seq::IndexedRandom;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub engine: GuessEngine,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub last_length: Option<usize>,
    custom_words: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Waiting for the player to pick a word length
    LengthSelect,
    /// Round underway, typing guesses
    Guessing,
    /// Round ended, waiting for a follow-up action
    RoundOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub rounds_played: usize,
    pub rounds_won: usize,
    /// Indexed by the number of scored guesses a won round took
    pub guess_distribution: [usize; MAX_ATTEMPTS as usize + 1],
}

impl App {
    #[must_use]
    pub fn new(preset_length: Option<usize>, custom_words: Option<Vec<String>>) -> Self {
        let mut app = Self {
            engine: GuessEngine::new(),
            input_mode: InputMode::LengthSelect,
            input_buffer: String::new(),
            messages: vec![Message {
                text: "Welcome! Pick a word length between 5 and 9.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
            last_length: None,
            custom_words,
        };

        if let Some(len) = preset_length {
            app.begin_round(len);
        }
        app
    }

    /// Select a secret and start a round of the given length
    pub fn begin_round(&mut self, length: usize) {
        let secret = if let Some(words) = &self.custom_words {
            words.choose(&mut rand::rng()).cloned()
        } else {
            lexicon::pick_secret(length, &mut rand::rng())
                .ok()
                .map(str::to_string)
        };

        let Some(secret) = secret else {
            self.add_message(
                &format!("No words of length {length} available!"),
                MessageStyle::Error,
            );
            return;
        };

        match self.engine.start(&secret) {
            Ok(()) => {
                self.last_length = Some(length);
                self.input_buffer.clear();
                self.input_mode = InputMode::Guessing;
                self.add_message(
                    &format!("New round: {length} letters, {MAX_ATTEMPTS} attempts. Go!"),
                    MessageStyle::Info,
                );
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    /// Parse the input buffer as a word length and start a round
    pub fn handle_length_input(&mut self) {
        let input = self.input_buffer.clone();
        self.input_buffer.clear();

        match input.parse::<usize>() {
            Ok(len) if SUPPORTED_LENGTHS.contains(&len) => self.begin_round(len),
            _ => self.add_message("Enter a length between 5 and 9.", MessageStyle::Error),
        }
    }

    /// Submit the input buffer as a guess
    pub fn submit_guess(&mut self) {
        let guess = self.input_buffer.clone();
        self.input_buffer.clear();
        if guess.is_empty() {
            return;
        }

        let feedback = match self.engine.submit(&guess) {
            Ok(feedback) => feedback,
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        };

        if let GuessOutcome::LengthMismatch { expected } = &feedback.outcome {
            self.add_message(
                &format!("Expected a {expected}-letter word; the attempt still counts."),
                MessageStyle::Error,
            );
        }

        match Cue::for_feedback(&feedback) {
            Cue::Won => {
                self.stats.rounds_played += 1;
                self.stats.rounds_won += 1;
                let used = self.engine.history().len().min(MAX_ATTEMPTS as usize);
                self.stats.guess_distribution[used] += 1;
                self.input_mode = InputMode::RoundOver;
                if let Some(secret) = &feedback.revealed {
                    self.add_message(
                        &format!("🎉 Bravo! The word was '{secret}'."),
                        MessageStyle::Success,
                    );
                }
                self.add_message(
                    "'n' new round · 'l' new length · 'e' definition · 'q' quit",
                    MessageStyle::Info,
                );
            }
            Cue::Lost => {
                self.stats.rounds_played += 1;
                self.input_mode = InputMode::RoundOver;
                if let Some(secret) = &feedback.revealed {
                    self.add_message(
                        &format!("💀 Lost! The word was '{secret}'."),
                        MessageStyle::Error,
                    );
                }
                self.add_message(
                    "'n' new round · 'l' new length · 'e' definition · 'q' quit",
                    MessageStyle::Info,
                );
            }
            Cue::Progress => {
                self.add_message(
                    &format!("{} attempts left.", self.engine.remaining_attempts()),
                    MessageStyle::Info,
                );
            }
            Cue::RoundStart => {}
        }
    }

    /// Open the secret's definition in the system browser
    pub fn explain_secret(&mut self) {
        let word = match self.engine.explain_target() {
            Ok(word) => word.to_string(),
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        };

        match explain::open_definition(&word) {
            Ok(()) => self.add_message(
                &format!("Opened the definition of '{word}' in your browser."),
                MessageStyle::Success,
            ),
            Err(e) => self.add_message(&format!("{e:#}"), MessageStyle::Error),
        }
    }

    /// Start another round with the same length
    pub fn new_round(&mut self) {
        if let Some(len) = self.last_length {
            self.begin_round(len);
        } else {
            self.choose_length();
        }
    }

    /// Go back to length selection
    pub fn choose_length(&mut self) {
        self.input_mode = InputMode::LengthSelect;
        self.input_buffer.clear();
        self.add_message("Pick a word length between 5 and 9.", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O
/// error during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
            } else {
                match app.input_mode {
                    InputMode::LengthSelect => match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => {
                            app.should_quit = true;
                        }
                        KeyCode::Char(c) if c.is_ascii_digit() => {
                            app.input_buffer.push(c);
                        }
                        KeyCode::Backspace => {
                            app.input_buffer.pop();
                        }
                        KeyCode::Enter => {
                            app.handle_length_input();
                        }
                        _ => {}
                    },
                    InputMode::Guessing => match key.code {
                        KeyCode::Esc => {
                            app.should_quit = true;
                        }
                        KeyCode::Char(c) if c.is_alphabetic() => {
                            app.input_buffer.push(c);
                        }
                        KeyCode::Backspace => {
                            app.input_buffer.pop();
                        }
                        KeyCode::Enter => {
                            app.submit_guess();
                        }
                        _ => {}
                    },
                    InputMode::RoundOver => match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => {
                            app.should_quit = true;
                        }
                        KeyCode::Char('n') => {
                            app.new_round();
                        }
                        KeyCode::Char('l') => {
                            app.choose_length();
                        }
                        KeyCode::Char('e') => {
                            app.explain_secret();
                        }
                        _ => {}
                    },
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_with_words(words: &[&str]) -> App {
        App::new(None, Some(words.iter().map(|w| (*w).to_string()).collect()))
    }

    #[test]
    fn new_app_waits_for_length() {
        let app = App::new(None, None);
        assert_eq!(app.input_mode, InputMode::LengthSelect);
        assert!(!app.engine.is_active());
    }

    #[test]
    fn preset_length_starts_immediately() {
        let app = App::new(Some(5), None);
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert!(app.engine.is_active());
        assert_eq!(app.engine.expected_len(), Some(5));
    }

    #[test]
    fn length_input_validation() {
        let mut app = App::new(None, None);
        app.input_buffer.push_str("12");
        app.handle_length_input();
        assert_eq!(app.input_mode, InputMode::LengthSelect);

        app.input_buffer.push('6');
        app.handle_length_input();
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.engine.expected_len(), Some(6));
    }

    #[test]
    fn winning_guess_moves_to_round_over_and_counts() {
        let mut app = app_with_words(&["table"]);
        app.begin_round(5);

        app.input_buffer.push_str("table");
        app.submit_guess();

        assert_eq!(app.input_mode, InputMode::RoundOver);
        assert_eq!(app.stats.rounds_played, 1);
        assert_eq!(app.stats.rounds_won, 1);
        assert_eq!(app.stats.guess_distribution[1], 1);
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn losing_round_counts_as_played_only() {
        let mut app = app_with_words(&["table"]);
        app.begin_round(5);

        for _ in 0..MAX_ATTEMPTS {
            app.input_buffer.push_str("sable");
            app.submit_guess();
        }

        assert_eq!(app.input_mode, InputMode::RoundOver);
        assert_eq!(app.stats.rounds_played, 1);
        assert_eq!(app.stats.rounds_won, 0);
    }

    #[test]
    fn new_round_reuses_last_length() {
        let mut app = app_with_words(&["table"]);
        app.begin_round(5);
        app.input_buffer.push_str("table");
        app.submit_guess();

        app.new_round();
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert!(app.engine.is_active());
        assert!(app.engine.history().is_empty());
    }

    #[test]
    fn begin_round_without_matching_words_reports_error() {
        let mut app = app_with_words(&[]);
        app.begin_round(5);
        assert_eq!(app.input_mode, InputMode::LengthSelect);
        assert!(!app.engine.is_active());
    }

    #[test]
    fn messages_capped_at_five() {
        let mut app = App::new(None, None);
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages.last().unwrap().text, "message 9");
    }
}
