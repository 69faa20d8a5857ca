//! Game session engine
//!
//! [`GuessEngine`] owns one round of play: the secret word (raw and
//! normalized forms), the attempt counter, the structured guess history and
//! the session status. It is a plain single-threaded state machine; the
//! caller selects the secret (randomness lives in the lexicon layer) and
//! maps returned [`Feedback`] to whatever presentation it wants.

use super::feedback::GuessResult;
use super::normalize::normalize;
use std::fmt;
use std::ops::RangeInclusive;

/// Attempts allowed per round, mismatched-length guesses included
pub const MAX_ATTEMPTS: u32 = 10;

/// Word lengths the game supports
pub const SUPPORTED_LENGTHS: RangeInclusive<usize> = 5..=9;

/// Session status, advanced only by [`GuessEngine::start`] and
/// [`GuessEngine::submit`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// No secret chosen yet
    Idle,
    /// Round underway
    InProgress,
    /// Last guess matched the secret
    Won,
    /// Attempt limit reached without a winning guess
    Lost,
}

/// Error type for engine misuse
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// `submit` or `explain_target` called with no round started
    NoActiveGame,
    /// `start` called with a secret outside the supported lengths
    InvalidSecretLength(usize),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoActiveGame => write!(f, "No active game; start a round first"),
            Self::InvalidSecretLength(len) => {
                write!(
                    f,
                    "Secret must be {} to {} letters, got {len}",
                    SUPPORTED_LENGTHS.start(),
                    SUPPORTED_LENGTHS.end()
                )
            }
        }
    }
}

impl std::error::Error for EngineError {}

/// Letter-level outcome of one submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Guess had the right length and was scored per letter
    Scored(GuessResult),
    /// Guess length differed from the secret's; no letter feedback, but the
    /// attempt is burned all the same
    LengthMismatch {
        /// Length the secret requires
        expected: usize,
    },
}

/// Everything a caller learns from one submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    /// Per-letter outcome (or the length mismatch)
    pub outcome: GuessOutcome,
    /// Attempt counter after this submission (reset to 0 on a win)
    pub attempts: u32,
    /// Session status after this submission
    pub status: GameStatus,
    /// The secret's raw form, revealed only when the round just ended
    pub revealed: Option<String>,
}

impl Feedback {
    /// Whether this submission ended the round
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self.status, GameStatus::Won | GameStatus::Lost)
    }
}

#[derive(Debug, Clone)]
struct Secret {
    /// Lowercase alphabetic-only form, kept for display and definition lookup
    raw: String,
    /// Accent-stripped form used for all comparisons
    normalized: String,
}

/// One game session: secret, attempts, history and status
///
/// # Examples
/// ```
/// use motus::core::{GameStatus, GuessEngine};
///
/// let mut engine = GuessEngine::new();
/// engine.start("chien").unwrap();
/// let feedback = engine.submit("chant").unwrap();
/// assert_eq!(feedback.status, GameStatus::InProgress);
/// assert_eq!(feedback.attempts, 1);
/// ```
#[derive(Debug)]
pub struct GuessEngine {
    secret: Option<Secret>,
    attempts: u32,
    status: GameStatus,
    history: Vec<GuessResult>,
}

impl GuessEngine {
    /// Create an idle engine with no round started
    #[must_use]
    pub fn new() -> Self {
        Self {
            secret: None,
            attempts: 0,
            status: GameStatus::Idle,
            history: Vec::new(),
        }
    }

    /// Begin a round with the given secret
    ///
    /// The secret is lowercased and filtered to alphabetic characters before
    /// length validation, matching how word list entries are cleaned up.
    /// Starting a round resets the attempt counter, clears the history and
    /// discards any previous secret. A failed `start` leaves the session
    /// untouched.
    ///
    /// # Errors
    /// Returns [`EngineError::InvalidSecretLength`] if the filtered secret
    /// is not 5 to 9 letters long.
    pub fn start(&mut self, secret_raw: &str) -> Result<(), EngineError> {
        let raw: String = secret_raw
            .to_lowercase()
            .chars()
            .filter(|c| c.is_alphabetic())
            .collect();

        let len = raw.chars().count();
        if !SUPPORTED_LENGTHS.contains(&len) {
            return Err(EngineError::InvalidSecretLength(len));
        }

        let normalized = normalize(&raw);
        self.secret = Some(Secret { raw, normalized });
        self.attempts = 0;
        self.history.clear();
        self.status = GameStatus::InProgress;
        Ok(())
    }

    /// Submit a guess and get per-letter feedback
    ///
    /// A guess whose normalized length differs from the secret's burns an
    /// attempt without producing letter feedback (rule carried over from the
    /// original game) and is not recorded in the history. Scored guesses are
    /// appended to the history; a winning guess resets the attempt counter,
    /// a tenth non-winning attempt loses the round. The secret's raw form is
    /// revealed in the feedback only when the round just ended.
    ///
    /// # Errors
    /// Returns [`EngineError::NoActiveGame`] unless a round is in progress.
    pub fn submit(&mut self, guess_raw: &str) -> Result<Feedback, EngineError> {
        if self.status != GameStatus::InProgress {
            return Err(EngineError::NoActiveGame);
        }
        let Some(secret) = self.secret.clone() else {
            return Err(EngineError::NoActiveGame);
        };

        let guess = normalize(guess_raw.trim());
        let expected = secret.normalized.chars().count();

        if guess.chars().count() != expected {
            self.attempts += 1;
            if self.attempts >= MAX_ATTEMPTS {
                self.status = GameStatus::Lost;
            }
            return Ok(Feedback {
                outcome: GuessOutcome::LengthMismatch { expected },
                attempts: self.attempts,
                status: self.status,
                revealed: (self.status == GameStatus::Lost).then(|| secret.raw.clone()),
            });
        }

        let result = GuessResult::score(&guess, &secret.normalized);
        self.history.push(result.clone());

        if guess == secret.normalized {
            self.status = GameStatus::Won;
            self.attempts = 0;
        } else {
            self.attempts += 1;
            if self.attempts >= MAX_ATTEMPTS {
                self.status = GameStatus::Lost;
            }
        }

        Ok(Feedback {
            outcome: GuessOutcome::Scored(result),
            attempts: self.attempts,
            status: self.status,
            revealed: matches!(self.status, GameStatus::Won | GameStatus::Lost)
                .then(|| secret.raw.clone()),
        })
    }

    /// The secret's raw form, for the external definition-lookup feature
    ///
    /// Available from the moment a round starts; callers gating a UI action
    /// should enable it only once the round has ended.
    ///
    /// # Errors
    /// Returns [`EngineError::NoActiveGame`] while the session is idle.
    pub fn explain_target(&self) -> Result<&str, EngineError> {
        if self.status == GameStatus::Idle {
            return Err(EngineError::NoActiveGame);
        }
        self.secret
            .as_ref()
            .map(|s| s.raw.as_str())
            .ok_or(EngineError::NoActiveGame)
    }

    /// Current session status
    #[inline]
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Whether a round is underway
    #[inline]
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == GameStatus::InProgress
    }

    /// Whether the last round was won
    #[inline]
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.status == GameStatus::Won
    }

    /// Whether the last round was lost
    #[inline]
    #[must_use]
    pub fn is_lost(&self) -> bool {
        self.status == GameStatus::Lost
    }

    /// Attempts used so far this round
    #[inline]
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Attempts left before the round is lost
    #[must_use]
    pub fn remaining_attempts(&self) -> u32 {
        MAX_ATTEMPTS.saturating_sub(self.attempts)
    }

    /// Length guesses must have, once a round is started
    #[must_use]
    pub fn expected_len(&self) -> Option<usize> {
        self.secret
            .as_ref()
            .map(|s| s.normalized.chars().count())
    }

    /// Scored guesses of the current round, in submission order
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[GuessResult] {
        &self.history
    }
}

impl Default for GuessEngine {
    fn default() -> Self {
        Self::new()
    }
}
