//! Length-bucketed word lists
//!
//! The game's dictionary, keyed by word length (5 to 9). Lists are embedded
//! into the binary at build time; random secret selection takes a
//! caller-supplied RNG so the engine itself stays deterministic.

mod embedded;
pub mod loader;

pub use embedded::{
    WORDS5, WORDS5_COUNT, WORDS6, WORDS6_COUNT, WORDS7, WORDS7_COUNT, WORDS8, WORDS8_COUNT,
    WORDS9, WORDS9_COUNT,
};

use rand::Rng;
use rand::seq::IndexedRandom;
use std::fmt;

/// Error type for dictionary lookups
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexiconError {
    /// No word list exists for the requested length
    LengthUnsupported(usize),
}

impl fmt::Display for LexiconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthUnsupported(len) => {
                write!(f, "No word list for length {len} (supported: 5 to 9)")
            }
        }
    }
}

impl std::error::Error for LexiconError {}

/// All candidate words of the requested length
///
/// # Errors
/// Returns [`LexiconError::LengthUnsupported`] outside 5 to 9.
///
/// # Examples
/// ```
/// use motus::lexicon::words_of_length;
///
/// let words = words_of_length(5).unwrap();
/// assert!(words.contains(&"table"));
/// assert!(words_of_length(4).is_err());
/// ```
pub fn words_of_length(len: usize) -> Result<&'static [&'static str], LexiconError> {
    match len {
        5 => Ok(WORDS5),
        6 => Ok(WORDS6),
        7 => Ok(WORDS7),
        8 => Ok(WORDS8),
        9 => Ok(WORDS9),
        other => Err(LexiconError::LengthUnsupported(other)),
    }
}

/// Pick a random secret of the requested length
///
/// Selection uses the caller's RNG; seed it for reproducible rounds.
///
/// # Errors
/// Returns [`LexiconError::LengthUnsupported`] if no words exist for `len`.
pub fn pick_secret<R: Rng + ?Sized>(
    len: usize,
    rng: &mut R,
) -> Result<&'static str, LexiconError> {
    words_of_length(len)?
        .choose(rng)
        .copied()
        .ok_or(LexiconError::LengthUnsupported(len))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::normalize;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn counts_match_consts() {
        assert_eq!(WORDS5.len(), WORDS5_COUNT);
        assert_eq!(WORDS6.len(), WORDS6_COUNT);
        assert_eq!(WORDS7.len(), WORDS7_COUNT);
        assert_eq!(WORDS8.len(), WORDS8_COUNT);
        assert_eq!(WORDS9.len(), WORDS9_COUNT);
    }

    #[test]
    fn every_bucket_is_populated() {
        for len in 5..=9 {
            let words = words_of_length(len).unwrap();
            assert!(!words.is_empty(), "bucket {len} is empty");
        }
    }

    #[test]
    fn bucket_words_have_bucket_length() {
        for len in 5..=9 {
            for &word in words_of_length(len).unwrap() {
                assert_eq!(
                    word.chars().count(),
                    len,
                    "word '{word}' does not fit bucket {len}"
                );
            }
        }
    }

    #[test]
    fn bucket_words_are_lowercase_alphabetic() {
        for len in 5..=9 {
            for &word in words_of_length(len).unwrap() {
                assert!(
                    word.chars().all(|c| c.is_alphabetic() && c.is_lowercase()),
                    "word '{word}' has non-alphabetic or uppercase characters"
                );
            }
        }
    }

    #[test]
    fn normalization_preserves_bucket_length() {
        // Accent stripping never changes the letter count of a list entry
        for len in 5..=9 {
            for &word in words_of_length(len).unwrap() {
                assert_eq!(normalize(word).chars().count(), len, "word '{word}'");
            }
        }
    }

    #[test]
    fn unsupported_lengths_rejected() {
        assert_eq!(words_of_length(4), Err(LexiconError::LengthUnsupported(4)));
        assert_eq!(
            words_of_length(10),
            Err(LexiconError::LengthUnsupported(10))
        );
        assert_eq!(words_of_length(0), Err(LexiconError::LengthUnsupported(0)));
    }

    #[test]
    fn pick_secret_returns_word_from_bucket() {
        let mut rng = StdRng::seed_from_u64(42);
        for len in 5..=9 {
            let secret = pick_secret(len, &mut rng).unwrap();
            assert!(words_of_length(len).unwrap().contains(&secret));
        }
    }

    #[test]
    fn pick_secret_is_deterministic_under_seed() {
        let a = pick_secret(7, &mut StdRng::seed_from_u64(7)).unwrap();
        let b = pick_secret(7, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn pick_secret_unsupported_length() {
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(
            pick_secret(12, &mut rng),
            Err(LexiconError::LengthUnsupported(12))
        );
    }
}
