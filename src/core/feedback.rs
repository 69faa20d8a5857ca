//! Per-letter guess feedback
//!
//! Implements the two-pass scoring used after each guess: exact-position
//! matches are resolved first and consume their letter from the secret's
//! pool, then misplaced letters are credited against whatever remains. A
//! letter appearing k times in the secret is therefore credited at most k
//! times across the guess, and a correctly placed duplicate never steals
//! credit from a misplaced one.

use rustc_hash::FxHashMap;
use std::fmt;

/// Classification of one guess letter against the secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterMark {
    /// Right letter, right position
    Correct(char),
    /// Letter occurs elsewhere in the secret
    Present(char),
    /// Letter not in the secret (or all its occurrences already credited)
    Absent,
}

/// The scored outcome of a single guess
///
/// Holds the normalized guess and one [`LetterMark`] per position. Produced
/// fresh by each submission and immutable afterwards; history retains these
/// structured values and formats them lazily via [`fmt::Display`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessResult {
    guess: String,
    marks: Vec<LetterMark>,
}

impl GuessResult {
    /// Score a normalized guess against a normalized secret of equal length
    ///
    /// # Examples
    /// ```
    /// use motus::core::{GuessResult, LetterMark};
    ///
    /// let result = GuessResult::score("table", "sable");
    /// assert_eq!(result.marks()[0], LetterMark::Absent);
    /// assert_eq!(result.marks()[1], LetterMark::Correct('a'));
    /// ```
    #[must_use]
    pub fn score(guess: &str, secret: &str) -> Self {
        let guess_chars: Vec<char> = guess.chars().collect();
        let secret_chars: Vec<char> = secret.chars().collect();
        debug_assert_eq!(guess_chars.len(), secret_chars.len());

        let mut available: FxHashMap<char, u8> = FxHashMap::default();
        for &ch in &secret_chars {
            *available.entry(ch).or_insert(0) += 1;
        }

        let mut marks = vec![LetterMark::Absent; guess_chars.len()];

        // First pass: exact-position matches consume from the pool
        for (i, (&g, &s)) in guess_chars.iter().zip(&secret_chars).enumerate() {
            if g == s {
                marks[i] = LetterMark::Correct(g);
                if let Some(count) = available.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: misplaced letters, while the remaining pool allows
        for (i, &g) in guess_chars.iter().enumerate() {
            if marks[i] == LetterMark::Absent
                && let Some(count) = available.get_mut(&g)
                && *count > 0
            {
                marks[i] = LetterMark::Present(g);
                *count -= 1;
            }
        }

        Self {
            guess: guess.to_string(),
            marks,
        }
    }

    /// The normalized guess this result was scored from
    #[inline]
    #[must_use]
    pub fn guess(&self) -> &str {
        &self.guess
    }

    /// Per-position marks, in guess order
    #[inline]
    #[must_use]
    pub fn marks(&self) -> &[LetterMark] {
        &self.marks
    }

    /// Whether every position is an exact match
    #[must_use]
    pub fn is_all_correct(&self) -> bool {
        self.marks
            .iter()
            .all(|m| matches!(m, LetterMark::Correct(_)))
    }

    /// Count of exact-position matches
    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.marks
            .iter()
            .filter(|m| matches!(m, LetterMark::Correct(_)))
            .count()
    }
}

impl fmt::Display for GuessResult {
    /// History-line form: correct letters uppercased, misplaced ones
    /// lowercased, absent ones as dots (`mepmo -> m e p M o`)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ->", self.guess)?;
        for mark in &self.marks {
            match mark {
                LetterMark::Correct(c) => write!(f, " {}", c.to_uppercase())?,
                LetterMark::Present(c) => write!(f, " {c}")?,
                LetterMark::Absent => write!(f, " .")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterMark::{Absent, Correct, Present};

    #[test]
    fn all_correct_on_identical_words() {
        let result = GuessResult::score("table", "table");
        assert_eq!(
            result.marks(),
            &[
                Correct('t'),
                Correct('a'),
                Correct('b'),
                Correct('l'),
                Correct('e')
            ]
        );
        assert!(result.is_all_correct());
        assert_eq!(result.correct_count(), 5);
    }

    #[test]
    fn all_absent_on_disjoint_words() {
        let result = GuessResult::score("chips", "mound");
        assert_eq!(result.marks(), &[Absent; 5]);
        assert!(!result.is_all_correct());
    }

    #[test]
    fn single_shared_letter_marked_present() {
        // only the e of "chien" occurs in "table", and not at its position
        let result = GuessResult::score("chien", "table");
        assert_eq!(
            result.marks(),
            &[Absent, Absent, Absent, Present('e'), Absent]
        );
    }

    #[test]
    fn duplicate_letters_two_pass_resolution() {
        // secret "pomme" has two m; guess "mepmo" must get exactly two
        // m-credits, the exact-position one resolved first
        let result = GuessResult::score("mepmo", "pomme");
        assert_eq!(
            result.marks(),
            &[
                Present('m'),
                Present('e'),
                Present('p'),
                Correct('m'),
                Present('o')
            ]
        );
    }

    #[test]
    fn correct_duplicate_does_not_steal_from_misplaced() {
        // secret "sasse" has three s; the exact match at index 2 is
        // resolved first, leaving two s in the pool for the misplaced ones
        let result = GuessResult::score("asses", "sasse");
        assert_eq!(
            result.marks(),
            &[
                Present('a'),
                Present('s'),
                Correct('s'),
                Present('e'),
                Present('s')
            ]
        );
    }

    #[test]
    fn exact_matches_consume_pool_before_misplaced_pass() {
        // secret "ecree" has three e; all three are exact matches in
        // "eeeee", so the remaining two guess e get no credit
        let result = GuessResult::score("eeeee", "ecree");
        assert_eq!(
            result.marks(),
            &[Correct('e'), Absent, Absent, Correct('e'), Correct('e')]
        );
    }

    #[test]
    fn repeated_guess_letter_credited_at_most_secret_count() {
        // secret "table" has one l; guess "lllll" gets one credit
        let result = GuessResult::score("lllll", "table");
        let credits = result
            .marks()
            .iter()
            .filter(|m| matches!(m, Correct('l') | Present('l')))
            .count();
        assert_eq!(credits, 1);
        assert_eq!(result.marks()[3], Correct('l'));
    }

    #[test]
    fn conservation_over_sample_pairs() {
        // Correct + Present credits for a letter never exceed its count in
        // the secret
        let pairs = [
            ("mepmo", "pomme"),
            ("eeeee", "ecree"),
            ("sasse", "asses"),
            ("verre", "terre"),
            ("ababa", "babab"),
        ];
        for (guess, secret) in pairs {
            let result = GuessResult::score(guess, secret);
            for c in 'a'..='z' {
                let in_secret = secret.chars().filter(|&s| s == c).count();
                let credited = result
                    .marks()
                    .iter()
                    .filter(|m| matches!(m, Correct(g) | Present(g) if *g == c))
                    .count();
                assert!(
                    credited <= in_secret,
                    "letter {c} over-credited for {guess}/{secret}"
                );
            }
        }
    }

    #[test]
    fn exact_match_precedence() {
        // Any position where guess and secret agree is Correct, never
        // Present or Absent
        let pairs = [("verre", "terre"), ("pomme", "pomme"), ("mepmo", "pomme")];
        for (guess, secret) in pairs {
            let result = GuessResult::score(guess, secret);
            for (i, (g, s)) in guess.chars().zip(secret.chars()).enumerate() {
                if g == s {
                    assert_eq!(result.marks()[i], Correct(g));
                }
            }
        }
    }

    #[test]
    fn display_formats_history_line() {
        let result = GuessResult::score("mepmo", "pomme");
        assert_eq!(format!("{result}"), "mepmo -> m e p M o");

        let result = GuessResult::score("table", "table");
        assert_eq!(format!("{result}"), "table -> T A B L E");

        let result = GuessResult::score("lllll", "table");
        assert_eq!(format!("{result}"), "lllll -> . . . L .");
    }

    #[test]
    fn guess_accessor_returns_scored_guess() {
        let result = GuessResult::score("chien", "chant");
        assert_eq!(result.guess(), "chien");
    }
}
