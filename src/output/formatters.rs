//! Formatting utilities for terminal output

use crate::core::{GuessResult, LetterMark};
use colored::Colorize;

/// Format a scored guess as an emoji board row
///
/// # Examples
/// ```
/// use motus::core::GuessResult;
/// use motus::output::marks_to_emoji;
///
/// let result = GuessResult::score("sable", "table");
/// assert_eq!(marks_to_emoji(&result), "⬜🟩🟩🟩🟩");
/// ```
#[must_use]
pub fn marks_to_emoji(result: &GuessResult) -> String {
    result
        .marks()
        .iter()
        .map(|mark| match mark {
            LetterMark::Correct(_) => '🟩',
            LetterMark::Present(_) => '🟨',
            LetterMark::Absent => '⬜',
        })
        .collect()
}

/// Format a scored guess as a colored letter row for the CLI
///
/// Correct letters are green and uppercased, misplaced ones yellow, absent
/// ones a dimmed dot (the original game's history notation).
#[must_use]
pub fn marks_to_colored(result: &GuessResult) -> String {
    let cells: Vec<String> = result
        .marks()
        .iter()
        .map(|mark| match mark {
            LetterMark::Correct(c) => c.to_uppercase().to_string().green().bold().to_string(),
            LetterMark::Present(c) => c.to_string().yellow().to_string(),
            LetterMark::Absent => ".".dimmed().to_string(),
        })
        .collect();
    cells.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emoji_all_correct() {
        let result = GuessResult::score("table", "table");
        assert_eq!(marks_to_emoji(&result), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn emoji_all_absent() {
        let result = GuessResult::score("chips", "mound");
        assert_eq!(marks_to_emoji(&result), "⬜⬜⬜⬜⬜");
    }

    #[test]
    fn emoji_mixed_marks() {
        // "mepmo" vs "pomme": P P P C P
        let result = GuessResult::score("mepmo", "pomme");
        assert_eq!(marks_to_emoji(&result), "🟨🟨🟨🟩🟨");
    }

    #[test]
    fn emoji_length_follows_word_length() {
        let result = GuessResult::score("parapluie", "carrefour");
        assert_eq!(marks_to_emoji(&result).chars().count(), 9);
    }
}
