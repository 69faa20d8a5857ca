//! Word list loading utilities
//!
//! Custom word lists are plain text, one word per line; blank lines and
//! surrounding whitespace are ignored, and entries that don't fit the
//! requested length bucket after cleanup are skipped.

use std::fs;
use std::io;
use std::path::Path;

/// Load words of one length bucket from a file
///
/// Each line is lowercased and filtered to alphabetic characters the same
/// way the engine cleans up a secret; lines that don't end up exactly `len`
/// letters long are dropped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use motus::lexicon::loader::load_from_file;
///
/// let words = load_from_file("data/words5.txt", 5).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, len: usize) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(&content, len))
}

/// Extract the words of one length bucket from line-oriented text
#[must_use]
pub fn words_from_lines(content: &str, len: usize) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| {
            let word: String = line
                .trim()
                .to_lowercase()
                .chars()
                .filter(|c| c.is_alphabetic())
                .collect();
            (word.chars().count() == len).then_some(word)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_only_words_of_requested_length() {
        let content = "table\ncheval\nchien\nun\n";
        let words = words_from_lines(content, 5);
        assert_eq!(words, vec!["table", "chien"]);
    }

    #[test]
    fn skips_blank_lines_and_trims() {
        let content = "\n  table  \n\n   \nporte\n";
        let words = words_from_lines(content, 5);
        assert_eq!(words, vec!["table", "porte"]);
    }

    #[test]
    fn lowercases_and_filters_entries() {
        let content = "TABLE\npo-rte\nchien!\n";
        let words = words_from_lines(content, 5);
        assert_eq!(words, vec!["table", "porte", "chien"]);
    }

    #[test]
    fn keeps_accented_entries_counted_by_chars() {
        let content = "écrémé\nécole\n";
        assert_eq!(words_from_lines(content, 6), vec!["écrémé"]);
        assert_eq!(words_from_lines(content, 5), vec!["école"]);
    }

    #[test]
    fn empty_input_yields_no_words() {
        assert!(words_from_lines("", 5).is_empty());
    }
}
