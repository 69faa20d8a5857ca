//! Definition lookup for the secret word
//!
//! Builds a littre.org definition-search URL for a word and hands it to the
//! system browser. The engine only exposes the secret's raw form; everything
//! network- or markup-related stays out of the core.

use anyhow::{Context, Result};

/// Littre definition search endpoint, word appended as the `f1` parameter
pub const LITTRE_SEARCH_URL: &str = "https://www.littre.org/search/definitions?_hasdata=&f1=";

/// Build the definition-lookup URL for a word
///
/// # Examples
/// ```
/// use motus::explain::definition_url;
///
/// assert_eq!(
///     definition_url("chien"),
///     "https://www.littre.org/search/definitions?_hasdata=&f1=chien"
/// );
/// ```
#[must_use]
pub fn definition_url(word: &str) -> String {
    format!("{LITTRE_SEARCH_URL}{word}")
}

/// Open the word's definition page in the system browser
///
/// # Errors
/// Returns an error if no browser could be launched.
pub fn open_definition(word: &str) -> Result<()> {
    let url = definition_url(word);
    webbrowser::open(&url).with_context(|| format!("Failed to open {url}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_appends_word_to_endpoint() {
        assert_eq!(
            definition_url("table"),
            "https://www.littre.org/search/definitions?_hasdata=&f1=table"
        );
    }

    #[test]
    fn url_keeps_accented_word_intact() {
        // The site resolves accented queries directly
        assert_eq!(
            definition_url("écrémé"),
            "https://www.littre.org/search/definitions?_hasdata=&f1=écrémé"
        );
    }
}
