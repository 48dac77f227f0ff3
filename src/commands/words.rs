//! Words command
//!
//! Enumerates every dictionary word formable from caller-supplied letters.

use crate::core::{LetterBag, Trie};
use crate::engine::find_words;

/// Result of enumerating a fixed bag of letters
pub struct WordsResult {
    pub letters: String,
    pub min_len: usize,
    pub words: Vec<String>,
}

/// Enumerate the dictionary words hidden in `letters`
///
/// # Errors
///
/// Returns an error if `letters` is empty or contains non-alphabetic
/// characters.
pub fn run_words(letters: &str, trie: &Trie, min_len: usize) -> Result<WordsResult, String> {
    let bag: LetterBag = letters
        .parse()
        .map_err(|e| format!("Invalid letters: {e}"))?;

    let mut words = find_words(&bag, trie, min_len);
    // Group shortest first for display; ties stay alphabetical
    words.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));

    Ok(WordsResult {
        letters: bag.as_str().to_string(),
        min_len,
        words,
    })
}
