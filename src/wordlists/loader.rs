//! Word list loading utilities
//!
//! Loads dictionaries from plain-text files, one word per line. Lines are
//! trimmed, optionally unquoted, lowercased, and filtered to ASCII-alphabetic
//! entries of at least two letters before they reach the trie.

use std::fs;
use std::io;
use std::path::Path;

/// Shortest entry admitted into a dictionary
pub const MIN_ENTRY_LEN: usize = 2;

/// Load words from a file
///
/// Skips anything that does not survive [`clean_entry`].
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use scramble::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let content = fs::read_to_string(path)?;

    let words = content.lines().filter_map(clean_entry).collect();
    Ok(words)
}

/// Normalize one raw line into a dictionary entry
///
/// Trims whitespace, strips a single layer of surrounding quotes, and
/// lowercases. Returns `None` for entries shorter than [`MIN_ENTRY_LEN`] or
/// containing anything other than ASCII letters.
#[must_use]
pub fn clean_entry(line: &str) -> Option<String> {
    let trimmed = line
        .trim()
        .trim_matches(|c| c == '"' || c == '\'')
        .trim();

    if trimmed.len() < MIN_ENTRY_LEN || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }

    Some(trimmed.to_ascii_lowercase())
}
