//! Prefix-tree dictionary index
//!
//! An immutable-after-build trie answering "is this a word" and "is this a
//! prefix of some word" in time proportional to the query length. Nodes live
//! in a flat arena with fixed 26-slot child tables, so lookups never allocate.

use std::num::NonZeroU32;

/// Number of letters in the supported alphabet (ASCII lowercase only)
pub const ALPHABET: usize = 26;

#[derive(Clone)]
struct Node {
    children: [Option<NonZeroU32>; ALPHABET],
    terminal: bool,
}

impl Node {
    const fn new() -> Self {
        Self {
            children: [None; ALPHABET],
            terminal: false,
        }
    }
}

/// Prefix-tree dictionary index over ASCII lowercase words
///
/// Built once from a word list, then shared read-only for the session.
///
/// # Examples
/// ```
/// use scramble::core::Trie;
///
/// let trie = Trie::from_words(["a", "an", "ant"], 1);
/// assert!(trie.is_word("an"));
/// assert!(trie.is_prefix("an"));
/// assert!(!trie.is_word("ants"));
/// assert!(!trie.is_prefix("x"));
/// ```
#[derive(Clone)]
pub struct Trie {
    nodes: Vec<Node>,
    words: usize,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    /// Create an empty trie containing only the root node
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new()],
            words: 0,
        }
    }

    /// Build a trie from a word list, skipping entries shorter than `min_len`
    ///
    /// Entries containing anything other than ASCII lowercase letters are
    /// skipped as well. Duplicate insertion is idempotent.
    pub fn from_words<I, S>(words: I, min_len: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new();
        for word in words {
            let word = word.as_ref();
            if word.len() >= min_len {
                trie.insert(word);
            }
        }
        trie
    }

    /// Insert a single word
    ///
    /// Returns `false` (and indexes nothing) if the word is empty or contains
    /// anything other than ASCII lowercase letters.
    pub fn insert(&mut self, word: &str) -> bool {
        if word.is_empty() || !word.bytes().all(|b| b.is_ascii_lowercase()) {
            return false;
        }

        let mut node = 0usize;
        for byte in word.bytes() {
            let slot = (byte - b'a') as usize;
            node = match self.nodes[node].children[slot] {
                Some(next) => next.get() as usize,
                None => {
                    let next = self.nodes.len();
                    self.nodes.push(Node::new());
                    // Index 0 is the root, so child indices are always non-zero
                    self.nodes[node].children[slot] =
                        NonZeroU32::new(u32::try_from(next).expect("trie exceeds u32 nodes"));
                    next
                }
            };
        }

        if !self.nodes[node].terminal {
            self.nodes[node].terminal = true;
            self.words += 1;
        }
        true
    }

    /// Walk the trie along `s`, returning the final node index if the path exists
    fn descend(&self, s: &str) -> Option<usize> {
        let mut node = 0usize;
        for byte in s.bytes() {
            if !byte.is_ascii_lowercase() {
                return None;
            }
            let slot = (byte - b'a') as usize;
            node = self.nodes[node].children[slot]?.get() as usize;
        }
        Some(node)
    }

    /// True iff some indexed word has `s` as a prefix
    ///
    /// The empty string is a prefix of everything, so it is a valid prefix
    /// exactly when the trie is non-empty.
    #[must_use]
    pub fn is_prefix(&self, s: &str) -> bool {
        self.words > 0 && self.descend(s).is_some()
    }

    /// True iff `s` is exactly an indexed word
    #[must_use]
    pub fn is_word(&self, s: &str) -> bool {
        self.descend(s)
            .is_some_and(|node| self.nodes[node].terminal)
    }

    /// Number of distinct words indexed
    #[must_use]
    pub const fn word_count(&self) -> usize {
        self.words
    }

    /// True iff no words have been indexed
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Number of arena nodes, including the root
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn membership_matches_inserted_words() {
        let trie = Trie::from_words(["cat", "act"], 3);
        assert!(trie.is_word("cat"));
        assert!(trie.is_word("act"));
        assert!(!trie.is_word("ca"));
        assert!(!trie.is_word("cats"));
        assert!(!trie.is_word("tac"));
    }

    #[test]
    fn prefix_matches_inserted_words() {
        let trie = Trie::from_words(["a", "an", "ant"], 1);
        assert!(trie.is_prefix("a"));
        assert!(trie.is_prefix("an"));
        assert!(trie.is_prefix("ant"));
        assert!(!trie.is_prefix("x"));
        assert!(!trie.is_prefix("anx"));
    }

    #[test]
    fn full_word_is_its_own_prefix() {
        let trie = Trie::from_words(["ant"], 1);
        assert!(trie.is_prefix("ant"));
        assert!(!trie.is_prefix("ants"));
    }

    #[test]
    fn empty_string_prefix_depends_on_contents() {
        let empty = Trie::new();
        assert!(!empty.is_prefix(""));

        let trie = Trie::from_words(["cat"], 1);
        assert!(trie.is_prefix(""));
        assert!(!trie.is_word(""));
    }

    #[test]
    fn min_len_filters_ingestion() {
        let trie = Trie::from_words(["a", "an", "ant"], 2);
        assert!(!trie.is_word("a"));
        assert!(trie.is_word("an"));
        assert!(trie.is_word("ant"));
        // "a" still exists as a prefix path to "an"
        assert!(trie.is_prefix("a"));
    }

    #[test]
    fn duplicate_insert_is_idempotent() {
        let mut trie = Trie::new();
        assert!(trie.insert("cat"));
        assert!(trie.insert("cat"));
        assert_eq!(trie.word_count(), 1);
    }

    #[test]
    fn invalid_words_are_rejected() {
        let mut trie = Trie::new();
        assert!(!trie.insert(""));
        assert!(!trie.insert("Cat"));
        assert!(!trie.insert("cat's"));
        assert!(!trie.insert("naïve"));
        assert!(trie.is_empty());
    }

    #[test]
    fn lookups_with_invalid_characters_are_false() {
        let trie = Trie::from_words(["cat"], 1);
        assert!(!trie.is_word("CAT"));
        assert!(!trie.is_prefix("c!"));
    }

    #[test]
    fn shared_prefixes_share_nodes() {
        let trie = Trie::from_words(["cat", "cats", "car"], 1);
        // root + c,a + t,r + s
        assert_eq!(trie.node_count(), 6);
        assert_eq!(trie.word_count(), 3);
    }
}
