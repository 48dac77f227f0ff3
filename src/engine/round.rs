//! Round generation
//!
//! Samples random bags and enumerates them until one yields words, or the
//! retry budget runs out and the empty-round sentinel is returned.

use super::enumerate::find_words;
use crate::core::{LetterBag, Trie};
use rand::Rng;
use std::collections::BTreeMap;

/// Parameters for round generation
#[derive(Debug, Clone, Copy)]
pub struct RoundConfig {
    /// Number of letters sampled per bag
    pub bag_size: usize,
    /// Minimum length for a word to count as valid
    pub min_word_len: usize,
    /// How many bags to try before giving up
    pub max_attempts: usize,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            bag_size: 8,
            min_word_len: 4,
            max_attempts: 10,
        }
    }
}

/// One generated round: letters, the words hidden in them, and hints
///
/// `valid_words` is sorted, duplicate-free, and fixed for the round's
/// lifetime. `hints` maps word length to the count of valid words of that
/// length.
#[derive(Debug, Clone)]
pub struct Round {
    letters: String,
    valid_words: Vec<String>,
    hints: BTreeMap<usize, usize>,
}

impl Round {
    /// Assemble a round from pre-enumerated words
    ///
    /// `valid_words` must be sorted and duplicate-free; this is upheld by
    /// [`find_words`] and by callers constructing fixed rounds in tests.
    /// Hints are derived here, once.
    #[must_use]
    pub fn from_parts(letters: String, valid_words: Vec<String>) -> Self {
        debug_assert!(valid_words.windows(2).all(|p| p[0] < p[1]));

        let mut hints = BTreeMap::new();
        for word in &valid_words {
            *hints.entry(word.len()).or_insert(0) += 1;
        }
        Self {
            letters,
            valid_words,
            hints,
        }
    }

    /// The empty-round sentinel: placeholder letters and no words
    ///
    /// Reported to the caller when every sampled bag came up empty; the
    /// caller decides whether to retry or surface it to the player.
    #[must_use]
    pub fn empty(bag_size: usize) -> Self {
        Self {
            letters: "_".repeat(bag_size),
            valid_words: Vec::new(),
            hints: BTreeMap::new(),
        }
    }

    /// True iff this is the empty-round sentinel
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.valid_words.is_empty()
    }

    /// The shuffled bag rendered as a string
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &str {
        &self.letters
    }

    /// All valid words, sorted
    #[inline]
    #[must_use]
    pub fn valid_words(&self) -> &[String] {
        &self.valid_words
    }

    /// Word-length histogram, in ascending length order
    #[inline]
    #[must_use]
    pub fn hints(&self) -> &BTreeMap<usize, usize> {
        &self.hints
    }

    /// True iff `word` is one of the round's valid words
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        // valid_words is sorted, so membership is a binary search
        self.valid_words
            .binary_search_by(|w| w.as_str().cmp(word))
            .is_ok()
    }
}

/// Generate a round, retrying fresh bags until one yields words
///
/// Each attempt samples `config.bag_size` uniform letters, shuffles them for
/// presentation, and enumerates. The first non-empty word set wins. If all
/// `config.max_attempts` bags come up empty the sentinel from
/// [`Round::empty`] is returned; that is a reported outcome, not an error.
pub fn generate_round<R: Rng + ?Sized>(trie: &Trie, rng: &mut R, config: &RoundConfig) -> Round {
    for _ in 0..config.max_attempts {
        let mut bag = LetterBag::sample(rng, config.bag_size);
        bag.shuffle(rng);

        let words = find_words(&bag, trie, config.min_word_len);
        if !words.is_empty() {
            return Round::from_parts(bag.as_str().to_string(), words);
        }
    }

    Round::empty(config.bag_size)
}
