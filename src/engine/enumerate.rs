//! Word enumeration over a letter bag
//!
//! Depth-first branch-and-bound search over all sub-permutations of the bag,
//! pruned by the trie's prefix test. For a random 8-letter bag against a
//! large dictionary, almost every branch dies within one or two characters,
//! which is what makes the factorial-shaped search space tractable.

use crate::core::{LetterBag, Trie};
use rustc_hash::FxHashSet;

/// Mutable search state, owned by one enumeration call
///
/// `path` and `used` are restored on every exit path, so sibling branches
/// always observe the bag in its original state.
struct Search<'a> {
    letters: &'a [u8],
    path: Vec<u8>,
    used: Vec<bool>,
    min_len: usize,
    found: FxHashSet<String>,
}

impl<'a> Search<'a> {
    fn new(letters: &'a [u8], min_len: usize) -> Self {
        Self {
            letters,
            path: Vec::with_capacity(letters.len()),
            used: vec![false; letters.len()],
            min_len,
            found: FxHashSet::default(),
        }
    }

    fn dfs(&mut self, trie: &Trie) {
        // Path bytes are ASCII lowercase by construction
        let word = std::str::from_utf8(&self.path).expect("path is ASCII");

        // Prefix pruning: nothing in the dictionary continues this path
        if !trie.is_prefix(word) {
            return;
        }

        if self.path.len() >= self.min_len && trie.is_word(word) {
            self.found.insert(word.to_string());
        }

        for i in 0..self.letters.len() {
            if !self.used[i] {
                self.used[i] = true;
                self.path.push(self.letters[i]);
                self.dfs(trie);
                self.path.pop();
                self.used[i] = false;
            }
        }
    }
}

/// Enumerate every dictionary word formable from the bag's letters
///
/// Each bag letter may be used at most once per word; a letter appearing
/// twice in the bag may appear twice in a word. Words shorter than `min_len`
/// are skipped. The result is sorted and deduplicated.
///
/// # Panics
/// Panics if the bag is empty: calling enumeration without letters is a
/// sequencing bug in the caller, not a recoverable condition.
///
/// # Examples
/// ```
/// use scramble::core::{LetterBag, Trie};
/// use scramble::engine::find_words;
///
/// let trie = Trie::from_words(["cat", "act"], 2);
/// let bag: LetterBag = "tac".parse().unwrap();
/// assert_eq!(find_words(&bag, &trie, 3), vec!["act", "cat"]);
/// ```
#[must_use]
pub fn find_words(bag: &LetterBag, trie: &Trie, min_len: usize) -> Vec<String> {
    assert!(!bag.is_empty(), "cannot enumerate over an empty letter bag");

    let mut search = Search::new(bag.letters(), min_len);
    search.dfs(trie);

    let mut words: Vec<String> = search.found.into_iter().collect();
    words.sort_unstable();
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bag(s: &str) -> LetterBag {
        s.parse().unwrap()
    }

    #[test]
    fn finds_all_arrangements() {
        let trie = Trie::from_words(["cat", "act"], 2);
        assert_eq!(find_words(&bag("tac"), &trie, 3), vec!["act", "cat"]);
    }

    #[test]
    fn finds_nested_prefix_words() {
        let trie = Trie::from_words(["a", "an", "ant"], 1);
        assert_eq!(find_words(&bag("ant"), &trie, 1), vec!["a", "an", "ant"]);
    }

    #[test]
    fn min_len_filters_results() {
        let trie = Trie::from_words(["a", "an", "ant"], 1);
        assert_eq!(find_words(&bag("ant"), &trie, 3), vec!["ant"]);
    }

    #[test]
    fn respects_letter_multiplicity() {
        let trie = Trie::from_words(["noon", "non", "no", "on"], 2);
        // Only one 'o' available, so "noon" is not formable
        assert_eq!(find_words(&bag("non"), &trie, 2), vec!["no", "non", "on"]);
        // Two 'o's make it formable
        assert_eq!(
            find_words(&bag("noon"), &trie, 2),
            vec!["no", "non", "noon", "on"]
        );
    }

    #[test]
    fn word_formable_multiple_ways_counts_once() {
        let trie = Trie::from_words(["aa"], 2);
        // Three a's give six position orderings of "aa"; the set has one entry
        assert_eq!(find_words(&bag("aaa"), &trie, 2), vec!["aa"]);
    }

    #[test]
    fn no_words_yields_empty_vec() {
        let trie = Trie::from_words(["cat"], 2);
        assert!(find_words(&bag("xyz"), &trie, 2).is_empty());
    }

    #[test]
    fn empty_trie_yields_empty_vec() {
        let trie = Trie::new();
        assert!(find_words(&bag("abc"), &trie, 2).is_empty());
    }

    #[test]
    fn every_result_is_a_dictionary_word_formable_from_bag() {
        let words = ["tale", "teal", "late", "tea", "ate", "eat", "let", "zoo"];
        let trie = Trie::from_words(words, 2);
        let b = bag("latek");

        for found in find_words(&b, &trie, 3) {
            assert!(trie.is_word(&found));
            assert!(found.len() >= 3);
            for letter in b'a'..=b'z' {
                let in_word = found.bytes().filter(|&c| c == letter).count();
                assert!(in_word <= b.count_of(letter), "letter overuse in {found}");
            }
        }
    }

    #[test]
    fn enumeration_is_deterministic() {
        let trie = Trie::from_words(["tale", "teal", "late", "tea", "eat"], 2);
        let b = bag("latek");
        assert_eq!(find_words(&b, &trie, 3), find_words(&b, &trie, 3));
    }

    #[test]
    #[should_panic(expected = "empty letter bag")]
    fn empty_bag_panics() {
        let trie = Trie::from_words(["cat"], 2);
        let empty = LetterBag::sample(&mut rand::rng(), 0);
        let _ = find_words(&empty, &trie, 2);
    }
}
