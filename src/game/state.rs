//! Round state: guesses and their outcomes
//!
//! Wraps a generated [`Round`] with the mutable per-round progress (guessed
//! words and the clue cursor) and evaluates guesses into tagged outcomes.
//! Wrong, repeated, and short guesses are ordinary signaled results, never
//! errors.

use super::clue::{ClueCursor, ClueOutcome};
use crate::engine::Round;

/// Outcome of submitting one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Shorter than the round's minimum word length
    TooShort,
    /// Already in the guessed set
    AlreadyGuessed,
    /// Not one of the round's valid words
    Incorrect,
    /// A new valid word; `round_complete` is set when it was the last one
    Correct { round_complete: bool },
}

/// One round plus the player's progress through it
#[derive(Debug, Clone)]
pub struct GameRound {
    round: Round,
    min_word_len: usize,
    guessed: Vec<String>,
    clue: ClueCursor,
}

impl GameRound {
    /// Wrap a generated round; `min_word_len` gates guess length client-side
    #[must_use]
    pub fn new(round: Round, min_word_len: usize) -> Self {
        Self {
            round,
            min_word_len,
            guessed: Vec::new(),
            clue: ClueCursor::new(),
        }
    }

    /// The underlying round
    #[inline]
    #[must_use]
    pub fn round(&self) -> &Round {
        &self.round
    }

    /// Words guessed so far, in guess order
    #[inline]
    #[must_use]
    pub fn guessed_words(&self) -> &[String] {
        &self.guessed
    }

    /// Valid words the player has not found yet, in sorted order
    #[must_use]
    pub fn remaining(&self) -> Vec<String> {
        self.round
            .valid_words()
            .iter()
            .filter(|w| !self.guessed.contains(w))
            .cloned()
            .collect()
    }

    /// (guessed, total) progress counts
    #[must_use]
    pub fn progress(&self) -> (usize, usize) {
        (self.guessed.len(), self.round.valid_words().len())
    }

    /// True once every valid word has been guessed
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.round.valid_words().is_empty()
            && self.guessed.len() == self.round.valid_words().len()
    }

    /// Evaluate a raw guess, normalizing to lowercase first
    pub fn submit_guess(&mut self, raw: &str) -> GuessOutcome {
        let word = raw.trim().to_ascii_lowercase();

        if word.len() < self.min_word_len {
            return GuessOutcome::TooShort;
        }
        if self.guessed.contains(&word) {
            return GuessOutcome::AlreadyGuessed;
        }
        if !self.round.contains(&word) {
            return GuessOutcome::Incorrect;
        }

        self.clue.clear_if_guessed(&word);
        self.guessed.push(word);

        GuessOutcome::Correct {
            round_complete: self.is_complete(),
        }
    }

    /// Request the next clue over the remaining words
    pub fn request_clue(&mut self) -> ClueOutcome {
        let remaining = self.remaining();
        self.clue.next_clue(&remaining)
    }

    /// The word currently being clued, if any
    #[must_use]
    pub fn active_clue(&self) -> Option<&str> {
        self.clue.active_word()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round(words: &[&str]) -> Round {
        let mut sorted: Vec<String> = words.iter().map(|s| (*s).to_string()).collect();
        sorted.sort_unstable();
        Round::from_parts("tacsklmn".to_string(), sorted)
    }

    #[test]
    fn correct_guess_is_recorded() {
        let mut game = GameRound::new(round(&["cats", "acts"]), 4);

        assert_eq!(
            game.submit_guess("cats"),
            GuessOutcome::Correct {
                round_complete: false
            }
        );
        assert_eq!(game.guessed_words(), ["cats"]);
        assert_eq!(game.progress(), (1, 2));
    }

    #[test]
    fn final_guess_completes_round() {
        let mut game = GameRound::new(round(&["cats", "acts"]), 4);

        game.submit_guess("cats");
        assert_eq!(
            game.submit_guess("acts"),
            GuessOutcome::Correct {
                round_complete: true
            }
        );
        assert!(game.is_complete());
    }

    #[test]
    fn guesses_are_normalized() {
        let mut game = GameRound::new(round(&["cats"]), 4);
        assert_eq!(
            game.submit_guess("  CaTs "),
            GuessOutcome::Correct {
                round_complete: true
            }
        );
    }

    #[test]
    fn short_guess_is_rejected_before_membership() {
        let mut game = GameRound::new(round(&["cats"]), 4);
        assert_eq!(game.submit_guess("cat"), GuessOutcome::TooShort);
        assert!(game.guessed_words().is_empty());
    }

    #[test]
    fn repeat_guess_is_distinct_from_wrong_guess() {
        let mut game = GameRound::new(round(&["cats", "acts"]), 4);

        game.submit_guess("cats");
        assert_eq!(game.submit_guess("cats"), GuessOutcome::AlreadyGuessed);
        assert_eq!(game.submit_guess("scat"), GuessOutcome::Incorrect);
    }

    #[test]
    fn guessed_is_always_subset_of_valid() {
        let mut game = GameRound::new(round(&["cats", "acts"]), 4);

        for guess in ["cats", "cats", "scat", "nope", "acts"] {
            game.submit_guess(guess);
            for word in game.guessed_words() {
                assert!(game.round().contains(word));
            }
        }
        assert_eq!(game.guessed_words().len(), 2);
    }

    #[test]
    fn remaining_shrinks_with_guesses() {
        let mut game = GameRound::new(round(&["cats", "acts"]), 4);
        assert_eq!(game.remaining().len(), 2);

        game.submit_guess("cats");
        assert_eq!(game.remaining(), ["acts"]);
    }

    #[test]
    fn clue_cycles_over_remaining_only() {
        let mut game = GameRound::new(round(&["cats", "acts"]), 4);
        game.submit_guess("cats");

        match game.request_clue() {
            ClueOutcome::Clue { word, masked } => {
                assert_eq!(word, "acts");
                assert_eq!(masked, "a__s");
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
        // Same lone word again: no other clue to give
        assert_eq!(game.request_clue(), ClueOutcome::NoOtherClue);
    }

    #[test]
    fn clue_exhausted_when_all_guessed() {
        let mut game = GameRound::new(round(&["cats"]), 4);
        game.submit_guess("cats");
        assert_eq!(game.request_clue(), ClueOutcome::Exhausted);
    }

    #[test]
    fn guessing_clued_word_clears_active_clue() {
        let mut game = GameRound::new(round(&["cats", "acts"]), 4);

        game.request_clue();
        let clued = game.active_clue().expect("clue selected").to_string();
        game.submit_guess(&clued);
        assert_eq!(game.active_clue(), None);
    }

    #[test]
    fn empty_round_is_never_complete() {
        let game = GameRound::new(Round::empty(8), 4);
        assert!(!game.is_complete());
        assert_eq!(game.progress(), (0, 0));
    }
}
