//! Clue cursor over the remaining undiscovered words
//!
//! Cycles deterministically through whatever the player has not guessed yet,
//! revealing a masked form of each word: first and last character kept,
//! interior characters replaced by underscores. Words of length two or less
//! are shown in full.

/// Outcome of a clue request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClueOutcome {
    /// A word was selected; `masked` is its length-preserving reveal
    Clue { word: String, masked: String },
    /// Only one word remains and it was already the active clue
    NoOtherClue,
    /// Nothing left to clue; every word has been guessed
    Exhausted,
}

/// Stateful cursor over the remaining-words subset
///
/// The cursor index survives across calls so repeated requests cycle through
/// different words; the active clue word is tracked so a correct guess can
/// clear it and so a lone remaining word is not re-revealed.
#[derive(Debug, Clone, Default)]
pub struct ClueCursor {
    index: usize,
    active: Option<String>,
}

impl ClueCursor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the next clue from `remaining`
    ///
    /// `remaining` is the current valid-minus-guessed set, recomputed by the
    /// caller on every request.
    pub fn next_clue(&mut self, remaining: &[String]) -> ClueOutcome {
        if remaining.is_empty() {
            self.active = None;
            return ClueOutcome::Exhausted;
        }

        if remaining.len() == 1 && self.active.as_deref() == Some(remaining[0].as_str()) {
            return ClueOutcome::NoOtherClue;
        }

        let word = remaining[self.index % remaining.len()].clone();
        self.index += 1;
        self.active = Some(word.clone());

        let masked = mask_word(&word);
        ClueOutcome::Clue { word, masked }
    }

    /// The word currently being clued, if any
    #[must_use]
    pub fn active_word(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Drop the active clue if the player just guessed it
    pub fn clear_if_guessed(&mut self, guess: &str) {
        if self.active.as_deref() == Some(guess) {
            self.active = None;
        }
    }

    /// Forget all cursor state; called when a new round starts
    pub fn reset(&mut self) {
        self.index = 0;
        self.active = None;
    }
}

/// Mask a word for display: first and last characters kept, interior hidden
///
/// Words of length two or less are revealed in full. The mask preserves
/// length, one underscore per hidden letter.
#[must_use]
pub fn mask_word(word: &str) -> String {
    let len = word.chars().count();
    if len <= 2 {
        return word.to_string();
    }

    let mut chars = word.chars();
    let first = chars.next().expect("word length checked above");
    let last = chars.next_back().expect("word length checked above");

    let mut masked = String::with_capacity(word.len());
    masked.push(first);
    for _ in 0..len - 2 {
        masked.push('_');
    }
    masked.push(last);
    masked
}
