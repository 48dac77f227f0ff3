//! Per-round game state: guess evaluation and clues

mod clue;
mod state;

pub use clue::{ClueCursor, ClueOutcome, mask_word};
pub use state::{GameRound, GuessOutcome};
