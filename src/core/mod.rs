//! Core domain types for the scramble game
//!
//! This module contains the fundamental domain types with zero external state.
//! The trie is built once per session and shared read-only; a letter bag is
//! owned by a single round.

mod bag;
mod trie;

pub use bag::{BagError, LetterBag};
pub use trie::{ALPHABET, Trie};
