//! Word Scramble
//!
//! A letter-scramble word game built on a trie-backed enumeration engine:
//! given a bag of random letters, it finds every dictionary word that can be
//! spelled from them, then tracks guesses and doles out clues.
//!
//! # Quick Start
//!
//! ```rust
//! use scramble::core::{LetterBag, Trie};
//! use scramble::engine::find_words;
//!
//! let trie = Trie::from_words(["cat", "act", "at"], 2);
//! let bag: LetterBag = "tac".parse().unwrap();
//!
//! let words = find_words(&bag, &trie, 3);
//! assert_eq!(words, vec!["act", "cat"]);
//! ```

// Core domain types
pub mod core;

// Enumeration engine and round generation
pub mod engine;

// Per-round game state
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
