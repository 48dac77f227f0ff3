//! Word lists for the scramble game
//!
//! Provides the embedded default dictionary compiled into the binary, plus a
//! loader for user-supplied word-list files.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
