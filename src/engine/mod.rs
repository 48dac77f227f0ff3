//! Word-enumeration engine and round generation

mod enumerate;
mod round;

pub use enumerate::find_words;
pub use round::{Round, RoundConfig, generate_round};
