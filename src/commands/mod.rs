//! Command implementations

pub mod benchmark;
pub mod round;
pub mod simple;
pub mod words;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use round::{RoundReport, run_round};
pub use simple::run_simple;
pub use words::{WordsResult, run_words};
