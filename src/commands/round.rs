//! Round command
//!
//! Generates a single round and reports how long enumeration took.

use crate::core::Trie;
use crate::engine::{Round, RoundConfig, generate_round};
use rand::Rng;
use std::time::{Duration, Instant};

/// A generated round plus generation timing
pub struct RoundReport {
    pub round: Round,
    pub duration: Duration,
}

/// Generate one round with the given configuration
pub fn run_round<R: Rng + ?Sized>(trie: &Trie, rng: &mut R, config: &RoundConfig) -> RoundReport {
    let start = Instant::now();
    let round = generate_round(trie, rng, config);

    RoundReport {
        round,
        duration: start.elapsed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WORDS;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn report_carries_round_and_timing() {
        let trie = Trie::from_words(WORDS.iter().copied(), 2);
        let mut rng = StdRng::seed_from_u64(4);

        let report = run_round(&trie, &mut rng, &RoundConfig::default());
        assert_eq!(report.round.letters().len(), 8);
        assert!(report.duration.as_secs() < 60);
    }
}
