//! Benchmark command
//!
//! Measures enumeration throughput over many random bags and reports the
//! distribution of words found per bag.

use crate::core::{LetterBag, Trie};
use crate::engine::{RoundConfig, find_words};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_bags: usize,
    pub empty_bags: usize,
    pub total_words: usize,
    pub average_words: f64,
    pub max_words: usize,
    /// Histogram of words-per-bag, bucketed for display
    pub buckets: Vec<(String, usize)>,
    pub duration: Duration,
    pub bags_per_second: f64,
}

impl BenchmarkResult {
    /// Fraction of bags that yielded no words at all
    #[must_use]
    pub fn empty_rate(&self) -> f64 {
        if self.total_bags == 0 {
            0.0
        } else {
            self.empty_bags as f64 / self.total_bags as f64
        }
    }
}

/// Enumerate `count` random bags in parallel
///
/// Each bag gets its own seeded RNG derived from `seed`, so a run is
/// reproducible regardless of how rayon schedules the work.
pub fn run_benchmark(trie: &Trie, config: &RoundConfig, count: usize, seed: u64) -> BenchmarkResult {
    let pb = ProgressBar::new(count as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();

    let word_counts: Vec<usize> = (0..count as u64)
        .into_par_iter()
        .map(|i| {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(i));
            let bag = LetterBag::sample(&mut rng, config.bag_size);
            let found = find_words(&bag, trie, config.min_word_len).len();
            pb.inc(1);
            found
        })
        .collect();

    let duration = start.elapsed();
    pb.finish_and_clear();

    let total_bags = word_counts.len();
    let total_words: usize = word_counts.iter().sum();
    let empty_bags = word_counts.iter().filter(|&&n| n == 0).count();
    let max_words = word_counts.iter().copied().max().unwrap_or(0);

    BenchmarkResult {
        total_bags,
        empty_bags,
        total_words,
        average_words: if total_bags == 0 {
            0.0
        } else {
            total_words as f64 / total_bags as f64
        },
        max_words,
        buckets: bucket_counts(&word_counts),
        duration,
        bags_per_second: total_bags as f64 / duration.as_secs_f64(),
    }
}

/// Group per-bag word counts into display buckets
fn bucket_counts(word_counts: &[usize]) -> Vec<(String, usize)> {
    let ranges: [(usize, usize, &str); 5] = [
        (0, 0, "0"),
        (1, 5, "1-5"),
        (6, 15, "6-15"),
        (16, 40, "16-40"),
        (41, usize::MAX, "41+"),
    ];

    ranges
        .iter()
        .map(|&(lo, hi, label)| {
            let count = word_counts
                .iter()
                .filter(|&&n| n >= lo && n <= hi)
                .count();
            (label.to_string(), count)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WORDS;

    fn full_trie() -> Trie {
        Trie::from_words(WORDS.iter().copied(), 2)
    }

    #[test]
    fn benchmark_runs() {
        let trie = full_trie();
        let result = run_benchmark(&trie, &RoundConfig::default(), 10, 7);

        assert_eq!(result.total_bags, 10);
        assert!(result.empty_bags <= 10);
        assert!(result.average_words >= 0.0);
    }

    #[test]
    fn buckets_cover_all_bags() {
        let trie = full_trie();
        let result = run_benchmark(&trie, &RoundConfig::default(), 20, 3);

        let bucket_sum: usize = result.buckets.iter().map(|(_, n)| n).sum();
        assert_eq!(bucket_sum, result.total_bags);
    }

    #[test]
    fn benchmark_is_seed_deterministic() {
        let trie = full_trie();
        let a = run_benchmark(&trie, &RoundConfig::default(), 10, 42);
        let b = run_benchmark(&trie, &RoundConfig::default(), 10, 42);

        assert_eq!(a.total_words, b.total_words);
        assert_eq!(a.empty_bags, b.empty_bags);
        assert_eq!(a.max_words, b.max_words);
    }

    #[test]
    fn empty_rate_handles_zero_bags() {
        let result = BenchmarkResult {
            total_bags: 0,
            empty_bags: 0,
            total_words: 0,
            average_words: 0.0,
            max_words: 0,
            buckets: Vec::new(),
            duration: Duration::from_secs(0),
            bags_per_second: 0.0,
        };
        assert!((result.empty_rate() - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn bucket_labels_partition_counts() {
        let buckets = bucket_counts(&[0, 1, 5, 6, 15, 16, 40, 41, 100]);
        let by_label: Vec<usize> = buckets.iter().map(|(_, n)| *n).collect();
        assert_eq!(by_label, vec![1, 2, 2, 2, 2]);
    }
}
