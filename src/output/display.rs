//! Display functions for command results

use super::formatters::{create_progress_bar, hint_lines, letter_boxes};
use crate::commands::{BenchmarkResult, WordsResult};
use crate::engine::Round;
use colored::Colorize;

/// Print a generated round: letters, hints, optionally the answers
pub fn print_round(round: &Round, reveal: bool) {
    println!("\n{}", "─".repeat(60).cyan());

    if round.is_empty() {
        println!(
            "{}",
            "No valid words found after all attempts. Please try again."
                .yellow()
                .bold()
        );
        println!("{}", "─".repeat(60).cyan());
        return;
    }

    println!("Scrambled letters:");
    println!(
        "  {}",
        letter_boxes(round.letters()).bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    println!("\n📌 Hints:");
    for line in hint_lines(round.hints()) {
        println!("  {line}");
    }

    if reveal {
        println!("\n📋 Words ({}):", round.valid_words().len());
        for word in round.valid_words() {
            println!("  • {word}");
        }
    }
}

/// Print the words formable from a caller-supplied bag
pub fn print_words_result(result: &WordsResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Letters: {}",
        letter_boxes(&result.letters).bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    if result.words.is_empty() {
        println!("{}", "\nNo dictionary words can be formed.".yellow());
        return;
    }

    println!(
        "\n{} words of {}+ letters:",
        result.words.len().to_string().bright_cyan().bold(),
        result.min_len
    );

    let mut current_len = 0;
    for word in &result.words {
        if word.len() != current_len {
            current_len = word.len();
            println!("\n  {} letters:", current_len.to_string().bold());
        }
        println!("    {word}");
    }
}

/// Print the result of an enumeration benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Enumeration:".bright_cyan().bold());
    println!("   Bags enumerated:  {}", result.total_bags);
    println!(
        "   Empty bags:       {} ({:.1}%)",
        result.empty_bags,
        result.empty_rate() * 100.0
    );
    println!(
        "   Words per bag:    {}",
        format!("{:.2} avg", result.average_words).bright_yellow().bold()
    );
    println!(
        "   Best bag:         {}",
        format!("{} words", result.max_words).green()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Bags/second:      {:.1}", result.bags_per_second);

    println!("\n📈 {}", "Word-count distribution:".bright_cyan().bold());
    let bucket_max = result
        .buckets
        .iter()
        .map(|(_, count)| *count)
        .max()
        .unwrap_or(1);

    for (label, count) in &result.buckets {
        let bar = create_progress_bar(*count as f64, bucket_max as f64, 40);
        println!("   {label:>7}: {} {count:4}", bar.green());
    }
}
