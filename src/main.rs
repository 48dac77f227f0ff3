//! Word Scramble - CLI
//!
//! Letter-scramble word game with TUI and CLI modes, backed by a trie-pruned
//! permutation search over random letter bags.

use anyhow::Result;
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use scramble::{
    commands::{run_benchmark, run_round, run_simple, run_words},
    core::Trie,
    engine::RoundConfig,
    output::{print_benchmark_result, print_round, print_words_result},
    wordlists::{WORDS, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "scramble",
    about = "Letter-scramble word game with a trie-backed enumeration engine",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'builtin' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,

    /// Number of letters per round
    #[arg(short = 'b', long, global = true, default_value = "8")]
    bag_size: usize,

    /// Minimum length for a valid word
    #[arg(short = 'm', long, global = true, default_value = "4")]
    min_len: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Play,

    /// Simple CLI game (interactive without TUI)
    Simple,

    /// Generate a single round and print its letters and hints
    Round {
        /// Reveal the valid words
        #[arg(short, long)]
        reveal: bool,

        /// Seed for reproducible rounds
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// List all dictionary words formable from the given letters
    Words {
        /// The letters to search, e.g. "rstlnea"
        letters: String,
    },

    /// Benchmark enumeration over many random bags
    Benchmark {
        /// Number of random bags to enumerate
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,

        /// Seed for reproducible runs
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

/// Build the dictionary trie based on the -w flag
fn load_trie(wordlist_mode: &str) -> Result<Trie> {
    let trie = match wordlist_mode {
        "builtin" => Trie::from_words(WORDS.iter().copied(), 2),
        path => {
            let words = load_from_file(path)?;
            anyhow::ensure!(!words.is_empty(), "wordlist '{path}' contains no usable words");
            Trie::from_words(words, 2)
        }
    };
    Ok(trie)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let trie = load_trie(&cli.wordlist)?;
    anyhow::ensure!(cli.bag_size > 0, "bag size must be at least 1");
    anyhow::ensure!(
        cli.min_len <= cli.bag_size,
        "minimum word length cannot exceed the bag size"
    );

    let config = RoundConfig {
        bag_size: cli.bag_size,
        min_word_len: cli.min_len,
        max_attempts: 10,
    };

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&trie, config),
        Commands::Simple => run_simple(&trie, &config).map_err(|e| anyhow::anyhow!(e)),
        Commands::Round { reveal, seed } => {
            let mut rng = seeded_rng(seed);
            let report = run_round(&trie, &mut rng, &config);
            print_round(&report.round, reveal);
            println!("\nGenerated in {:.1}ms", report.duration.as_secs_f64() * 1000.0);
            Ok(())
        }
        Commands::Words { letters } => {
            let result =
                run_words(&letters, &trie, config.min_word_len).map_err(|e| anyhow::anyhow!(e))?;
            print_words_result(&result);
            Ok(())
        }
        Commands::Benchmark { count, seed } => {
            println!("Enumerating {count} random bags of {} letters...", config.bag_size);
            let seed = seed.unwrap_or_else(|| rand::rng().random());
            let result = run_benchmark(&trie, &config, count, seed);
            print_benchmark_result(&result);
            Ok(())
        }
    }
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

fn run_play_command(trie: &Trie, config: RoundConfig) -> Result<()> {
    use scramble::interactive::{App, run_tui};

    let app = App::new(trie, config);
    run_tui(app)
}
