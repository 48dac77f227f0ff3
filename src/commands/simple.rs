//! Simple interactive CLI mode
//!
//! Text-based scramble game without TUI.

use crate::core::Trie;
use crate::engine::{RoundConfig, generate_round};
use crate::game::{ClueOutcome, GameRound, GuessOutcome};
use crate::output::formatters::{hint_lines, letter_boxes};
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(trie: &Trie, config: &RoundConfig) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                🧩 Word Scramble - Simple Mode                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Find all the words hidden in the scrambled letters.");
    println!("Type a word and press Enter to guess.\n");
    println!("Commands: ':clue' for a clue, ':new' for a new round, ':quit' to exit\n");

    let mut game = new_game(trie, config);

    loop {
        let input = get_user_input("❓ Your guess")?;

        match input.to_lowercase().as_str() {
            ":quit" | ":q" | ":exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            ":new" | ":n" => {
                println!("\n🔄 New round!\n");
                game = new_game(trie, config);
            }
            ":clue" | ":c" => match game.request_clue() {
                ClueOutcome::Clue { masked, .. } => {
                    println!("\n💡 Clue: {}\n", letter_boxes(&masked).bright_cyan());
                }
                ClueOutcome::NoOtherClue => {
                    println!("\n💡 There is no other clue.\n");
                }
                ClueOutcome::Exhausted => {
                    println!("\n💡 There are no more clues available.\n");
                }
            },
            "" => {}
            guess => {
                report_guess(&mut game, guess);
                if game.is_complete() {
                    match get_user_input("Play again? (yes/no)")?.to_lowercase().as_str() {
                        "yes" | "y" => {
                            println!("\n🔄 New round!\n");
                            game = new_game(trie, config);
                        }
                        _ => {
                            println!("\n👋 Thanks for playing!\n");
                            return Ok(());
                        }
                    }
                }
            }
        }
    }
}

fn new_game(trie: &Trie, config: &RoundConfig) -> GameRound {
    let round = generate_round(trie, &mut rand::rng(), config);

    if round.is_empty() {
        println!(
            "{}",
            "No valid words found. Type ':new' to try again.".yellow()
        );
    } else {
        println!("Scrambled letters:");
        println!(
            "  {}\n",
            letter_boxes(round.letters()).bright_yellow().bold()
        );
        println!("📌 Hints:");
        for line in hint_lines(round.hints()) {
            println!("  {line}");
        }
        println!();
    }

    GameRound::new(round, config.min_word_len)
}

fn report_guess(game: &mut GameRound, guess: &str) {
    match game.submit_guess(guess) {
        GuessOutcome::TooShort => {
            println!("{}", "⚠️  Your word is too short!".yellow());
        }
        GuessOutcome::AlreadyGuessed => {
            println!("{}", "⚠️  You've already guessed this word!".yellow());
        }
        GuessOutcome::Incorrect => {
            println!("{}", "❌ Not quite. Try again!".red());
        }
        GuessOutcome::Correct { round_complete } => {
            let (found, total) = game.progress();
            println!(
                "{} {}",
                "✅ Correct!".green().bold(),
                format!("({found} of {total} words found)").bright_black()
            );

            if round_complete {
                println!("\n{}", "═".repeat(60).bright_cyan());
                println!(
                    "{}",
                    "   🎉 You've guessed all the words! 🎉   ".bright_green().bold()
                );
                println!("{}", "═".repeat(60).bright_cyan());

                println!("\n📋 Your found words:");
                for word in game.guessed_words() {
                    println!("  • {word}");
                }
                println!();
            }
        }
    }
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
