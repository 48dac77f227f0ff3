//! TUI application state and logic

use crate::core::Trie;
use crate::engine::{RoundConfig, generate_round};
use crate::game::{ClueOutcome, GameRound, GuessOutcome};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App<'a> {
    trie: &'a Trie,
    config: RoundConfig,
    pub game: GameRound,
    pub input_buffer: String,
    pub clue_display: Option<String>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub rounds_played: usize,
    pub rounds_completed: usize,
    pub words_found: usize,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(trie: &'a Trie, config: RoundConfig) -> Self {
        let round = generate_round(trie, &mut rand::rng(), &config);
        let game = GameRound::new(round, config.min_word_len);

        let mut app = Self {
            trie,
            config,
            game,
            input_buffer: String::new(),
            clue_display: None,
            messages: vec![Message {
                text: "Find the words hidden in the letters. Type and press Enter.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics {
                rounds_played: 1,
                ..Statistics::default()
            },
            should_quit: false,
        };

        if app.game.round().is_empty() {
            app.add_message(
                "No valid words found. Press Ctrl+N for a new round.",
                MessageStyle::Error,
            );
        }
        app
    }

    pub fn new_round(&mut self) {
        let round = generate_round(self.trie, &mut rand::rng(), &self.config);
        let empty = round.is_empty();

        self.game = GameRound::new(round, self.config.min_word_len);
        self.input_buffer.clear();
        self.clue_display = None;
        self.stats.rounds_played += 1;

        if empty {
            self.add_message(
                "No valid words found. Press Ctrl+N to try again.",
                MessageStyle::Error,
            );
        } else {
            self.add_message("New round started!", MessageStyle::Info);
        }
    }

    pub fn submit_current(&mut self) {
        let guess = self.input_buffer.clone();
        self.input_buffer.clear();

        if guess.is_empty() {
            return;
        }

        match self.game.submit_guess(&guess) {
            GuessOutcome::TooShort => {
                self.add_message("Your word is too short!", MessageStyle::Error);
            }
            GuessOutcome::AlreadyGuessed => {
                self.add_message("You've already guessed this word!", MessageStyle::Error);
            }
            GuessOutcome::Incorrect => {
                self.add_message("Not quite. Try again!", MessageStyle::Error);
            }
            GuessOutcome::Correct { round_complete } => {
                self.stats.words_found += 1;

                // The reveal is stale once its word is found
                if self.game.active_clue().is_none() {
                    self.clue_display = None;
                }

                if round_complete {
                    self.stats.rounds_completed += 1;
                    self.add_message(
                        "🎉 You've guessed all the words! Ctrl+N for a new round.",
                        MessageStyle::Success,
                    );
                } else {
                    let (found, total) = self.game.progress();
                    self.add_message(
                        &format!("Correct! {found} of {total} words found."),
                        MessageStyle::Success,
                    );
                }
            }
        }
    }

    pub fn request_clue(&mut self) {
        match self.game.request_clue() {
            ClueOutcome::Clue { masked, .. } => {
                self.clue_display = Some(masked);
            }
            ClueOutcome::NoOtherClue => {
                self.add_message("There is no other clue.", MessageStyle::Info);
            }
            ClueOutcome::Exhausted => {
                self.clue_display = None;
                self.add_message("There are no more clues available.", MessageStyle::Info);
            }
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.should_quit = true;
                }
                KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.new_round();
                }
                KeyCode::Esc => {
                    app.should_quit = true;
                }
                KeyCode::Tab => {
                    app.request_clue();
                }
                KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                    app.input_buffer.push(c.to_ascii_lowercase());
                }
                KeyCode::Backspace => {
                    app.input_buffer.pop();
                }
                KeyCode::Enter => {
                    app.submit_current();
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
