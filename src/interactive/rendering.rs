//! TUI rendering with ratatui
//!
//! Layout for the scramble game interface.

use super::app::{App, MessageStyle};
use crate::output::formatters::letter_boxes;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    // Header
    render_header(f, chunks[0]);

    // Main content area - split horizontally
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Left panel
            Constraint::Percentage(40), // Right panel
        ])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    // Input area
    render_input(f, app, chunks[2]);

    // Status bar
    render_status(f, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🧩 WORD SCRAMBLE")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Scrambled letters
            Constraint::Length(4), // Clue
            Constraint::Min(4),    // Messages
        ])
        .split(area);

    render_letters(f, app, chunks[0]);
    render_clue(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_letters(f: &mut Frame, app: &App, area: Rect) {
    let round = app.game.round();

    let content = if round.is_empty() {
        vec![
            Line::from(""),
            Line::from(Span::styled(
                "No words in this round. Ctrl+N to reroll",
                Style::default().fg(Color::Red),
            )),
        ]
    } else {
        vec![
            Line::from(""),
            Line::from(Span::styled(
                letter_boxes(round.letters()),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
        ]
    };

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Scrambled Letters ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}

fn render_clue(f: &mut Frame, app: &App, area: Rect) {
    let content = match &app.clue_display {
        Some(masked) => vec![Line::from(Span::styled(
            letter_boxes(masked),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))],
        None => vec![Line::from(Span::styled(
            "Press Tab for a clue",
            Style::default().fg(Color::DarkGray),
        ))],
    };

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Clue ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(Line::from(Span::styled(msg.text.clone(), style)))
        })
        .collect();

    let list = List::new(messages).block(
        Block::default()
            .title(" Messages ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(list, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(35), // Hints
            Constraint::Percentage(40), // Found words
            Constraint::Percentage(25), // Session stats
        ])
        .split(area);

    render_hints(f, app, chunks[0]);
    render_found(f, app, chunks[1]);
    render_stats(f, app, chunks[2]);
}

fn render_hints(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .game
        .round()
        .hints()
        .iter()
        .map(|(len, count)| {
            let plural = if *count == 1 { "word" } else { "words" };
            ListItem::new(format!("{len} letters: {count} {plural}"))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" 📌 Hints ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(list, area);
}

fn render_found(f: &mut Frame, app: &App, area: Rect) {
    let (found, total) = app.game.progress();

    let items: Vec<ListItem> = app
        .game
        .guessed_words()
        .iter()
        .map(|word| {
            ListItem::new(Line::from(Span::styled(
                word.clone(),
                Style::default().fg(Color::Green),
            )))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(format!(" 📋 Found {found}/{total} "))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(list, area);
}

fn render_stats(f: &mut Frame, app: &App, area: Rect) {
    let content = vec![
        Line::from(format!("Rounds played:    {}", app.stats.rounds_played)),
        Line::from(format!("Rounds completed: {}", app.stats.rounds_completed)),
        Line::from(format!("Words found:      {}", app.stats.words_found)),
    ];

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Session ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let input = Paragraph::new(Line::from(vec![
        Span::raw("❓ "),
        Span::styled(
            app.input_buffer.clone(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("▌", Style::default().fg(Color::White)),
    ]))
    .block(
        Block::default()
            .title(" Your Guess ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, area: Rect) {
    let status = Paragraph::new("Enter: submit | Tab: clue | Ctrl+N: new round | Esc: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(status, area);
}
