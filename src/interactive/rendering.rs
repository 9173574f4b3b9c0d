//! TUI rendering with ratatui
//!
//! The tile grid, the hinted keyboard, and the status panels.

use super::app::{App, Message, MessageStyle};
use crate::core::LetterStatus;
use crate::engine::{GameSnapshot, GameStatus};
use crate::output::formatters::KEYBOARD_ROWS;
use crate::stats::StatsStore;
use crate::words::WordSource;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<W: WordSource, S: StatsStore>(f: &mut Frame, app: &App<W, S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(14),    // Board
            Constraint::Length(5),  // Keyboard
            Constraint::Length(7),  // Messages
            Constraint::Length(3),  // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_board(f, app, chunks[1]);
    render_keyboard(f, &app.snapshot, chunks[2]);
    render_messages(f, &app.messages, chunks[3]);
    render_status(f, &app.snapshot, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE")
        .style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Green)),
        );
    f.render_widget(header, area);
}

fn tile_style(status: LetterStatus) -> Style {
    match status {
        LetterStatus::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        LetterStatus::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        LetterStatus::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
    }
}

fn render_board<W: WordSource, S: StatsStore>(f: &mut Frame, app: &App<W, S>, area: Rect) {
    let snapshot = &app.snapshot;
    let word_length = snapshot.config.word_length();

    let mut lines = Vec::with_capacity(snapshot.config.max_attempts() * 2);

    for row in 0..snapshot.config.max_attempts() {
        let mut spans = Vec::with_capacity(word_length * 2);

        if let Some(evaluation) = snapshot.evaluations.get(row) {
            // Submitted row: tiles take their evaluation colors
            for (slot, &status) in evaluation.statuses().iter().enumerate() {
                let letter = snapshot.board.cell(row, slot).unwrap_or(b'?') as char;
                spans.push(Span::styled(format!(" {letter} "), tile_style(status)));
                spans.push(Span::raw(" "));
            }
        } else if row == snapshot.cursor.attempt && snapshot.status == GameStatus::Playing {
            // Active row: typed letters, shaking red after a rejection
            let style = if app.shaking() {
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD | Modifier::RAPID_BLINK)
            } else {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            };

            for slot in 0..word_length {
                match snapshot.board.cell(row, slot) {
                    Some(letter) => {
                        spans.push(Span::styled(format!(" {} ", letter as char), style));
                    }
                    None => {
                        spans.push(Span::styled(" · ", Style::default().fg(Color::DarkGray)));
                    }
                }
                spans.push(Span::raw(" "));
            }
        } else {
            // Untouched row
            for _ in 0..word_length {
                spans.push(Span::styled(" · ", Style::default().fg(Color::DarkGray)));
                spans.push(Span::raw(" "));
            }
        }

        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, snapshot: &GameSnapshot, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let mut spans = Vec::with_capacity(row.len() * 2);
            for letter in row.bytes() {
                let style = match snapshot.hints.status_of(letter) {
                    Some(status) => tile_style(status),
                    None => Style::default().fg(Color::Gray),
                };
                spans.push(Span::styled(format!("{} ", letter as char), style));
            }
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(keyboard, area);
}

fn render_messages(f: &mut Frame, messages: &[Message], area: Rect) {
    let items: Vec<ListItem> = messages
        .iter()
        .rev()
        .take(5)
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let list = List::new(items).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(list, area);
}

fn render_status(f: &mut Frame, snapshot: &GameSnapshot, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let grid_text = format!(
        "Grid: {}×{}",
        snapshot.config.max_attempts(),
        snapshot.config.word_length()
    );
    let grid = Paragraph::new(grid_text).alignment(Alignment::Center);
    f.render_widget(grid, chunks[0]);

    let stats = &snapshot.statistics;
    let stats_text = format!(
        "Played: {} | Won: {} | Streak: {}",
        stats.games_played, stats.games_won, stats.streak
    );
    let stats_widget = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats_widget, chunks[1]);

    let state_text = match snapshot.status {
        GameStatus::Playing => format!(
            "Attempt {}/{}",
            snapshot.cursor.attempt + 1,
            snapshot.config.max_attempts()
        ),
        GameStatus::Won => "Won! 🎉".to_string(),
        GameStatus::Lost => "Lost".to_string(),
    };
    let state = Paragraph::new(state_text).alignment(Alignment::Center);
    f.render_widget(state, chunks[2]);

    let help_text = match snapshot.status {
        GameStatus::Playing => "Esc: Quit | Ctrl+N: New | Arrows: Resize",
        GameStatus::Won | GameStatus::Lost => "q: Quit | n: New Game",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
