//! TUI rendering with ratatui
//!
//! Board, keyboard and status panels for the game.

use super::app::{App, MessageStyle};
use crate::core::{KeyState, KeyStateMap, LetterState, WORD_LENGTH};
use crate::game::MAX_GUESSES;
use crate::output::KEYBOARD_ROWS;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use std::time::Instant;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App, now: Instant) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                       // Header
            Constraint::Length(MAX_GUESSES as u16 + 2), // Board
            Constraint::Length(3),                       // Message
            Constraint::Length(5),                       // Keyboard
            Constraint::Length(1),                       // Status bar
            Constraint::Min(0),
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_board(f, app, now, chunks[1]);
    render_message(f, app, chunks[2]);
    render_keyboard(f, &app.session.key_states(), chunks[3]);
    render_status(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = if app.challenge.is_some() {
        "WARDLE - Challenge"
    } else {
        "WARDLE"
    };
    let header = Paragraph::new(title)
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

fn state_style(state: KeyState) -> Style {
    match state {
        KeyState::Scored(LetterState::Correct) => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        KeyState::Scored(LetterState::Present) => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        KeyState::Scored(LetterState::Absent) => {
            Style::default().fg(Color::White).bg(Color::DarkGray)
        }
        KeyState::Unused => Style::default().fg(Color::White),
    }
}

fn tile(letter: Option<char>, style: Style) -> [Span<'static>; 2] {
    let text = letter.map_or_else(|| " · ".to_string(), |l| format!(" {} ", l.to_ascii_uppercase()));
    [Span::styled(text, style), Span::raw(" ")]
}

fn render_board(f: &mut Frame, app: &App, now: Instant, area: Rect) {
    let snapshot = app.session.snapshot();
    let mut lines = Vec::with_capacity(MAX_GUESSES);

    for result in snapshot.history {
        let spans: Vec<Span> = result
            .guess
            .chars()
            .iter()
            .zip(result.feedback.states())
            .flat_map(|(&letter, &state)| {
                tile(Some(char::from(letter)), state_style(KeyState::Scored(state)))
            })
            .collect();
        lines.push(Line::from(spans));
    }

    if !snapshot.status.is_over() {
        let typed: Vec<char> = snapshot.current_input.chars().collect();
        let mut spans: Vec<Span> = Vec::new();

        // Alternate the row left and right while a rejection is shaking
        if app.is_shaking(now) {
            let phase = app
                .shake_started
                .map_or(0, |start| now.duration_since(start).as_millis() / 75);
            spans.push(Span::raw(if phase % 2 == 0 { "  " } else { "" }));
        }

        let style = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);
        for i in 0..WORD_LENGTH {
            spans.extend(tile(typed.get(i).copied(), style));
        }
        lines.push(Line::from(spans));
    }

    while lines.len() < MAX_GUESSES {
        let spans: Vec<Span> = (0..WORD_LENGTH)
            .flat_map(|_| tile(None, Style::default().fg(Color::DarkGray)))
            .collect();
        lines.push(Line::from(spans));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_message(f: &mut Frame, app: &App, area: Rect) {
    let (text, style) = match &app.message {
        Some(message) => {
            let color = match message.style {
                MessageStyle::Info => Color::White,
                MessageStyle::Success => Color::Green,
                MessageStyle::Error => Color::Red,
            };
            (
                message.text.as_str(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )
        }
        None => ("", Style::default()),
    };

    let message = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP | Borders::BOTTOM));
    f.render_widget(message, area);
}

fn render_keyboard(f: &mut Frame, keys: &KeyStateMap, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .flat_map(|letter| tile(Some(letter), state_style(keys.get(letter))))
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(keyboard, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(area);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[0],
    );

    let distribution = Paragraph::new(format!("Wins {}", app.stats.distribution_line()))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green));
    f.render_widget(distribution, chunks[1]);

    let help_text = if app.can_start_new_game() {
        "n: New Game | q: Quit"
    } else if app.session.status().is_over() {
        "q: Quit"
    } else {
        "Enter: Submit | Backspace: Delete | Esc: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
