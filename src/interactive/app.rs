//! TUI application state and logic

use crate::challenge::Challenge;
use crate::game::{GameSession, GameStatus, MAX_GUESSES};
use crate::wordlists::WordList;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// How long a rejected row keeps shaking
pub const SHAKE_DURATION: Duration = Duration::from_millis(600);

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Application state
pub struct App<'a> {
    pub words: &'a WordList,
    pub session: GameSession<'a>,
    pub challenge: Option<Challenge>,
    pub message: Option<Message>,
    pub shake_started: Option<Instant>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub guess_distribution: [usize; MAX_GUESSES + 1],
}

impl Statistics {
    fn record(&mut self, status: GameStatus, guesses: usize) {
        self.total_games += 1;
        if status == GameStatus::Won {
            self.games_won += 1;
            if let Some(slot) = self.guess_distribution.get_mut(guesses) {
                *slot += 1;
            }
        }
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }

    /// Wins per guess count, e.g. "1:0 2:1 3:0 4:0 5:0 6:0"
    #[must_use]
    pub fn distribution_line(&self) -> String {
        self.guess_distribution
            .iter()
            .enumerate()
            .skip(1)
            .map(|(guesses, wins)| format!("{guesses}:{wins}"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(words: &'a WordList, session: GameSession<'a>, challenge: Option<Challenge>) -> Self {
        let intro = if challenge.is_some() {
            "Someone has challenged you to guess their word!"
        } else {
            "Guess the 5-letter word in 6 tries."
        };

        Self {
            words,
            session,
            challenge,
            message: Some(Message {
                text: intro.to_string(),
                style: MessageStyle::Info,
            }),
            shake_started: None,
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    /// Challenge games are fixed to one word; only random games can restart
    #[must_use]
    pub fn can_start_new_game(&self) -> bool {
        self.challenge.is_none() && self.session.status().is_over()
    }

    pub fn new_game(&mut self) {
        if !self.can_start_new_game() {
            return;
        }
        let Some(word) = self.words.random_word(&mut rand::rng()) else {
            self.set_message("Word list is empty!", MessageStyle::Error);
            return;
        };
        self.session = GameSession::new(word.clone(), self.words);
        self.shake_started = None;
        self.set_message("New game started!", MessageStyle::Info);
    }

    pub fn type_letter(&mut self, letter: char) {
        self.session.append_letter(letter);
        self.clear_error();
    }

    pub fn delete_letter(&mut self) {
        self.session.delete_letter();
        self.clear_error();
    }

    pub fn submit(&mut self, now: Instant) {
        match self.session.submit() {
            Ok(GameStatus::Playing) => self.message = None,
            Ok(status) => self.finish(status),
            Err(error) => {
                debug!(%error, "Submission rejected");
                self.shake_started = Some(now);
                self.set_message(&error.to_string(), MessageStyle::Error);
            }
        }
    }

    fn finish(&mut self, status: GameStatus) {
        let guesses = self.session.history().len();
        self.stats.record(status, guesses);

        match status {
            GameStatus::Won => {
                let text = match &self.challenge {
                    Some(challenge) if challenge.has_message() => {
                        format!("You won! 🎉 {}", challenge.message)
                    }
                    _ => "You won! 🎉".to_string(),
                };
                self.set_message(&text, MessageStyle::Success);
            }
            GameStatus::Lost => {
                let text = format!(
                    "Game Over! The word was: {}",
                    self.session.answer().text().to_uppercase()
                );
                self.set_message(&text, MessageStyle::Error);
            }
            GameStatus::Playing => {}
        }
    }

    /// Whether the current row should be drawn shaking at `now`
    #[must_use]
    pub fn is_shaking(&self, now: Instant) -> bool {
        self.shake_started
            .is_some_and(|start| now.duration_since(start) < SHAKE_DURATION)
    }

    /// Expire the shake once its time is up
    pub fn tick(&mut self, now: Instant) {
        if self.shake_started.is_some() && !self.is_shaking(now) {
            self.shake_started = None;
        }
    }

    fn set_message(&mut self, text: &str, style: MessageStyle) {
        self.message = Some(Message {
            text: text.to_string(),
            style,
        });
    }

    fn clear_error(&mut self) {
        if self
            .message
            .as_ref()
            .is_some_and(|m| m.style == MessageStyle::Error && !self.session.status().is_over())
        {
            self.message = None;
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('q') if self.session.status().is_over() => self.should_quit = true,
            KeyCode::Char('n') if self.session.status().is_over() => self.new_game(),
            KeyCode::Char(c) if c.is_ascii_alphabetic() => self.type_letter(c),
            KeyCode::Backspace => self.delete_letter(),
            KeyCode::Enter => self.submit(now),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<Statistics> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.inspect_err(|err| warn!(%err, "TUI exited with an error"))
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<Statistics> {
    loop {
        let now = Instant::now();
        app.tick(now);
        terminal.draw(|f| super::rendering::ui(f, &app, now))?;

        // Poll so the shake animation can expire without a key press
        if !event::poll(POLL_INTERVAL)? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key, Instant::now());
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.stats)
}
