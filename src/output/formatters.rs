//! Formatting utilities shared by the terminal front ends

use crate::core::GuessResult;
use crate::game::{GameStatus, MAX_GUESSES};

/// On-screen keyboard layout
pub const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// Score line for a share message, e.g. "3/6" or "X/6"
#[must_use]
pub fn score_line(history: &[GuessResult], status: GameStatus) -> String {
    match status {
        GameStatus::Won => format!("{}/{MAX_GUESSES}", history.len()),
        GameStatus::Lost | GameStatus::Playing => format!("X/{MAX_GUESSES}"),
    }
}

/// Emoji grid of a finished game, one row per guess
///
/// Letters are left out so the grid can be shared without spoiling the word.
#[must_use]
pub fn share_grid(history: &[GuessResult], status: GameStatus) -> String {
    let mut grid = format!("Wardle {}", score_line(history, status));
    for result in history {
        grid.push('\n');
        grid.push_str(&result.feedback.to_emoji());
    }
    grid
}
