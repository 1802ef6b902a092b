//! Line-mode display functions

use super::formatters::KEYBOARD_ROWS;
use crate::challenge::Challenge;
use crate::core::{GuessResult, KeyState, KeyStateMap, LetterState, Word};
use colored::{ColoredString, Colorize};

fn tile(letter: char, state: KeyState) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    let text = text.as_str();
    match state {
        KeyState::Scored(LetterState::Correct) => text.black().on_green().bold(),
        KeyState::Scored(LetterState::Present) => text.black().on_yellow().bold(),
        KeyState::Scored(LetterState::Absent) => text.white().on_bright_black(),
        KeyState::Unused => text.normal(),
    }
}

/// Render a scored guess as colored tiles
#[must_use]
pub fn colored_row(result: &GuessResult) -> String {
    result
        .guess
        .chars()
        .iter()
        .zip(result.feedback.states())
        .map(|(&letter, &state)| tile(char::from(letter), KeyState::Scored(state)).to_string())
        .collect()
}

/// Print every scored row so far
pub fn print_board(history: &[GuessResult]) {
    println!();
    for (i, result) in history.iter().enumerate() {
        println!("  {} {}", (i + 1).to_string().bright_black(), colored_row(result));
    }
    println!();
}

/// Print the keyboard with each key colored by its best known state
pub fn print_keyboard(keys: &KeyStateMap) {
    for (indent, row) in KEYBOARD_ROWS.iter().enumerate() {
        let line: String = row
            .chars()
            .map(|letter| tile(letter, keys.get(letter)).to_string())
            .collect();
        println!("  {}{line}", " ".repeat(indent * 2));
    }
    println!();
}

/// Print a freshly created challenge
pub fn print_challenge_created(word: &Word, message: Option<&str>, token: &str, url: &str) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Challenge word: {}",
        word.text().to_uppercase().bright_yellow().bold()
    );
    if let Some(message) = message.filter(|m| !m.trim().is_empty()) {
        println!("Message:        {}", message.italic());
    }
    println!("{}", "─".repeat(60).cyan());
    println!("\nToken: {token}");
    println!("Share this link:\n  {}", url.bright_cyan().underline());
    println!();
}

/// Print what a token decodes to
pub fn print_decoded(challenge: &Challenge) {
    if challenge.word.is_empty() {
        println!("{}", "Token does not contain a challenge word".red().bold());
        return;
    }
    println!("Word:    {}", challenge.word.to_uppercase().bright_yellow().bold());
    if challenge.has_message() {
        println!("Message: {}", challenge.message);
    } else {
        println!("Message: {}", "(none)".bright_black());
    }
}

/// Print word search results
pub fn print_search_results(prefix: &str, words: &[&Word]) {
    if words.is_empty() {
        println!("No words start with '{}'", prefix.to_lowercase());
        return;
    }
    for word in words {
        println!("  {}", word.text().to_uppercase());
    }
    println!("\n{} match(es)", words.len());
}
