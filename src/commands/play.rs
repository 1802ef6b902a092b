//! Simple interactive CLI mode
//!
//! Line-based play without the TUI: type a whole guess per line.

use crate::challenge::{Challenge, token_from_link};
use crate::core::WORD_LENGTH;
use crate::game::{GameSession, GameStatus, SubmitError};
use crate::output::{print_board, print_keyboard, share_grid};
use crate::wordlists::WordList;
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, Write};
use tracing::debug;

/// Start a session from a challenge token or link, or from a random word
///
/// Returns the session together with the decoded challenge, if any.
///
/// # Errors
///
/// Returns an error if the challenge word is empty or not in the word list,
/// or if a random word is requested from an empty list.
pub fn start_session<'a>(
    words: &'a WordList,
    challenge: Option<&str>,
) -> Result<(GameSession<'a>, Option<Challenge>)> {
    match challenge {
        Some(link) => {
            let challenge = crate::challenge::decode(token_from_link(link));
            let session = GameSession::from_challenge(&challenge, words)
                .context("Invalid challenge word!")?;
            debug!(has_message = challenge.has_message(), "Loaded challenge");
            Ok((session, Some(challenge)))
        }
        None => {
            let word = words
                .random_word(&mut rand::rng())
                .context("Word list is empty, cannot pick a random word")?;
            Ok((GameSession::new(word.clone(), words), None))
        }
    }
}

/// What happened to one line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    Quit,
    Scored(GameStatus),
    Rejected(SubmitError),
    TooLong,
}

/// Feed one line of input to the session as a complete guess
///
/// Non-letters are dropped; the in-progress guess is cleared afterwards so a
/// rejected line does not leak into the next one.
pub fn apply_line(session: &mut GameSession<'_>, line: &str) -> LineOutcome {
    let line = line.trim();
    if matches!(line.to_lowercase().as_str(), "quit" | "q" | "exit") {
        return LineOutcome::Quit;
    }

    let letters: Vec<char> = line.chars().filter(char::is_ascii_alphabetic).collect();
    if letters.len() > WORD_LENGTH {
        return LineOutcome::TooLong;
    }

    for letter in letters {
        session.append_letter(letter);
    }

    let outcome = match session.submit() {
        Ok(status) => LineOutcome::Scored(status),
        Err(error) => LineOutcome::Rejected(error),
    };

    while !session.current_input().is_empty() {
        session.delete_letter();
    }

    outcome
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(mut session: GameSession<'_>, challenge: Option<&Challenge>) -> Result<GameStatus> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     Wardle - Simple Mode                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    if challenge.is_some() {
        println!("Someone has challenged you to guess their word!");
    }
    println!(
        "Guess the 5-letter word in {} tries. Type 'quit' to give up.\n",
        session.rows_remaining()
    );

    while session.status() == GameStatus::Playing {
        let prompt = format!("Guess {}", session.history().len() + 1);
        let input = get_user_input(&prompt)?;

        match apply_line(&mut session, &input) {
            LineOutcome::Quit => {
                println!("\nThe word was: {}\n", session.answer().text().to_uppercase().bold());
                return Ok(session.status());
            }
            LineOutcome::TooLong => println!("{}", "Too many letters".red().bold()),
            LineOutcome::Rejected(error) => println!("{}", error.to_string().red().bold()),
            LineOutcome::Scored(_) => {
                print_board(session.history());
                print_keyboard(&session.key_states());
            }
        }
    }

    print_game_over(&session, challenge);
    Ok(session.status())
}

fn print_game_over(session: &GameSession<'_>, challenge: Option<&Challenge>) {
    println!("{}", "═".repeat(60).bright_cyan());
    match session.status() {
        GameStatus::Won => {
            println!("{}", "  You won! 🎉".bright_green().bold());
            if let Some(challenge) = challenge.filter(|c| c.has_message()) {
                println!("\n  {}", challenge.message.bright_white().italic());
            }
        }
        GameStatus::Lost | GameStatus::Playing => {
            println!("{}", "  Game Over!".red().bold());
            println!(
                "  The word was: {}",
                session.answer().text().to_uppercase().bright_yellow().bold()
            );
        }
    }
    println!("{}", "═".repeat(60).bright_cyan());
    println!("\n{}\n", share_grid(session.history(), session.status()));
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    let read = io::stdin().read_line(&mut input)?;
    if read == 0 {
        // EOF behaves like quitting
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}
