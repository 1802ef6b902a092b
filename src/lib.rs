//! Wardle
//!
//! A Wordle-style word game with shareable challenges: pick a word and an
//! optional message, send the link, and let someone else solve it.
//!
//! # Quick Start
//!
//! ```rust
//! use wardle::challenge::{decode, encode};
//! use wardle::game::{GameSession, GameStatus};
//! use wardle::wordlists::WordList;
//!
//! let words = WordList::embedded();
//! let token = encode("crane", Some("nice job!"));
//!
//! let challenge = decode(&token);
//! let mut session = GameSession::from_challenge(&challenge, &words).unwrap();
//!
//! for ch in "slate".chars() {
//!     session.append_letter(ch);
//! }
//! assert_eq!(session.submit(), Ok(GameStatus::Playing));
//! println!("{}", session.history()[0].feedback);
//! ```

// Core domain types
pub mod core;

// Game session state machine
pub mod game;

// Challenge tokens and links
pub mod challenge;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
