//! Core domain types for the word game
//!
//! Scoring and keyboard aggregation are pure functions over these types; the
//! game session in [`crate::game`] is built on top of them.

mod feedback;
mod keyboard;
mod letter;
mod word;

pub use feedback::{Feedback, GuessResult};
pub use keyboard::{KeyStateMap, aggregate};
pub use letter::{KeyState, LetterState};
pub use word::{WORD_LENGTH, Word, WordError};
