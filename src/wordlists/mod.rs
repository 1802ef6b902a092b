//! Accepted word lists
//!
//! The game never consults a global list: a [`Lexicon`] is handed to each
//! session, and [`WordList`] is the implementation the binary uses.

mod embedded;
pub mod loader;
mod word_list;

pub use embedded::{WORDS, WORDS_COUNT};
pub use word_list::WordList;

/// Source of truth for which guesses are real words
pub trait Lexicon {
    /// Check whether `candidate` is an accepted word, ignoring case
    fn is_accepted(&self, candidate: &str) -> bool;
}
