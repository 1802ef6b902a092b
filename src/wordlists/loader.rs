//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use the embedded list.

use super::WordList;
use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, warn};

/// Load words from a file, one per line
///
/// Blank lines and entries that are not 5-letter words are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wardle::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<WordList> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let list = parse_word_list(&content);

    if list.is_empty() {
        warn!(path = %path.display(), "Word list file contains no valid words");
    } else {
        debug!(path = %path.display(), count = list.len(), "Loaded word list");
    }

    Ok(list)
}

/// Parse newline-separated words
#[must_use]
pub fn parse_word_list(content: &str) -> WordList {
    WordList::new(content.lines().filter_map(|line| {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            None
        } else {
            Word::new(trimmed).ok()
        }
    }))
}
