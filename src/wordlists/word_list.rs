//! In-memory accepted word list

use super::Lexicon;
use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;

/// Accepted words, kept both ordered (for search and random picks) and hashed
/// (for membership checks)
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: Vec<Word>,
    index: FxHashSet<String>,
}

impl WordList {
    /// Build a list from words, dropping duplicates and keeping first-seen order
    #[must_use]
    pub fn new(words: impl IntoIterator<Item = Word>) -> Self {
        let mut list = Self::default();
        for word in words {
            if list.index.insert(word.text().to_string()) {
                list.words.push(word);
            }
        }
        list
    }

    /// Build a list from raw strings, skipping anything that is not a 5-letter word
    ///
    /// # Examples
    /// ```
    /// use wardle::wordlists::{Lexicon, WordList};
    ///
    /// let list = WordList::from_slice(&["crane", "toolong", "SLATE"]);
    /// assert_eq!(list.len(), 2);
    /// assert!(list.is_accepted("slate"));
    /// ```
    #[must_use]
    pub fn from_slice(slice: &[&str]) -> Self {
        Self::new(slice.iter().filter_map(|&s| Word::new(s).ok()))
    }

    /// The list compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_slice(super::WORDS)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Pick a uniformly random word, `None` if the list is empty
    pub fn random_word<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Word> {
        self.words.choose(rng)
    }

    /// Up to `limit` words starting with `prefix` (case-insensitive)
    ///
    /// An empty prefix matches nothing, mirroring a blank search box.
    #[must_use]
    pub fn search(&self, prefix: &str, limit: usize) -> Vec<&Word> {
        let prefix = prefix.trim().to_lowercase();
        if prefix.is_empty() {
            return Vec::new();
        }
        self.words
            .iter()
            .filter(|w| w.text().starts_with(&prefix))
            .take(limit)
            .collect()
    }
}

impl Lexicon for WordList {
    fn is_accepted(&self, candidate: &str) -> bool {
        self.index.contains(&candidate.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sample() -> WordList {
        WordList::from_slice(&["crane", "crate", "slate", "crane", "cr4ne", "abc"])
    }

    #[test]
    fn from_slice_skips_invalid_and_duplicates() {
        let list = sample();
        let texts: Vec<&str> = list.words().iter().map(Word::text).collect();
        assert_eq!(texts, vec!["crane", "crate", "slate"]);
    }

    #[test]
    fn is_accepted_case_insensitive() {
        let list = sample();
        assert!(list.is_accepted("crane"));
        assert!(list.is_accepted("CRANE"));
        assert!(!list.is_accepted("zzzzz"));
        assert!(!list.is_accepted(""));
    }

    #[test]
    fn search_by_prefix() {
        let list = sample();
        let hits: Vec<&str> = list.search("CR", 50).into_iter().map(Word::text).collect();
        assert_eq!(hits, vec!["crane", "crate"]);
        assert_eq!(list.search("cr", 1).len(), 1);
        assert!(list.search("", 50).is_empty());
        assert!(list.search("q", 50).is_empty());
    }

    #[test]
    fn random_word_is_from_list() {
        let list = sample();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let word = list.random_word(&mut rng).unwrap();
            assert!(list.is_accepted(word.text()));
        }
    }

    #[test]
    fn random_word_empty_list() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(WordList::default().random_word(&mut rng).is_none());
    }

    #[test]
    fn embedded_list_loads() {
        let list = WordList::embedded();
        assert_eq!(list.len(), super::super::WORDS_COUNT);
        assert!(list.is_accepted("crane"));
    }
}
