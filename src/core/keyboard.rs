//! Keyboard coloring derived from guess history

use super::{GuessResult, KeyState, LetterState};
use rustc_hash::FxHashMap;

/// Best known state of every letter that has appeared in a guess
///
/// Always rebuilt from the full history by [`aggregate`]; it is never updated
/// in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyStateMap(FxHashMap<u8, LetterState>);

impl KeyStateMap {
    /// State of a key, `Unused` if the letter was never guessed
    ///
    /// Lookup is case-insensitive.
    #[must_use]
    pub fn get(&self, letter: char) -> KeyState {
        if !letter.is_ascii_alphabetic() {
            return KeyState::Unused;
        }
        let letter = letter.to_ascii_lowercase() as u8;
        self.0.get(&letter).copied().into()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Record an observation, keeping the higher-priority state
    fn observe(&mut self, letter: u8, state: LetterState) {
        self.0
            .entry(letter)
            .and_modify(|known| *known = (*known).max(state))
            .or_insert(state);
    }
}

/// Merge all feedback in `history` into per-letter key states
///
/// Priority is `Correct > Present > Absent`; a letter is never downgraded by
/// a later, weaker observation.
///
/// # Examples
/// ```
/// use wardle::core::{aggregate, GuessResult, KeyState, LetterState, Word};
///
/// let answer = Word::new("crane").unwrap();
/// let history = vec![GuessResult::new(Word::new("slate").unwrap(), &answer)];
///
/// let keys = aggregate(&history);
/// assert_eq!(keys.get('a'), KeyState::Scored(LetterState::Correct));
/// assert_eq!(keys.get('s'), KeyState::Scored(LetterState::Absent));
/// assert_eq!(keys.get('q'), KeyState::Unused);
/// ```
#[must_use]
pub fn aggregate(history: &[GuessResult]) -> KeyStateMap {
    let mut keys = KeyStateMap::default();
    for result in history {
        for (&letter, &state) in result.guess.chars().iter().zip(result.feedback.states()) {
            keys.observe(letter, state);
        }
    }
    keys
}
