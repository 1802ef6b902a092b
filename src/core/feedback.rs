//! Guess scoring
//!
//! A `Feedback` holds one `LetterState` per position of a guess, computed
//! against the answer with Wordle's duplicate-letter rules.

use super::word::WORD_LENGTH;
use super::{LetterState, Word, WordError};
use std::fmt;
use std::str::FromStr;

/// Per-position feedback for a scored guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterState; WORD_LENGTH]);

impl Feedback {
    /// All greens
    pub const SOLVED: Self = Self([LetterState::Correct; WORD_LENGTH]);

    /// Score `guess` against `answer`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches (correct) and remove them from the pool
    /// 2. Second pass: mark present-elsewhere letters from what remains of the pool
    ///
    /// Exact matches must be consumed before the second pass, otherwise a
    /// repeated letter can be marked present more times than it occurs.
    ///
    /// # Examples
    /// ```
    /// use wardle::core::{Feedback, LetterState::*, Word};
    ///
    /// let guess = Word::new("slate").unwrap();
    /// let answer = Word::new("crane").unwrap();
    ///
    /// let feedback = Feedback::score(&guess, &answer);
    /// assert_eq!(feedback.states(), &[Absent, Absent, Correct, Absent, Correct]);
    /// ```
    #[must_use]
    pub fn score(guess: &Word, answer: &Word) -> Self {
        let mut states = [LetterState::Absent; WORD_LENGTH];
        let mut answer_available = answer.char_counts();

        for (i, (g, a)) in guess.chars().iter().zip(answer.chars()).enumerate() {
            if g == a {
                states[i] = LetterState::Correct;
                if let Some(count) = answer_available.get_mut(g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        for (state, letter) in states.iter_mut().zip(guess.chars()) {
            if *state == LetterState::Correct {
                continue;
            }
            if let Some(count) = answer_available.get_mut(letter)
                && *count > 0
            {
                *state = LetterState::Present;
                *count -= 1;
            }
        }

        Self(states)
    }

    /// Score two raw strings, case-insensitively
    ///
    /// # Errors
    /// Returns `WordError` if either input is not a valid 5-letter word.
    pub fn score_str(guess: &str, answer: &str) -> Result<Self, WordError> {
        Ok(Self::score(&Word::new(guess)?, &Word::new(answer)?))
    }

    #[inline]
    #[must_use]
    pub const fn states(&self) -> &[LetterState; WORD_LENGTH] {
        &self.0
    }

    /// Check if every position is correct
    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    /// Convert to an emoji row like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}

/// A submitted guess together with its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessResult {
    pub guess: Word,
    pub feedback: Feedback,
}

impl GuessResult {
    /// Score `guess` against `answer` and keep both
    #[must_use]
    pub fn new(guess: Word, answer: &Word) -> Self {
        let feedback = Feedback::score(&guess, answer);
        Self { guess, feedback }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

impl FromStr for Feedback {
    type Err = String;

    /// Parse a row like "GY-GY" or "🟩🟨⬜🟩🟨"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        let mut states = [LetterState::Absent; WORD_LENGTH];

        if chars.len() != WORD_LENGTH {
            return Err(format!("Invalid feedback string: {s}"));
        }

        for (state, ch) in states.iter_mut().zip(chars) {
            *state = match ch {
                'G' | 'g' | '🟩' => LetterState::Correct,
                'Y' | 'y' | '🟨' => LetterState::Present,
                '-' | '_' | '⬜' => LetterState::Absent,
                _ => return Err(format!("Invalid feedback string: {s}")),
            };
        }

        Ok(Self(states))
    }
}
