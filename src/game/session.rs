//! Game session state machine
//!
//! A session owns the guess history, the in-progress guess and the game
//! status. Transitions are `Playing -> Won` and `Playing -> Lost`; both are
//! terminal.

use super::{SetupError, SubmitError};
use crate::challenge::Challenge;
use crate::core::{GuessResult, KeyStateMap, WORD_LENGTH, Word, aggregate};
use crate::wordlists::{Lexicon, WordList};
use tracing::{debug, info, instrument};

/// Number of guesses allowed per game
pub const MAX_GUESSES: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// Read-only view of a session for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot<'s> {
    pub history: &'s [GuessResult],
    pub current_input: &'s str,
    pub status: GameStatus,
}

/// One play-through against a fixed answer
///
/// The accepted-word check is supplied by the host as a [`Lexicon`].
///
/// # Examples
/// ```
/// use wardle::core::Word;
/// use wardle::game::{GameSession, GameStatus};
/// use wardle::wordlists::WordList;
///
/// let words = WordList::from_slice(&["crane", "slate"]);
/// let mut session = GameSession::new(Word::new("crane").unwrap(), &words);
///
/// for ch in "crane".chars() {
///     session.append_letter(ch);
/// }
/// assert_eq!(session.submit(), Ok(GameStatus::Won));
/// ```
#[derive(Debug, Clone)]
pub struct GameSession<'a, L: ?Sized = WordList> {
    answer: Word,
    lexicon: &'a L,
    history: Vec<GuessResult>,
    current_input: String,
    status: GameStatus,
    rejection: Option<SubmitError>,
}

impl<'a, L: Lexicon + ?Sized> GameSession<'a, L> {
    #[must_use]
    pub fn new(answer: Word, lexicon: &'a L) -> Self {
        Self {
            answer,
            lexicon,
            history: Vec::with_capacity(MAX_GUESSES),
            current_input: String::with_capacity(WORD_LENGTH),
            status: GameStatus::Playing,
            rejection: None,
        }
    }

    /// Start a session from a decoded challenge
    ///
    /// # Errors
    /// Returns `SetupError::InvalidChallengeWord` if the decoded word is empty,
    /// malformed, or not an accepted word.
    pub fn from_challenge(challenge: &Challenge, lexicon: &'a L) -> Result<Self, SetupError> {
        let invalid = || SetupError::InvalidChallengeWord(challenge.word.clone());

        if challenge.word.is_empty() || !lexicon.is_accepted(&challenge.word) {
            return Err(invalid());
        }
        let answer = Word::new(challenge.word.as_str()).map_err(|_| invalid())?;

        Ok(Self::new(answer, lexicon))
    }

    /// Add a letter to the in-progress guess
    ///
    /// Ignored once the game is over, when the guess is already full, or for
    /// anything other than an ASCII letter.
    pub fn append_letter(&mut self, letter: char) {
        if self.status.is_over()
            || self.current_input.len() >= WORD_LENGTH
            || !letter.is_ascii_alphabetic()
        {
            return;
        }
        self.current_input.push(letter.to_ascii_lowercase());
        self.rejection = None;
    }

    /// Remove the last letter of the in-progress guess
    pub fn delete_letter(&mut self) {
        if self.status.is_over() {
            return;
        }
        self.current_input.pop();
        self.rejection = None;
    }

    /// Score the in-progress guess and advance the game
    ///
    /// # Errors
    /// - `IncompleteGuess` if fewer than 5 letters have been entered
    /// - `UnknownWord` if the guess is not an accepted word
    /// - `GameOver` if the game has already been won or lost
    ///
    /// History is unchanged on every error.
    #[instrument(skip(self), fields(row = self.history.len() + 1))]
    pub fn submit(&mut self) -> Result<GameStatus, SubmitError> {
        if self.status.is_over() {
            return Err(SubmitError::GameOver);
        }

        if self.current_input.len() != WORD_LENGTH {
            return Err(self.reject(SubmitError::IncompleteGuess));
        }

        if !self.lexicon.is_accepted(&self.current_input) {
            return Err(self.reject(SubmitError::UnknownWord));
        }

        let Ok(guess) = Word::new(self.current_input.as_str()) else {
            return Err(self.reject(SubmitError::UnknownWord));
        };

        let result = GuessResult::new(guess, &self.answer);
        let solved = result.guess == self.answer;
        debug!(guess = %result.guess, feedback = %result.feedback, "Scored guess");

        self.history.push(result);
        self.current_input.clear();
        self.rejection = None;

        if solved {
            self.status = GameStatus::Won;
            info!(guesses = self.history.len(), "Game won");
        } else if self.history.len() >= MAX_GUESSES {
            self.status = GameStatus::Lost;
            info!(answer = %self.answer, "Game lost");
        }

        Ok(self.status)
    }

    fn reject(&mut self, error: SubmitError) -> SubmitError {
        debug!(input = %self.current_input, %error, "Rejected submission");
        self.rejection = Some(error);
        error
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            history: &self.history,
            current_input: &self.current_input,
            status: self.status,
        }
    }

    /// Keyboard coloring, rebuilt from the history on every call
    #[must_use]
    pub fn key_states(&self) -> KeyStateMap {
        aggregate(&self.history)
    }

    /// Last rejected submission, cleared by the next edit or successful submit
    #[must_use]
    pub const fn rejection(&self) -> Option<SubmitError> {
        self.rejection
    }

    #[must_use]
    pub const fn answer(&self) -> &Word {
        &self.answer
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn history(&self) -> &[GuessResult] {
        &self.history
    }

    #[must_use]
    pub fn current_input(&self) -> &str {
        &self.current_input
    }

    #[must_use]
    pub fn rows_remaining(&self) -> usize {
        MAX_GUESSES - self.history.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Feedback, LetterState};

    const WORDS: &[&str] = &[
        "crane", "slate", "audio", "robot", "floor", "speed", "geese", "eerie", "nacre",
    ];

    fn words() -> WordList {
        WordList::from_slice(WORDS)
    }

    fn type_word(session: &mut GameSession<'_>, word: &str) {
        for ch in word.chars() {
            session.append_letter(ch);
        }
    }

    fn guess(session: &mut GameSession<'_>, word: &str) -> Result<GameStatus, SubmitError> {
        type_word(session, word);
        session.submit()
    }

    #[test]
    fn slate_then_crane_wins_in_two() {
        let words = words();
        let mut session = GameSession::new(Word::new("crane").unwrap(), &words);

        assert_eq!(guess(&mut session, "slate"), Ok(GameStatus::Playing));
        assert_eq!(
            session.history()[0].feedback,
            "--G-G".parse::<Feedback>().unwrap()
        );

        assert_eq!(guess(&mut session, "crane"), Ok(GameStatus::Won));
        assert_eq!(session.history().len(), 2);
        assert_eq!(session.history()[1].feedback, Feedback::SOLVED);
        assert_eq!(session.status(), GameStatus::Won);
    }

    #[test]
    fn win_on_any_row() {
        let words = words();
        for row in 1..=MAX_GUESSES {
            let mut session = GameSession::new(Word::new("crane").unwrap(), &words);
            for _ in 1..row {
                assert_eq!(guess(&mut session, "slate"), Ok(GameStatus::Playing));
            }
            assert_eq!(guess(&mut session, "crane"), Ok(GameStatus::Won));
            assert_eq!(session.history().len(), row);
        }
    }

    #[test]
    fn six_misses_lose() {
        let words = words();
        let mut session = GameSession::new(Word::new("crane").unwrap(), &words);

        for _ in 0..MAX_GUESSES - 1 {
            assert_eq!(guess(&mut session, "audio"), Ok(GameStatus::Playing));
        }
        assert_eq!(session.rows_remaining(), 1);
        assert_eq!(guess(&mut session, "robot"), Ok(GameStatus::Lost));
        assert_eq!(session.rows_remaining(), 0);
    }

    #[test]
    fn submit_after_game_over_is_noop() {
        let words = words();
        let mut session = GameSession::new(Word::new("crane").unwrap(), &words);
        guess(&mut session, "crane").unwrap();

        type_word(&mut session, "slate");
        assert_eq!(session.current_input(), "");
        assert_eq!(session.submit(), Err(SubmitError::GameOver));
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.status(), GameStatus::Won);
        assert_eq!(session.rejection(), None);
    }

    #[test]
    fn incomplete_guess_rejected() {
        let words = words();
        let mut session = GameSession::new(Word::new("crane").unwrap(), &words);

        assert_eq!(guess(&mut session, "cra"), Err(SubmitError::IncompleteGuess));
        assert!(session.history().is_empty());
        assert_eq!(session.current_input(), "cra");
        assert_eq!(session.rejection(), Some(SubmitError::IncompleteGuess));
    }

    #[test]
    fn unknown_word_rejected() {
        let words = words();
        let mut session = GameSession::new(Word::new("crane").unwrap(), &words);

        assert_eq!(guess(&mut session, "zzzzz"), Err(SubmitError::UnknownWord));
        assert!(session.history().is_empty());
        assert_eq!(session.rejection(), Some(SubmitError::UnknownWord));

        // editing clears the signal
        session.delete_letter();
        assert_eq!(session.rejection(), None);
        assert_eq!(session.current_input(), "zzzz");
    }

    #[test]
    fn input_capped_and_normalized() {
        let words = words();
        let mut session = GameSession::new(Word::new("crane").unwrap(), &words);

        type_word(&mut session, "SLATEXYZ");
        assert_eq!(session.current_input(), "slate");

        session.delete_letter();
        session.append_letter('1');
        session.append_letter(' ');
        assert_eq!(session.current_input(), "slat");
    }

    #[test]
    fn delete_on_empty_input_is_harmless() {
        let words = words();
        let mut session = GameSession::new(Word::new("crane").unwrap(), &words);
        session.delete_letter();
        assert_eq!(session.current_input(), "");
    }

    #[test]
    fn input_cleared_after_submit() {
        let words = words();
        let mut session = GameSession::new(Word::new("crane").unwrap(), &words);
        guess(&mut session, "slate").unwrap();
        assert_eq!(session.current_input(), "");
    }

    #[test]
    fn edits_ignored_after_loss() {
        let words = words();
        let mut session = GameSession::new(Word::new("crane").unwrap(), &words);
        for _ in 0..MAX_GUESSES {
            guess(&mut session, "audio").unwrap();
        }
        assert_eq!(session.status(), GameStatus::Lost);

        session.append_letter('a');
        assert_eq!(session.current_input(), "");
    }

    #[test]
    fn snapshot_reflects_state() {
        let words = words();
        let mut session = GameSession::new(Word::new("crane").unwrap(), &words);
        guess(&mut session, "slate").unwrap();
        type_word(&mut session, "cr");

        let snapshot = session.snapshot();
        assert_eq!(snapshot.history.len(), 1);
        assert_eq!(snapshot.current_input, "cr");
        assert_eq!(snapshot.status, GameStatus::Playing);
    }

    #[test]
    fn key_states_follow_history() {
        let words = words();
        let mut session = GameSession::new(Word::new("crane").unwrap(), &words);
        assert!(session.key_states().is_empty());

        guess(&mut session, "eerie").unwrap();
        let keys = session.key_states();
        assert_eq!(
            keys.get('e'),
            crate::core::KeyState::Scored(LetterState::Correct)
        );
    }

    #[test]
    fn from_challenge_validates_word() {
        let words = words();
        let ok = Challenge::new("crane", "nice job!");
        let session = GameSession::from_challenge(&ok, &words).unwrap();
        assert_eq!(session.answer().text(), "crane");

        for bad in ["", "zzzzz", "cra", "CR4NE"] {
            let challenge = Challenge::new(bad, "");
            assert_eq!(
                GameSession::from_challenge(&challenge, &words).err(),
                Some(SetupError::InvalidChallengeWord(bad.to_string()))
            );
        }
    }
}
