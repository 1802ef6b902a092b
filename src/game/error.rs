use thiserror::Error;

/// Why a submission was rejected
///
/// These are ordinary user-input outcomes; none of them ends the session.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Not enough letters")]
    IncompleteGuess,
    #[error("Not in word list")]
    UnknownWord,
    #[error("Game already ended, no new guesses are accepted")]
    GameOver,
}

/// Why a session could not be created
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    #[error("Invalid challenge word: {0:?}")]
    InvalidChallengeWord(String),
}
