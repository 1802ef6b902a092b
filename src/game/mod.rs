//! Turn-by-turn game state
//!
//! [`GameSession`] is the data-owning object a front end drives with
//! `append_letter`, `delete_letter` and `submit`, and renders from `snapshot`.

mod error;
mod session;

pub use error::{SetupError, SubmitError};
pub use session::{GameSession, GameStatus, MAX_GUESSES, Snapshot};
