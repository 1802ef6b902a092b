//! Command implementations

pub mod challenge;
pub mod play;

pub use challenge::{
    CreateConfig, CreatedChallenge, SEARCH_LIMIT, create_challenge, inspect_challenge,
    random_challenge,
};
pub use play::{LineOutcome, apply_line, run_simple, start_session};
