//! Shareable challenges
//!
//! A challenge author picks a word and an optional message; the pair travels
//! as an opaque token inside a link, and the recipient's game is seeded from
//! the decoded word.

mod codec;
mod link;

pub use codec::{Challenge, decode, encode, encode_word};
pub use link::{challenge_url, token_from_link};
