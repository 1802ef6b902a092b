//! Challenge authoring commands
//!
//! Create a challenge for a chosen or random word, and inspect existing tokens.

use crate::challenge::{self, Challenge, challenge_url, token_from_link};
use crate::core::Word;
use crate::wordlists::{Lexicon, WordList};
use anyhow::{Context, Result, bail, ensure};
use rand::Rng;
use tracing::info;

/// Number of matches the word search shows
pub const SEARCH_LIMIT: usize = 50;

/// Configuration for creating a challenge
pub struct CreateConfig<'m> {
    pub message: Option<&'m str>,
    /// Emit the older bare-word token (no message)
    pub bare: bool,
    pub base_url: String,
}

/// A challenge ready to share
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedChallenge {
    pub word: Word,
    pub token: String,
    pub url: String,
}

/// Create a challenge for `word`
///
/// # Errors
///
/// Returns an error if the word is not a 5-letter word in the accepted list,
/// or if a message is combined with a bare-word token.
pub fn create_challenge(
    word: &str,
    config: &CreateConfig<'_>,
    words: &WordList,
) -> Result<CreatedChallenge> {
    let word = Word::new(word.trim()).with_context(|| format!("Invalid challenge word '{word}'"))?;
    ensure!(
        words.is_accepted(word.text()),
        "'{}' is not in the word list",
        word.text().to_uppercase()
    );
    build(word, config)
}

/// Create a challenge for a random accepted word
///
/// # Errors
///
/// Returns an error if the word list is empty, or if a message is combined
/// with a bare-word token.
pub fn random_challenge<R: Rng + ?Sized>(
    rng: &mut R,
    config: &CreateConfig<'_>,
    words: &WordList,
) -> Result<CreatedChallenge> {
    let Some(word) = words.random_word(rng) else {
        bail!("Word list is empty, cannot pick a random word");
    };
    build(word.clone(), config)
}

fn build(word: Word, config: &CreateConfig<'_>) -> Result<CreatedChallenge> {
    ensure!(
        !(config.bare && config.message.is_some()),
        "Bare-word tokens cannot carry a message"
    );

    let token = if config.bare {
        challenge::encode_word(word.text())
    } else {
        challenge::encode(word.text(), config.message)
    };
    let url = challenge_url(&config.base_url, &token);
    info!(%url, "Created challenge");

    Ok(CreatedChallenge { word, token, url })
}

/// Decode a token or a full challenge link
#[must_use]
pub fn inspect_challenge(token_or_link: &str) -> Challenge {
    challenge::decode(token_from_link(token_or_link))
}
