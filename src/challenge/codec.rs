//! Challenge token encoding
//!
//! A token is the challenge serialized as JSON, then base64 encoded with the
//! URL-safe alphabet and no padding so it fits in a single path segment.
//!
//! Older tokens carry only the bare word, and may use the standard base64
//! alphabet with padding. Both still decode.

use base64::Engine as _;
use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

/// A shared puzzle: the answer and an optional note for the solver
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Challenge {
    pub word: String,
    pub message: String,
}

impl Challenge {
    #[must_use]
    pub fn new(word: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn has_message(&self) -> bool {
        !self.message.trim().is_empty()
    }
}

/// Encode a word and optional message into a token
///
/// The word is lowercased; a missing message is stored as empty.
///
/// # Examples
/// ```
/// use wardle::challenge::{Challenge, decode, encode};
///
/// let token = encode("Crane", Some("nice job!"));
/// assert_eq!(decode(&token), Challenge::new("crane", "nice job!"));
/// ```
#[must_use]
pub fn encode(word: &str, message: Option<&str>) -> String {
    let payload = serde_json::json!({
        "word": word.to_lowercase(),
        "message": message.unwrap_or_default(),
    });
    URL_SAFE_NO_PAD.encode(payload.to_string())
}

/// Encode only the word, in the older bare-word format
#[must_use]
pub fn encode_word(word: &str) -> String {
    URL_SAFE_NO_PAD.encode(word.to_lowercase())
}

/// Decode a token, never failing
///
/// A JSON object payload yields its `word` and `message` fields; a field that
/// is missing or not a string reads as empty. A payload that is not a JSON
/// object is taken as a bare word with no message. A token that is not
/// valid base64 (or not UTF-8 underneath) yields an empty challenge; callers
/// must reject an empty or unknown word before starting a game.
#[must_use]
pub fn decode(token: &str) -> Challenge {
    let Some(payload) = decode_transport(token.trim()) else {
        warn!(token, "Malformed challenge token");
        return Challenge::default();
    };

    match serde_json::from_str::<Value>(&payload) {
        Ok(Value::Object(fields)) => {
            let field = |name: &str| {
                fields
                    .get(name)
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string()
            };
            Challenge {
                word: field("word"),
                message: field("message"),
            }
        }
        _ => {
            debug!("Challenge token is not structured, treating as bare word");
            Challenge {
                word: payload,
                message: String::new(),
            }
        }
    }
}

fn decode_transport(token: &str) -> Option<String> {
    let bytes = URL_SAFE_NO_PAD
        .decode(token)
        .or_else(|_| STANDARD.decode(token))
        .ok()?;
    String::from_utf8(bytes).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_without_message() {
        assert_eq!(decode(&encode("crane", None)), Challenge::new("crane", ""));
        assert_eq!(decode(&encode("crane", Some(""))), Challenge::new("crane", ""));
    }

    #[test]
    fn round_trip_with_message() {
        let token = encode("crane", Some("nice job!"));
        assert_eq!(decode(&token), Challenge::new("crane", "nice job!"));
    }

    #[test]
    fn round_trip_unicode_message() {
        let message = "gut gemacht 🎉 / \"quotes\" & ?query=1#frag";
        let token = encode("slate", Some(message));
        assert_eq!(decode(&token), Challenge::new("slate", message));
    }

    #[test]
    fn word_is_lowercased() {
        assert_eq!(decode(&encode("CRANE", None)).word, "crane");
    }

    #[test]
    fn token_is_path_safe() {
        let token = encode("crane", Some("a/b?c#d e+f=g ~~~ ÿÿÿ"));
        assert!(
            token
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'),
            "token not path safe: {token}"
        );
    }

    #[test]
    fn legacy_bare_word_token() {
        assert_eq!(decode(&encode_word("crane")), Challenge::new("crane", ""));
    }

    #[test]
    fn legacy_standard_base64_token() {
        // what a browser's btoa("crane") produces
        assert_eq!(decode("Y3JhbmU="), Challenge::new("crane", ""));
    }

    #[test]
    fn structured_standard_base64_token() {
        let token = STANDARD.encode(r#"{"word":"crane","message":"hi"}"#);
        assert_eq!(decode(&token), Challenge::new("crane", "hi"));
    }

    #[test]
    fn missing_or_null_message_defaults_to_empty() {
        let token = URL_SAFE_NO_PAD.encode(r#"{"word":"crane"}"#);
        assert_eq!(decode(&token), Challenge::new("crane", ""));

        let token = URL_SAFE_NO_PAD.encode(r#"{"word":"crane","message":null}"#);
        assert_eq!(decode(&token), Challenge::new("crane", ""));
    }

    #[test]
    fn non_string_message_is_dropped() {
        let token = URL_SAFE_NO_PAD.encode(r#"{"word":"crane","message":5}"#);
        assert_eq!(decode(&token), Challenge::new("crane", ""));
    }

    #[test]
    fn null_word_decodes_empty() {
        let token = URL_SAFE_NO_PAD.encode(r#"{"word":null,"message":"hi"}"#);
        assert_eq!(decode(&token), Challenge::new("", "hi"));

        let token = URL_SAFE_NO_PAD.encode(r#"{"message":"hi"}"#);
        assert_eq!(decode(&token), Challenge::new("", "hi"));
    }

    #[test]
    fn json_literal_bare_word_is_kept() {
        // "false" parses as JSON but is still an old bare-word token
        assert_eq!(decode(&encode_word("false")), Challenge::new("false", ""));
    }

    #[test]
    fn garbage_token_yields_empty_challenge() {
        assert_eq!(decode("not-a-valid-token!!"), Challenge::default());
        assert_eq!(decode("%%%"), Challenge::default());
    }

    #[test]
    fn non_utf8_payload_yields_empty_challenge() {
        let token = URL_SAFE_NO_PAD.encode([0xff, 0xfe, 0xfd]);
        assert_eq!(decode(&token), Challenge::default());
    }

    #[test]
    fn empty_token_yields_empty_word() {
        assert_eq!(decode(""), Challenge::default());
    }

    #[test]
    fn has_message() {
        assert!(Challenge::new("crane", "well done").has_message());
        assert!(!Challenge::new("crane", "   ").has_message());
    }
}
