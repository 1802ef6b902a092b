//! Shareable challenge links

/// Path segment that precedes the token in a challenge link
const CHALLENGE_PATH: &str = "/challenge/";

/// Build the link a recipient opens to play `token`
///
/// # Examples
/// ```
/// use wardle::challenge::challenge_url;
///
/// assert_eq!(
///     challenge_url("https://wardle.app/", "abc"),
///     "https://wardle.app/challenge/abc"
/// );
/// ```
#[must_use]
pub fn challenge_url(base_url: &str, token: &str) -> String {
    format!("{}{CHALLENGE_PATH}{token}", base_url.trim_end_matches('/'))
}

/// Extract the token from a challenge link, or return the input if it is
/// already a bare token
#[must_use]
pub fn token_from_link(input: &str) -> &str {
    let input = input.trim();
    let path = input.split(['?', '#']).next().unwrap_or(input);

    match path.split_once(CHALLENGE_PATH) {
        Some((_, rest)) => rest.split('/').next().unwrap_or(rest),
        None => path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::challenge::{Challenge, decode, encode};

    #[test]
    fn url_joins_without_double_slash() {
        assert_eq!(challenge_url("http://localhost:3000", "t"), "http://localhost:3000/challenge/t");
        assert_eq!(challenge_url("http://localhost:3000//", "t"), "http://localhost:3000/challenge/t");
    }

    #[test]
    fn token_from_full_link() {
        assert_eq!(token_from_link("https://wardle.app/challenge/abc"), "abc");
        assert_eq!(token_from_link("https://wardle.app/challenge/abc/"), "abc");
        assert_eq!(token_from_link(" https://wardle.app/challenge/abc?ref=x#top "), "abc");
    }

    #[test]
    fn bare_token_passes_through() {
        assert_eq!(token_from_link("abc"), "abc");
        assert_eq!(token_from_link("  abc\n"), "abc");
    }

    #[test]
    fn link_round_trip() {
        let token = encode("crane", Some("nice job!"));
        let url = challenge_url("https://wardle.app", &token);
        assert_eq!(decode(token_from_link(&url)), Challenge::new("crane", "nice job!"));
    }
}
