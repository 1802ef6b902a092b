//! Per-letter feedback states

/// Feedback for one position of a scored guess
///
/// Variants are declared in priority order, so the derived `Ord` gives
/// `Absent < Present < Correct`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterState {
    /// Letter is not in the answer (or every instance is already accounted for)
    Absent,
    /// Letter is in the answer at a different position
    Present,
    /// Letter is in the answer at this position
    Correct,
}

impl LetterState {
    /// Emoji tile used in share grids
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// State of a key on the on-screen keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyState {
    /// Letter has never appeared in a scored guess
    #[default]
    Unused,
    /// Best feedback observed for the letter so far
    Scored(LetterState),
}

impl From<Option<LetterState>> for KeyState {
    fn from(state: Option<LetterState>) -> Self {
        state.map_or(Self::Unused, Self::Scored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_order() {
        assert!(LetterState::Correct > LetterState::Present);
        assert!(LetterState::Present > LetterState::Absent);
    }

    #[test]
    fn key_state_from_option() {
        assert_eq!(KeyState::from(None), KeyState::Unused);
        assert_eq!(
            KeyState::from(Some(LetterState::Present)),
            KeyState::Scored(LetterState::Present)
        );
    }
}
