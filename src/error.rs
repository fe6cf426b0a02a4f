//! Precondition violations reported by [`try_fuzzy_match`](crate::try_fuzzy_match).
//!
//! A pattern that simply does not occur in the text is not an error; it
//! yields [`SearchMatchResult::unmatched`](crate::SearchMatchResult::unmatched).

/// A pattern that was not prepared for the requested match flags.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatchError {
    /// Case-insensitive matching needs a lowercase pattern.
    #[error("case-insensitive pattern has uppercase {found:?} at position {position}")]
    UppercasePattern {
        /// Char index of the offending character.
        position: usize,
        /// The offending character.
        found: char,
    },

    /// Normalized matching needs a pattern without diacritics.
    #[error("pattern {pattern:?} still carries diacritics; strip them with normalize_runes")]
    UnnormalizedPattern {
        /// The rejected pattern.
        pattern: String,
    },
}
