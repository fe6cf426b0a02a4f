//! Score table for fuzzy alignment.
//!
//! Every constant here is load-bearing: two implementations produce the same
//! ranking only if they agree on all of these values exactly.

use crate::char_class::CharClass;

/// Integer type used for all scores, bonuses and penalties.
pub type Score = i32;

/// Points awarded for each matched character.
pub const SCORE_MATCH: Score = 16;

/// Penalty applied to the first skipped character of a gap.
pub const SCORE_GAP_START: Score = -3;

/// Penalty applied to each further skipped character of a gap.
pub const SCORE_GAP_EXTENSION: Score = -1;

/// Bonus for a match at a word boundary (previous char is non-word).
pub const BONUS_BOUNDARY: Score = SCORE_MATCH / 2;

/// Bonus for a match right after whitespace.
pub const BONUS_BOUNDARY_WHITE: Score = BONUS_BOUNDARY + 2;

/// Bonus for a match right after a delimiter such as `/` or `:`.
pub const BONUS_BOUNDARY_DELIMITER: Score = BONUS_BOUNDARY + 1;

/// Bonus for matching a non-word character itself.
pub const BONUS_NON_WORD: Score = SCORE_MATCH / 2;

/// Bonus for a lower-to-upper or letter-to-digit transition.
pub const BONUS_CAMEL123: Score = BONUS_BOUNDARY + SCORE_GAP_EXTENSION;

/// Minimum bonus for any character continuing a run of matches.
pub const BONUS_CONSECUTIVE: Score = -(SCORE_GAP_START + SCORE_GAP_EXTENSION);

/// Multiplier applied to the bonus earned by the first pattern character.
pub const BONUS_FIRST_CHAR_MULTIPLIER: Score = 2;

/// Class assumed to precede the first character of every text.
pub(crate) const INITIAL_CHAR_CLASS: CharClass = CharClass::Whitespace;

/// Bonus earned by a character of class `class` that follows a character of
/// class `prev`.
///
/// # Examples
///
/// ```
/// use searchmatch::CharClass;
/// use searchmatch::score::{BONUS_BOUNDARY_WHITE, BONUS_CAMEL123, bonus_for};
///
/// assert_eq!(bonus_for(CharClass::Whitespace, CharClass::Lower), BONUS_BOUNDARY_WHITE);
/// assert_eq!(bonus_for(CharClass::Lower, CharClass::Upper), BONUS_CAMEL123);
/// assert_eq!(bonus_for(CharClass::Lower, CharClass::Lower), 0);
/// ```
pub const fn bonus_for(prev: CharClass, class: CharClass) -> Score {
    if class.is_word() {
        match prev {
            CharClass::Whitespace => return BONUS_BOUNDARY_WHITE,
            CharClass::Delimiter => return BONUS_BOUNDARY_DELIMITER,
            CharClass::NonWord => return BONUS_BOUNDARY,
            _ => {}
        }
    }

    let camel = matches!((prev, class), (CharClass::Lower, CharClass::Upper));
    let digit = matches!(class, CharClass::Number) && !matches!(prev, CharClass::Number);
    if camel || digit {
        return BONUS_CAMEL123;
    }

    match class {
        CharClass::NonWord | CharClass::Delimiter => BONUS_NON_WORD,
        CharClass::Whitespace => BONUS_BOUNDARY_WHITE,
        _ => 0,
    }
}

/// Total penalty for skipping `gap` text characters between two matches.
///
/// Saturates at [`Score::MIN`] for gaps too long to represent.
///
/// # Examples
///
/// ```
/// use searchmatch::score::gap_penalty;
///
/// assert_eq!(gap_penalty(0), 0);
/// assert_eq!(gap_penalty(1), -3);
/// assert_eq!(gap_penalty(4), -6);
/// ```
pub const fn gap_penalty(gap: usize) -> Score {
    if gap == 0 {
        return 0;
    }
    let extensions = if gap - 1 > Score::MAX as usize {
        Score::MAX
    } else {
        (gap - 1) as Score
    };
    SCORE_GAP_START.saturating_add(extensions.saturating_mul(SCORE_GAP_EXTENSION))
}

/// Pre-computed `bonus_for` over every class pair, indexed `[prev][class]`.
pub(crate) const BONUS_MATRIX: [[Score; CharClass::COUNT]; CharClass::COUNT] = {
    let mut table = [[0; CharClass::COUNT]; CharClass::COUNT];
    let mut i = 0;
    while i < CharClass::COUNT {
        let mut j = 0;
        while j < CharClass::COUNT {
            table[i][j] = bonus_for(CharClass::ALL[i], CharClass::ALL[j]);
            j += 1;
        }
        i += 1;
    }
    table
};
