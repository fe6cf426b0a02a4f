//! The value produced by a single match call.

use std::ops::Range;

use crate::score::Score;

/// Outcome of matching one pattern against one text.
///
/// Immutable once built. Indices count characters (Unicode scalar values),
/// not bytes. An unmatched result reports `start == end == -1`, no
/// positions and a score of `0`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchMatchResult {
    start: isize,
    end: isize,
    positions: Vec<usize>,
    score: Score,
}

impl SearchMatchResult {
    /// The no-match sentinel.
    ///
    /// # Examples
    ///
    /// ```
    /// use searchmatch::SearchMatchResult;
    ///
    /// let none = SearchMatchResult::unmatched();
    /// assert!(!none.is_match());
    /// assert_eq!((none.start(), none.end(), none.score()), (-1, -1, 0));
    /// ```
    pub fn unmatched() -> Self {
        Self {
            start: -1,
            end: -1,
            positions: Vec::new(),
            score: 0,
        }
    }

    /// A successful match covering `start..end`.
    ///
    /// `positions` is either empty (not requested) or the strictly increasing
    /// matched indices, first equal to `start` and last equal to `end - 1`.
    pub(crate) fn matched(start: usize, end: usize, positions: Vec<usize>, score: Score) -> Self {
        debug_assert!(start <= end);
        debug_assert!(positions.is_empty() || positions[0] == start);
        debug_assert!(positions.last().is_none_or(|&last| last + 1 == end));
        Self {
            start: start as isize,
            end: end as isize,
            positions,
            score,
        }
    }

    /// Whether the pattern was found.
    pub fn is_match(&self) -> bool {
        self.start >= 0
    }

    /// Index of the first matched character, or `-1`.
    pub fn start(&self) -> isize {
        self.start
    }

    /// One past the last matched character, or `-1`.
    pub fn end(&self) -> isize {
        self.end
    }

    /// Matched character indices in increasing order.
    ///
    /// Empty when unmatched or when positions were not requested.
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }

    /// Alignment score; `0` when unmatched.
    pub fn score(&self) -> Score {
        self.score
    }

    /// The matched range, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use searchmatch::fuzzy_match;
    ///
    /// let result = fuzzy_match(false, false, true, "foo bar baz", "fbb");
    /// assert_eq!(result.range(), Some(0..9));
    /// assert_eq!(fuzzy_match(false, false, true, "foo", "x").range(), None);
    /// ```
    pub fn range(&self) -> Option<Range<usize>> {
        self.is_match()
            .then(|| self.start as usize..self.end as usize)
    }

    /// Consume the result, returning its positions.
    pub fn into_positions(self) -> Vec<usize> {
        self.positions
    }
}

impl Default for SearchMatchResult {
    fn default() -> Self {
        Self::unmatched()
    }
}
