//! Fuzzy matching entry points.
//!
//! A match runs in two steps: [`boundary::locate`] finds the window that can
//! hold an optimal alignment (or proves there is none), then
//! [`align::align`] scores that window and recovers positions. The free
//! functions [`fuzzy_match`] and [`try_fuzzy_match`] compose the two; the
//! [`SearchMatch`] object adds pattern preparation on top.

pub mod align;
pub mod boundary;

use std::borrow::Cow;

use crate::char_class::{CharClass, classify};
use crate::error::MatchError;
use crate::normalize::{normalize_char, normalize_runes};
use crate::options::MatchOptions;
use crate::result::SearchMatchResult;

/// Lowercase a single char of class `class`.
///
/// Only [`CharClass::Upper`] chars change, and only to the first char of
/// their lowercase mapping, so `'\u{0130}'` becomes `'i'` and `'Σ'` always
/// becomes `'σ'` whatever follows it. Pattern and text both go through this.
#[inline]
pub(crate) fn lower_char(c: char, class: CharClass) -> char {
    if class != CharClass::Upper {
        c
    } else if c.is_ascii() {
        c.to_ascii_lowercase()
    } else {
        c.to_lowercase().next().unwrap_or(c)
    }
}

/// Fold a text character for comparison against a prepared pattern.
///
/// Uppercase chars are lowercased when matching case-insensitively; non-ASCII
/// chars lose their diacritics when normalizing. The result is always a
/// single char so text positions are preserved.
#[inline]
pub(crate) fn fold_char(c: char, class: CharClass, case_sensitive: bool, normalize: bool) -> char {
    let mut c = c;
    if !case_sensitive {
        c = lower_char(c, class);
    }
    if normalize {
        c = normalize_char(c);
    }
    c
}

/// Match `pattern` against `text`.
///
/// The pattern must already be prepared: lowercased char by char when
/// `case_sensitive` is `false`, and passed through [`normalize_runes`] when `normalize` is
/// `true`. The text is folded internally. Use [`try_fuzzy_match`] to have
/// those preconditions checked, or [`SearchMatch`] to have them applied.
///
/// With `compute_positions` unset the result carries no positions, but
/// `start`, `end` and `score` are identical.
///
/// # Examples
///
/// ```
/// use searchmatch::fuzzy_match;
///
/// let result = fuzzy_match(false, false, true, "fooBarbaz1", "obz");
/// assert!(result.is_match());
/// assert_eq!((result.start(), result.end()), (2, 9));
/// assert_eq!(result.positions(), &[2, 3, 8]);
///
/// assert!(!fuzzy_match(true, false, true, "Foo Bar Baz", "fbb").is_match());
/// ```
pub fn fuzzy_match(
    case_sensitive: bool,
    normalize: bool,
    compute_positions: bool,
    text: &str,
    pattern: &str,
) -> SearchMatchResult {
    debug_assert!(
        check_pattern(case_sensitive, normalize, pattern).is_ok(),
        "unprepared pattern {pattern:?}"
    );
    let pattern: Vec<char> = pattern.chars().collect();
    match_chars(case_sensitive, normalize, compute_positions, text, &pattern)
}

/// Like [`fuzzy_match`], but rejects a pattern that violates its
/// preconditions instead of trusting it.
///
/// # Errors
///
/// Returns [`MatchError::UppercasePattern`] for a case-insensitive match with
/// an uppercase pattern char, and [`MatchError::UnnormalizedPattern`] when
/// normalizing with a pattern that still carries diacritics.
///
/// # Examples
///
/// ```
/// use searchmatch::{MatchError, try_fuzzy_match};
///
/// let result = try_fuzzy_match(false, false, true, "foo bar", "fb").unwrap();
/// assert_eq!(result.positions(), &[0, 4]);
///
/// let err = try_fuzzy_match(false, false, true, "foo bar", "fB").unwrap_err();
/// assert_eq!(err, MatchError::UppercasePattern { position: 1, found: 'B' });
/// ```
pub fn try_fuzzy_match(
    case_sensitive: bool,
    normalize: bool,
    compute_positions: bool,
    text: &str,
    pattern: &str,
) -> Result<SearchMatchResult, MatchError> {
    check_pattern(case_sensitive, normalize, pattern)?;
    let pattern: Vec<char> = pattern.chars().collect();
    Ok(match_chars(
        case_sensitive,
        normalize,
        compute_positions,
        text,
        &pattern,
    ))
}

/// Verify that `pattern` is prepared for the given flags.
fn check_pattern(case_sensitive: bool, normalize: bool, pattern: &str) -> Result<(), MatchError> {
    if !case_sensitive {
        let unfolded = pattern
            .chars()
            .enumerate()
            .find(|&(_, c)| lower_char(c, classify(c)) != c);
        if let Some((position, found)) = unfolded {
            return Err(MatchError::UppercasePattern { position, found });
        }
    }
    if normalize && matches!(normalize_runes(pattern), Cow::Owned(_)) {
        return Err(MatchError::UnnormalizedPattern {
            pattern: pattern.to_owned(),
        });
    }
    Ok(())
}

fn match_chars(
    case_sensitive: bool,
    normalize: bool,
    compute_positions: bool,
    text: &str,
    pattern: &[char],
) -> SearchMatchResult {
    let Some(window) = boundary::locate(text, pattern, case_sensitive, normalize) else {
        tracing::trace!(
            text_len = text.len(),
            pattern_len = pattern.len(),
            "pattern is not a subsequence of text"
        );
        return SearchMatchResult::unmatched();
    };

    tracing::trace!(start = window.start, end = window.end, "located match window");
    let result = align::align(
        text,
        pattern,
        window,
        case_sensitive,
        normalize,
        compute_positions,
    );
    tracing::trace!(
        score = result.score(),
        start = result.start(),
        end = result.end(),
        "aligned pattern"
    );
    result
}

/// A fuzzy matching strategy.
///
/// Implementations take a pattern that is already prepared for `options` (see
/// [`fuzzy_match`]) and must be pure: the same inputs always give the same
/// result.
pub trait SearchMatchAlgorithm: Send + Sync {
    /// Match a prepared `pattern` against `text`.
    fn search(&self, options: &MatchOptions, text: &str, pattern: &str) -> SearchMatchResult;
}

/// Optimal-alignment fuzzy matcher with boundary, camelCase and gap scoring.
///
/// # Examples
///
/// ```
/// use searchmatch::{FuzzyMatchV2, MatchOptions, SearchMatchAlgorithm};
///
/// let result = FuzzyMatchV2.search(&MatchOptions::default(), "/man1/zshcompctl.1", "zshc");
/// assert_eq!(result.positions(), &[6, 7, 8, 9]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FuzzyMatchV2;

impl SearchMatchAlgorithm for FuzzyMatchV2 {
    fn search(&self, options: &MatchOptions, text: &str, pattern: &str) -> SearchMatchResult {
        fuzzy_match(
            options.case_sensitive,
            options.normalize,
            options.compute_positions,
            text,
            pattern,
        )
    }
}

/// A configured search: options plus the algorithm that applies them.
///
/// Unlike the free functions, [`SearchMatch::search`] accepts a raw pattern
/// and prepares it itself.
///
/// # Examples
///
/// ```
/// use searchmatch::{MatchOptions, SearchMatch};
///
/// let search = SearchMatch::new(MatchOptions {
///     normalize: true,
///     ..Default::default()
/// });
/// let result = search.search("S\u{00F3} Dan\u{00E7}o Samba", "SODC");
/// assert_eq!(result.positions(), &[0, 1, 3, 6]);
/// assert_eq!(result.score(), 97);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SearchMatch<A = FuzzyMatchV2> {
    options: MatchOptions,
    algorithm: A,
}

impl SearchMatch<FuzzyMatchV2> {
    /// A search using [`FuzzyMatchV2`].
    pub fn new(options: MatchOptions) -> Self {
        Self::with_algorithm(options, FuzzyMatchV2)
    }
}

impl<A: SearchMatchAlgorithm> SearchMatch<A> {
    /// A search using a caller-supplied algorithm.
    pub fn with_algorithm(options: MatchOptions, algorithm: A) -> Self {
        Self { options, algorithm }
    }

    /// The options this search applies.
    pub fn options(&self) -> &MatchOptions {
        &self.options
    }

    /// Prepare `pattern` for this search's options.
    ///
    /// Lowercases char by char unless case-sensitive, the same way text is
    /// folded, then strips diacritics when normalizing. Borrows when the
    /// pattern is already prepared.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::borrow::Cow;
    /// use searchmatch::{MatchOptions, SearchMatch};
    ///
    /// let search = SearchMatch::new(MatchOptions::default());
    /// assert_eq!(search.prepare_pattern("FooB"), "foob");
    /// assert!(matches!(search.prepare_pattern("foob"), Cow::Borrowed(_)));
    /// ```
    pub fn prepare_pattern<'p>(&self, pattern: &'p str) -> Cow<'p, str> {
        let needs_lowering = !self.options.case_sensitive
            && pattern.chars().any(|c| lower_char(c, classify(c)) != c);
        let lowered = if needs_lowering {
            Cow::Owned(pattern.chars().map(|c| lower_char(c, classify(c))).collect())
        } else {
            Cow::Borrowed(pattern)
        };
        if !self.options.normalize {
            return lowered;
        }
        match lowered {
            Cow::Borrowed(p) => normalize_runes(p),
            Cow::Owned(p) => Cow::Owned(normalize_runes(&p).into_owned()),
        }
    }

    /// Prepare `pattern` and match it against `text`.
    pub fn search(&self, text: &str, pattern: &str) -> SearchMatchResult {
        let pattern = self.prepare_pattern(pattern);
        self.algorithm.search(&self.options, text, &pattern)
    }
}
