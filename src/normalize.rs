//! Diacritic stripping.
//!
//! Text and pattern are normalized independently: the pattern as a whole
//! string via [`normalize_runes`], the text one character at a time via
//! [`normalize_char`] so that positions keep pointing at the original text.

use std::borrow::Cow;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::{decompose_canonical, is_combining_mark};

/// Strip diacritics from `s`.
///
/// Applies Unicode NFD decomposition, removes combining marks
/// (`General_Category = Mark`) and recomposes, so `"Danço"` becomes
/// `"Danco"` while mark-free decompositions such as Hangul syllables come
/// back unchanged. Returns [`Cow::Borrowed`] when nothing was removed.
/// Idempotent.
///
/// # Examples
///
/// ```
/// use std::borrow::Cow;
/// use searchmatch::normalize_runes;
///
/// assert_eq!(normalize_runes("S\u{00F3} Dan\u{00E7}o"), "So Danco");
/// assert!(matches!(normalize_runes("plain"), Cow::Borrowed(_)));
/// assert!(matches!(normalize_runes("\u{D55C}\u{AD6D}"), Cow::Borrowed(_)));
/// ```
pub fn normalize_runes(s: &str) -> Cow<'_, str> {
    // ASCII never carries combining marks.
    if s.is_ascii() {
        return Cow::Borrowed(s);
    }

    let stripped: String = s.nfd().filter(|c| !is_combining_mark(*c)).nfc().collect();

    if stripped == s {
        Cow::Borrowed(s)
    } else {
        Cow::Owned(stripped)
    }
}

/// Map a single character to its unaccented base character.
///
/// Returns the starter of `c`'s canonical decomposition when everything
/// after it is a combining mark, e.g. `'ö'` -> `'o'`. Characters without a
/// decomposition, or whose decomposition carries further starters (Hangul
/// syllables), are returned unchanged. The mapping is always one char to one
/// char and agrees with [`normalize_runes`] on precomposed text.
///
/// A combining mark that is already its own char in the text (decomposed
/// input such as `"c\u{327}"`) is left as is: it stays a separate
/// non-word char and still takes part in gaps and boundaries.
///
/// # Examples
///
/// ```
/// use searchmatch::normalize_char;
///
/// assert_eq!(normalize_char('\u{00F6}'), 'o');
/// assert_eq!(normalize_char('\u{00C7}'), 'C');
/// assert_eq!(normalize_char('x'), 'x');
/// assert_eq!(normalize_char('\u{D55C}'), '\u{D55C}');
/// ```
pub fn normalize_char(c: char) -> char {
    if c.is_ascii() {
        return c;
    }
    let mut base = None;
    let mut marks_only = true;
    decompose_canonical(c, |d| {
        if base.is_none() {
            base = Some(d);
        } else if !is_combining_mark(d) {
            marks_only = false;
        }
    });
    match base {
        Some(base) if marks_only => base,
        _ => c,
    }
}
