//! Cheap pre-pass that bounds the alignment window.
//!
//! A greedy forward scan proves the pattern is a subsequence of the text and
//! finds where the first pattern character first occurs. A backward scan
//! then finds the last occurrence of the final pattern character. No optimal
//! alignment can start earlier or end later, so the DP only has to cover the
//! characters in between.

use std::ops::Range;

use crate::char_class::classify;

use super::fold_char;

/// Locate the half-open window of `text` that contains every optimal
/// alignment of `pattern`.
///
/// Returns `None` when `pattern` is not a subsequence of `text` under the
/// given case and normalization rules, including the trivial case of a
/// pattern longer than the text. An empty pattern yields the empty window
/// `0..0`.
///
/// The window starts one character before the first occurrence of the first
/// pattern character (when there is one) so that character's predecessor,
/// which decides its boundary bonus, stays in view. Indices count chars.
///
/// # Examples
///
/// ```
/// use searchmatch::fuzzy::boundary::locate;
///
/// let pattern: Vec<char> = "obz".chars().collect();
/// assert_eq!(locate("fooBarbaz1", &pattern, false, false), Some(0..9));
///
/// let pattern: Vec<char> = "zz".chars().collect();
/// assert_eq!(locate("fooBarbaz1", &pattern, false, false), None);
/// ```
pub fn locate(
    text: &str,
    pattern: &[char],
    case_sensitive: bool,
    normalize: bool,
) -> Option<Range<usize>> {
    if pattern.is_empty() {
        return Some(0..0);
    }

    if text.is_ascii() {
        if pattern.len() > text.len() {
            return None;
        }
        return locate_ascii(text.as_bytes(), pattern, case_sensitive);
    }

    let folded: Vec<char> = text
        .chars()
        .map(|c| fold_char(c, classify(c), case_sensitive, normalize))
        .collect();
    if pattern.len() > folded.len() {
        return None;
    }
    locate_folded(&folded, pattern)
}

/// Byte-level scan for ASCII text.
///
/// Folded ASCII text stays ASCII, so any non-ASCII pattern char is an
/// immediate miss.
fn locate_ascii(bytes: &[u8], pattern: &[char], case_sensitive: bool) -> Option<Range<usize>> {
    let mut start = 0;
    let mut idx = 0;
    let mut last = 0;
    let mut needle = 0u8;

    for (pidx, &c) in pattern.iter().enumerate() {
        needle = u8::try_from(c).ok().filter(u8::is_ascii)?;
        idx = find_byte(bytes, idx, needle, case_sensitive)?;
        if pidx == 0 && idx > 0 {
            start = idx - 1;
        }
        last = idx;
        idx += 1;
    }

    if let Some(offset) = rfind_byte(&bytes[last + 1..], needle, case_sensitive) {
        last += 1 + offset;
    }
    Some(start..last + 1)
}

/// Scan over text that has already been folded char by char.
fn locate_folded(text: &[char], pattern: &[char]) -> Option<Range<usize>> {
    let mut start = 0;
    let mut idx = 0;
    let mut last = 0;

    for (pidx, &c) in pattern.iter().enumerate() {
        idx += text[idx..].iter().position(|&t| t == c)?;
        if pidx == 0 && idx > 0 {
            start = idx - 1;
        }
        last = idx;
        idx += 1;
    }

    let final_char = pattern[pattern.len() - 1];
    if let Some(offset) = text[last + 1..].iter().rposition(|&t| t == final_char) {
        last += 1 + offset;
    }
    Some(start..last + 1)
}

/// First index `>= from` holding `b`, also accepting its uppercase form
/// when matching case-insensitively.
fn find_byte(bytes: &[u8], from: usize, b: u8, case_sensitive: bool) -> Option<usize> {
    let hay = &bytes[from..];
    let found = if !case_sensitive && b.is_ascii_lowercase() {
        memchr::memchr2(b, b.to_ascii_uppercase(), hay)
    } else {
        memchr::memchr(b, hay)
    };
    found.map(|i| from + i)
}

/// Last index of `b` in `hay`, with the same case rule as [`find_byte`].
fn rfind_byte(hay: &[u8], b: u8, case_sensitive: bool) -> Option<usize> {
    if !case_sensitive && b.is_ascii_lowercase() {
        memchr::memrchr2(b, b.to_ascii_uppercase(), hay)
    } else {
        memchr::memrchr(b, hay)
    }
}
