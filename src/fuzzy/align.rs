//! Bounded dynamic-programming alignment.
//!
//! Scores every placement of the pattern inside the window located by
//! [`locate`](super::boundary::locate) and backtracks from the best final
//! cell to recover the matched positions. Omitting pattern characters is not
//! allowed; every row must place its character.
//!
//! Tables are laid out row-major, one row per pattern character and one
//! column per window character from the first occurrence of the first
//! pattern character to the last occurrence of the last one.

use std::ops::Range;

use crate::char_class::classify;
use crate::result::SearchMatchResult;
use crate::score::{
    BONUS_BOUNDARY, BONUS_CONSECUTIVE, BONUS_FIRST_CHAR_MULTIPLIER, BONUS_MATRIX,
    INITIAL_CHAR_CLASS, SCORE_GAP_EXTENSION, SCORE_GAP_START, SCORE_MATCH, Score,
};

use super::fold_char;

/// Align `pattern` against `text` within `window`.
///
/// `window` must come from [`locate`](super::boundary::locate) for the same
/// text, pattern and flags. The backtrace always runs so that `start` is
/// exact; positions are only collected when `compute_positions` is set.
///
/// # Examples
///
/// ```
/// use searchmatch::fuzzy::align::align;
///
/// let pattern: Vec<char> = "obz".chars().collect();
/// let result = align("fooBarbaz1", &pattern, 0..9, false, false, true);
/// assert_eq!(result.positions(), &[2, 3, 8]);
/// assert_eq!(result.score(), 49);
/// ```
pub fn align(
    text: &str,
    pattern: &[char],
    window: Range<usize>,
    case_sensitive: bool,
    normalize: bool,
    compute_positions: bool,
) -> SearchMatchResult {
    let m = pattern.len();
    if m == 0 {
        return SearchMatchResult::matched(0, 0, Vec::new(), 0);
    }

    let min_idx = window.start;
    let mut t = window_chars(text, &window);
    let n = t.len();
    if m > n {
        return SearchMatchResult::unmatched();
    }

    // Row 0 scores, run lengths, per-column bonus and first occurrences.
    let mut h0: Vec<Score> = vec![0; n];
    let mut c0: Vec<u32> = vec![0; n];
    let mut bonuses: Vec<Score> = vec![0; n];
    let mut first: Vec<usize> = vec![0; m];

    let mut max_score: Score = 0;
    let mut max_score_pos = 0;
    let mut pidx = 0;
    let mut last_idx = 0;
    let pchar0 = pattern[0];
    let mut pchar = pattern[0];
    let mut prev_h0: Score = 0;
    let mut prev_class = INITIAL_CHAR_CLASS;
    let mut in_gap = false;

    for off in 0..n {
        let class = classify(t[off]);
        let ch = fold_char(t[off], class, case_sensitive, normalize);
        t[off] = ch;

        let bonus = BONUS_MATRIX[prev_class as usize][class as usize];
        bonuses[off] = bonus;
        prev_class = class;

        if ch == pchar {
            if pidx < m {
                first[pidx] = off;
                pidx += 1;
                pchar = pattern[pidx.min(m - 1)];
            }
            last_idx = off;
        }

        if ch == pchar0 {
            let score = SCORE_MATCH + bonus * BONUS_FIRST_CHAR_MULTIPLIER;
            h0[off] = score;
            c0[off] = 1;
            if m == 1 && score > max_score {
                max_score = score;
                max_score_pos = off;
                // First boundary hit wins.
                if bonus >= BONUS_BOUNDARY {
                    break;
                }
            }
            in_gap = false;
        } else {
            let step = if in_gap { SCORE_GAP_EXTENSION } else { SCORE_GAP_START };
            h0[off] = (prev_h0 + step).max(0);
            c0[off] = 0;
            in_gap = true;
        }
        prev_h0 = h0[off];
    }

    if pidx != m {
        return SearchMatchResult::unmatched();
    }
    if m == 1 {
        let pos = min_idx + max_score_pos;
        let positions = if compute_positions { vec![pos] } else { Vec::new() };
        return SearchMatchResult::matched(pos, pos + 1, positions, max_score);
    }

    let f0 = first[0];
    let width = last_idx - f0 + 1;
    let mut h: Vec<Score> = vec![0; width * m];
    let mut c: Vec<u32> = vec![0; width * m];
    h[..width].copy_from_slice(&h0[f0..=last_idx]);
    c[..width].copy_from_slice(&c0[f0..=last_idx]);

    for (pidx, (&pchar, &fcol)) in pattern.iter().zip(&first).enumerate().skip(1) {
        let row = pidx * width;
        let mut in_gap = false;

        for col in fcol..=last_idx {
            let j0 = col - f0;
            let step = if in_gap { SCORE_GAP_EXTENSION } else { SCORE_GAP_START };
            let s2 = h[row + j0 - 1] + step;
            let mut s1 = 0;
            let mut consecutive = 0;

            if t[col] == pchar {
                let diag = row - width + j0 - 1;
                s1 = h[diag] + SCORE_MATCH;
                let mut bonus = bonuses[col];
                consecutive = c[diag] + 1;
                if consecutive > 1 {
                    let run_bonus = bonuses[col + 1 - consecutive as usize];
                    if bonus >= BONUS_BOUNDARY && bonus > run_bonus {
                        // A stronger boundary starts a fresh run.
                        consecutive = 1;
                    } else {
                        bonus = bonus.max(BONUS_CONSECUTIVE).max(run_bonus);
                    }
                }
                if s1 + bonus < s2 {
                    s1 += bonuses[col];
                    consecutive = 0;
                } else {
                    s1 += bonus;
                }
            }
            c[row + j0] = consecutive;

            in_gap = s1 < s2;
            let score = s1.max(s2).max(0);
            if pidx == m - 1 && score > max_score {
                max_score = score;
                max_score_pos = col;
            }
            h[row + j0] = score;
        }
    }

    // Walk back from the best final cell. On a tie between taking the
    // match and skipping left, take the match while inside a run.
    let mut positions = Vec::with_capacity(if compute_positions { m } else { 0 });
    let mut i = m - 1;
    let mut j = max_score_pos;
    let mut prefer_match = true;
    loop {
        let row = i * width;
        let j0 = j - f0;
        let s = h[row + j0];
        let s1 = if i > 0 && j >= first[i] {
            h[row - width + j0 - 1]
        } else {
            0
        };
        let s2 = if j > first[i] { h[row + j0 - 1] } else { 0 };

        if s > s1 && (s > s2 || (s == s2 && prefer_match)) {
            if compute_positions {
                positions.push(min_idx + j);
            }
            if i == 0 {
                break;
            }
            i -= 1;
        }

        let below = row + width + j0 + 1;
        prefer_match = c[row + j0] > 1 || (below < c.len() && c[below] > 0);
        j -= 1;
    }
    positions.reverse();

    SearchMatchResult::matched(
        min_idx + j,
        min_idx + max_score_pos + 1,
        positions,
        max_score,
    )
}

/// Characters of `text` inside `window`.
fn window_chars(text: &str, window: &Range<usize>) -> Vec<char> {
    if text.is_ascii() {
        text.as_bytes()[window.clone()]
            .iter()
            .map(|&b| char::from(b))
            .collect()
    } else {
        text.chars().skip(window.start).take(window.len()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::{BONUS_BOUNDARY_WHITE, BONUS_CAMEL123};

    fn run(text: &str, pattern: &str, case_sensitive: bool) -> SearchMatchResult {
        let pattern: Vec<char> = pattern.chars().collect();
        let window = 0..text.chars().count();
        align(text, &pattern, window, case_sensitive, false, true)
    }

    #[test]
    fn full_text_window_gives_same_result_as_tight_window() {
        let pattern: Vec<char> = "obz".chars().collect();
        let wide = align("fooBarbaz1", &pattern, 0..10, false, false, true);
        let tight = align("fooBarbaz1", &pattern, 0..9, false, false, true);
        assert_eq!(wide, tight);
    }

    #[test]
    fn single_char_prefers_first_boundary() {
        // 'b' at 4 follows whitespace and wins immediately.
        let r = run("abc bcd", "b", false);
        assert_eq!(r.positions(), &[4]);
        assert_eq!(r.score(), SCORE_MATCH + BONUS_BOUNDARY_WHITE * BONUS_FIRST_CHAR_MULTIPLIER);
    }

    #[test]
    fn single_char_keeps_first_of_equal_scores() {
        let r = run("xaxa", "a", false);
        assert_eq!(r.positions(), &[1]);
        assert_eq!(r.score(), SCORE_MATCH);
    }

    #[test]
    fn single_char_prefers_camel_over_plain() {
        let r = run("xaxA", "a", false);
        assert_eq!(r.positions(), &[3]);
        assert_eq!(r.score(), SCORE_MATCH + BONUS_CAMEL123 * BONUS_FIRST_CHAR_MULTIPLIER);
    }

    #[test]
    fn missing_char_in_window_is_unmatched() {
        assert!(!run("abc", "ad", false).is_match());
    }

    #[test]
    fn window_shorter_than_pattern_is_unmatched() {
        let pattern: Vec<char> = "abc".chars().collect();
        assert!(!align("abc", &pattern, 0..2, false, false, true).is_match());
    }

    #[test]
    fn consecutive_run_carries_first_bonus() {
        // "foob" in "fooBar Baz": every char of the run inherits the
        // whitespace boundary bonus of 'f'.
        let r = run("fooBar Baz", "foob", false);
        assert_eq!(r.positions(), &[0, 1, 2, 3]);
        assert_eq!(
            r.score(),
            SCORE_MATCH * 4 + BONUS_BOUNDARY_WHITE * BONUS_FIRST_CHAR_MULTIPLIER + BONUS_BOUNDARY_WHITE * 3
        );
    }

    #[test]
    fn positions_skipped_keeps_start_and_score() {
        let pattern: Vec<char> = "obz".chars().collect();
        let with = align("fooBarbaz1", &pattern, 0..9, false, false, true);
        let without = align("fooBarbaz1", &pattern, 0..9, false, false, false);
        assert_eq!(with.start(), without.start());
        assert_eq!(with.end(), without.end());
        assert_eq!(with.score(), without.score());
        assert!(without.positions().is_empty());
    }

    #[test]
    fn window_offset_is_added_back() {
        // Window starting mid-text: positions are absolute.
        let pattern: Vec<char> = "rdoc".chars().collect();
        let r = align("/AutomatorDocument.icns", &pattern, 8..21, false, false, true);
        assert_eq!(r.positions(), &[9, 10, 11, 12]);
        assert_eq!((r.start(), r.end()), (9, 13));
    }

    #[test]
    fn window_chars_ascii_and_unicode() {
        assert_eq!(window_chars("abcdef", &(1..4)), vec!['b', 'c', 'd']);
        assert_eq!(
            window_chars("S\u{00F3} Dan", &(1..3)),
            vec!['\u{00F3}', ' ']
        );
    }
}
