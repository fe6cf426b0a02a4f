//! Configuration options for a search.
//!
//! [`MatchOptions`] controls case sensitivity, diacritics handling and
//! whether matched positions are reported.

/// Options that control how a pattern is matched against a text.
///
/// # Defaults
///
/// - `case_sensitive`: `false` (the pattern is lowercased, text uppercase
///   letters compare as lowercase)
/// - `normalize`: `false` (diacritics are significant)
/// - `compute_positions`: `true` (matched positions are reported)
///
/// # Examples
///
/// ```
/// use searchmatch::MatchOptions;
///
/// let opts = MatchOptions::default();
/// assert!(!opts.case_sensitive);
/// assert!(!opts.normalize);
/// assert!(opts.compute_positions);
///
/// // Score only, ignoring accents
/// let opts = MatchOptions { normalize: true, compute_positions: false, ..Default::default() };
/// assert!(opts.normalize);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchOptions {
    /// When `true`, `'A'` and `'a'` are different characters.
    pub case_sensitive: bool,
    /// When `true`, diacritics are stripped so that e.g. `"danco"` matches
    /// `"Danço"`.
    pub normalize: bool,
    /// When `false`, positions are left empty; score and range are unchanged.
    pub compute_positions: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            normalize: false,
            compute_positions: true,
        }
    }
}
