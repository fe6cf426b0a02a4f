#![warn(missing_docs)]

//! Fuzzy subsequence matching with deterministic scoring.
//!
//! `searchmatch` decides whether a short pattern occurs as a subsequence of a
//! text and, if it does, finds the placement with the best score under a
//! fixed model of word-boundary, camelCase, consecutive-run and gap
//! bonuses. The score, the matched character positions and the bounding
//! range are reported in a [`SearchMatchResult`].
//!
//! ```
//! use searchmatch::fuzzy_match;
//!
//! let result = fuzzy_match(false, false, true, "/AutomatorDocument.icns", "rdoc");
//! assert_eq!(result.positions(), &[9, 10, 11, 12]);
//! assert_eq!(result.score(), 79);
//! ```

/// Character classes feeding the bonus model.
pub mod char_class;

/// Precondition errors.
pub mod error;

/// Two-phase fuzzy matcher: window location, then bounded alignment.
pub mod fuzzy;

/// Diacritic stripping for patterns and text.
pub mod normalize;

/// Configuration options for a search.
pub mod options;

/// The immutable match result.
pub mod result;

/// Score constants and the bonus formula.
pub mod score;

pub use char_class::{CharClass, classify};
pub use error::MatchError;
pub use fuzzy::{FuzzyMatchV2, SearchMatch, SearchMatchAlgorithm, fuzzy_match, try_fuzzy_match};
pub use normalize::{normalize_char, normalize_runes};
pub use options::MatchOptions;
pub use result::SearchMatchResult;
pub use score::Score;
