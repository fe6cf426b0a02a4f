//! Character classification used to derive boundary and camelCase bonuses.

/// Characters treated as delimiters (path and list separators).
pub const DELIMITER_CHARS: &str = "/,:;|";

/// ASCII characters treated as whitespace.
const ASCII_WHITE_CHARS: &[u8] = b" \t\n\x0B\x0C\r";

/// Coarse class of a single character.
///
/// Declaration order is significant: every class after [`CharClass::NonWord`]
/// counts as a word character when deciding whether a match sits on a
/// boundary (see [`CharClass::is_word`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CharClass {
    /// Unicode whitespace.
    Whitespace = 0,
    /// Punctuation and symbols that are not delimiters.
    NonWord = 1,
    /// One of [`DELIMITER_CHARS`].
    Delimiter = 2,
    /// Lowercase letter.
    Lower = 3,
    /// Uppercase letter.
    Upper = 4,
    /// Letter without case (e.g. CJK ideographs).
    Letter = 5,
    /// Numeric character.
    Number = 6,
}

impl CharClass {
    /// Number of variants.
    pub const COUNT: usize = 7;

    /// All variants in declaration order.
    pub const ALL: [CharClass; Self::COUNT] = [
        CharClass::Whitespace,
        CharClass::NonWord,
        CharClass::Delimiter,
        CharClass::Lower,
        CharClass::Upper,
        CharClass::Letter,
        CharClass::Number,
    ];

    /// Returns `true` for classes that can start a word after a boundary.
    pub const fn is_word(self) -> bool {
        (self as u8) > (CharClass::NonWord as u8)
    }
}

/// Classify `c`.
///
/// Total over all characters; anything that is not whitespace, a delimiter,
/// a digit or a letter is [`CharClass::NonWord`].
///
/// Non-ASCII letters are recognised with the derived `Alphabetic` and
/// `Lowercase`/`Uppercase` properties rather than the `L*` general
/// categories, so spacing vowel signs such as `'\u{093E}'` count as
/// [`CharClass::Letter`].
///
/// # Examples
///
/// ```
/// use searchmatch::{CharClass, classify};
///
/// assert_eq!(classify('a'), CharClass::Lower);
/// assert_eq!(classify('Q'), CharClass::Upper);
/// assert_eq!(classify('7'), CharClass::Number);
/// assert_eq!(classify('/'), CharClass::Delimiter);
/// assert_eq!(classify('-'), CharClass::NonWord);
/// assert_eq!(classify(' '), CharClass::Whitespace);
/// ```
pub fn classify(c: char) -> CharClass {
    if c.is_ascii() {
        classify_ascii(c as u8)
    } else {
        classify_non_ascii(c)
    }
}

#[inline]
fn classify_ascii(b: u8) -> CharClass {
    match b {
        b'a'..=b'z' => CharClass::Lower,
        b'A'..=b'Z' => CharClass::Upper,
        b'0'..=b'9' => CharClass::Number,
        _ if ASCII_WHITE_CHARS.contains(&b) => CharClass::Whitespace,
        _ if DELIMITER_CHARS.as_bytes().contains(&b) => CharClass::Delimiter,
        _ => CharClass::NonWord,
    }
}

fn classify_non_ascii(c: char) -> CharClass {
    if c.is_lowercase() {
        CharClass::Lower
    } else if c.is_uppercase() {
        CharClass::Upper
    } else if c.is_numeric() {
        CharClass::Number
    } else if c.is_alphabetic() {
        CharClass::Letter
    } else if c.is_whitespace() {
        CharClass::Whitespace
    } else {
        // The delimiter set is ASCII-only.
        CharClass::NonWord
    }
}
