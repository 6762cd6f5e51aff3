//! Character-class filtering and direction-letter extraction.
//!
//! Everything downstream of the tokenizer works on a string that has been
//! reduced to the characters that carry meaning for a coordinate: ASCII
//! digits, the decimal point and (depending on the class) the four direction
//! letters or the DMS punctuation.

use once_cell::sync::Lazy;
use std::collections::HashSet;

use crate::Direction;

/// Non-digit characters kept by [`CharClass::Coordinate`].
const COORDINATE_SYMBOLS: &str = ".NSEWnsew";

/// Non-digit characters a strict DMS entry may contain.
const DMS_TEXT_SYMBOLS: &str = ".NSEWnsew °'\"";

// Precomputed sets for O(1) membership checks.
static COORDINATE_SET: Lazy<HashSet<char>> = Lazy::new(|| COORDINATE_SYMBOLS.chars().collect());
static DMS_TEXT_SET: Lazy<HashSet<char>> = Lazy::new(|| DMS_TEXT_SYMBOLS.chars().collect());

/// The character sets the pipeline filters against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharClass {
    /// ASCII digits only.
    Digits,
    /// Digits and `.` ("numeric-keep").
    Numeric,
    /// Digits, `.` and `N`/`S`/`E`/`W` in either case ("coordinate-keep").
    Coordinate,
    /// Everything a hand-typed DMS value may legally contain, punctuation and spaces included.
    DmsText,
}

impl CharClass {
    pub fn contains(self, c: char) -> bool {
        if c.is_ascii_digit() {
            return true;
        }

        match self {
            CharClass::Digits => false,
            CharClass::Numeric => c == '.',
            CharClass::Coordinate => COORDINATE_SET.contains(&c),
            CharClass::DmsText => DMS_TEXT_SET.contains(&c),
        }
    }
}

/// Removes every character of `text` outside `class`, preserving order.
pub fn keep(text: &str, class: CharClass) -> String {
    text.chars().filter(|&c| class.contains(c)).collect()
}

/// Returns the first character of `text` that is not in `class`, if any.
pub fn first_outside(text: &str, class: CharClass) -> Option<char> {
    text.chars().find(|&c| !class.contains(c))
}

/// Strips direction letters from the ends of a coordinate-keep string.
///
/// A trailing letter is consumed first, then a leading one. When both ends
/// carry a letter both are removed and the leading letter is the one
/// reported, so `N112230.E` reads as north.
pub fn extract_direction(kept: &str) -> (&str, Option<Direction>) {
    let mut body = kept;
    let mut direction = None;

    if let Some(last) = body.chars().last()
        && let Some(d) = Direction::from_char(last)
    {
        direction = Some(d);
        body = &body[..body.len() - last.len_utf8()];
    }

    if let Some(first) = body.chars().next()
        && let Some(d) = Direction::from_char(first)
    {
        direction = Some(d);
        body = &body[first.len_utf8()..];
    }

    (body, direction)
}

/// Removes all whitespace, including whitespace between digits.
pub fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}
