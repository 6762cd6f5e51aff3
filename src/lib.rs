//! # Coordinate Parser
//!
//! This crate turns free-form latitude/longitude text into numbers and back.
//! It accepts whatever a person is likely to type or paste:
//!
//! 1. **Decimal degrees**: `11.4584`, `-15.6827`
//! 2. **Compact DMS**: `112230N`, `0151545W` (digits peeled from the right,
//!    two for seconds, two for minutes, the rest degrees)
//! 3. **Punctuated DMS**: `N 11 ° 22'30.36 "`, `15 ° 15'45" W`
//! 4. **Pairs** of any of the above, separated by a comma, a dash, a
//!    whitespace run or simply by their direction letters:
//!    `11° 22'30 N 015° 15'45 W`
//!
//! Additional rules:
//! - **Direction letters** (`N`/`S`/`E`/`W`, either case) may lead or trail
//!   a value. `S` and `W` make it negative.
//! - **Out-of-range decimals** are re-read as DMS, so `112230` is `11.375`.
//! - **Parsing is forgiving**; [`validate_dms`] is the strict gate for
//!   official entry (exactly two minute and two second digits, a direction
//!   letter for the right axis, within ±90/±180).
//!
//! ## Live entry
//! [`live_reformat`] and [`CoordinateField`] rewrite a text field into
//! canonical DMS after every keystroke while keeping the cursor just after
//! the digit the user typed. Pasting a pair into a latitude field routes the
//! second half to its longitude sibling ([`CoordinateFieldPair`]).
//!
//! ## Example
//! ```rust
//! use coordinate_parser::{parse_pair, format_to_dms, validate_dms, Axis};
//!
//! let coordinate = parse_pair("112230N 0151545W");
//! assert!((coordinate.latitude - 11.375).abs() < 1e-9);
//! assert!((coordinate.longitude + 15.2625).abs() < 1e-9);
//!
//! let dms = format_to_dms(Some("112230N"), false, Axis::Latitude).expect("text given");
//! assert_eq!(dms, "11° 22' 30\" N");
//! assert!(validate_dms(&dms, Axis::Latitude));
//! ```

use core::fmt;
use serde::{Deserialize, Serialize};

pub mod display;
pub mod dms;
pub mod error;
pub mod live;
pub mod parse;
pub mod split;
pub mod tokenizer;
pub mod validate;

pub use display::{GridReferenceFormatter, display_coordinate};
pub use dms::{DecomposedDms, format_to_dms, latitude_dms_string, longitude_dms_string};
pub use error::{DmsResult, Error, ErrorKind};
pub use live::{
    CoordinateField, CoordinateFieldPair, FieldValidity, Reformatted, TextEdit, field_validity,
    live_reformat, reformat_edit,
};
pub use parse::{parse_pair, parse_single};
pub use split::split_pair;
pub use validate::{check_dms, validate_dms, validate_latitude_dms, validate_longitude_dms};

/// Which half of a coordinate a value belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    /// Largest absolute value in degrees: 90 for latitude, 180 for longitude.
    pub fn limit(self) -> u32 {
        match self {
            Axis::Latitude => 90,
            Axis::Longitude => 180,
        }
    }

    /// Whether `value` lies within `-limit..=limit`.
    pub fn contains(self, value: f64) -> bool {
        let limit = f64::from(self.limit());
        (-limit..=limit).contains(&value)
    }

    pub fn positive(self) -> Direction {
        match self {
            Axis::Latitude => Direction::North,
            Axis::Longitude => Direction::East,
        }
    }

    pub fn negative(self) -> Direction {
        match self {
            Axis::Latitude => Direction::South,
            Axis::Longitude => Direction::West,
        }
    }

    pub fn accepts(self, direction: Direction) -> bool {
        direction == self.positive() || direction == self.negative()
    }

    /// Most integer digits a strict DMS value may carry (`DDMMSS` / `DDDMMSS`).
    pub fn max_integer_digits(self) -> usize {
        match self {
            Axis::Latitude => 6,
            Axis::Longitude => 7,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Latitude => f.write_str("latitude"),
            Axis::Longitude => f.write_str("longitude"),
        }
    }
}

/// A compass direction letter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Reads `N`, `S`, `E` or `W` in either case.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'N' => Some(Direction::North),
            'S' => Some(Direction::South),
            'E' => Some(Direction::East),
            'W' => Some(Direction::West),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Direction::North => 'N',
            Direction::South => 'S',
            Direction::East => 'E',
            Direction::West => 'W',
        }
    }

    /// South and west are the negative hemispheres.
    pub fn is_negative(self) -> bool {
        matches!(self, Direction::South | Direction::West)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A latitude/longitude pair in signed decimal degrees.
///
/// Either half is NaN when it could not be resolved.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Both halves NaN.
    pub fn unresolved() -> Self {
        Self::new(f64::NAN, f64::NAN)
    }

    pub fn is_complete(&self) -> bool {
        !self.latitude.is_nan() && !self.longitude.is_nan()
    }
}

impl Default for Coordinate {
    fn default() -> Self {
        Self::unresolved()
    }
}

/// Decimal rendering with five fractional digits, e.g. `15.48000, 20.47000`.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.5}, {:.5}", self.latitude, self.longitude)
    }
}
