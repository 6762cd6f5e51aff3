//! Strict validation of official DMS entry.
//!
//! Independent of the forgiving decomposer: a value is accepted only when it
//! carries a direction letter for the right axis, exactly two minute and two
//! second digits, and stays inside the geographic range.

use crate::error::{DmsResult, Error, ErrorKind};
use crate::tokenizer::{self, CharClass};
use crate::{Axis, Direction};

/// Validates `text` as DMS for `axis` and returns its signed decimal value.
///
/// Accepted shapes are `DDMMSS[.s]X` with one to two (latitude) or one to
/// three (longitude) degree digits, optionally punctuated with `°`, `'`, `"`
/// and spaces, where `X` is the axis' direction letter. At the axis limit
/// (90 or 180 degrees) every smaller field must be zero.
///
/// # Errors
///
/// Returns an [`Error`] describing the first rule the text breaks.
pub fn check_dms(text: &str, axis: Axis) -> DmsResult<f64> {
    if let Some(c) = tokenizer::first_outside(text, CharClass::DmsText) {
        return Err(Error::new(ErrorKind::InvalidCharacter, c.to_string()));
    }

    let kept = tokenizer::keep(text, CharClass::Coordinate);
    let Some(last) = kept.chars().last() else {
        return Err(Error::new(ErrorKind::Empty, text));
    };

    let direction = Direction::from_char(last)
        .ok_or_else(|| Error::new(ErrorKind::MissingDirection, text))?;
    if !axis.accepts(direction) {
        return Err(Error::new(
            ErrorKind::WrongAxisDirection,
            direction.to_string(),
        ));
    }

    let body = &kept[..kept.len() - last.len_utf8()];
    if body.is_empty() {
        return Err(Error::new(ErrorKind::Empty, text));
    }

    let (whole, decimal) = body.split_once('.').unwrap_or((body, ""));
    if !whole.chars().all(|c| c.is_ascii_digit()) || !decimal.chars().all(|c| c.is_ascii_digit())
    {
        return Err(Error::new(ErrorKind::NonNumeric, body));
    }

    if whole.len() < 5 || whole.len() > axis.max_integer_digits() {
        return Err(Error::new(ErrorKind::DigitCount, whole));
    }

    let (rest, seconds) = whole.split_at(whole.len() - 2);
    let (degrees, minutes) = rest.split_at(rest.len() - 2);
    let degrees = field(degrees, axis.limit(), "degrees")?;
    let minutes = field(minutes, 59, "minutes")?;
    let seconds = field(seconds, 59, "seconds")?;

    let has_fraction = decimal.chars().any(|c| c != '0');
    if degrees == axis.limit() && (minutes != 0 || seconds != 0 || has_fraction) {
        return Err(Error::new(ErrorKind::BeyondAxisLimit, body));
    }

    let fraction: f64 = format!("0.{decimal}").parse().unwrap_or(0.0);
    let value = f64::from(degrees)
        + f64::from(minutes) / 60.0
        + (f64::from(seconds) + fraction) / 3600.0;

    Ok(if direction.is_negative() { -value } else { value })
}

/// Returns `true` when `text` is strictly well-formed DMS within range for `axis`.
pub fn validate_dms(text: &str, axis: Axis) -> bool {
    check_dms(text, axis).is_ok()
}

pub fn validate_latitude_dms(text: &str) -> bool {
    validate_dms(text, Axis::Latitude)
}

pub fn validate_longitude_dms(text: &str) -> bool {
    validate_dms(text, Axis::Longitude)
}

fn field(digits: &str, max: u32, label: &'static str) -> DmsResult<u32> {
    let value: u32 = digits
        .parse()
        .map_err(|_| Error::new(ErrorKind::NonNumeric, digits))?;

    if value > max {
        return Err(Error::new(ErrorKind::OutOfRange(label), digits));
    }

    Ok(value)
}
