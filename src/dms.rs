//! Positional degrees-minutes-seconds decomposition and rendering.

use core::fmt;
use serde::{Deserialize, Serialize};

use crate::tokenizer::{self, CharClass};
use crate::{Axis, Direction};

/// A syntactic split of a coordinate into its DMS fields.
///
/// Every field is independently absent, so partial input such as a lone
/// `11` (degrees only) survives decomposition and renders back as `11° `.
/// No range checks happen here; see [`crate::validate`] for those.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecomposedDms {
    pub degrees: Option<u64>,
    pub minutes: Option<u64>,
    pub seconds: Option<u64>,
    /// The literal digit run after the decimal point, leading zeros included.
    pub decimal_seconds: Option<String>,
    pub direction: Option<Direction>,
}

impl DecomposedDms {
    /// Splits `text` into DMS fields.
    ///
    /// The integer digits are peeled from the right two at a time: the last
    /// pair is seconds, the pair before it minutes, the rest degrees. Short
    /// input shifts upwards, so `30` is degrees and `3030` degrees and
    /// minutes. A value with only degrees and a fractional part is read as
    /// decimal degrees and converted (`11.4584` becomes `11° 27' 30.0"`).
    /// A digit run too long for a 64-bit field leaves every field empty.
    ///
    /// With `add_direction`, a missing direction is filled in from the sign
    /// of the raw text: a leading `-` means south or west, anything else
    /// north or east. A direction letter in the text always overrides it.
    pub fn decompose(text: &str, add_direction: bool, axis: Axis) -> Self {
        let mut dms = DecomposedDms::default();

        if add_direction {
            dms.direction = Some(if text.trim().starts_with('-') {
                axis.negative()
            } else {
                axis.positive()
            });
        }

        let kept = tokenizer::keep(text, CharClass::Coordinate);
        let (body, direction) = tokenizer::extract_direction(&kept);
        if direction.is_some() {
            dms.direction = direction;
        }

        // Empty runs around stray dots are ignored: `.5` is `5`, `11.` is `11`.
        let pieces: Vec<&str> = body.split('.').filter(|p| !p.is_empty()).collect();
        let Some(whole) = pieces.first() else {
            return dms;
        };

        if pieces.len() == 2 && pieces[1].chars().all(|c| c.is_ascii_digit()) {
            dms.decimal_seconds = Some(pieces[1].to_string());
        }

        let (rest, seconds) = peel_pair(whole);
        let (rest, minutes) = peel_pair(rest);
        if [rest, minutes, seconds].into_iter().any(overflows) {
            tracing::debug!(message = "Digit run overflows, degrees undetermined.", text = %text);
            dms.decimal_seconds = None;
            return dms;
        }

        dms.seconds = number(seconds);
        dms.minutes = number(minutes);
        dms.degrees = number(rest);

        if dms.degrees.is_none() {
            if dms.minutes.is_none() {
                dms.degrees = dms.seconds.take();
            } else {
                dms.degrees = dms.minutes;
                dms.minutes = dms.seconds.take();
            }
        }

        if dms.minutes.is_none() && dms.seconds.is_none() {
            if let Some(fraction) = dms.decimal_seconds.take() {
                dms.apply_fractional_degrees(&fraction);
            }
        }

        dms
    }

    /// Re-derives minutes and seconds from the fractional digits of a
    /// decimal-degree value.
    ///
    /// The sub-second remainder is truncated to a whole number, which leaves
    /// decimal seconds at `0`. Display output depends on this exact loss.
    fn apply_fractional_degrees(&mut self, fraction_digits: &str) {
        let fraction = fraction_value(fraction_digits);
        let minutes = (fraction.fract() * 60.0).abs();
        let seconds = (minutes.fract() * 60.0).abs();

        self.minutes = Some(minutes.trunc() as u64);
        self.seconds = Some(seconds.trunc() as u64);
        self.decimal_seconds = Some((seconds.fract().trunc() as u64).to_string());
    }

    /// Converts the fields to signed decimal degrees.
    ///
    /// Returns `None` when no degrees could be determined. No range clamp is
    /// applied, so `95° N` comes back as `95.0`.
    pub fn to_degrees(&self) -> Option<f64> {
        let mut value = self.degrees? as f64;

        if let Some(minutes) = self.minutes {
            value += minutes as f64 / 60.0;
        }

        if let Some(seconds) = self.seconds {
            value += seconds as f64 / 3600.0;
        }

        if let Some(digits) = &self.decimal_seconds {
            value += fraction_value(digits) / 3600.0;
        }

        if self.direction.is_some_and(Direction::is_negative) {
            value = -value;
        }

        Some(value)
    }
}

/// Canonical rendering, e.g. `11° 22' 30.36" N`.
///
/// Absent fields drop their whole segment; every present numeric segment is
/// followed by a single space, so a value without a direction keeps a
/// trailing space (`11° 22' 30" `). Minutes and seconds are zero-padded to
/// two digits so the rendering decomposes back into the same fields.
impl fmt::Display for DecomposedDms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(degrees) = self.degrees {
            write!(f, "{degrees}° ")?;
        }

        if let Some(minutes) = self.minutes {
            write!(f, "{minutes:02}' ")?;
        }

        if let Some(seconds) = self.seconds {
            match &self.decimal_seconds {
                Some(digits) => write!(f, "{seconds:02}.{digits}\" ")?,
                None => write!(f, "{seconds:02}\" ")?,
            }
        }

        if let Some(direction) = self.direction {
            write!(f, "{direction}")?;
        }

        Ok(())
    }
}

/// Renders free-form coordinate text as canonical DMS.
///
/// `None` in gives `None` out; empty text gives an empty string.
pub fn format_to_dms(text: Option<&str>, add_direction: bool, axis: Axis) -> Option<String> {
    let text = text?;
    if text.is_empty() {
        return Some(String::new());
    }

    Some(DecomposedDms::decompose(text, add_direction, axis).to_string())
}

/// Renders a decimal latitude as `D° M' S.sss" N|S`.
pub fn latitude_dms_string(value: f64) -> String {
    value_to_dms_string(value, Axis::Latitude)
}

/// Renders a decimal longitude as `D° M' S.sss" E|W`.
pub fn longitude_dms_string(value: f64) -> String {
    value_to_dms_string(value, Axis::Longitude)
}

fn value_to_dms_string(value: f64, axis: Axis) -> String {
    let degrees = value.trunc().abs();
    let minutes = (value.fract() * 60.0).abs();
    let seconds = (minutes.fract() * 60.0).abs();

    // Truncate to milliseconds so 59.9999 never prints as 60.000.
    let seconds = (seconds * 1000.0).trunc() / 1000.0;

    let direction = if value < 0.0 {
        axis.negative()
    } else {
        axis.positive()
    };

    format!(
        "{degrees}° {}' {seconds:.3}\" {direction}",
        minutes.trunc(),
    )
}

/// Splits the last two characters off `s`.
fn peel_pair(s: &str) -> (&str, &str) {
    let cut = s.len().saturating_sub(2);
    s.split_at(cut)
}

fn number(s: &str) -> Option<u64> {
    if s.is_empty() { None } else { s.parse().ok() }
}

/// An all-digit run that does not fit a field. Runs holding stray letters
/// are merely absent.
fn overflows(run: &str) -> bool {
    !run.is_empty() && run.bytes().all(|b| b.is_ascii_digit()) && run.parse::<u64>().is_err()
}

/// Reads a digit run as the fraction `0.<digits>`.
fn fraction_value(digits: &str) -> f64 {
    format!("0.{digits}").parse().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn dms(
        degrees: Option<u64>,
        minutes: Option<u64>,
        seconds: Option<u64>,
        decimal_seconds: Option<&str>,
        direction: Option<Direction>,
    ) -> DecomposedDms {
        DecomposedDms {
            degrees,
            minutes,
            seconds,
            decimal_seconds: decimal_seconds.map(str::to_string),
            direction,
        }
    }

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    // -----------------------
    // Decomposition
    // -----------------------

    #[test]
    fn full_six_digit_value_with_direction() {
        assert_eq!(
            DecomposedDms::decompose("112230N", false, Axis::Longitude),
            dms(Some(11), Some(22), Some(30), None, Some(Direction::North))
        );
    }

    #[test]
    fn three_digit_degrees_keep_their_value() {
        assert_eq!(
            DecomposedDms::decompose("0151545W", false, Axis::Longitude),
            dms(Some(15), Some(15), Some(45), None, Some(Direction::West))
        );
    }

    #[test]
    fn short_input_is_promoted_upwards() {
        assert_eq!(
            DecomposedDms::decompose("30", false, Axis::Longitude),
            dms(Some(30), None, None, None, None)
        );
        assert_eq!(
            DecomposedDms::decompose("3030N", false, Axis::Longitude),
            dms(Some(30), Some(30), None, None, Some(Direction::North))
        );
        assert_eq!(
            DecomposedDms::decompose("303", false, Axis::Longitude),
            dms(Some(3), Some(3), None, None, None)
        );
    }

    #[test]
    fn decimal_seconds_keep_leading_zeros() {
        assert_eq!(
            DecomposedDms::decompose("112230.05", false, Axis::Longitude),
            dms(Some(11), Some(22), Some(30), Some("05"), None)
        );
    }

    #[test]
    fn decimal_degrees_bridge_truncates_sub_seconds() {
        assert_eq!(
            DecomposedDms::decompose("11.4584", false, Axis::Longitude),
            dms(Some(11), Some(27), Some(30), Some("0"), None)
        );
        assert_eq!(
            DecomposedDms::decompose("15.6827", false, Axis::Longitude),
            dms(Some(15), Some(40), Some(57), Some("0"), None)
        );
    }

    #[test]
    fn added_direction_follows_sign_and_axis() {
        let lat = DecomposedDms::decompose("-11.4584", true, Axis::Latitude);
        assert_eq!(lat.direction, Some(Direction::South));

        let lon = DecomposedDms::decompose(" 11.4584", true, Axis::Longitude);
        assert_eq!(lon.direction, Some(Direction::East));

        // An explicit letter beats the inferred one.
        let explicit = DecomposedDms::decompose("-112230W", true, Axis::Latitude);
        assert_eq!(explicit.direction, Some(Direction::West));
    }

    #[test]
    fn long_degree_runs_are_kept() {
        assert_eq!(
            DecomposedDms::decompose("99999999999999", false, Axis::Longitude),
            dms(Some(9_999_999_999), Some(99), Some(99), None, None)
        );
    }

    #[test]
    fn overflowing_runs_leave_degrees_undetermined() {
        let text = "1234567890123456789012345N";
        let decomposed = DecomposedDms::decompose(text, false, Axis::Latitude);
        assert_eq!(decomposed, dms(None, None, None, None, Some(Direction::North)));
        assert_eq!(decomposed.to_degrees(), None);
    }

    #[test]
    fn no_digits_yields_no_fields() {
        assert_eq!(
            DecomposedDms::decompose("purple", false, Axis::Longitude),
            dms(None, None, None, None, Some(Direction::East))
        );
        assert_eq!(
            DecomposedDms::decompose("", false, Axis::Longitude),
            DecomposedDms::default()
        );
    }

    #[test]
    fn to_degrees_sums_fields_and_applies_sign() {
        let value = DecomposedDms::decompose("0151545W", false, Axis::Longitude)
            .to_degrees()
            .expect("degrees present");
        assert!(approx_eq(value, -15.2625), "value={value}");

        let value = DecomposedDms::decompose("112230.36N", false, Axis::Longitude)
            .to_degrees()
            .expect("degrees present");
        assert!(approx_eq(value, 11.3751), "value={value}");

        assert_eq!(DecomposedDms::default().to_degrees(), None);
    }

    // -----------------------
    // Formatting
    // -----------------------

    #[test_case("112230N", "11° 22' 30\" N")]
    #[test_case("112230", "11° 22' 30\" ")]
    #[test_case("30N", "30° N")]
    #[test_case("3030N", "30° 30' N")]
    #[test_case("purple", "E")]
    #[test_case("N 11 ° 22'30 \"", "11° 22' 30\" N")]
    #[test_case("N 11 ° 22'30.36 \"", "11° 22' 30.36\" N")]
    #[test_case("N 11 ° 22'30.remove \"", "11° 22' 30\" N")]
    #[test_case("11 ° 22'30 \"N", "11° 22' 30\" N")]
    #[test_case("11° 22'30 N", "11° 22' 30\" N")]
    #[test_case("11", "11° ")]
    #[test_case("1105", "11° 05' ")]
    #[test_case("110530N", "11° 05' 30\" N")]
    #[test_case("110005.5N", "11° 00' 05.5\" N")]
    #[test_case("11.04584", "11° 02' 45.0\" ")]
    #[test_case("11.4584", "11° 27' 30.0\" ")]
    #[test_case("-11.4584", "11° 27' 30.0\" ")]
    #[test_case("0151545W", "15° 15' 45\" W")]
    #[test_case("W 15 ° 15'45", "15° 15' 45\" W")]
    #[test_case("15 ° 15'45\" W", "15° 15' 45\" W")]
    #[test_case("015° 15'45 W", "15° 15' 45\" W")]
    #[test_case("15.6827", "15° 40' 57.0\" ")]
    #[test_case("-15.6827", "15° 40' 57.0\" ")]
    fn formats_without_added_direction(input: &str, expected: &str) {
        assert_eq!(
            format_to_dms(Some(input), false, Axis::Longitude).as_deref(),
            Some(expected)
        );
    }

    #[test_case("11.4584", Axis::Longitude, "11° 27' 30.0\" E")]
    #[test_case("-11.4584", Axis::Longitude, "11° 27' 30.0\" W")]
    #[test_case("11.4584", Axis::Latitude, "11° 27' 30.0\" N")]
    #[test_case("-11.4584", Axis::Latitude, "11° 27' 30.0\" S")]
    #[test_case("15.6827", Axis::Longitude, "15° 40' 57.0\" E")]
    #[test_case("-15.6827", Axis::Longitude, "15° 40' 57.0\" W")]
    fn formats_with_added_direction(input: &str, axis: Axis, expected: &str) {
        assert_eq!(
            format_to_dms(Some(input), true, axis).as_deref(),
            Some(expected)
        );
    }

    #[test]
    fn none_and_empty_are_distinguished() {
        assert_eq!(format_to_dms(None, false, Axis::Longitude), None);
        assert_eq!(format_to_dms(Some(""), true, Axis::Latitude), Some(String::new()));
    }

    #[test]
    fn formatting_is_stable_on_its_own_output() {
        for input in [
            "112230N",
            "0151545W",
            "N 11 ° 22'30.36 \"",
            "3030S",
            "110530N",
            "0010203E",
        ] {
            let once = format_to_dms(Some(input), false, Axis::Longitude).expect("some");
            let twice = format_to_dms(Some(&once), false, Axis::Longitude).expect("some");
            assert_eq!(once, twice, "input={input}");
        }
    }

    #[test]
    fn single_digit_fields_survive_reformatting() {
        let direct = DecomposedDms::decompose("110530N", false, Axis::Latitude);
        let once = direct.to_string();
        let reparsed = DecomposedDms::decompose(&once, false, Axis::Latitude);
        assert_eq!(reparsed, direct);

        let value = reparsed.to_degrees().expect("degrees present");
        assert!(approx_eq(value, 11.0 + 5.0 / 60.0 + 30.0 / 3600.0), "value={value}");
    }

    // -----------------------
    // Value -> DMS strings
    // -----------------------

    #[test]
    fn latitude_strings_truncate_seconds() {
        assert_eq!(latitude_dms_string(11.1), "11° 5' 59.999\" N");
        assert_eq!(latitude_dms_string(-11.1), "11° 5' 59.999\" S");
        assert_eq!(latitude_dms_string(11.375), "11° 22' 30.000\" N");
    }

    #[test]
    fn longitude_strings_use_east_west() {
        assert_eq!(longitude_dms_string(11.1), "11° 5' 59.999\" E");
        assert_eq!(longitude_dms_string(-11.1), "11° 5' 59.999\" W");
        assert_eq!(longitude_dms_string(-0.5), "0° 30' 0.000\" W");
    }
}
