//! Single-value and paired coordinate parsing.

use crate::dms::DecomposedDms;
use crate::split::split_pair;
use crate::{Axis, Coordinate};

/// Parses one coordinate value into signed decimal degrees.
///
/// Plain decimal input within the axis range is returned as-is. Everything
/// else is read as DMS, so `112230` (out of range as a decimal) becomes
/// `11.375`. The DMS path does not clamp to the axis range. Returns `None`
/// only when no degrees can be found at all.
pub fn parse_single(text: &str, axis: Axis) -> Option<f64> {
    let normalized = text.trim();

    if let Ok(value) = normalized.parse::<f64>()
        && axis.contains(value)
    {
        return Some(value);
    }

    DecomposedDms::decompose(normalized, false, Axis::Longitude).to_degrees()
}

/// Best-effort parse of a combined latitude/longitude string.
///
/// Either component may be NaN when its half could not be parsed. A single
/// unpaired value is always treated as a longitude.
pub fn parse_pair(text: &str) -> Coordinate {
    let mut coordinate = Coordinate::unresolved();
    let segments = split_pair(Some(text));

    match segments.as_slice() {
        [latitude, longitude] => {
            if let Some(value) = parse_single(latitude, Axis::Latitude) {
                coordinate.latitude = value;
            }

            if let Some(value) = parse_single(longitude, Axis::Longitude) {
                coordinate.longitude = value;
            }
        }
        [single] => {
            if let Some(value) = parse_single(single, Axis::Longitude) {
                coordinate.longitude = value;
            }
        }
        _ => {}
    }

    coordinate
}
