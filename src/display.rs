//! Human-readable rendering of a resolved coordinate.

use crate::Coordinate;

/// Renders a coordinate in an alternate grid-reference system (e.g. MGRS).
///
/// The conversion itself lives outside this crate; callers plug theirs in.
pub trait GridReferenceFormatter {
    fn grid_reference(&self, coordinate: Coordinate) -> String;
}

impl<F> GridReferenceFormatter for F
where
    F: Fn(Coordinate) -> String,
{
    fn grid_reference(&self, coordinate: Coordinate) -> String {
        self(coordinate)
    }
}

/// Renders `coordinate` either through `grid` or as `lat, lon` with five
/// fractional digits.
pub fn display_coordinate(
    coordinate: Coordinate,
    use_grid_format: bool,
    grid: &dyn GridReferenceFormatter,
) -> String {
    if use_grid_format {
        grid.grid_reference(coordinate)
    } else {
        coordinate.to_string()
    }
}
