//! Mapping world coordinates onto grid indices and interpolation weights
//!
//! Latitude grows northward and longitude westward while grid indices grow
//! southward and eastward, so within a cell the index falls as the angular
//! value rises. The sample pair bracketing a point is `(index - 1, index)`
//! and the horizontal scaler weights toward `index`.

use crate::core_types::{Coordinate2D, Coordinate3D, Feet, GeoAngle, Scaler};
use crate::error::UnsupportedCoordinateError;
use crate::grid::cell_grid::{
    GridIndex, ALTITUDES, HORIZONTAL_SIZE, MINUTES_PER_SUBCELL, VERTICAL_SIZE,
};

/// Check that a coordinate lies on the cell anchored at `anchor`
///
/// # Errors
/// Returns [`UnsupportedCoordinateError`] unless latitude and longitude
/// degrees both match the anchor.
pub fn validate(
    coordinate: &Coordinate2D,
    anchor: &Coordinate2D,
) -> Result<(), UnsupportedCoordinateError> {
    if coordinate.same_degrees(anchor) {
        Ok(())
    } else {
        Err(UnsupportedCoordinateError {
            coordinate: *coordinate,
            anchor: *anchor,
        })
    }
}

/// Sub-cell holding an angle and the angle's offset into it, on [0, 1]
///
/// Minutes that round up to 60 stay in the last sub-cell with offset 1.
fn locate(angle: GeoAngle) -> (usize, f32) {
    let position = angle.minutes_and_seconds() / MINUTES_PER_SUBCELL as f32;
    let subcell = (position.floor() as usize).min(HORIZONTAL_SIZE - 2);

    (subcell, position - subcell as f32)
}

/// Row or column index from the minutes of a latitude or longitude
#[must_use]
pub fn row_column_index(angle: GeoAngle) -> usize {
    let (subcell, _) = locate(angle);
    HORIZONTAL_SIZE - 1 - subcell
}

/// Clamp an altitude onto the span of the altitude planes
#[must_use]
pub fn clamp_altitude(altitude: Feet) -> Feet {
    altitude.clamp(ALTITUDES[0], ALTITUDES[VERTICAL_SIZE - 1])
}

/// Index of the altitude plane at or below an altitude, on [0, 4]
#[must_use]
pub fn plane_index(altitude: Feet) -> usize {
    let altitude = clamp_altitude(altitude);

    (0..VERTICAL_SIZE - 1)
        .rev()
        .find(|&plane| altitude >= ALTITUDES[plane])
        .unwrap_or(0)
}

/// Grid position bracketing a coordinate
#[must_use]
pub fn map(coordinate: &Coordinate3D) -> GridIndex {
    GridIndex {
        row: row_column_index(coordinate.latitude()),
        column: row_column_index(coordinate.longitude()),
        plane: plane_index(coordinate.altitude),
    }
}

/// Weight toward the sample at [`row_column_index`] for a latitude or longitude
#[must_use]
pub fn horizontal_scaler(angle: GeoAngle) -> Scaler {
    let (_, offset) = locate(angle);

    Scaler::new(1.0 - offset)
}

/// Weight toward the upper of the two planes bracketing an altitude
#[must_use]
pub fn altitude_scaler(altitude: Feet) -> Scaler {
    let clamped = clamp_altitude(altitude);
    let plane = plane_index(clamped);

    let below = ALTITUDES[plane];
    let above = ALTITUDES[plane + 1];

    Scaler::new((clamped - below).value() / (above - below).value())
}
