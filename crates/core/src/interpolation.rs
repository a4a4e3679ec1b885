//! Trilinear wind interpolation within a cell
//!
//! # Algorithm
//!
//! 1. In each of the two altitude planes bracketing the query, blend the left
//!    and right samples of the row above and of the row below using the
//!    longitude scaler, then blend those two results using the latitude
//!    scaler.
//! 2. Blend the lower and upper plane estimates using the altitude scaler.
//!
//! Every blend step follows the same rule:
//!
//! ```text
//! calm + calm             -> calm
//! calm + directional      -> direction of the directional sample,
//! directional + calm         speed interpolated against zero
//! directional + directional -> direction along the shorter arc,
//!                              speed interpolated
//! ```
//!
//! so that a calm sample never drags a real wind toward north.

use crate::core_types::{Coordinate3D, Scaler, Velocity};
use crate::error::UnsupportedCoordinateError;
use crate::grid::{mapper, Grid, GridIndex};
use tracing::trace;

/// Estimate the wind at a coordinate on `grid`
///
/// # Errors
/// Returns [`UnsupportedCoordinateError`] if the coordinate is not on the
/// grid's cell.
pub fn interpolate(
    grid: &Grid,
    coordinate: &Coordinate3D,
) -> Result<Velocity, UnsupportedCoordinateError> {
    mapper::validate(&coordinate.position, &grid.anchor())?;

    let index = mapper::map(coordinate);
    let scaler_latitude = mapper::horizontal_scaler(coordinate.latitude());
    let scaler_longitude = mapper::horizontal_scaler(coordinate.longitude());
    let scaler_altitude = mapper::altitude_scaler(coordinate.altitude);

    let plane_below = interpolate_plane(grid, index, index.plane, scaler_latitude, scaler_longitude);
    let plane_above = interpolate_plane(
        grid,
        index,
        index.plane + 1,
        scaler_latitude,
        scaler_longitude,
    );

    let velocity = blend(plane_below, plane_above, scaler_altitude);
    trace!(%coordinate, ?index, %velocity, "interpolated wind");

    Ok(velocity)
}

/// Bilinear estimate on one altitude plane
fn interpolate_plane(
    grid: &Grid,
    index: GridIndex,
    plane: usize,
    scaler_latitude: Scaler,
    scaler_longitude: Scaler,
) -> Velocity {
    let row_above = index.row - 1;
    let row_below = index.row;
    let column_left = index.column - 1;
    let column_right = index.column;

    let interpolation_row_above = blend(
        grid.get(row_above, column_left, plane),
        grid.get(row_above, column_right, plane),
        scaler_longitude,
    );
    let interpolation_row_below = blend(
        grid.get(row_below, column_left, plane),
        grid.get(row_below, column_right, plane),
        scaler_longitude,
    );

    blend(interpolation_row_above, interpolation_row_below, scaler_latitude)
}

/// Blend two velocities; `scaler` weights toward `second`
#[must_use]
pub fn blend(first: Velocity, second: Velocity, scaler: Scaler) -> Velocity {
    match (first, second) {
        (Velocity::Calm, Velocity::Calm) => Velocity::Calm,
        (Velocity::Directional { direction, speed }, Velocity::Calm) => {
            Velocity::new(direction, speed.lerp(second.speed(), scaler))
        }
        (Velocity::Calm, Velocity::Directional { direction, speed }) => {
            Velocity::new(direction, first.speed().lerp(speed, scaler))
        }
        (
            Velocity::Directional {
                direction: direction_first,
                speed: speed_first,
            },
            Velocity::Directional {
                direction: direction_second,
                speed: speed_second,
            },
        ) => {
            let turn = direction_first.shortest_turn_to(direction_second);
            Velocity::new(
                direction_first + turn * scaler,
                speed_first.lerp(speed_second, scaler),
            )
        }
    }
}
