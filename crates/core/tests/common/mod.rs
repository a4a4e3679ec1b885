//! Shared fixtures for cell integration tests
#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use wind_cell_core::encoding::{ENCODING_NO_WIND, ENCODING_WIND};
use wind_cell_core::grid::{HORIZONTAL_SIZE, VERTICAL_SIZE};
use wind_cell_core::{Coordinate3D, Feet, GeoAngle};

pub const LATITUDE: i32 = 45;
pub const LONGITUDE: i32 = 15;

#[ctor::ctor]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Body row text with `sample(column, plane)` at each position
pub fn row<F>(mut sample: F) -> String
where
    F: FnMut(usize, usize) -> char,
{
    (0..VERTICAL_SIZE)
        .map(|plane| {
            (0..HORIZONTAL_SIZE)
                .map(|column| sample(column, plane))
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Full definition text anchored at 45,15 with `sample(row, column, plane)` everywhere
pub fn definition<F>(mut sample: F) -> String
where
    F: FnMut(usize, usize, usize) -> char,
{
    let mut text = format!("{LATITUDE},{LONGITUDE}\n");
    for r in 0..HORIZONTAL_SIZE {
        text.push_str(&row(|column, plane| sample(r, column, plane)));
        text.push('\n');
    }
    text
}

pub fn calm_definition() -> String {
    definition(|_, _, _| ENCODING_NO_WIND)
}

/// Definition with a seeded random symbol at every position
pub fn random_definition(seed: u64) -> String {
    let symbols: Vec<char> = std::iter::once(ENCODING_NO_WIND)
        .chain(ENCODING_WIND.chars())
        .collect();
    let mut rng = StdRng::seed_from_u64(seed);
    definition(|_, _, _| symbols[rng.random_range(0..symbols.len())])
}

/// The coordinate sitting exactly on grid sample `(row, column)` at `altitude`
///
/// Rows and columns 1 to 10 are reachable; index 0 lies on the next degree.
pub fn knot(row: usize, column: usize, altitude: f32) -> Coordinate3D {
    let minutes = |index: usize| ((HORIZONTAL_SIZE - 1 - index) * 6) as u32;
    Coordinate3D::new(
        GeoAngle::new(LATITUDE, minutes(row), 0.0),
        GeoAngle::new(LONGITUDE, minutes(column), 0.0),
        Feet::new(altitude),
    )
}

/// A random coordinate inside the 45,15 cell
pub fn random_coordinate(rng: &mut StdRng, altitude: f32) -> Coordinate3D {
    Coordinate3D::new(
        GeoAngle::from_minutes(LATITUDE, rng.random_range(0.0..60.0_f32)),
        GeoAngle::from_minutes(LONGITUDE, rng.random_range(0.0..60.0_f32)),
        Feet::new(altitude),
    )
}
