//! End-to-end interpolation over parsed cell definitions

mod common;

use approx::assert_relative_eq;
use common::{calm_definition, definition, knot, random_coordinate, random_definition};
use rand::rngs::StdRng;
use rand::SeedableRng;
use wind_cell_core::encoding::{self, ENCODING_NO_WIND};
use wind_cell_core::grid::{HORIZONTAL_SIZE, VERTICAL_SIZE};
use wind_cell_core::{Cell, Coordinate2D, Coordinate3D, Degrees, Feet, GeoAngle, Velocity};

const PLANE_SPACING: f32 = 3000.0;

/// Calm everywhere except an 'a' (north, 10 kt) at row 5, column 5 of plane 0
fn single_north_wind() -> Cell {
    let text = definition(|row, column, plane| {
        if (row, column, plane) == (5, 5, 0) {
            'a'
        } else {
            ENCODING_NO_WIND
        }
    });
    Cell::parse(&text, "north.txt").unwrap()
}

#[test]
fn test_calm_cell_is_calm_everywhere() {
    let cell = Cell::parse(&calm_definition(), "calm.txt").unwrap();
    let coordinate = Coordinate3D::new(
        GeoAngle::new(45, 30, 0.0),
        GeoAngle::new(15, 30, 0.0),
        Feet::new(5000.0),
    );

    assert_eq!(cell.interpolate(&coordinate).unwrap(), Velocity::Calm);
    assert_eq!(cell.anchor(), Coordinate2D::anchor(45, 15));
}

#[test]
fn test_single_sample_at_its_knot() {
    let cell = single_north_wind();
    let v = cell.interpolate(&knot(5, 5, 0.0)).unwrap();

    assert_eq!(v.direction(), Degrees::ZERO);
    assert_relative_eq!(v.speed().value(), 10.0);
}

#[test]
fn test_single_sample_halfway_to_next_plane() {
    let cell = single_north_wind();
    let v = cell.interpolate(&knot(5, 5, 1500.0)).unwrap();

    assert_eq!(v.direction(), Degrees::ZERO);
    assert_relative_eq!(v.speed().value(), 5.0);
}

#[test]
fn test_single_sample_halfway_to_next_row() {
    let cell = single_north_wind();
    // 33' sits halfway between row 5 (30') and row 4 (36')
    let coordinate = Coordinate3D::new(
        GeoAngle::new(45, 33, 0.0),
        GeoAngle::new(15, 30, 0.0),
        Feet::ZERO,
    );
    let v = cell.interpolate(&coordinate).unwrap();

    assert_eq!(v.direction(), Degrees::ZERO);
    assert_relative_eq!(v.speed().value(), 5.0, epsilon = 1e-4);
}

#[test]
fn test_far_from_sample_is_calm() {
    let cell = single_north_wind();
    assert!(cell.interpolate(&knot(2, 8, 0.0)).unwrap().is_calm());
    assert!(cell.interpolate(&knot(5, 5, 3000.0)).unwrap().is_calm());
}

#[test]
fn test_knots_reproduce_their_samples() {
    for seed in [1, 7, 42] {
        let text = random_definition(seed);
        let cell = Cell::parse(&text, "random.txt").unwrap();
        let rows: Vec<&str> = text.lines().skip(1).collect();

        // Row and column 0 sit on the next whole degree, outside this cell
        for row in 1..HORIZONTAL_SIZE {
            for column in 1..HORIZONTAL_SIZE {
                for plane in 0..VERTICAL_SIZE {
                    let symbol = rows[row]
                        .chars()
                        .nth(plane * (HORIZONTAL_SIZE + 1) + column)
                        .unwrap();
                    let expected = encoding::decode(symbol).unwrap();
                    let altitude = plane as f32 * PLANE_SPACING;

                    let actual = cell.interpolate(&knot(row, column, altitude)).unwrap();
                    assert_eq!(
                        actual, expected,
                        "seed {seed} row {row} column {column} plane {plane}"
                    );
                }
            }
        }
    }
}

#[test]
fn test_altitude_outside_planes_is_clamped() {
    let cell = Cell::parse(&random_definition(3), "random.txt").unwrap();
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..200 {
        let low = random_coordinate(&mut rng, 0.0);
        let below = Coordinate3D::new(low.latitude(), low.longitude(), Feet::new(-2500.0));
        assert_eq!(cell.interpolate(&below).unwrap(), cell.interpolate(&low).unwrap());

        let high = random_coordinate(&mut rng, 15000.0);
        let above = Coordinate3D::new(high.latitude(), high.longitude(), Feet::new(36000.0));
        assert_eq!(cell.interpolate(&above).unwrap(), cell.interpolate(&high).unwrap());
    }
}

#[test]
fn test_results_stay_in_range() {
    let cell = Cell::parse(&random_definition(5), "random.txt").unwrap();
    let mut rng = StdRng::seed_from_u64(99);

    for i in 0..500 {
        let altitude = (i * 37 % 16000) as f32;
        let v = cell.interpolate(&random_coordinate(&mut rng, altitude)).unwrap();

        let direction = v.direction().value();
        assert!((0.0..360.0).contains(&direction), "direction {direction}");
        assert!(v.speed().value() <= 50.0 + 1e-3);
        if let Velocity::Directional { speed, .. } = v {
            assert!(speed.value() > 0.0);
        }
    }
}

#[test]
fn test_unsupported_coordinate() {
    let cell = Cell::parse(&calm_definition(), "calm.txt").unwrap();
    let coordinate = Coordinate3D::new(
        GeoAngle::new(44, 59, 0.0),
        GeoAngle::new(15, 0, 0.0),
        Feet::ZERO,
    );

    let err = cell.interpolate(&coordinate).unwrap_err();
    assert_eq!(err.anchor, Coordinate2D::anchor(45, 15));
    assert_eq!(err.coordinate, coordinate.position);
}

#[test]
fn test_concurrent_queries() {
    let cell = Cell::parse(&random_definition(8), "shared.txt").unwrap();
    let mut rng = StdRng::seed_from_u64(4);
    let coordinates: Vec<Coordinate3D> = (0..64)
        .map(|i| random_coordinate(&mut rng, i as f32 * 200.0))
        .collect();
    let expected: Vec<Velocity> = coordinates
        .iter()
        .map(|c| cell.interpolate(c).unwrap())
        .collect();

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for (coordinate, want) in coordinates.iter().zip(&expected) {
                    assert_eq!(cell.interpolate(coordinate).unwrap(), *want);
                }
            });
        }
    });
}
