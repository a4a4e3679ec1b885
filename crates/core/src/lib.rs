//! Wind Cell Core Library
//!
//! Approximates wind velocity anywhere inside a one-degree geographic cell
//! from a compact hand-authored grid of samples.
//!
//! ## Cell Model
//!
//! - 11 × 11 horizontal samples, six minutes apart in latitude and longitude
//! - Six altitude planes at 0, 3000, 6000, 9000, 12000 and 15000 feet
//! - One character per sample encoding direction (45° steps) and speed
//!   (10 to 50 knots), or `.` for no wind
//! - Trilinear interpolation that never averages a calm sample's direction
//!
//! ```
//! use wind_cell_core::{Cell, Coordinate3D, Feet, GeoAngle};
//!
//! let row = vec![".".repeat(11); 6].join(" ");
//! let text = format!("45,15\n{}", vec![row; 11].join("\n"));
//! let cell = Cell::parse(&text, "calm.txt").unwrap();
//!
//! let here = Coordinate3D::new(GeoAngle::new(45, 20, 0.0), GeoAngle::new(15, 40, 0.0), Feet::new(5000.0));
//! assert!(cell.interpolate(&here).unwrap().is_calm());
//! ```

// Core types and utilities
pub mod core_types;
pub mod error;

// Cell definition and interpolation
pub mod cell;
pub mod encoding;
pub mod grid;
pub mod interpolation;
pub mod sweep;

// Re-export core types
pub use core_types::{
    CompassPoint, Coordinate2D, Coordinate3D, Degrees, Feet, GeoAngle, Knots, Latitude, Longitude,
    Scaler, Velocity,
};
pub use error::{
    DecodeError, FormatError, GeoAngleError, GridError, LoadError, SweepConfigError, SweepError,
    UnsupportedCoordinateError,
};

// Re-export cell types
pub use cell::Cell;
pub use grid::{Grid, GridIndex};
pub use sweep::{AltitudeLayer, SweepConfig, WindSample};
