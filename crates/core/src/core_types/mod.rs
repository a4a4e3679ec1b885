//! Core value types: units, coordinates and velocities

pub mod coordinate;
pub mod units;
pub mod velocity;

pub use coordinate::*;
pub use units::*;
pub use velocity::*;
