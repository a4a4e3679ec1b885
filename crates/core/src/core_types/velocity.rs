//! Wind velocity as direction and speed
//!
//! Still air carries no direction at all, so it is its own variant rather
//! than a directional velocity that happens to have zero speed.

use crate::core_types::units::{Degrees, Knots};
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The eight cardinal and intercardinal directions the cell format encodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompassPoint {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl CompassPoint {
    /// All points in increasing angle, starting at north
    pub const ALL: [CompassPoint; 8] = [
        CompassPoint::North,
        CompassPoint::NorthEast,
        CompassPoint::East,
        CompassPoint::SouthEast,
        CompassPoint::South,
        CompassPoint::SouthWest,
        CompassPoint::West,
        CompassPoint::NorthWest,
    ];

    /// Angular step between neighbouring points
    pub const STEP: Degrees = Degrees::new(45.0);

    /// Position in [`CompassPoint::ALL`]
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn degrees(self) -> Degrees {
        Degrees::new(self.index() as f32 * Self::STEP.value())
    }

    /// The point lying exactly at `angle`, if any
    #[must_use]
    pub fn from_degrees(angle: Degrees) -> Option<CompassPoint> {
        let normalized = angle.normalized().value();
        let steps = normalized / Self::STEP.value();
        if steps.fract() == 0.0 {
            Self::ALL.get(steps as usize).copied()
        } else {
            None
        }
    }
}

/// Wind velocity at a point
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum Velocity {
    /// No wind; direction is meaningless
    #[default]
    Calm,
    /// Wind blowing along `direction` at a nonzero `speed`
    Directional { direction: Degrees, speed: Knots },
}

impl Velocity {
    /// Create a velocity, collapsing zero speed to [`Velocity::Calm`]
    #[must_use]
    pub fn new(direction: Degrees, speed: Knots) -> Self {
        if speed.is_zero() {
            Velocity::Calm
        } else {
            Velocity::Directional {
                direction: direction.normalized(),
                speed,
            }
        }
    }

    #[must_use]
    pub fn is_calm(&self) -> bool {
        matches!(self, Velocity::Calm)
    }

    /// Direction of travel, 0° when calm
    #[must_use]
    pub fn direction(&self) -> Degrees {
        match self {
            Velocity::Calm => Degrees::ZERO,
            Velocity::Directional { direction, .. } => *direction,
        }
    }

    /// Speed, zero when calm
    #[must_use]
    pub fn speed(&self) -> Knots {
        match self {
            Velocity::Calm => Knots::ZERO,
            Velocity::Directional { speed, .. } => *speed,
        }
    }

    /// Planar components in knots: x toward east, y toward north
    #[must_use]
    pub fn deltas(&self) -> Vector2<f32> {
        match self {
            Velocity::Calm => Vector2::zeros(),
            Velocity::Directional { direction, speed } => {
                Vector2::new(speed.value() * direction.sin(), speed.value() * direction.cos())
            }
        }
    }
}

impl fmt::Display for Velocity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Velocity::Calm => write!(f, "calm"),
            Velocity::Directional { direction, speed } => write!(f, "{direction} at {speed}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_speed_is_calm() {
        assert!(Velocity::new(Degrees::new(90.0), Knots::ZERO).is_calm());
        assert_eq!(Velocity::Calm.direction(), Degrees::ZERO);
        assert_eq!(Velocity::Calm.speed(), Knots::ZERO);
    }

    #[test]
    fn test_direction_is_normalized() {
        let v = Velocity::new(Degrees::new(405.0), Knots::new(10.0));
        assert_eq!(v.direction(), Degrees::new(45.0));
    }

    #[test]
    fn test_compass_points() {
        assert_eq!(CompassPoint::North.degrees(), Degrees::ZERO);
        assert_eq!(CompassPoint::NorthWest.degrees(), Degrees::new(315.0));
        assert_eq!(
            CompassPoint::from_degrees(Degrees::new(225.0)),
            Some(CompassPoint::SouthWest)
        );
        assert_eq!(CompassPoint::from_degrees(Degrees::new(30.0)), None);
    }

    #[test]
    fn test_deltas() {
        let east = Velocity::new(Degrees::new(90.0), Knots::new(20.0)).deltas();
        assert_relative_eq!(east.x, 20.0, epsilon = 1e-4);
        assert_relative_eq!(east.y, 0.0, epsilon = 1e-4);

        let north = Velocity::new(Degrees::ZERO, Knots::new(10.0)).deltas();
        assert_relative_eq!(north.x, 0.0, epsilon = 1e-4);
        assert_relative_eq!(north.y, 10.0, epsilon = 1e-4);

        assert_eq!(Velocity::Calm.deltas(), Vector2::zeros());
    }
}
