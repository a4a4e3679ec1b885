//! Geographic coordinates on a flat-earth cell model
//!
//! A latitude or longitude is split into whole degrees, which pick the cell,
//! and fractional minutes-and-seconds, which locate the point inside it.
//! The model covers the northern and western hemispheres only: latitude is
//! degrees north and longitude is degrees west.

use crate::core_types::units::Feet;
use crate::error::GeoAngleError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One latitude or longitude component
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "RawGeoAngle")]
pub struct GeoAngle {
    degrees: i32,
    /// Minutes with seconds folded in as a fraction, on [0, 60)
    minutes_and_seconds: f32,
}

#[derive(Deserialize)]
struct RawGeoAngle {
    degrees: i32,
    minutes_and_seconds: f32,
}

impl TryFrom<RawGeoAngle> for GeoAngle {
    type Error = GeoAngleError;

    fn try_from(raw: RawGeoAngle) -> Result<Self, GeoAngleError> {
        if (0.0..60.0).contains(&raw.minutes_and_seconds) {
            Ok(Self {
                degrees: raw.degrees,
                minutes_and_seconds: raw.minutes_and_seconds,
            })
        } else {
            Err(GeoAngleError {
                minutes: raw.minutes_and_seconds,
            })
        }
    }
}

/// Degrees north
pub type Latitude = GeoAngle;

/// Degrees west
pub type Longitude = GeoAngle;

impl GeoAngle {
    /// Create from degrees, minutes and seconds. Asserts minutes and seconds are on [0, 60).
    #[must_use]
    #[track_caller]
    pub fn new(degrees: i32, minutes: u32, seconds: f32) -> Self {
        assert!(minutes < 60, "GeoAngle::new: minutes not in [0, 60)");
        assert!(
            (0.0..60.0).contains(&seconds),
            "GeoAngle::new: seconds not in [0, 60)"
        );
        Self {
            degrees,
            minutes_and_seconds: minutes as f32 + seconds / 60.0,
        }
    }

    /// Create from degrees and fractional minutes. Asserts minutes are on [0, 60).
    #[must_use]
    #[track_caller]
    pub fn from_minutes(degrees: i32, minutes_and_seconds: f32) -> Self {
        assert!(
            (0.0..60.0).contains(&minutes_and_seconds),
            "GeoAngle::from_minutes: minutes not in [0, 60)"
        );
        Self {
            degrees,
            minutes_and_seconds,
        }
    }

    /// A whole-degree angle with zero minutes and seconds
    #[must_use]
    pub const fn whole_degrees(degrees: i32) -> Self {
        Self {
            degrees,
            minutes_and_seconds: 0.0,
        }
    }

    #[must_use]
    pub fn degrees(self) -> i32 {
        self.degrees
    }

    /// Whole minutes, on [0, 59]
    #[must_use]
    pub fn minutes(self) -> u32 {
        self.minutes_and_seconds.floor() as u32
    }

    /// Seconds past the whole minute
    #[must_use]
    pub fn seconds(self) -> f32 {
        self.minutes_and_seconds.fract() * 60.0
    }

    #[must_use]
    pub fn minutes_and_seconds(self) -> f32 {
        self.minutes_and_seconds
    }

    /// Decimal degrees, e.g. 45°30' is 45.5
    #[must_use]
    pub fn decimal_degrees(self) -> f64 {
        f64::from(self.degrees) + f64::from(self.minutes_and_seconds) / 60.0
    }

    /// Whether the minutes and seconds are both zero
    #[must_use]
    pub fn is_whole_degree(self) -> bool {
        self.minutes_and_seconds == 0.0
    }
}

impl fmt::Display for GeoAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}°{:02}'{:04.1}\"",
            self.degrees,
            self.minutes(),
            self.seconds()
        )
    }
}

/// A point on the ground
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate2D {
    pub latitude: Latitude,
    pub longitude: Longitude,
}

impl Coordinate2D {
    #[must_use]
    pub fn new(latitude: Latitude, longitude: Longitude) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// The whole-degree corner that anchors a cell
    #[must_use]
    pub const fn anchor(latitude_degrees: i32, longitude_degrees: i32) -> Self {
        Self {
            latitude: GeoAngle::whole_degrees(latitude_degrees),
            longitude: GeoAngle::whole_degrees(longitude_degrees),
        }
    }

    /// Whether both components are whole degrees, as a cell anchor must be
    #[must_use]
    pub fn is_whole_degree(&self) -> bool {
        self.latitude.is_whole_degree() && self.longitude.is_whole_degree()
    }

    /// Whether both components share degrees with `other`
    #[must_use]
    pub fn same_degrees(&self, other: &Coordinate2D) -> bool {
        self.latitude.degrees() == other.latitude.degrees()
            && self.longitude.degrees() == other.longitude.degrees()
    }
}

impl fmt::Display for Coordinate2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}N {}W]", self.latitude, self.longitude)
    }
}

/// A point in the air
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinate3D {
    pub position: Coordinate2D,
    pub altitude: Feet,
}

impl Coordinate3D {
    #[must_use]
    pub fn new(latitude: Latitude, longitude: Longitude, altitude: Feet) -> Self {
        Self {
            position: Coordinate2D::new(latitude, longitude),
            altitude,
        }
    }

    #[must_use]
    pub fn latitude(&self) -> Latitude {
        self.position.latitude
    }

    #[must_use]
    pub fn longitude(&self) -> Longitude {
        self.position.longitude
    }
}

impl fmt::Display for Coordinate3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.position, self.altitude)
    }
}
