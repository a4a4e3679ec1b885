//! Semantic unit types for the quantities a wind cell deals in
//!
//! Newtype wrappers keep navigational angles, airspeeds, altitudes and
//! interpolation weights from being mixed up with each other or with bare
//! floats.
//!
//! # Design Philosophy
//! - All quantities use f32; the cell format only resolves whole knots, feet
//!   and 45° steps, so single precision is ample
//! - Implements common traits (Add, Sub, Mul, Ord, Display, etc.) where a
//!   quantity needs them
//! - Total ordering via Ord trait (NaN handled as greater than all values)
//! - Private inner fields with validated constructors
//!
//! # Usage
//! ```
//! use wind_cell_core::core_types::units::{Degrees, Feet, Knots};
//!
//! let heading = Degrees::new(315.0) + Degrees::new(90.0);
//! assert_eq!(heading.normalized(), Degrees::new(45.0));
//!
//! let ceiling = Feet::new(15000.0);
//! assert_eq!(Feet::new(18000.0).min(ceiling), ceiling);
//! assert!(Knots::ZERO.is_zero());
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Deref, Mul, Sub};

/// Compare f32 values with total ordering using Rust's built-in `total_cmp`
#[inline]
fn f32_total_cmp(a: f32, b: f32) -> Ordering {
    a.total_cmp(&b)
}

// ============================================================================
// ANGLE TYPES
// ============================================================================

/// Navigational angle in degrees (0 = north, 90 = east)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Degrees(f32);

impl Eq for Degrees {}

impl PartialOrd for Degrees {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Degrees {
    fn cmp(&self, other: &Self) -> Ordering {
        f32_total_cmp(self.0, other.0)
    }
}

impl Deref for Degrees {
    type Target = f32;
    #[inline]
    fn deref(&self) -> &f32 {
        &self.0
    }
}

impl Degrees {
    /// North
    pub const ZERO: Degrees = Degrees(0.0);

    /// One full turn
    pub const FULL_TURN: Degrees = Degrees(360.0);

    /// Create a new angle in degrees
    #[inline]
    #[must_use]
    pub const fn new(value: f32) -> Self {
        Degrees(value)
    }

    /// Get the raw f32 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Wrap into [0, 360)
    #[inline]
    #[must_use]
    pub fn normalized(self) -> Degrees {
        let wrapped = self.0.rem_euclid(Self::FULL_TURN.0);
        // rem_euclid can round up to the modulus for tiny negative inputs
        if wrapped >= Self::FULL_TURN.0 {
            Degrees::ZERO
        } else {
            Degrees(wrapped)
        }
    }

    /// Signed turn from `self` to `other` along the shorter arc, in (-180, 180]
    #[must_use]
    pub fn shortest_turn_to(self, other: Degrees) -> Degrees {
        let delta = (other.0 - self.0).rem_euclid(Self::FULL_TURN.0);
        if delta > 180.0 {
            Degrees(delta - Self::FULL_TURN.0)
        } else {
            Degrees(delta)
        }
    }

    /// Sine of the angle
    #[inline]
    #[must_use]
    pub fn sin(self) -> f32 {
        self.0.to_radians().sin()
    }

    /// Cosine of the angle
    #[inline]
    #[must_use]
    pub fn cos(self) -> f32 {
        self.0.to_radians().cos()
    }
}

impl Add for Degrees {
    type Output = Degrees;
    fn add(self, rhs: Degrees) -> Degrees {
        Degrees(self.0 + rhs.0)
    }
}

impl Sub for Degrees {
    type Output = Degrees;
    fn sub(self, rhs: Degrees) -> Degrees {
        Degrees(self.0 - rhs.0)
    }
}

impl Mul<Scaler> for Degrees {
    type Output = Degrees;
    fn mul(self, rhs: Scaler) -> Degrees {
        Degrees(self.0 * rhs.0)
    }
}

impl fmt::Display for Degrees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}°", self.0)
    }
}

// ============================================================================
// SPEED TYPES
// ============================================================================

/// Airspeed in knots
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Knots(f32);

impl Eq for Knots {}

impl PartialOrd for Knots {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Knots {
    fn cmp(&self, other: &Self) -> Ordering {
        f32_total_cmp(self.0, other.0)
    }
}

impl Deref for Knots {
    type Target = f32;
    #[inline]
    fn deref(&self) -> &f32 {
        &self.0
    }
}

impl Knots {
    /// Still air
    pub const ZERO: Knots = Knots(0.0);

    /// Create a new speed. Asserts value is non-negative.
    #[inline]
    #[must_use]
    #[track_caller]
    pub const fn new(value: f32) -> Self {
        assert!(value >= 0.0, "Knots::new: speed must be non-negative");
        Knots(value)
    }

    /// Get the raw f32 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Whether this speed means no wind
    #[inline]
    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0 <= 0.0
    }

    /// Linear interpolation toward `other`, weighted by `scaler`
    #[inline]
    #[must_use]
    pub fn lerp(self, other: Knots, scaler: Scaler) -> Knots {
        Knots((self.0 + (other.0 - self.0) * scaler.0).max(0.0))
    }
}

impl fmt::Display for Knots {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} kt", self.0)
    }
}

// ============================================================================
// ALTITUDE TYPES
// ============================================================================

/// Altitude in feet
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Feet(f32);

impl Eq for Feet {}

impl PartialOrd for Feet {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Feet {
    fn cmp(&self, other: &Self) -> Ordering {
        f32_total_cmp(self.0, other.0)
    }
}

impl Deref for Feet {
    type Target = f32;
    #[inline]
    fn deref(&self) -> &f32 {
        &self.0
    }
}

impl Feet {
    /// Sea level
    pub const ZERO: Feet = Feet(0.0);

    /// Create a new altitude (may be negative)
    #[inline]
    #[must_use]
    pub const fn new(value: f32) -> Self {
        Feet(value)
    }

    /// Get the raw f32 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Add for Feet {
    type Output = Feet;
    fn add(self, rhs: Feet) -> Feet {
        Feet(self.0 + rhs.0)
    }
}

impl Sub for Feet {
    type Output = Feet;
    fn sub(self, rhs: Feet) -> Feet {
        Feet(self.0 - rhs.0)
    }
}

impl fmt::Display for Feet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.0} ft", self.0)
    }
}

// ============================================================================
// INTERPOLATION WEIGHTS
// ============================================================================

/// Relative position between two bracketing samples, in [0, 1]
///
/// 0 selects the first sample of a pair and 1 the second.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Scaler(f32);

impl Eq for Scaler {}

impl PartialOrd for Scaler {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Scaler {
    fn cmp(&self, other: &Self) -> Ordering {
        f32_total_cmp(self.0, other.0)
    }
}

impl Deref for Scaler {
    type Target = f32;
    #[inline]
    fn deref(&self) -> &f32 {
        &self.0
    }
}

impl Scaler {
    /// Entirely the first sample
    pub const ZERO: Scaler = Scaler(0.0);

    /// Entirely the second sample
    pub const ONE: Scaler = Scaler(1.0);

    /// Create a new scaler. Asserts value is within [0, 1].
    #[inline]
    #[must_use]
    #[track_caller]
    pub const fn new(value: f32) -> Self {
        assert!(
            value >= 0.0 && value <= 1.0,
            "Scaler::new: value not in [0, 1]"
        );
        Scaler(value)
    }

    /// Get the raw f32 value
    #[inline]
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl fmt::Display for Scaler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}", self.0)
    }
}
