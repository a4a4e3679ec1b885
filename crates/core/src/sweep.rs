//! Altitude sweeps over a whole cell
//!
//! A sweep samples the cell on a regular lat/lon lattice at every altitude
//! of a range, which is what plotting front ends feed on. Layers are
//! independent, so they are computed in parallel.

use crate::cell::Cell;
use crate::core_types::{Coordinate3D, Feet, GeoAngle, Velocity};
use crate::error::{SweepConfigError, SweepError, UnsupportedCoordinateError};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

const SECONDS_PER_DEGREE: u32 = 3600;

/// Most altitude layers a single sweep may produce
pub const MAX_LAYERS: usize = 100_000;

/// Configuration for an altitude sweep
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Lowest altitude sampled
    pub altitude_min: Feet,

    /// Highest altitude sampled (inclusive when the step lands on it)
    pub altitude_max: Feet,

    /// Distance between sampled altitudes
    pub altitude_step: Feet,

    /// Spacing of the lat/lon lattice in arc seconds
    pub sample_step_seconds: u32,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            altitude_min: Feet::new(0.0),
            altitude_max: Feet::new(15000.0),
            altitude_step: Feet::new(100.0),
            sample_step_seconds: 60,
        }
    }
}

impl SweepConfig {
    /// Check the configuration describes a non-empty sweep
    ///
    /// # Errors
    /// Returns [`SweepConfigError`] for a non-finite altitude, a non-positive
    /// step, an inverted range or more than [`MAX_LAYERS`] layers.
    pub fn validate(&self) -> Result<(), SweepConfigError> {
        for (field, altitude) in [
            ("altitude_min", self.altitude_min),
            ("altitude_max", self.altitude_max),
            ("altitude_step", self.altitude_step),
        ] {
            if !altitude.value().is_finite() {
                return Err(SweepConfigError::NonFinite {
                    field,
                    value: altitude.value(),
                });
            }
        }
        if self.altitude_step.value() <= 0.0 {
            return Err(SweepConfigError::AltitudeStep(self.altitude_step.value()));
        }
        if self.sample_step_seconds == 0 {
            return Err(SweepConfigError::SampleStep);
        }
        if self.altitude_min > self.altitude_max {
            return Err(SweepConfigError::AltitudeRange {
                min: self.altitude_min.value(),
                max: self.altitude_max.value(),
            });
        }

        let span = (self.altitude_max - self.altitude_min).value();
        let layers = (span / self.altitude_step.value()).floor() + 1.0;
        if !layers.is_finite() || layers > MAX_LAYERS as f32 {
            return Err(SweepConfigError::TooManyLayers {
                layers,
                max: MAX_LAYERS,
            });
        }
        Ok(())
    }

    /// Altitudes the sweep visits, lowest first
    ///
    /// Empty when [`SweepConfig::validate`] fails.
    #[must_use]
    pub fn altitudes(&self) -> Vec<Feet> {
        if self.validate().is_err() {
            return Vec::new();
        }

        let span = (self.altitude_max - self.altitude_min).value();
        let steps = (span / self.altitude_step.value()).floor() as usize;

        (0..=steps)
            .map(|i| Feet::new(self.altitude_min.value() + i as f32 * self.altitude_step.value()))
            .collect()
    }

    /// Offsets into a degree, in arc seconds, that the lattice visits
    fn offsets(&self) -> impl Iterator<Item = u32> + Clone {
        (0..SECONDS_PER_DEGREE).step_by(self.sample_step_seconds as usize)
    }
}

/// One interpolated point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindSample {
    pub coordinate: Coordinate3D,
    pub velocity: Velocity,
}

/// All samples at one altitude, latitude-major
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AltitudeLayer {
    pub altitude: Feet,
    pub samples: Vec<WindSample>,
}

/// Interpolate `cell` over the lattice and altitudes described by `config`
///
/// # Errors
/// Returns [`SweepError::Config`] if the configuration is invalid.
pub fn sweep(cell: &Cell, config: &SweepConfig) -> Result<Vec<AltitudeLayer>, SweepError> {
    config.validate()?;

    let anchor = cell.anchor();
    let altitudes = config.altitudes();
    debug!(
        source = cell.source_name(),
        layers = altitudes.len(),
        step_seconds = config.sample_step_seconds,
        "sweeping cell"
    );

    let layers = altitudes
        .into_par_iter()
        .map(|altitude| -> Result<AltitudeLayer, UnsupportedCoordinateError> {
            let mut samples = Vec::new();
            for latitude_offset in config.offsets() {
                let latitude = offset_angle(anchor.latitude.degrees(), latitude_offset);
                for longitude_offset in config.offsets() {
                    let longitude = offset_angle(anchor.longitude.degrees(), longitude_offset);
                    let coordinate = Coordinate3D::new(latitude, longitude, altitude);
                    let velocity = cell.interpolate(&coordinate)?;
                    samples.push(WindSample {
                        coordinate,
                        velocity,
                    });
                }
            }
            Ok(AltitudeLayer { altitude, samples })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(layers)
}

fn offset_angle(degrees: i32, offset_seconds: u32) -> GeoAngle {
    GeoAngle::new(degrees, offset_seconds / 60, (offset_seconds % 60) as f32)
}
