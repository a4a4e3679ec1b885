//! Fixed-size wind sample grid for one cell
//!
//! A cell is one degree of latitude by one degree of longitude, sampled every
//! six minutes in each direction (11 × 11 samples) on six stacked altitude
//! planes. Row 0 is the northern edge and column 0 the western edge, so
//! indices grow as latitude and longitude shrink; the anchor sits at the
//! south-east corner, row 10 and column 10.

use crate::core_types::{Coordinate2D, Feet, Velocity};
use crate::error::GridError;
use serde::{Deserialize, Serialize};

/// Samples along each horizontal axis
pub const HORIZONTAL_SIZE: usize = 11;

/// Number of altitude planes
pub const VERTICAL_SIZE: usize = 6;

/// Minutes of latitude or longitude between neighbouring samples
pub const MINUTES_PER_SUBCELL: u32 = 60 / (HORIZONTAL_SIZE as u32 - 1);

/// Altitude of each plane, lowest first
pub const ALTITUDES: [Feet; VERTICAL_SIZE] = [
    Feet::new(0.0),
    Feet::new(3000.0),
    Feet::new(6000.0),
    Feet::new(9000.0),
    Feet::new(12000.0),
    Feet::new(15000.0),
];

/// Total samples in a grid
pub const GRID_LEN: usize = HORIZONTAL_SIZE * HORIZONTAL_SIZE * VERTICAL_SIZE;

/// Position of one sample in the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridIndex {
    /// Latitude offset, on [0, 10]
    pub row: usize,
    /// Longitude offset, on [0, 10]
    pub column: usize,
    /// Lower bounding altitude plane, on [0, 4] when produced by mapping
    pub plane: usize,
}

/// Immutable wind samples plus the cell anchor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct Grid {
    /// Stored as flattened 3D array: index = plane * (11 * 11) + row * 11 + column
    samples: Vec<Velocity>,

    /// South-east corner in whole degrees
    anchor: Coordinate2D,
}

/// Unchecked grid fields as they arrive from a deserializer
#[derive(Deserialize)]
struct RawGrid {
    samples: Vec<Velocity>,
    anchor: Coordinate2D,
}

impl TryFrom<RawGrid> for Grid {
    type Error = GridError;

    fn try_from(raw: RawGrid) -> Result<Self, GridError> {
        if raw.samples.len() != GRID_LEN {
            return Err(GridError::SampleCount {
                expected: GRID_LEN,
                actual: raw.samples.len(),
            });
        }
        if !raw.anchor.is_whole_degree() {
            return Err(GridError::AnchorNotWholeDegree { anchor: raw.anchor });
        }

        Ok(Self {
            samples: raw.samples,
            anchor: raw.anchor,
        })
    }
}

impl Grid {
    /// Build a grid by evaluating `sample(row, column, plane)` for every position
    #[must_use]
    #[track_caller]
    pub fn from_fn<F>(anchor: Coordinate2D, mut sample: F) -> Self
    where
        F: FnMut(usize, usize, usize) -> Velocity,
    {
        assert!(
            anchor.is_whole_degree(),
            "Grid::from_fn: anchor must be a whole-degree corner"
        );

        let mut samples = Vec::with_capacity(GRID_LEN);
        for plane in 0..VERTICAL_SIZE {
            for row in 0..HORIZONTAL_SIZE {
                for column in 0..HORIZONTAL_SIZE {
                    samples.push(sample(row, column, plane));
                }
            }
        }

        Self { samples, anchor }
    }

    /// A grid with no wind anywhere
    #[must_use]
    pub fn calm(anchor: Coordinate2D) -> Self {
        Self::from_fn(anchor, |_, _, _| Velocity::Calm)
    }

    /// Get 3D array index from grid coordinates
    #[inline]
    #[track_caller]
    fn index(row: usize, column: usize, plane: usize) -> usize {
        assert!(
            row < HORIZONTAL_SIZE && column < HORIZONTAL_SIZE && plane < VERTICAL_SIZE,
            "Grid::index: row={row} column={column} plane={plane} out of range"
        );
        plane * (HORIZONTAL_SIZE * HORIZONTAL_SIZE) + row * HORIZONTAL_SIZE + column
    }

    /// Sample at a grid position
    #[must_use]
    #[track_caller]
    pub fn get(&self, row: usize, column: usize, plane: usize) -> Velocity {
        self.samples[Self::index(row, column, plane)]
    }

    #[must_use]
    pub fn anchor(&self) -> Coordinate2D {
        self.anchor
    }

    /// Iterate over the samples of one altitude plane, row by row
    pub fn plane(&self, plane: usize) -> impl Iterator<Item = &[Velocity]> {
        let start = Self::index(0, 0, plane);
        self.samples[start..start + HORIZONTAL_SIZE * HORIZONTAL_SIZE].chunks(HORIZONTAL_SIZE)
    }
}
