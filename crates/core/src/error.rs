//! Error types for loading cell definitions and querying cells

use crate::core_types::Coordinate2D;
use std::io;
use thiserror::Error;

/// A character that is neither the no-wind marker nor part of the encoding alphabet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid encoding [{character}]")]
pub struct DecodeError {
    pub character: char,
}

/// A minutes-and-seconds value outside [0, 60)
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("minutes {minutes} not in [0, 60)")]
pub struct GeoAngleError {
    pub minutes: f32,
}

/// A grid whose samples or anchor break the grid layout
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    #[error("invalid sample count {actual}; expected {expected}")]
    SampleCount { expected: usize, actual: usize },

    #[error("anchor {anchor} is not a whole-degree corner")]
    AnchorNotWholeDegree { anchor: Coordinate2D },
}

/// Structural problems in a cell definition
///
/// Line numbers are 1-based positions in the definition text, so the anchor
/// is line 1 and the body rows are lines 2 to 12.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("empty cell definition; expected anchor line")]
    Empty,

    #[error("invalid anchor format [{text}]; expected [latitude_degrees,longitude_degrees]")]
    MalformedAnchor { text: String },

    #[error("invalid row count {found}; expected {expected}")]
    MissingRow { found: usize, expected: usize },

    #[error("invalid row length {actual} on line {line}; expected {expected}")]
    RowLength {
        line: usize,
        expected: usize,
        actual: usize,
    },

    #[error("invalid altitude plane {plane} delimiter [{found}] on line {line}; expected space")]
    InvalidDelimiter {
        line: usize,
        plane: usize,
        found: char,
    },

    #[error("invalid column count {actual} on line {line}; expected {expected}")]
    ColumnCount {
        line: usize,
        expected: usize,
        actual: usize,
    },

    #[error("additional row on line {line} beyond expected {expected}")]
    ExtraRow { line: usize, expected: usize },

    #[error("invalid UTF-8 on line {line} at byte {byte}")]
    InvalidUtf8 { line: usize, byte: usize },

    #[error("line {line} column {column}: {source}")]
    InvalidEncoding {
        line: usize,
        column: usize,
        #[source]
        source: DecodeError,
    },
}

/// Failure to read a cell definition from a file or reader
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Format error: {0}")]
    Format(#[from] FormatError),
}

/// A query point outside the cell it was asked of
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("coordinate {coordinate} not on cell {anchor}")]
pub struct UnsupportedCoordinateError {
    pub coordinate: Coordinate2D,
    pub anchor: Coordinate2D,
}

/// Invalid altitude sweep settings
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SweepConfigError {
    #[error("altitude step must be positive, got {0}")]
    AltitudeStep(f32),

    #[error("sample step must be positive")]
    SampleStep,

    #[error("altitude range is empty: {min} > {max}")]
    AltitudeRange { min: f32, max: f32 },

    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f32 },

    #[error("sweep would produce {layers} altitude layers; at most {max} allowed")]
    TooManyLayers { layers: f32, max: usize },
}

/// Failure of an altitude sweep
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SweepError {
    #[error("Sweep config error: {0}")]
    Config(#[from] SweepConfigError),

    #[error("Sweep sample error: {0}")]
    Coordinate(#[from] UnsupportedCoordinateError),
}
