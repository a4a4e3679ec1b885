//! A loaded wind cell and its query surface

use crate::core_types::{Coordinate2D, Coordinate3D, Velocity};
use crate::error::{FormatError, LoadError, UnsupportedCoordinateError};
use crate::grid::{loader, Grid, ALTITUDES, HORIZONTAL_SIZE, VERTICAL_SIZE};
use crate::interpolation;
use std::fmt::{self, Write as _};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{info, warn};

/// One cell definition: the sample grid plus where it came from
///
/// A cell never changes after loading, so it can be shared freely between
/// threads and queried concurrently.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    grid: Grid,
    source_name: String,
}

impl Cell {
    /// Load a cell definition file
    ///
    /// # Errors
    /// Returns [`LoadError::Io`] if the file cannot be read and
    /// [`LoadError::Format`] if its contents are not a valid definition.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let file = File::open(path).inspect_err(|e| {
            warn!(path = %path.display(), error = %e, "cannot open cell definition");
        })?;

        Self::from_reader(BufReader::new(file), path.display().to_string())
    }

    /// Load a cell definition from a reader, labelling it `source_name`
    ///
    /// # Errors
    /// Returns [`LoadError`] on read failure or malformed contents.
    pub fn from_reader<R: BufRead>(
        reader: R,
        source_name: impl Into<String>,
    ) -> Result<Self, LoadError> {
        let source_name = source_name.into();
        let grid = loader::load(reader).inspect_err(|e| {
            warn!(source = %source_name, error = %e, "rejected cell definition");
        })?;

        Ok(Self::from_grid(grid, source_name))
    }

    /// Parse a cell definition held in memory
    ///
    /// # Errors
    /// Returns [`FormatError`] at the first structural problem.
    pub fn parse(text: &str, source_name: impl Into<String>) -> Result<Self, FormatError> {
        let source_name = source_name.into();
        let grid = loader::parse(text).inspect_err(|e| {
            warn!(source = %source_name, error = %e, "rejected cell definition");
        })?;

        Ok(Self::from_grid(grid, source_name))
    }

    /// Wrap an already built grid
    #[must_use]
    pub fn from_grid(grid: Grid, source_name: impl Into<String>) -> Self {
        let source_name = source_name.into();
        info!(source = %source_name, anchor = %grid.anchor(), "loaded wind cell");
        Self { grid, source_name }
    }

    /// Estimate the wind at a coordinate on this cell
    ///
    /// # Errors
    /// Returns [`UnsupportedCoordinateError`] if the coordinate's degrees do
    /// not match the anchor.
    pub fn interpolate(
        &self,
        coordinate: &Coordinate3D,
    ) -> Result<Velocity, UnsupportedCoordinateError> {
        interpolation::interpolate(&self.grid, coordinate)
    }

    /// South-east corner of the cell in whole degrees
    #[must_use]
    pub fn anchor(&self) -> Coordinate2D {
        self.grid.anchor()
    }

    #[must_use]
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    /// Tabular listing of every sample as `direction:speed`, one block per altitude plane
    #[must_use]
    pub fn dump(&self) -> String {
        let mut out = String::new();

        // Writing to a String cannot fail
        let _ = writeln!(out, "{}", self.source_name);
        let _ = writeln!(out, "{}", self.anchor());
        let _ = writeln!(out);

        for plane in 0..VERTICAL_SIZE {
            let _ = writeln!(out, "ALTITUDE {:.0}", ALTITUDES[plane].value());

            for row in self.grid.plane(plane) {
                debug_assert_eq!(row.len(), HORIZONTAL_SIZE);
                for velocity in row {
                    let _ = write!(
                        out,
                        "{:03.0}:{:02.0} ",
                        velocity.direction().value(),
                        velocity.speed().value()
                    );
                }
                let _ = writeln!(out);
            }

            let _ = writeln!(out);
        }

        out
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "coordinate={} filename={}",
            self.anchor(),
            self.source_name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calm_definition() -> String {
        let row = vec![".".repeat(HORIZONTAL_SIZE); VERTICAL_SIZE].join(" ");
        let mut text = String::from("45,15\n");
        for _ in 0..HORIZONTAL_SIZE {
            text.push_str(&row);
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_accessors() {
        let cell = Cell::parse(&calm_definition(), "calm.txt").unwrap();
        assert_eq!(cell.anchor(), Coordinate2D::anchor(45, 15));
        assert_eq!(cell.source_name(), "calm.txt");
    }

    #[test]
    fn test_display() {
        let cell = Cell::parse(&calm_definition(), "calm.txt").unwrap();
        let shown = cell.to_string();
        assert!(shown.starts_with("coordinate=[45°"));
        assert!(shown.ends_with("filename=calm.txt"));
    }

    #[test]
    fn test_dump_layout() {
        let text = calm_definition().replacen('.', "J", 1);
        let cell = Cell::parse(&text, "one.txt").unwrap();
        let dump = cell.dump();
        let lines: Vec<&str> = dump.lines().collect();

        assert_eq!(lines[0], "one.txt");
        assert_eq!(lines[3], "ALTITUDE 0");
        assert!(lines[4].starts_with("315:10 000:00 "));
        assert_eq!(
            dump.matches("ALTITUDE").count(),
            VERTICAL_SIZE,
            "one header per plane"
        );
        assert!(dump.contains("ALTITUDE 15000"));
    }

    #[test]
    fn test_missing_file() {
        let result = Cell::load("/nonexistent/wind/cell.txt");
        assert!(matches!(result, Err(LoadError::Io(_))));
    }
}
