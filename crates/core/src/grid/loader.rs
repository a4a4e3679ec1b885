//! Cell definition parsing
//!
//! A definition is an anchor line followed by exactly eleven body rows:
//!
//! ```text
//! 45,15
//! ........... ........... ........... ........... ........... ...........
//! ...           (11 rows, one per six minutes of latitude, north first)
//! ```
//!
//! Each body row holds the six altitude planes left to right, lowest first,
//! as 11-character blocks (one per six minutes of longitude, west first)
//! separated by single spaces.

use crate::core_types::{Coordinate2D, Velocity};
use crate::encoding;
use crate::error::{FormatError, LoadError};
use crate::grid::cell_grid::{Grid, GRID_LEN, HORIZONTAL_SIZE, VERTICAL_SIZE};
use std::io::BufRead;
use tracing::{debug, warn};

/// Characters in one body row: six 11-character blocks and five separators
pub const ROW_LENGTH: usize = (HORIZONTAL_SIZE + 1) * VERTICAL_SIZE - 1;

const PLANE_DELIMITER: char = ' ';

/// Read a definition from any buffered reader
///
/// # Errors
/// Returns [`LoadError::Io`] if reading fails and [`LoadError::Format`] at the
/// first structural problem, including a line that is not valid UTF-8.
pub fn load<R: BufRead>(mut reader: R) -> Result<Grid, LoadError> {
    let mut line = 0;
    let lines = std::iter::from_fn(move || {
        let mut bytes = Vec::new();
        match reader.read_until(b'\n', &mut bytes) {
            Ok(0) => None,
            Ok(_) => {
                line += 1;
                Some(decode_line(line, bytes).map_err(LoadError::from))
            }
            Err(e) => Some(Err(LoadError::from(e))),
        }
    });

    load_lines(lines)
}

/// Parse a definition held in memory
///
/// # Errors
/// Returns [`FormatError`] at the first structural problem.
pub fn parse(text: &str) -> Result<Grid, FormatError> {
    load_lines(text.lines().map(|line| Ok(line.to_owned())))
}

/// Shared parser over a line source whose read errors are already `E`
///
/// Samples go into a local buffer and the grid is only built once every row
/// has parsed.
fn load_lines<E, I>(lines: I) -> Result<Grid, E>
where
    I: Iterator<Item = Result<String, E>>,
    E: From<FormatError>,
{
    let mut lines = lines.enumerate().map(|(i, line)| line.map(|l| (i + 1, l)));

    let anchor = match lines.next().transpose()? {
        Some((_, text)) => parse_anchor(&text)?,
        None => return Err(FormatError::Empty.into()),
    };
    debug!(%anchor, "parsed cell anchor");

    let mut rows: Vec<[Velocity; HORIZONTAL_SIZE * VERTICAL_SIZE]> =
        Vec::with_capacity(HORIZONTAL_SIZE);

    for row in 0..HORIZONTAL_SIZE {
        let Some((line_number, text)) = lines.next().transpose()? else {
            return Err(FormatError::MissingRow {
                found: row,
                expected: HORIZONTAL_SIZE,
            }
            .into());
        };
        rows.push(parse_row(line_number, &text)?);
    }

    for line in lines {
        let (line_number, text) = line?;
        if !text.trim().is_empty() {
            return Err(FormatError::ExtraRow {
                line: line_number,
                expected: HORIZONTAL_SIZE,
            }
            .into());
        }
    }

    // Row blocks are laid out plane-major; column k of plane j is at j * 11 + k
    let grid = Grid::from_fn(anchor, |row, column, plane| {
        rows[row][plane * HORIZONTAL_SIZE + column]
    });
    debug_assert_eq!(rows.len() * HORIZONTAL_SIZE * VERTICAL_SIZE, GRID_LEN);

    Ok(grid)
}

/// Strip the line terminator and check the rest is UTF-8
fn decode_line(line: usize, mut bytes: Vec<u8>) -> Result<String, FormatError> {
    if bytes.last() == Some(&b'\n') {
        bytes.pop();
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }
    }

    String::from_utf8(bytes).map_err(|e| {
        warn!(line, "cell definition line is not UTF-8");
        FormatError::InvalidUtf8 {
            line,
            byte: e.utf8_error().valid_up_to() + 1,
        }
    })
}

/// Parse `<latitude_degrees>,<longitude_degrees>`
fn parse_anchor(text: &str) -> Result<Coordinate2D, FormatError> {
    let malformed = || {
        warn!(text, "malformed cell anchor");
        FormatError::MalformedAnchor {
            text: text.to_owned(),
        }
    };

    let tokens: Vec<&str> = text.split(',').collect();
    let [latitude, longitude] = tokens.as_slice() else {
        return Err(malformed());
    };

    let latitude = latitude.trim().parse::<i32>().map_err(|_| malformed())?;
    let longitude = longitude.trim().parse::<i32>().map_err(|_| malformed())?;

    Ok(Coordinate2D::anchor(latitude, longitude))
}

/// Parse one body row into its 66 samples, plane-major
fn parse_row(
    line: usize,
    text: &str,
) -> Result<[Velocity; HORIZONTAL_SIZE * VERTICAL_SIZE], FormatError> {
    let chars: Vec<char> = text.chars().collect();

    if chars.len() != ROW_LENGTH {
        warn!(line, length = chars.len(), "cell row has wrong length");
        return Err(FormatError::RowLength {
            line,
            expected: ROW_LENGTH,
            actual: chars.len(),
        });
    }

    let mut samples = [Velocity::Calm; HORIZONTAL_SIZE * VERTICAL_SIZE];
    let mut consumed = 0;

    for plane in 0..VERTICAL_SIZE {
        for column in 0..HORIZONTAL_SIZE {
            let encoding = chars[consumed];
            samples[plane * HORIZONTAL_SIZE + column] =
                encoding::decode(encoding).map_err(|source| FormatError::InvalidEncoding {
                    line,
                    column: consumed + 1,
                    source,
                })?;
            consumed += 1;
        }

        if consumed < ROW_LENGTH {
            let delimiter = chars[consumed];
            if delimiter != PLANE_DELIMITER {
                return Err(FormatError::InvalidDelimiter {
                    line,
                    plane: plane + 1,
                    found: delimiter,
                });
            }
            consumed += 1;
        }
    }

    if consumed != ROW_LENGTH {
        return Err(FormatError::ColumnCount {
            line,
            expected: ROW_LENGTH,
            actual: consumed,
        });
    }

    Ok(samples)
}
