//! Single-character wind encoding
//!
//! Each grid sample is one character. `.` means no wind; every other
//! character is looked up in a 40-character alphabet laid out as eight
//! directions of five speeds each:
//!
//! ```text
//! Char  Direction        Speed (base char + n)
//! ----  ---------        ---------------------
//!  a         0           +0 = 10 kt
//!  f        45           +1 = 20 kt
//!  k        90           +2 = 30 kt
//!  p       135           +3 = 40 kt
//!  u       180           +4 = 50 kt
//!  z       225
//!  E       270
//!  J       315
//! ```
//!
//! So `b` is north at 20 kt and `N` is north-west at 50 kt.

use crate::core_types::{CompassPoint, Knots, Velocity};
use crate::error::DecodeError;

/// The no-wind marker
pub const ENCODING_NO_WIND: char = '.';

/// Wind characters, directions outer and speeds inner
pub const ENCODING_WIND: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMN";

/// Speeds for base character plus 0, 1, 2, 3 and 4
pub const WIND_RATES: [f32; 5] = [10.0, 20.0, 30.0, 40.0, 50.0];

const _: () = assert!(ENCODING_WIND.len() == CompassPoint::ALL.len() * WIND_RATES.len());

/// Decode one character into a velocity
///
/// # Errors
/// Returns [`DecodeError`] if the character is not `.` and not in [`ENCODING_WIND`].
pub fn decode(encoding: char) -> Result<Velocity, DecodeError> {
    if encoding == ENCODING_NO_WIND {
        return Ok(Velocity::Calm);
    }

    let position = ENCODING_WIND
        .chars()
        .position(|c| c == encoding)
        .ok_or(DecodeError {
            character: encoding,
        })?;

    let direction = CompassPoint::ALL[position / WIND_RATES.len()];
    let speed = Knots::new(WIND_RATES[position % WIND_RATES.len()]);

    Ok(Velocity::new(direction.degrees(), speed))
}

/// Encode a velocity that lies exactly on the table
///
/// Returns `None` for interpolated velocities whose direction or speed has no
/// character.
#[must_use]
pub fn encode(velocity: Velocity) -> Option<char> {
    match velocity {
        Velocity::Calm => Some(ENCODING_NO_WIND),
        Velocity::Directional { direction, speed } => {
            let point = CompassPoint::from_degrees(direction)?;
            let rate = WIND_RATES.iter().position(|&r| r == speed.value())?;
            ENCODING_WIND
                .chars()
                .nth(point.index() * WIND_RATES.len() + rate)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::Degrees;

    #[test]
    fn test_no_wind_marker() {
        assert_eq!(decode('.'), Ok(Velocity::Calm));
    }

    #[test]
    fn test_base_characters() {
        let bases = ['a', 'f', 'k', 'p', 'u', 'z', 'E', 'J'];
        for (i, base) in bases.into_iter().enumerate() {
            let v = decode(base).unwrap();
            assert_eq!(v.direction(), Degrees::new(i as f32 * 45.0), "base {base}");
            assert_eq!(v.speed(), Knots::new(10.0), "base {base}");
        }
    }

    #[test]
    fn test_speed_offsets() {
        assert_eq!(decode('e').unwrap().speed(), Knots::new(50.0));
        assert_eq!(decode('B').unwrap().direction(), Degrees::new(225.0));
        assert_eq!(decode('B').unwrap().speed(), Knots::new(30.0));
        assert_eq!(decode('N').unwrap().direction(), Degrees::new(315.0));
        assert_eq!(decode('N').unwrap().speed(), Knots::new(50.0));
    }

    #[test]
    fn test_every_symbol_round_trips() {
        for c in std::iter::once(ENCODING_NO_WIND).chain(ENCODING_WIND.chars()) {
            let v = decode(c).unwrap();
            assert_eq!(encode(v), Some(c));
        }
    }

    #[test]
    fn test_rejects_unknown() {
        for c in ['O', 'Z', '0', ' ', '#', 'é'] {
            assert_eq!(decode(c), Err(DecodeError { character: c }));
        }
    }

    #[test]
    fn test_encode_off_table() {
        let between = Velocity::new(Degrees::new(22.5), Knots::new(10.0));
        assert_eq!(encode(between), None);
        let slow = Velocity::new(Degrees::ZERO, Knots::new(5.0));
        assert_eq!(encode(slow), None);
    }
}
