//! Floor level parsing and formatting
//!
//! On the wire a floor level is a two character string: `"00"` for the
//! ground floor, `"-1"` for the first basement, `"10"` for the tenth floor
//! and `"--"` for structures that have no floors at all.

use crate::errors::DomainError;

/// Wire representation of "this structure has no floor"
pub const NO_FLOOR: &str = "--";

/// Parse a wire floor level
///
/// `"--"` yields `Ok(None)`, numeric levels yield `Ok(Some(level))`.
///
/// # Errors
///
/// Returns `DomainError::InvalidFloorLevel` for any other non-numeric value.
///
/// # Examples
///
/// ```
/// use domain::value_objects::parse_floor_level;
///
/// assert_eq!(parse_floor_level("--").unwrap(), None);
/// assert_eq!(parse_floor_level("00").unwrap(), Some(0));
/// assert_eq!(parse_floor_level("-1").unwrap(), Some(-1));
/// assert!(parse_floor_level("xx").is_err());
/// ```
pub fn parse_floor_level(raw: &str) -> Result<Option<i32>, DomainError> {
    if raw == NO_FLOOR {
        return Ok(None);
    }
    raw.parse::<i32>()
        .map(Some)
        .map_err(|_| DomainError::InvalidFloorLevel(raw.to_string()))
}

/// Format a floor level the way the tile server and floor endpoints expect
///
/// Levels 0 through 9 are zero-padded to two digits, everything else is
/// printed as is.
#[must_use]
pub fn format_floor_level(level: i32) -> String {
    if (0..=9).contains(&level) {
        format!("0{level}")
    } else {
        level.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_floor_sentinel() {
        assert_eq!(parse_floor_level("--"), Ok(None));
    }

    #[test]
    fn numeric_levels() {
        assert_eq!(parse_floor_level("00"), Ok(Some(0)));
        assert_eq!(parse_floor_level("02"), Ok(Some(2)));
        assert_eq!(parse_floor_level("-1"), Ok(Some(-1)));
        assert_eq!(parse_floor_level("10"), Ok(Some(10)));
    }

    #[test]
    fn non_numeric_level_is_an_error() {
        assert_eq!(
            parse_floor_level("xx"),
            Err(DomainError::InvalidFloorLevel("xx".to_string()))
        );
        assert!(parse_floor_level("").is_err());
        assert!(parse_floor_level("-").is_err());
    }

    #[test]
    fn formatting_pads_single_digits() {
        assert_eq!(format_floor_level(0), "00");
        assert_eq!(format_floor_level(1), "01");
        assert_eq!(format_floor_level(9), "09");
        assert_eq!(format_floor_level(10), "10");
        assert_eq!(format_floor_level(-1), "-1");
    }

    #[test]
    fn formatting_round_trips_through_parse() {
        for level in -3..=12 {
            assert_eq!(parse_floor_level(&format_floor_level(level)), Ok(Some(level)));
        }
    }
}
