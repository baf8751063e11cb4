//! Form-field parsing.
//!
//! Fields hold whatever the user typed. Surrounding whitespace is ignored;
//! anything else that is not a finite decimal number is rejected rather than
//! partially read.

use crate::{Coordinate, GeoError, Result};

/// Parses a free-text numeric field.
///
/// # Example
/// ```
/// use solarsite_geo::parse_number;
///
/// assert_eq!(parse_number("power", " 2.5 ").unwrap(), 2.5);
/// assert!(parse_number("power", "2.5kWh").is_err());
/// assert!(parse_number("power", "NaN").is_err());
/// ```
pub fn parse_number(field: &'static str, raw: &str) -> Result<f64> {
    let not_a_number = || GeoError::NotANumber {
        field,
        value: raw.to_string(),
    };

    let value: f64 = raw.trim().parse().map_err(|_| not_a_number())?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(not_a_number())
    }
}

fn parse_bounded(field: &'static str, raw: &str, min: f64, max: f64) -> Result<f64> {
    let value = parse_number(field, raw)?;
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(GeoError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

/// Parses a latitude field (degrees, -90 to 90).
pub fn parse_latitude(raw: &str) -> Result<f64> {
    parse_bounded("latitude", raw, -90.0, 90.0)
}

/// Parses a longitude field (degrees, -180 to 180).
pub fn parse_longitude(raw: &str) -> Result<f64> {
    parse_bounded("longitude", raw, -180.0, 180.0)
}

/// Parses a latitude/longitude field pair into a coordinate.
///
/// Both fields must parse; a coordinate is never built from one of them.
pub fn parse_coordinate(latitude: &str, longitude: &str) -> Result<Coordinate> {
    Ok(Coordinate::new(
        parse_latitude(latitude)?,
        parse_longitude(longitude)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(parse_number("x", "42").unwrap(), 42.0);
        assert_eq!(parse_number("x", "-0.5").unwrap(), -0.5);
        assert_eq!(parse_number("x", "1e3").unwrap(), 1000.0);
    }

    #[test]
    fn test_rejects_non_numeric() {
        let err = parse_number("latitude", "abc").unwrap_err();
        assert_eq!(err.field(), "latitude");
        assert!(matches!(err, GeoError::NotANumber { .. }));
    }

    #[test]
    fn test_rejects_trailing_garbage_and_empty() {
        assert!(parse_number("x", "12abc").is_err());
        assert!(parse_number("x", "").is_err());
        assert!(parse_number("x", "   ").is_err());
    }

    #[test]
    fn test_rejects_non_finite() {
        assert!(parse_number("x", "inf").is_err());
        assert!(parse_number("x", "-infinity").is_err());
        assert!(parse_number("x", "NaN").is_err());
    }

    #[test]
    fn test_latitude_range() {
        assert!(parse_latitude("90").is_ok());
        assert!(matches!(
            parse_latitude("90.0001"),
            Err(GeoError::OutOfRange { field: "latitude", .. })
        ));
    }

    #[test]
    fn test_coordinate_requires_both_fields() {
        assert!(parse_coordinate("26.9", "75.8").is_ok());
        assert_eq!(parse_coordinate("26.9", "east").unwrap_err().field(), "longitude");
        assert_eq!(parse_coordinate("north", "east").unwrap_err().field(), "latitude");
    }

    proptest! {
        #[test]
        fn prop_formatted_coordinates_parse_back(lat in -90.0f64..=90.0, lng in -180.0f64..=180.0) {
            let parsed = parse_coordinate(&lat.to_string(), &lng.to_string()).unwrap();
            prop_assert_eq!(parsed, Coordinate::new(lat, lng));
        }
    }
}
