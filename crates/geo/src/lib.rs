//! Geographic primitives for SolarSite.
//!
//! This crate provides:
//! - The [`Coordinate`] value used as the selected point everywhere
//! - Parsing of free-text latitude/longitude form fields
//! - The [`MapView`] contract the form controller drives, plus an in-memory
//!   [`MarkerMap`] implementation
//!
//! # Example
//!
//! ```
//! use solarsite_geo::{parse_coordinate, Coordinate};
//!
//! let point = parse_coordinate("26.9124", " 75.7873 ").unwrap();
//! assert_eq!(point, Coordinate::new(26.9124, 75.7873));
//! assert!(parse_coordinate("abc", "75.0").is_err());
//! ```

mod error;
pub mod map;
mod parse;

pub use error::{GeoError, Result};
pub use map::{MapView, MarkerId, MarkerMap, TileLayer, DEFAULT_CENTER, DEFAULT_ZOOM};
pub use parse::{parse_coordinate, parse_latitude, parse_longitude, parse_number};

use std::fmt;

/// A geographic coordinate with latitude and longitude.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees (-90 to 90)
    pub latitude: f64,
    /// Longitude in degrees (-180 to 180)
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a new coordinate.
    #[inline]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Brings the longitude back into `[-180, 180)` and clamps the latitude
    /// to `[-90, 90]`.
    ///
    /// Map widgets report unwrapped longitudes once the user pans across the
    /// antimeridian; the providers only accept the canonical range.
    #[must_use]
    pub fn wrapped(&self) -> Self {
        let latitude = self.latitude.clamp(-90.0, 90.0);
        if (-180.0..=180.0).contains(&self.longitude) {
            return Self::new(latitude, self.longitude);
        }
        let longitude = (self.longitude + 180.0).rem_euclid(360.0) - 180.0;
        Self::new(latitude, longitude)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_creation() {
        let coord = Coordinate::new(26.9124, 75.7873);
        assert_eq!(coord.latitude, 26.9124);
        assert_eq!(coord.longitude, 75.7873);
    }

    #[test]
    fn test_coordinate_wrapping() {
        let east = Coordinate::new(10.0, 200.0).wrapped();
        assert!((east.longitude - -160.0).abs() < 1e-9);

        let west = Coordinate::new(10.0, -190.0).wrapped();
        assert!((west.longitude - 170.0).abs() < 1e-9);

        let inside = Coordinate::new(10.0, 75.5);
        assert_eq!(inside.wrapped(), inside);
    }

    #[test]
    fn test_coordinate_wrapping_clamps_latitude() {
        assert_eq!(Coordinate::new(100.0, 20.0).wrapped(), Coordinate::new(90.0, 20.0));
        assert_eq!(Coordinate::new(-95.5, 200.0).wrapped().latitude, -90.0);
    }

    #[test]
    fn test_coordinate_display_roundtrips_fields() {
        let coord = Coordinate::new(26.9124, 75.7873);
        assert_eq!(coord.to_string(), "26.9124, 75.7873");
    }

    #[test]
    fn test_coordinate_from_tuple() {
        let coord: Coordinate = (26.9124, 75.7873).into();
        assert_eq!(coord.latitude, 26.9124);
    }
}
