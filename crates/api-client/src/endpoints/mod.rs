//! Endpoint-specific API implementations
//!
//! | Module | Service | Description |
//! |--------|---------|-------------|
//! | `geocoding` | Nominatim `/reverse`, `/search` | Coordinate ⇄ place name |
//! | `irradiance` | NASA POWER `/api/temporal/monthly/point` | Monthly solar irradiance |

pub mod geocoding;
pub mod irradiance;

pub use geocoding::{GeocodingApi, Place};
pub use irradiance::{IrradianceApi, IrradianceSeries, YearWindow};
