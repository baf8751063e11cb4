//! HTTP clients for the third-party services SolarSite depends on
//!
//! - **Nominatim** (OpenStreetMap) for forward and reverse geocoding
//! - **NASA POWER** for historical monthly solar irradiance
//!
//! Every operation returns an [`ApiResult`]; [`ApiError::kind`] classifies
//! failures so callers can decide how loudly to report them.
//!
//! # Example
//!
//! ```rust,no_run
//! use solarsite_api_client::SolarSiteClient;
//! use solarsite_geo::Coordinate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SolarSiteClient::new()?;
//!     let jaipur = Coordinate::new(26.9124, 75.7873);
//!
//!     let name = client.geocoding().reverse(jaipur).await?;
//!     println!("{}", name.unwrap_or_default());
//!
//!     let avg = client.irradiance().average(jaipur).await?;
//!     println!("{avg:.2} kWh/m²/day");
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;

pub use client::SolarSiteClient;
pub use config::ClientConfig;
pub use error::{ApiError, ApiResult, FailureKind};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::client::SolarSiteClient;
    pub use crate::config::ClientConfig;
    pub use crate::endpoints::{GeocodingApi, IrradianceApi, IrradianceSeries, Place};
    pub use crate::error::{ApiError, ApiResult, FailureKind};
}
