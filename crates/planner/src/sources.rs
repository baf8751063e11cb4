//! Data sources the form controller consumes.
//!
//! The controller is generic over these so hosts can plug in the real HTTP
//! clients and tests can plug in scripted ones.

use solarsite_api_client::endpoints::{GeocodingApi, IrradianceApi};
use solarsite_api_client::ApiResult;
use solarsite_geo::Coordinate;
use std::future::Future;

/// Coordinate ⇄ place-name resolution.
pub trait Geocoder {
    /// Display name for `at`, or `None` if the service has none.
    fn reverse(&self, at: Coordinate) -> impl Future<Output = ApiResult<Option<String>>>;

    /// Best-ranked coordinate for `query`, or `None` if nothing matched.
    fn search(&self, query: &str) -> impl Future<Output = ApiResult<Option<Coordinate>>>;
}

/// Historical solar irradiance.
pub trait IrradianceSource {
    /// Average daily irradiance at `at`, kWh/m²/day.
    fn average_irradiance(&self, at: Coordinate) -> impl Future<Output = ApiResult<f64>>;
}

impl Geocoder for GeocodingApi {
    async fn reverse(&self, at: Coordinate) -> ApiResult<Option<String>> {
        GeocodingApi::reverse(self, at).await
    }

    async fn search(&self, query: &str) -> ApiResult<Option<Coordinate>> {
        let place = GeocodingApi::search(self, query).await?;
        Ok(place.map(|p| p.coordinate))
    }
}

impl IrradianceSource for IrradianceApi {
    async fn average_irradiance(&self, at: Coordinate) -> ApiResult<f64> {
        self.average(at).await
    }
}
