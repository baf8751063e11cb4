//! Nominatim geocoding endpoints
//!
//! - `GET /reverse?format=jsonv2&lat=..&lon=..` maps a coordinate to a display name
//! - `GET /search?q=..&format=jsonv2` maps free text to candidate places
//!
//! Only the first (best-ranked) result is ever used.

use crate::client::SolarSiteClient;
use crate::error::{ApiError, ApiResult};
use reqwest::Request;
use serde::{Deserialize, Serialize};
use solarsite_geo::Coordinate;
use tracing::debug;

const RESPONSE_FORMAT: &str = "jsonv2";

/// Geocoding API interface
#[derive(Clone)]
pub struct GeocodingApi {
    client: SolarSiteClient,
}

impl GeocodingApi {
    pub(crate) fn new(client: SolarSiteClient) -> Self {
        Self { client }
    }

    /// Build the reverse lookup request for `at`
    pub fn reverse_request(&self, at: Coordinate) -> ApiResult<Request> {
        let params = [
            ("format", RESPONSE_FORMAT.to_string()),
            ("lat", at.latitude.to_string()),
            ("lon", at.longitude.to_string()),
        ];
        self.client
            .build_get(&self.client.config().nominatim_url, "reverse", &params)
    }

    /// Resolve a coordinate to a human-readable place name
    ///
    /// Returns `Ok(None)` when the service answers but has no name for the
    /// point (open sea, for instance).
    pub async fn reverse(&self, at: Coordinate) -> ApiResult<Option<String>> {
        let request = self.reverse_request(at)?;
        let response: ReverseResponse = self.client.execute_json(request).await?;

        if let Some(ref reason) = response.error {
            debug!(%at, reason = %reason, "Reverse geocode returned no place");
        }

        Ok(response.into_display_name())
    }

    /// Build the forward search request for `query`
    pub fn search_request(&self, query: &str) -> ApiResult<Request> {
        let params = [("q", query), ("format", RESPONSE_FORMAT)];
        self.client
            .build_get(&self.client.config().nominatim_url, "search", &params)
    }

    /// Resolve free text to the best-ranked place
    ///
    /// Returns `Ok(None)` when the search matched nothing.
    pub async fn search(&self, query: &str) -> ApiResult<Option<Place>> {
        let request = self.search_request(query)?;
        let results: Vec<SearchResult> = self.client.execute_json(request).await?;
        debug!(query, matches = results.len(), "Forward geocode completed");

        results.into_iter().next().map(Place::try_from).transpose()
    }
}

// ============================================================================
// Response Types
// ============================================================================

/// Reverse lookup payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReverseResponse {
    /// Full formatted place name
    pub display_name: Option<String>,
    /// Set instead of a place when nothing is found, e.g. "Unable to geocode"
    pub error: Option<String>,
}

impl ReverseResponse {
    /// Non-blank display name, if any
    pub fn into_display_name(self) -> Option<String> {
        self.display_name.filter(|name| !name.trim().is_empty())
    }
}

/// One forward search candidate; Nominatim encodes coordinates as strings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// Latitude as a decimal string
    pub lat: String,
    /// Longitude as a decimal string
    pub lon: String,
    /// Full formatted place name
    pub display_name: Option<String>,
}

/// A resolved place
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Place {
    /// Where the match lies
    pub coordinate: Coordinate,
    /// Full formatted place name, when the service sent one
    pub display_name: Option<String>,
}

impl TryFrom<SearchResult> for Place {
    type Error = ApiError;

    fn try_from(result: SearchResult) -> ApiResult<Self> {
        let parse = |name: &str, raw: &str| {
            raw.trim()
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| ApiError::malformed(format!("search result {name} is not a number: {raw:?}")))
        };

        Ok(Self {
            coordinate: Coordinate::new(parse("lat", &result.lat)?, parse("lon", &result.lon)?),
            display_name: result.display_name,
        })
    }
}
