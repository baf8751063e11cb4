//! NASA POWER irradiance endpoint
//!
//! `GET /api/temporal/monthly/point` returns, per requested parameter, a map
//! of `YYYYMM` keys to monthly means. We request all-sky surface shortwave
//! downward irradiance (`ALLSKY_SFC_SW_DWN`, kWh/m²/day) from the
//! renewable-energy community (`SB`).

use crate::client::SolarSiteClient;
use crate::error::{ApiError, ApiResult};
use reqwest::Request;
use serde::{Deserialize, Serialize};
use solarsite_geo::Coordinate;
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// All-sky surface shortwave downward irradiance
pub const PARAMETER: &str = "ALLSKY_SFC_SW_DWN";

/// Renewable-energy ("sustainable buildings") community
pub const COMMUNITY: &str = "SB";

const MONTHLY_POINT_PATH: &str = "api/temporal/monthly/point";

/// Fill value POWER uses when a month has no data and the header omits one
const DEFAULT_FILL_VALUE: f64 = -999.0;

/// Inclusive range of years to average over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearWindow {
    /// First year, inclusive
    pub start: u16,
    /// Last year, inclusive
    pub end: u16,
}

impl Default for YearWindow {
    fn default() -> Self {
        Self {
            start: 2021,
            end: 2022,
        }
    }
}

/// Irradiance API interface
#[derive(Clone)]
pub struct IrradianceApi {
    client: SolarSiteClient,
    window: YearWindow,
}

impl IrradianceApi {
    pub(crate) fn new(client: SolarSiteClient) -> Self {
        Self {
            client,
            window: YearWindow::default(),
        }
    }

    /// Year window used for queries
    #[must_use]
    pub fn window(&self) -> YearWindow {
        self.window
    }

    /// Query a different year window
    #[must_use]
    pub fn with_window(mut self, window: YearWindow) -> Self {
        self.window = window;
        self
    }

    /// Build the monthly point request for `at`
    ///
    /// The coordinate is passed through as-is; callers validate it.
    pub fn monthly_request(&self, at: Coordinate) -> ApiResult<Request> {
        let params = [
            ("parameters", PARAMETER.to_string()),
            ("community", COMMUNITY.to_string()),
            ("latitude", at.latitude.to_string()),
            ("longitude", at.longitude.to_string()),
            ("start", self.window.start.to_string()),
            ("end", self.window.end.to_string()),
            ("format", "JSON".to_string()),
        ];
        self.client
            .build_get(&self.client.config().power_url, MONTHLY_POINT_PATH, &params)
    }

    /// Fetch the monthly irradiance series for `at`
    pub async fn monthly_series(&self, at: Coordinate) -> ApiResult<IrradianceSeries> {
        let request = self.monthly_request(at)?;
        let response: PowerResponse = self.client.execute_json(request).await?;
        let series = IrradianceSeries::from_response(response)?;
        debug!(%at, months = series.len(), "Irradiance series fetched");
        Ok(series)
    }

    /// Average irradiance at `at` over the year window, in kWh/m²/day
    pub async fn average(&self, at: Coordinate) -> ApiResult<f64> {
        self.monthly_series(at).await?.mean()
    }
}

// ============================================================================
// Response Types
// ============================================================================

/// Top-level POWER payload (only the parts we read)
#[derive(Debug, Clone, Deserialize)]
pub struct PowerResponse {
    /// Request metadata, including the fill value
    #[serde(default)]
    pub header: Option<PowerHeader>,
    /// Requested parameters and their values
    pub properties: PowerProperties,
}

/// Payload header
#[derive(Debug, Clone, Deserialize)]
pub struct PowerHeader {
    /// Marker for missing values, `-999` when absent
    pub fill_value: Option<f64>,
}

/// Payload properties
#[derive(Debug, Clone, Deserialize)]
pub struct PowerProperties {
    /// Parameter name to `YYYYMM` keyed values
    pub parameter: HashMap<String, BTreeMap<String, f64>>,
}

/// Monthly irradiance values keyed by POWER period key
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IrradianceSeries {
    values: BTreeMap<String, f64>,
}

impl IrradianceSeries {
    /// Extract the irradiance series, dropping fill values
    pub fn from_response(response: PowerResponse) -> ApiResult<Self> {
        let fill_value = response
            .header
            .and_then(|h| h.fill_value)
            .unwrap_or(DEFAULT_FILL_VALUE);

        let mut parameters = response.properties.parameter;
        let raw = parameters
            .remove(PARAMETER)
            .ok_or_else(|| ApiError::malformed(format!("response has no {PARAMETER} series")))?;

        let values = raw
            .into_iter()
            .filter(|(_, v)| v.is_finite() && (*v - fill_value).abs() > f64::EPSILON)
            .collect();

        Ok(Self { values })
    }

    /// Build a series directly from values
    pub fn from_values(values: impl IntoIterator<Item = (String, f64)>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Number of usable periods
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when no period carried data
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Values in key order
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.values().copied()
    }

    /// `(period, value)` pairs in key order
    pub fn entries(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Arithmetic mean of all values
    #[allow(clippy::cast_precision_loss)]
    pub fn mean(&self) -> ApiResult<f64> {
        if self.values.is_empty() {
            return Err(ApiError::empty(format!("no {PARAMETER} values in the requested window")));
        }
        let sum: f64 = self.values().sum();
        Ok(sum / self.values.len() as f64)
    }
}
