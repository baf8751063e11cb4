//! Per-invocation state shared by the commands

use solarsite_api_client::endpoints::{GeocodingApi, IrradianceApi};
use solarsite_api_client::{ClientConfig, SolarSiteClient};
use solarsite_cli::OutputFormat;
use solarsite_core::config::Config;
use solarsite_core::ErrorCode;
use solarsite_geo::{Coordinate, MarkerMap};
use solarsite_planner::FormController;
use std::path::Path;
use tracing::debug;

/// The controller as the CLI hosts it: in-memory map, live HTTP sources.
pub type CliController = FormController<MarkerMap, GeocodingApi, IrradianceApi>;

pub struct AppContext {
    pub config: Config,
    pub client: SolarSiteClient,
    pub format: OutputFormat,
}

impl AppContext {
    /// Load the config file and build the HTTP client
    ///
    /// `[network]` values from the file override the environment.
    pub fn load(config_path: Option<&Path>, format: OutputFormat) -> anyhow::Result<Self> {
        let config = Config::load(config_path)?;
        debug!(path = ?config.path, "Configuration loaded");

        let client_config = ClientConfig::from_env()
            .map_err(|e| e.into_core(ErrorCode::ConfigError))?
            .with_network_overrides(&config.schema.network);
        client_config
            .validate()
            .map_err(|e| e.into_core(ErrorCode::InvalidConfigValue))?;

        let client = SolarSiteClient::with_config(client_config)
            .map_err(|e| e.into_core(ErrorCode::ConfigError))?;

        Ok(Self {
            config,
            client,
            format,
        })
    }

    /// Where the map opens.
    pub fn map_center(&self) -> Coordinate {
        let map = &self.config.schema.map;
        Coordinate::new(map.default_latitude, map.default_longitude)
    }

    /// A fresh form controller over an in-memory map.
    pub fn form_controller(&self) -> CliController {
        let zoom = self.config.schema.map.zoom;
        let map = MarkerMap::new(self.map_center(), zoom);
        FormController::new(map, self.client.geocoding(), self.client.irradiance()).with_zoom(zoom)
    }

    /// Spinners are suppressed for JSON output.
    pub fn quiet(&self) -> bool {
        self.format.is_json()
    }
}
