//! Configuration schema definitions
//!
//! Mirrors the sections of `solarsite.toml`. Every field has a default so an
//! empty or partial file is valid.

use serde::{Deserialize, Serialize};

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigSchema {
    #[serde(default)]
    pub map: MapConfig,

    #[serde(default)]
    pub network: NetworkConfig,
}

/// Initial map view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapConfig {
    /// Latitude the map opens at
    #[serde(default = "default_latitude")]
    pub default_latitude: f64,

    /// Longitude the map opens at
    #[serde(default = "default_longitude")]
    pub default_longitude: f64,

    /// Zoom level used for the initial view and every recentre
    #[serde(default = "default_zoom")]
    pub zoom: u8,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            default_latitude: default_latitude(),
            default_longitude: default_longitude(),
            zoom: default_zoom(),
        }
    }
}

// Jaipur
fn default_latitude() -> f64 {
    26.9124
}

fn default_longitude() -> f64 {
    75.7873
}

fn default_zoom() -> u8 {
    12
}

/// Endpoint overrides; unset values fall back to the API client's environment defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct NetworkConfig {
    /// Nominatim base URL
    #[serde(default)]
    pub nominatim_url: Option<String>,

    /// NASA POWER base URL
    #[serde(default)]
    pub power_url: Option<String>,

    /// Request timeout in seconds
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}
