//! Configuration for the SolarSite API client
//!
//! Supports environment-based configuration with sensible defaults, plus
//! overrides from the `[network]` section of `solarsite.toml`.

use crate::error::{ApiError, ApiResult};
use serde::{Deserialize, Serialize};
use solarsite_core::config::NetworkConfig;
use std::env;
use std::time::Duration;

/// Public Nominatim instance
pub const DEFAULT_NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";

/// NASA POWER API host
pub const DEFAULT_POWER_URL: &str = "https://power.larc.nasa.gov";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the Nominatim geocoding service
    pub nominatim_url: String,
    /// Base URL of the NASA POWER climate data service
    pub power_url: String,
    /// User-Agent sent with every request; Nominatim rejects anonymous clients
    pub user_agent: String,
    /// Request timeout
    #[serde(with = "secs_serde")]
    pub timeout: Duration,
}

mod secs_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

fn default_user_agent() -> String {
    format!("solarsite/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            nominatim_url: DEFAULT_NOMINATIM_URL.to_string(),
            power_url: DEFAULT_POWER_URL.to_string(),
            user_agent: default_user_agent(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Create configuration from environment variables
    ///
    /// Reads the following environment variables:
    /// - `SOLARSITE_NOMINATIM_URL`: Nominatim base URL
    /// - `SOLARSITE_POWER_URL`: NASA POWER base URL
    /// - `SOLARSITE_USER_AGENT`: User-Agent header value
    /// - `SOLARSITE_TIMEOUT_SECS`: Request timeout in seconds
    pub fn from_env() -> ApiResult<Self> {
        let nominatim_url =
            env::var("SOLARSITE_NOMINATIM_URL").unwrap_or_else(|_| DEFAULT_NOMINATIM_URL.to_string());
        let power_url =
            env::var("SOLARSITE_POWER_URL").unwrap_or_else(|_| DEFAULT_POWER_URL.to_string());
        let user_agent = env::var("SOLARSITE_USER_AGENT").unwrap_or_else(|_| default_user_agent());

        let timeout = match env::var("SOLARSITE_TIMEOUT_SECS") {
            Ok(raw) => raw
                .parse()
                .map(Duration::from_secs)
                .map_err(|_| ApiError::config(format!("SOLARSITE_TIMEOUT_SECS is not a number: {raw:?}")))?,
            Err(_) => DEFAULT_TIMEOUT,
        };

        let config = Self {
            nominatim_url,
            power_url,
            user_agent,
            timeout,
        };
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from the `[network]` section of the config file
    #[must_use]
    pub fn with_network_overrides(mut self, network: &NetworkConfig) -> Self {
        if let Some(ref url) = network.nominatim_url {
            self.nominatim_url.clone_from(url);
        }
        if let Some(ref url) = network.power_url {
            self.power_url.clone_from(url);
        }
        if let Some(secs) = network.timeout_secs {
            self.timeout = Duration::from_secs(secs);
        }
        self
    }

    /// Builder-style method to set the Nominatim URL
    #[must_use]
    pub fn with_nominatim_url(mut self, url: impl Into<String>) -> Self {
        self.nominatim_url = url.into();
        self
    }

    /// Builder-style method to set the NASA POWER URL
    #[must_use]
    pub fn with_power_url(mut self, url: impl Into<String>) -> Self {
        self.power_url = url.into();
        self
    }

    /// Builder-style method to set the User-Agent
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Builder-style method to set timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> ApiResult<()> {
        for (name, url) in [("nominatim_url", &self.nominatim_url), ("power_url", &self.power_url)] {
            if url.is_empty() {
                return Err(ApiError::config(format!("{name} cannot be empty")));
            }
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ApiError::config(format!(
                    "{name} must start with http:// or https://"
                )));
            }
        }

        if self.user_agent.trim().is_empty() {
            return Err(ApiError::config("user_agent cannot be empty"));
        }

        if self.timeout.is_zero() {
            return Err(ApiError::config("timeout cannot be zero"));
        }

        Ok(())
    }
}
