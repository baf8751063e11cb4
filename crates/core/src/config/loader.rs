//! Configuration file loading

use super::schema::ConfigSchema;
use crate::error::{Error, Result, ResultExt};
use std::path::{Path, PathBuf};

/// Configuration wrapper
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub schema: ConfigSchema,
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from an explicit path, a discovered file, or defaults
    ///
    /// An explicit path that does not exist is an error; a missing discovered
    /// file is not.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) if !p.exists() => return Err(Error::config_not_found(p)),
            Some(p) => Some(p.to_path_buf()),
            None => find_config_file(),
        };

        let schema = match config_path {
            Some(ref p) => load_config_file(p)?,
            None => ConfigSchema::default(),
        };

        validate(&schema)?;

        Ok(Self {
            schema,
            path: config_path,
        })
    }
}

/// Find configuration file in standard locations
fn find_config_file() -> Option<PathBuf> {
    let mut candidates = vec![
        PathBuf::from(".solarsite.toml"),
        PathBuf::from("solarsite.toml"),
    ];
    if let Some(dir) = dirs::config_dir() {
        candidates.push(dir.join("solarsite").join("config.toml"));
    }

    candidates.into_iter().find(|candidate| candidate.exists())
}

/// Load and parse a TOML configuration file
fn load_config_file(path: &Path) -> Result<ConfigSchema> {
    let content = std::fs::read_to_string(path)
        .map_err(Error::from)
        .context(format!("Failed to read config file {}", path.display()))?;

    toml::from_str(&content)
        .map_err(Error::from)
        .context(format!("Failed to parse config file {}", path.display()))
}

fn validate(schema: &ConfigSchema) -> Result<()> {
    let map = &schema.map;
    if !(-90.0..=90.0).contains(&map.default_latitude)
        || !(-180.0..=180.0).contains(&map.default_longitude)
    {
        return Err(Error::config(format!(
            "default map centre ({}, {}) is outside valid latitude/longitude ranges",
            map.default_latitude, map.default_longitude
        )));
    }

    if map.zoom > 19 {
        return Err(Error::config(format!("zoom {} exceeds the tile layer maximum of 19", map.zoom)));
    }

    if schema.network.timeout_secs == Some(0) {
        return Err(Error::config("network.timeout_secs cannot be zero"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use std::io::Write;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.path.is_none());
        assert_eq!(config.schema.map.zoom, 12);
        assert!((config.schema.map.default_latitude - 26.9124).abs() < f64::EPSILON);
    }

    #[test]
    fn test_config_load_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[map]\nzoom = 9\n\n[network]\nnominatim_url = \"http://localhost:8080\"\ntimeout_secs = 5"
        )
        .unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.schema.map.zoom, 9);
        assert!((config.schema.map.default_longitude - 75.7873).abs() < f64::EPSILON);
        assert_eq!(
            config.schema.network.nominatim_url.as_deref(),
            Some("http://localhost:8080")
        );
        assert_eq!(config.schema.network.timeout_secs, Some(5));
    }

    #[test]
    fn test_config_missing_explicit_file() {
        let err = Config::load(Some(Path::new("/nonexistent/solarsite.toml"))).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigNotFound);
    }

    #[test]
    fn test_config_rejects_bad_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[map\nzoom = ").unwrap();

        let err = Config::load(Some(file.path())).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigParseError);
        assert!(err.context.is_some());
    }

    #[test]
    fn test_config_rejects_out_of_range_centre() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[map]\ndefault_latitude = 120.0").unwrap();

        let err = Config::load(Some(file.path())).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigError);
    }
}
