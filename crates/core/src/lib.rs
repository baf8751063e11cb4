//! Core utilities shared by the SolarSite crates
//!
//! - **Error handling**: errors with codes, context and recovery suggestions
//! - **Configuration**: optional TOML configuration with validated defaults
//!
//! # Example
//!
//! ```rust,no_run
//! use solarsite_core::config::Config;
//!
//! let config = Config::load(None).expect("invalid configuration");
//! println!("map opens at zoom {}", config.schema.map.zoom);
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;

pub use error::{Error, ErrorCode, Result, ResultExt};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::{Config, ConfigSchema, MapConfig, NetworkConfig};
    pub use crate::error::{exit_codes, Error, ErrorCode, Result, ResultExt};
}
