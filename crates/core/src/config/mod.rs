//! Configuration loading and schema definitions
//!
//! Shared configuration types read from `solarsite.toml`.

mod loader;
mod schema;

pub use loader::Config;
pub use schema::*;
