//! SolarSite - solar panel site sizing
//!
//! Resolves a site by coordinates or place name, fetches its historical
//! irradiance from NASA POWER and estimates the panel area needed for a
//! daily energy target.

use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use solarsite_cli::OutputFormat;
use solarsite_core::error::exit_codes;
use solarsite_telemetry::TelemetryConfig;
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;
mod context;

use commands::{lookup, session, size};
use context::AppContext;

/// Solar panel sizing for any point on the map
#[derive(Parser)]
#[command(name = "solarsite")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Configuration file (defaults to .solarsite.toml, solarsite.toml or the user config dir)
    #[arg(short, long, global = true, env = "SOLARSITE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up the place name for a coordinate
    Reverse {
        /// Latitude in decimal degrees
        #[arg(long, allow_hyphen_values = true)]
        lat: String,

        /// Longitude in decimal degrees
        #[arg(long, allow_hyphen_values = true)]
        lng: String,
    },

    /// Find the coordinate for a place name
    Search {
        /// Free-text place name or address
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },

    /// Show monthly irradiance for a coordinate
    Irradiance {
        /// Latitude in decimal degrees
        #[arg(long, allow_hyphen_values = true)]
        lat: String,

        /// Longitude in decimal degrees
        #[arg(long, allow_hyphen_values = true)]
        lng: String,

        /// First year of the averaging window
        #[arg(long, default_value_t = 2021)]
        start: u16,

        /// Last year of the averaging window
        #[arg(long, default_value_t = 2022)]
        end: u16,
    },

    /// Estimate the panel area needed for a daily energy target
    Size {
        /// Latitude in decimal degrees
        #[arg(long, allow_hyphen_values = true)]
        lat: String,

        /// Longitude in decimal degrees
        #[arg(long, allow_hyphen_values = true)]
        lng: String,

        /// Energy to produce per day, in kWh
        #[arg(long, allow_hyphen_values = true)]
        kwh: String,
    },

    /// Drive the planning form interactively from stdin
    Session,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let telemetry = if cli.verbose {
        TelemetryConfig::verbose()
    } else {
        TelemetryConfig::default()
    };
    if let Err(e) = solarsite_telemetry::init_with_config(telemetry) {
        eprintln!("{} {}", "Warning:".yellow().bold(), e);
    }

    let format = cli.format;
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(&e, format);
            ExitCode::from(exit_code_for(&e))
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let ctx = AppContext::load(cli.config.as_deref(), cli.format)?;

    match cli.command {
        Commands::Reverse { lat, lng } => lookup::reverse(&ctx, &lat, &lng).await,
        Commands::Search { query } => lookup::search(&ctx, &query.join(" ")).await,
        Commands::Irradiance { lat, lng, start, end } => {
            lookup::irradiance(&ctx, &lat, &lng, start, end).await
        }
        Commands::Size { lat, lng, kwh } => size::run(&ctx, &lat, &lng, &kwh).await,
        Commands::Session => session::run(&ctx).await,
    }
}

fn report_error(e: &anyhow::Error, format: OutputFormat) {
    if let (OutputFormat::Json, Some(err)) = (format, e.downcast_ref::<solarsite_core::Error>()) {
        if let Ok(text) = serde_json::to_string_pretty(&err.to_report()) {
            eprintln!("{text}");
            return;
        }
    }
    eprintln!("{} {:#}", "Error:".red().bold(), e);
}

fn exit_code_for(e: &anyhow::Error) -> u8 {
    let code = e
        .downcast_ref::<solarsite_core::Error>()
        .map_or(exit_codes::FAILURE, |err| err.code.exit_code());
    u8::try_from(code).unwrap_or(1)
}
