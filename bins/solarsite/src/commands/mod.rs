//! CLI command implementations

pub mod lookup;
pub mod session;
pub mod size;

use solarsite_cli::output::print_json;
use solarsite_cli::{OutputFormat, Status};
use solarsite_core::{Error, ErrorCode};
use solarsite_geo::{parse_coordinate, Coordinate, GeoError};
use solarsite_planner::Notice;

/// Parse a latitude/longitude pair given on the command line.
pub fn parse_site(lat: &str, lng: &str) -> solarsite_core::Result<Coordinate> {
    parse_coordinate(lat, lng).map_err(invalid_field)
}

/// Turn a field parse failure into an input error (exit code 2).
pub fn invalid_field(err: GeoError) -> Error {
    let code = match err.field() {
        "latitude" | "longitude" => ErrorCode::InvalidCoordinate,
        _ => ErrorCode::InvalidInput,
    };
    Error::new(code, err.to_string())
        .with_suggestion(format!("Enter a plain decimal number for {}", err.field()))
}

/// Show a notice raised by the form controller.
pub fn render_notice(notice: &Notice, format: OutputFormat) -> solarsite_core::Result<()> {
    if format.is_json() {
        return print_json(notice);
    }

    match notice {
        Notice::Alert { message } => Status::warning(message),
        Notice::Report(report) => {
            println!();
            println!("{report}");
        }
    }
    Ok(())
}
