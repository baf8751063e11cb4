//! One-shot lookups: reverse geocode, forward geocode, irradiance

use super::parse_site;
use crate::context::AppContext;
use anyhow::Result;
use serde::Serialize;
use solarsite_api_client::endpoints::{IrradianceSeries, YearWindow};
use solarsite_cli::output::{format_coordinate, format_duration, print_json};
use solarsite_cli::{progress, Status};
use solarsite_core::{Error, ErrorCode};
use solarsite_geo::Coordinate;
use solarsite_telemetry::Timer;

#[derive(Serialize)]
struct ReverseOutput<'a> {
    coordinate: Coordinate,
    display_name: &'a str,
}

/// Print the place name for a coordinate
pub async fn reverse(ctx: &AppContext, lat: &str, lng: &str) -> Result<()> {
    let at = parse_site(lat, lng)?;

    let spinner = progress::spinner("Looking up place name...", ctx.quiet());
    let timer = Timer::start("reverse_geocode");
    let result = ctx.client.geocoding().reverse(at).await;
    let elapsed = timer.stop();
    progress::finish_clear(&spinner);

    let name = result
        .map_err(|e| e.into_core(ErrorCode::GeocodingFailed))?
        .ok_or_else(|| Error::location_not_found(&at.to_string()))?;

    if ctx.format.is_json() {
        print_json(&ReverseOutput {
            coordinate: at,
            display_name: &name,
        })?;
    } else {
        Status::success(&name);
        Status::info(&format!("{} ({})", format_coordinate(at), format_duration(elapsed)));
    }
    Ok(())
}

/// Print the best match for a place name
pub async fn search(ctx: &AppContext, query: &str) -> Result<()> {
    let query = query.trim();
    if query.is_empty() {
        return Err(Error::new(ErrorCode::InvalidInput, "Search query is empty")
            .with_suggestion("Pass a place name, e.g. `solarsite search Jaipur`")
            .into());
    }

    let spinner = progress::spinner("Searching...", ctx.quiet());
    let timer = Timer::start("forward_geocode");
    let result = ctx.client.geocoding().search(query).await;
    let elapsed = timer.stop();
    progress::finish_clear(&spinner);

    let place = result
        .map_err(|e| e.into_core(ErrorCode::GeocodingFailed))?
        .ok_or_else(|| Error::location_not_found(query))?;

    if ctx.format.is_json() {
        print_json(&place)?;
    } else {
        Status::success(place.display_name.as_deref().unwrap_or(query));
        Status::info(&format!(
            "{} ({})",
            format_coordinate(place.coordinate),
            format_duration(elapsed)
        ));
    }
    Ok(())
}

#[derive(Serialize)]
struct IrradianceOutput<'a> {
    coordinate: Coordinate,
    window: YearWindow,
    monthly: &'a IrradianceSeries,
    average_kwh_m2_day: f64,
}

/// Print the monthly irradiance series and its mean
pub async fn irradiance(ctx: &AppContext, lat: &str, lng: &str, start: u16, end: u16) -> Result<()> {
    let at = parse_site(lat, lng)?;
    if start > end {
        return Err(Error::validation(format!(
            "Start year {start} is after end year {end}"
        ))
        .into());
    }
    let window = YearWindow { start, end };

    let spinner = progress::spinner("Fetching irradiance data...", ctx.quiet());
    let timer = Timer::start("irradiance");
    let result = ctx.client.irradiance().with_window(window).monthly_series(at).await;
    timer.stop();
    progress::finish_clear(&spinner);

    let series = result.map_err(|e| e.into_core(ErrorCode::IrradianceFailed))?;
    let average = series
        .mean()
        .map_err(|e| e.into_core(ErrorCode::IrradianceFailed))?;

    if ctx.format.is_json() {
        print_json(&IrradianceOutput {
            coordinate: at,
            window,
            monthly: &series,
            average_kwh_m2_day: average,
        })?;
        return Ok(());
    }

    Status::header(&format!(
        "Irradiance at {} ({start}-{end})",
        format_coordinate(at)
    ));
    for (period, value) in series.entries() {
        println!("  {period}  {value:>6.2} kWh/m²/day");
    }
    println!();
    Status::success(&format!("Average: {average:.2} kWh/m²/day over {} periods", series.len()));
    Ok(())
}
