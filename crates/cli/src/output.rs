//! Terminal output utilities
//!
//! Human-readable text goes to stdout with coloured status markers; JSON
//! output is a single document on stdout and nothing else.

use owo_colors::OwoColorize;
use serde::Serialize;
use solarsite_core::{Error, ErrorCode, Result};
use solarsite_geo::Coordinate;
use std::io::Write;

/// How command results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// One JSON document per command
    Json,
}

impl OutputFormat {
    /// True for [`OutputFormat::Json`].
    pub fn is_json(self) -> bool {
        matches!(self, Self::Json)
    }
}

/// Status message helpers
pub struct Status;

impl Status {
    /// Print a success message
    pub fn success(message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Print a warning message
    pub fn warning(message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print an info message
    pub fn info(message: &str) {
        println!("{} {}", "ℹ".blue(), message);
    }

    /// Print a header
    pub fn header(message: &str) {
        println!();
        println!("{}", message.bold());
        println!("{}", "─".repeat(message.chars().count()));
    }
}

/// Serialize `value` as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| Error::new(ErrorCode::Internal, e.to_string()))?;
    let mut out = std::io::stdout().lock();
    writeln!(out, "{text}")?;
    Ok(())
}

/// Format a coordinate with hemisphere letters, e.g. `26.9124° N, 75.7873° E`.
pub fn format_coordinate(at: Coordinate) -> String {
    let ns = if at.latitude < 0.0 { 'S' } else { 'N' };
    let ew = if at.longitude < 0.0 { 'W' } else { 'E' };
    format!(
        "{:.4}° {}, {:.4}° {}",
        at.latitude.abs(),
        ns,
        at.longitude.abs(),
        ew
    )
}

/// Format a duration for display
pub fn format_duration(duration: std::time::Duration) -> String {
    let secs = duration.as_secs_f32();
    if secs < 1.0 {
        format!("{:.0}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{:.1}s", secs)
    } else {
        let mins = (secs / 60.0).floor();
        let remaining_secs = secs % 60.0;
        format!("{}m {:.0}s", mins, remaining_secs)
    }
}
