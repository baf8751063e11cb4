//! Interactive planning session
//!
//! Each stdin line is one user action against a single form controller:
//!
//! ```text
//! click <lat> <lng>     click the map
//! location <text>       commit the location field
//! lat <value>           commit the latitude field
//! lng <value>           commit the longitude field
//! power <value>         edit the power field (kWh/day)
//! submit                size the panels
//! show                  print the form, selection and map
//! help                  list commands
//! quit                  leave the session
//! ```

use super::render_notice;
use crate::context::{AppContext, CliController};
use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;
use solarsite_cli::output::{format_coordinate, print_json};
use solarsite_cli::{OutputFormat, Status};
use solarsite_geo::{parse_latitude, parse_number, Coordinate, GeoError};
use solarsite_planner::FormFields;
use std::io::{BufRead, Write};
use tracing::debug;

/// One parsed session line.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    Click(Coordinate),
    Location(String),
    Latitude(String),
    Longitude(String),
    Power(String),
    Submit,
    Show,
    Help,
    Quit,
}

/// Why a session line was rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    Unknown(String),
    MissingArgument(&'static str),
    BadClick(GeoError),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unknown(word) => write!(f, "Unknown command {word:?}; type `help` for a list"),
            Self::MissingArgument(command) => write!(f, "`{command}` needs an argument"),
            Self::BadClick(err) => write!(f, "Cannot click there: {err}"),
        }
    }
}

/// Parse one input line; blank lines and `#` comments yield `None`.
pub fn parse_command(line: &str) -> Result<Option<SessionCommand>, ParseError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    let argument = |command: &'static str| {
        if rest.is_empty() {
            Err(ParseError::MissingArgument(command))
        } else {
            Ok(rest.to_string())
        }
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "click" => {
            let mut parts = rest.split_whitespace();
            let lat = parts.next().ok_or(ParseError::MissingArgument("click"))?;
            let lng = parts.next().ok_or(ParseError::MissingArgument("click"))?;
            let at = parse_latitude(lat)
                .and_then(|lat| Ok(Coordinate::new(lat, parse_number("longitude", lng)?)))
                .map_err(ParseError::BadClick)?;
            SessionCommand::Click(at)
        }
        "location" => SessionCommand::Location(argument("location")?),
        // Coordinate and power edits may legitimately be anything, including blank.
        "lat" => SessionCommand::Latitude(rest.to_string()),
        "lng" => SessionCommand::Longitude(rest.to_string()),
        "power" => SessionCommand::Power(rest.to_string()),
        "submit" => SessionCommand::Submit,
        "show" => SessionCommand::Show,
        "help" | "?" => SessionCommand::Help,
        "quit" | "exit" => SessionCommand::Quit,
        other => return Err(ParseError::Unknown(other.to_string())),
    };
    Ok(Some(command))
}

/// Run the session until `quit` or end of input
pub async fn run(ctx: &AppContext) -> Result<()> {
    let mut form = ctx.form_controller();
    let interactive = console::user_attended() && !ctx.format.is_json();

    if interactive {
        Status::header("SolarSite session");
        println!("Type `help` for commands.");
    }

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            print!("{} ", ">".cyan());
            std::io::stdout().flush()?;
        }

        let Some(line) = lines.next() else { break };
        let line = line?;

        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                Status::warning(&e.to_string());
                continue;
            }
        };
        debug!(?command, "Session command");

        let notice = match command {
            SessionCommand::Click(at) => form.click_map(at).await,
            SessionCommand::Location(text) => form.commit_location(text).await,
            SessionCommand::Latitude(text) => form.commit_latitude(text).await,
            SessionCommand::Longitude(text) => form.commit_longitude(text).await,
            SessionCommand::Power(text) => {
                form.set_power_text(text);
                None
            }
            SessionCommand::Submit => Some(form.submit().await),
            SessionCommand::Show => {
                show(&form, ctx.format)?;
                None
            }
            SessionCommand::Help => {
                print_help();
                None
            }
            SessionCommand::Quit => break,
        };

        if let Some(notice) = notice {
            render_notice(&notice, ctx.format)?;
        }
    }

    Ok(())
}

#[derive(Serialize)]
struct SessionState<'a> {
    fields: &'a FormFields,
    selected: Option<Coordinate>,
    map_center: Coordinate,
    zoom: u8,
    markers: Vec<Coordinate>,
}

fn show(form: &CliController, format: OutputFormat) -> solarsite_core::Result<()> {
    let map = form.map();
    let state = SessionState {
        fields: form.fields(),
        selected: form.selected_point(),
        map_center: map.center(),
        zoom: map.zoom(),
        markers: map.markers(),
    };

    if format.is_json() {
        return print_json(&state);
    }

    let fields = state.fields;
    println!("  Latitude:  {}", fields.latitude);
    println!("  Longitude: {}", fields.longitude);
    println!("  Location:  {}", fields.location);
    println!("  Power:     {} kWh/day", fields.power_kwh);
    match state.selected {
        Some(at) => println!("  Selected:  {}", format_coordinate(at)),
        None => println!("  Selected:  {}", "none".dimmed()),
    }
    println!(
        "  Map:       {} @ zoom {}, {} marker(s), tiles from {}",
        format_coordinate(state.map_center),
        state.zoom,
        state.markers.len(),
        map.tiles().url_template
    );
    Ok(())
}

fn print_help() {
    println!("  click <lat> <lng>   click the map");
    println!("  location <text>     search for a place");
    println!("  lat <value>         set latitude");
    println!("  lng <value>         set longitude");
    println!("  power <value>       set daily energy in kWh");
    println!("  submit              size the panels");
    println!("  show                print the current form");
    println!("  quit                leave");
}
