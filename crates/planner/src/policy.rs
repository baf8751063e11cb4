//! What the user sees when a lookup does not succeed.
//!
//! This is the only place that decides between a blocking alert, a label
//! written into the location field, and a silent log line.
//!
//! | Transition | Not found | Failure |
//! |------------|-----------|---------|
//! | map click | label "Location not found" + alert | label "Error fetching location" + alert naming the failure |
//! | location commit | alert "Location not found!" | alert naming the failure |
//! | coordinate commit | silent | silent |
//! | submit | alert (no data for site) | alert naming the failure |
//!
//! Coordinate commits refresh the location name in the background; they
//! never write a label and never alert.

use crate::sizing::SizingReport;
use serde::Serialize;
use solarsite_api_client::{ApiError, FailureKind};
use tracing::{info, warn};

pub const LOCATION_NOT_FOUND_LABEL: &str = "Location not found";
pub const LOCATION_ERROR_LABEL: &str = "Error fetching location";
pub const LOCATION_NOT_FOUND_ALERT: &str = "Location not found!";
pub const NO_PLACE_AT_POINT_ALERT: &str = "No place name was found for the clicked point.";
pub const INVALID_INPUT_ALERT: &str =
    "Please enter valid latitude, longitude, and power required values.";
pub const IRRADIANCE_FAILED_ALERT: &str =
    "Failed to fetch solar radiation data. Please try again later.";

/// Something the host must show the user.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notice {
    /// Blocking message
    Alert { message: String },
    /// Sizing result to present in a modal
    Report(SizingReport),
}

impl Notice {
    pub fn alert(message: impl Into<String>) -> Self {
        Self::Alert {
            message: message.into(),
        }
    }
}

/// The user action a lookup belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    MapClick,
    LocationCommit,
    CoordinateCommit,
    Submit,
}

impl Transition {
    fn name(self) -> &'static str {
        match self {
            Self::MapClick => "map click",
            Self::LocationCommit => "location commit",
            Self::CoordinateCommit => "coordinate commit",
            Self::Submit => "submit",
        }
    }
}

/// Why a lookup produced nothing usable.
#[derive(Debug, Clone, Copy)]
pub enum Failure<'a> {
    /// The service answered but had no match
    NotFound,
    /// The request or its payload failed
    Api(&'a ApiError),
}

/// How a failure is surfaced.
#[derive(Debug, Clone, PartialEq)]
pub enum Fallback {
    /// Write `text` into the location field, then show `notice`
    Label { text: &'static str, notice: Notice },
    /// Show this notice
    Notice(Notice),
    /// Log only
    Silent,
}

/// Decide how `failure` during `transition` is surfaced, and log it.
pub fn fallback(transition: Transition, failure: Failure<'_>) -> Fallback {
    match failure {
        Failure::NotFound => info!(transition = transition.name(), "Lookup found nothing"),
        Failure::Api(err) => warn!(
            transition = transition.name(),
            kind = %err.kind(),
            error = %err,
            "Lookup failed"
        ),
    }

    match (transition, failure) {
        (Transition::CoordinateCommit, _) => Fallback::Silent,
        (Transition::MapClick, Failure::NotFound) => Fallback::Label {
            text: LOCATION_NOT_FOUND_LABEL,
            notice: Notice::alert(NO_PLACE_AT_POINT_ALERT),
        },
        (Transition::MapClick, Failure::Api(err)) => Fallback::Label {
            text: LOCATION_ERROR_LABEL,
            notice: Notice::alert(reverse_failure_message(err)),
        },
        (Transition::LocationCommit, Failure::NotFound) => {
            Fallback::Notice(Notice::alert(LOCATION_NOT_FOUND_ALERT))
        }
        (Transition::LocationCommit, Failure::Api(err)) => {
            Fallback::Notice(Notice::alert(geocoding_failure_message(err)))
        }
        (Transition::Submit, Failure::NotFound) => Fallback::Notice(Notice::alert(
            "No solar radiation data is available for this location.",
        )),
        (Transition::Submit, Failure::Api(err)) => {
            Fallback::Notice(Notice::alert(irradiance_failure_message(err)))
        }
    }
}

fn reverse_failure_message(err: &ApiError) -> String {
    match err.kind() {
        FailureKind::Transport => {
            "Could not reach the geocoding service to name this point.".to_string()
        }
        FailureKind::Status => format!("The geocoding service could not name this point: {err}"),
        FailureKind::Empty => NO_PLACE_AT_POINT_ALERT.to_string(),
        FailureKind::Malformed => {
            "The geocoding service returned a response that could not be read.".to_string()
        }
        FailureKind::Config => format!("Geocoding is misconfigured: {err}"),
    }
}

fn geocoding_failure_message(err: &ApiError) -> String {
    match err.kind() {
        FailureKind::Transport => {
            "Could not reach the geocoding service. Please try again later.".to_string()
        }
        FailureKind::Status => format!("The geocoding service rejected the search: {err}"),
        FailureKind::Empty => LOCATION_NOT_FOUND_ALERT.to_string(),
        FailureKind::Malformed => {
            "The geocoding service returned a response that could not be read.".to_string()
        }
        FailureKind::Config => format!("Geocoding is misconfigured: {err}"),
    }
}

fn irradiance_failure_message(err: &ApiError) -> String {
    match err.kind() {
        FailureKind::Transport | FailureKind::Status => IRRADIANCE_FAILED_ALERT.to_string(),
        FailureKind::Empty => "No solar radiation data is available for this location.".to_string(),
        FailureKind::Malformed => {
            "Solar radiation data for this location could not be read.".to_string()
        }
        FailureKind::Config => format!("Solar data lookup is misconfigured: {err}"),
    }
}
