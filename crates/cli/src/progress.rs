//! Progress indicators
//!
//! Spinners shown on stderr while a request is in flight.

use console::Term;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Create a spinner for a network wait.
///
/// Hidden when stderr is not a terminal or `quiet` is set, so piped and JSON
/// output stay clean.
pub fn spinner(message: &str, quiet: bool) -> ProgressBar {
    if quiet || !Term::stderr().is_term() {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
        .template("{spinner:.blue} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Finish a spinner with a success message
pub fn finish_success(pb: &ProgressBar, message: &str) {
    pb.finish_with_message(format!("✓ {}", message));
}

/// Finish a spinner and erase it
pub fn finish_clear(pb: &ProgressBar) {
    pb.finish_and_clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_spinner_is_hidden() {
        let pb = spinner("Looking up location...", true);
        assert!(pb.is_hidden());
        finish_clear(&pb);
    }

    #[test]
    fn test_spinner_finishes() {
        let pb = spinner("Fetching irradiance...", false);
        finish_success(&pb, "done");
        assert!(pb.is_finished());
    }
}
