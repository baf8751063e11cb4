//! Panel area sizing.
//!
//! Given the average daily irradiance at a site (kWh/m²/day) and the daily
//! energy the user wants to produce, the required collector area is
//!
//! ```text
//! area_m2 = power_watts / (irradiance × 1000 × efficiency)
//! ```
//!
//! Zero or negative irradiance is not special-cased; the division yields
//! infinity or NaN and the caller shows whatever comes out.

use chrono::{DateTime, Local};
use serde::Serialize;
use std::fmt;

/// Fixed panel conversion efficiency (80 %).
pub const EFFICIENCY: f64 = 0.8;

const WATTS_PER_KILOWATT: f64 = 1000.0;

/// Daily energy the user wants the panels to produce.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PowerRequest {
    /// Requested energy in kWh per day, as entered
    pub daily_energy_kwh: f64,
}

impl PowerRequest {
    pub fn new(daily_energy_kwh: f64) -> Self {
        Self { daily_energy_kwh }
    }

    /// The request expressed in the unit the sizing formula takes.
    pub fn watts(&self) -> f64 {
        self.daily_energy_kwh * WATTS_PER_KILOWATT
    }
}

/// Collector area needed to meet `power_watts` at the given irradiance.
///
/// # Example
/// ```
/// use solarsite_planner::sizing::{required_area_m2, EFFICIENCY};
///
/// let area = required_area_m2(5.0, 2000.0, EFFICIENCY);
/// assert_eq!(area, 0.5);
/// ```
#[inline]
pub fn required_area_m2(avg_irradiance_kwh_m2_day: f64, power_watts: f64, efficiency: f64) -> f64 {
    power_watts / (avg_irradiance_kwh_m2_day * (WATTS_PER_KILOWATT * efficiency))
}

/// Output of one sizing computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SizingResult {
    pub avg_irradiance_kwh_m2_day: f64,
    pub area_m2: f64,
}

impl SizingResult {
    /// Sizes `request` for a site with the given average irradiance.
    pub fn compute(avg_irradiance_kwh_m2_day: f64, request: PowerRequest) -> Self {
        Self {
            avg_irradiance_kwh_m2_day,
            area_m2: required_area_m2(avg_irradiance_kwh_m2_day, request.watts(), EFFICIENCY),
        }
    }
}

/// A sizing result as presented to the user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SizingReport {
    #[serde(flatten)]
    pub result: SizingResult,
    pub daily_energy_kwh: f64,
    /// When this report was computed on this machine
    pub computed_at: DateTime<Local>,
}

impl SizingReport {
    pub fn new(avg_irradiance_kwh_m2_day: f64, request: PowerRequest) -> Self {
        Self {
            result: SizingResult::compute(avg_irradiance_kwh_m2_day, request),
            daily_energy_kwh: request.daily_energy_kwh,
            computed_at: Local::now(),
        }
    }
}

impl fmt::Display for SizingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Results:")?;
        writeln!(
            f,
            "1. Average Solar Radiation: {:.2} kWh/m²/day",
            self.result.avg_irradiance_kwh_m2_day
        )?;
        writeln!(
            f,
            "2. Required Area: {:.2} m² (to generate {} kWh/day)",
            self.result.area_m2, self.daily_energy_kwh
        )?;
        writeln!(f)?;
        writeln!(f, "Irradiance data from the NASA POWER API.")?;
        write!(
            f,
            "Computed locally at {}",
            self.computed_at.format("%Y-%m-%d %H:%M:%S")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_power_request_converts_to_watts() {
        assert_eq!(PowerRequest::new(2.0).watts(), 2000.0);
        assert_eq!(PowerRequest::new(0.25).watts(), 250.0);
    }

    #[test]
    fn test_three_month_scenario() {
        let avg = (4.0 + 5.0 + 6.0) / 3.0;
        let result = SizingResult::compute(avg, PowerRequest::new(2.0));

        assert_eq!(result.avg_irradiance_kwh_m2_day, 5.0);
        assert_eq!(result.area_m2, 0.5);
    }

    #[test]
    fn test_zero_irradiance_is_not_guarded() {
        assert!(required_area_m2(0.0, 2000.0, EFFICIENCY).is_infinite());
        assert!(required_area_m2(0.0, 0.0, EFFICIENCY).is_nan());
        assert!(required_area_m2(-5.0, 2000.0, EFFICIENCY) < 0.0);
    }

    #[test]
    fn test_report_display() {
        let report = SizingReport::new(5.0, PowerRequest::new(2.0));
        let text = report.to_string();

        assert!(text.contains("Average Solar Radiation: 5.00 kWh/m²/day"));
        assert!(text.contains("Required Area: 0.50 m² (to generate 2 kWh/day)"));
        assert!(text.contains("Computed locally at"));
    }

    #[test]
    fn test_report_serializes_flat() {
        let report = SizingReport::new(5.0, PowerRequest::new(2.0));
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["area_m2"], 0.5);
        assert_eq!(json["avg_irradiance_kwh_m2_day"], 5.0);
        assert_eq!(json["daily_energy_kwh"], 2.0);
        assert!(json["computed_at"].is_string());
    }

    proptest! {
        #[test]
        fn prop_matches_closed_form(x in 0.01f64..20.0, p in 0.01f64..1.0e7) {
            prop_assert_eq!(required_area_m2(x, p, EFFICIENCY), p / (x * 800.0));
        }

        #[test]
        fn prop_decreasing_in_irradiance(x in 0.1f64..20.0, dx in 0.01f64..10.0, p in 1.0f64..1.0e6) {
            prop_assert!(required_area_m2(x, p, EFFICIENCY) > required_area_m2(x + dx, p, EFFICIENCY));
        }

        #[test]
        fn prop_increasing_in_power(x in 0.1f64..20.0, p in 1.0f64..1.0e6, dp in 1.0f64..1.0e6) {
            prop_assert!(required_area_m2(x, p, EFFICIENCY) < required_area_m2(x, p + dp, EFFICIENCY));
        }
    }
}
