//! Site planning for SolarSite.
//!
//! This crate provides:
//! - [`FormController`]: keeps the form fields, the selected point and the
//!   single map marker consistent across map clicks, location commits,
//!   coordinate commits and submissions
//! - [`sizing`]: the panel-area formula and the report shown to the user
//! - [`policy`]: how each kind of lookup failure is surfaced
//! - [`sequence`]: ticketing that drops out-of-order responses
//!
//! # Example
//!
//! ```
//! use solarsite_planner::sizing::{PowerRequest, SizingResult};
//!
//! let result = SizingResult::compute(5.0, PowerRequest::new(2.0));
//! assert_eq!(result.area_m2, 0.5);
//! ```

pub mod controller;
pub mod policy;
pub mod sequence;
pub mod sizing;
pub mod sources;

pub use controller::{FormController, FormFields, ForwardLookup, ReverseLookup, SizingRequest};
pub use policy::{Fallback, Notice, Transition};
pub use sizing::{PowerRequest, SizingReport, SizingResult, EFFICIENCY};
pub use sources::{Geocoder, IrradianceSource};
