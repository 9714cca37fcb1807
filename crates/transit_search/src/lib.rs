//! Light curves and transit-event search on top of the transit models.
//!
//! This crate provides:
//! - Fixed-step light-curve sampling with curve summaries
//! - Transit-event search: coarse scan plus bisection for ingress and egress
//! - Per-planet transit reports, comparisons and diagnostic probes

pub mod error;
pub mod lightcurve;
pub mod lightcurve_types;
pub mod report;
pub mod transit_event;
pub mod transit_event_types;

pub use error::SearchError;
pub use lightcurve::{sample, sample_span, summarize};
pub use lightcurve_types::{DEFAULT_STEP_DAYS, LightCurveConfig, LightCurveSummary, MAX_SAMPLES};
pub use report::{DiagnosticReport, TransitReport, compare, diagnose, transit_report};
pub use transit_event::{next_transit, search_transits};
pub use transit_event_types::{MAX_SCAN_PERIODS, TransitEvent, TransitSearchConfig};
