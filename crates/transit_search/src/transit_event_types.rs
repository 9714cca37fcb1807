//! Types for transit-event search.

use serde::Serialize;
use transit_model::TransitModel;

/// Number of orbital periods `next_transit` scans before giving up.
pub const MAX_SCAN_PERIODS: f64 = 2.0;

/// One contiguous in-transit interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TransitEvent {
    /// Start of the interval in days. Equals the search start when the
    /// planet was already in transit there.
    pub ingress_days: f64,
    /// End of the interval in days. Equals the search end when the planet
    /// was still in transit there.
    pub egress_days: f64,
    /// Midpoint of ingress and egress.
    pub mid_days: f64,
    /// Lowest flux seen across the scan samples and the refined boundaries.
    pub min_flux: f64,
    /// Whether both boundaries were found inside the search span.
    pub complete: bool,
    /// Model the interval was found with.
    pub model: TransitModel,
}

impl TransitEvent {
    /// Length of the interval in days.
    pub fn duration_days(&self) -> f64 {
        self.egress_days - self.ingress_days
    }
}

/// Configuration for transit-event search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TransitSearchConfig {
    /// Coarse scan step in days (default 0.01).
    pub step_size_days: f64,
    /// Maximum bisection iterations per boundary (default 50).
    pub max_iterations: u32,
    /// Convergence threshold in days (default 1e-8, ~0.86 ms).
    pub convergence_days: f64,
}

impl Default for TransitSearchConfig {
    fn default() -> Self {
        Self {
            step_size_days: 0.01,
            max_iterations: 50,
            convergence_days: 1e-8,
        }
    }
}

impl TransitSearchConfig {
    /// Validate the configuration.
    pub(crate) fn validate(&self) -> Result<(), &'static str> {
        if !self.step_size_days.is_finite() || self.step_size_days <= 0.0 {
            return Err("step_size_days must be positive");
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be > 0");
        }
        if !self.convergence_days.is_finite() || self.convergence_days <= 0.0 {
            return Err("convergence_days must be positive");
        }
        Ok(())
    }
}
