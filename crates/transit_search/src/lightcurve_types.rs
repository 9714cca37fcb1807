//! Types for light-curve sampling.

use serde::Serialize;

/// Default sampling step in days.
pub const DEFAULT_STEP_DAYS: f64 = 0.01;

/// Upper bound on samples produced by one call.
pub const MAX_SAMPLES: usize = 1_000_000;

/// Slack, in units of one step, that keeps an endpoint which is an exact
/// multiple of the step despite rounding in `(end - start) / step`.
pub(crate) const STEP_COUNT_TOLERANCE: f64 = 1e-9;

/// Time span and step for a light curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightCurveConfig {
    /// First sample time in days.
    pub start_days: f64,
    /// Last admissible sample time in days (inclusive).
    pub end_days: f64,
    /// Fixed step between samples in days.
    pub step_days: f64,
}

impl LightCurveConfig {
    /// Span `[start_days, end_days]` at the default 0.01-day step.
    pub fn new(start_days: f64, end_days: f64) -> Self {
        Self {
            start_days,
            end_days,
            step_days: DEFAULT_STEP_DAYS,
        }
    }

    /// Same span with a different step.
    pub fn with_step(self, step_days: f64) -> Self {
        Self { step_days, ..self }
    }

    /// Number of samples the span produces: `floor((end - start) / step) + 1`,
    /// or 0 when `start > end`.
    pub fn sample_count(&self) -> f64 {
        if self.start_days > self.end_days {
            return 0.0;
        }
        ((self.end_days - self.start_days) / self.step_days + STEP_COUNT_TOLERANCE).floor() + 1.0
    }

    /// Validate the configuration.
    pub(crate) fn validate(&self) -> Result<(), &'static str> {
        if !self.step_days.is_finite() || self.step_days <= 0.0 {
            return Err("step_days must be positive");
        }
        if !self.start_days.is_finite() {
            return Err("start_days must be finite");
        }
        if !self.end_days.is_finite() {
            return Err("end_days must be finite");
        }
        Ok(())
    }
}

/// Aggregate view of a sampled light curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LightCurveSummary {
    /// Number of samples in the curve.
    pub sample_count: usize,
    /// Samples flagged as in transit.
    pub transiting_count: usize,
    /// Lowest flux in the curve.
    pub min_flux: f64,
    /// `1 - min_flux`: the deepest dip actually sampled.
    pub observed_depth: f64,
}
