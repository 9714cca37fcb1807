//! Light-curve sampling.
//!
//! Evaluates a transit model at fixed steps across a time span. Sample times
//! are computed as `start + i * step` rather than by repeated addition, so a
//! long curve does not drift and an end time that is an exact multiple of the
//! step is always included. Times are clamped to the end of the span, so no
//! sample lies past it. Nothing is cached: every call recomputes.

use log::debug;
use transit_catalog::PlanetRecord;
use transit_model::{TransitModel, TransitSample};

use crate::error::SearchError;
use crate::lightcurve_types::{LightCurveConfig, LightCurveSummary, MAX_SAMPLES};

/// Sample `model` for `planet` over the configured span.
///
/// Returns an empty curve when `start_days > end_days`.
pub fn sample(
    planet: &PlanetRecord,
    model: TransitModel,
    config: &LightCurveConfig,
) -> Result<Vec<TransitSample>, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;

    let count = config.sample_count();
    if count > MAX_SAMPLES as f64 {
        return Err(SearchError::TooManySamples {
            requested: count,
            max: MAX_SAMPLES,
        });
    }
    let count = count as usize;

    let curve: Vec<TransitSample> = (0..count)
        .map(|i| {
            let t = (config.start_days + i as f64 * config.step_days).min(config.end_days);
            model.evaluate(planet, t)
        })
        .collect();

    debug!(
        "sampled {} points for {} ({}) over [{}, {}] step {}",
        curve.len(),
        planet.id,
        model,
        config.start_days,
        config.end_days,
        config.step_days
    );
    Ok(curve)
}

/// Sample with the default step. Shorthand for the common plotting case.
pub fn sample_span(
    planet: &PlanetRecord,
    model: TransitModel,
    start_days: f64,
    end_days: f64,
) -> Result<Vec<TransitSample>, SearchError> {
    sample(planet, model, &LightCurveConfig::new(start_days, end_days))
}

/// Count, transit count and deepest point of a curve. `None` for an empty curve.
pub fn summarize(curve: &[TransitSample]) -> Option<LightCurveSummary> {
    if curve.is_empty() {
        return None;
    }
    let transiting_count = curve.iter().filter(|s| s.is_transiting).count();
    let min_flux = curve.iter().map(|s| s.flux).fold(f64::INFINITY, f64::min);
    Some(LightCurveSummary {
        sample_count: curve.len(),
        transiting_count,
        min_flux,
        observed_depth: 1.0 - min_flux,
    })
}
