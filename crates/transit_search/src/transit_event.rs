//! Transit-event search.
//!
//! Finds the intervals during which a model reports `is_transiting`.
//! Uses a coarse scan at a fixed step, then bisection on every change of
//! state to pin down ingress and egress. Works for either model because it
//! only looks at the transit flag.

use log::debug;
use transit_catalog::PlanetRecord;
use transit_model::TransitModel;

use crate::error::SearchError;
use crate::lightcurve_types::MAX_SAMPLES;
use crate::transit_event_types::{MAX_SCAN_PERIODS, TransitEvent, TransitSearchConfig};

/// An interval whose ingress has been seen but not its egress.
struct OpenTransit {
    ingress_days: f64,
    min_flux: f64,
    ingress_observed: bool,
}

impl OpenTransit {
    fn close(
        self,
        egress_days: f64,
        egress_flux: f64,
        egress_observed: bool,
        model: TransitModel,
    ) -> TransitEvent {
        TransitEvent {
            ingress_days: self.ingress_days,
            egress_days,
            mid_days: 0.5 * (self.ingress_days + egress_days),
            min_flux: self.min_flux.min(egress_flux),
            complete: self.ingress_observed && egress_observed,
            model,
        }
    }
}

/// Bisect the state change between `t_a` (state `state_a`) and `t_b`.
///
/// Returns the refined boundary time and the flux there.
fn bisect_boundary(
    planet: &PlanetRecord,
    model: TransitModel,
    mut t_a: f64,
    mut t_b: f64,
    state_a: bool,
    config: &TransitSearchConfig,
) -> (f64, f64) {
    for _ in 0..config.max_iterations {
        let t_mid = 0.5 * (t_a + t_b);
        if model.evaluate(planet, t_mid).is_transiting == state_a {
            t_a = t_mid;
        } else {
            t_b = t_mid;
        }
        if (t_b - t_a).abs() < config.convergence_days {
            break;
        }
    }
    let t_final = 0.5 * (t_a + t_b);
    (t_final, model.evaluate(planet, t_final).flux)
}

/// All transit intervals of `model` for `planet` within `[start_days, end_days]`.
///
/// Intervals cut by either end of the span are returned with
/// `complete == false`. A reversed span yields no events.
pub fn search_transits(
    planet: &PlanetRecord,
    model: TransitModel,
    start_days: f64,
    end_days: f64,
    config: &TransitSearchConfig,
) -> Result<Vec<TransitEvent>, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;
    if !start_days.is_finite() || !end_days.is_finite() {
        return Err(SearchError::NonFiniteSpan {
            start: start_days,
            end: end_days,
        });
    }
    if start_days > end_days {
        return Ok(Vec::new());
    }

    let steps = ((end_days - start_days) / config.step_size_days).ceil();
    if steps > MAX_SAMPLES as f64 {
        return Err(SearchError::TooManySamples {
            requested: steps,
            max: MAX_SAMPLES,
        });
    }
    let steps = steps as usize;

    let mut events = Vec::new();
    let mut prev = model.evaluate(planet, start_days);
    let mut open = prev.is_transiting.then(|| OpenTransit {
        ingress_days: start_days,
        min_flux: prev.flux,
        ingress_observed: false,
    });

    for i in 1..=steps {
        let t = (start_days + i as f64 * config.step_size_days).min(end_days);
        let curr = model.evaluate(planet, t);

        if curr.is_transiting != prev.is_transiting {
            let (boundary, flux) =
                bisect_boundary(planet, model, prev.time_days, t, prev.is_transiting, config);
            if curr.is_transiting {
                open = Some(OpenTransit {
                    ingress_days: boundary,
                    min_flux: flux,
                    ingress_observed: true,
                });
            } else if let Some(transit) = open.take() {
                events.push(transit.close(boundary, flux, true, model));
            }
        }
        if curr.is_transiting {
            if let Some(transit) = open.as_mut() {
                transit.min_flux = transit.min_flux.min(curr.flux);
            }
        }
        prev = curr;
    }

    if let Some(transit) = open.take() {
        events.push(transit.close(end_days, prev.flux, false, model));
    }

    debug!(
        "found {} transit(s) of {} ({}) in [{}, {}]",
        events.len(),
        planet.id,
        model,
        start_days,
        end_days
    );
    Ok(events)
}

/// The first complete transit that begins after `from_days`.
///
/// Scans at most [`MAX_SCAN_PERIODS`] orbital periods. Returns `None` if no
/// transit starts in that span, which is always the case for the
/// scaled-radius model on a non-degenerate orbit.
pub fn next_transit(
    planet: &PlanetRecord,
    model: TransitModel,
    from_days: f64,
    config: &TransitSearchConfig,
) -> Result<Option<TransitEvent>, SearchError> {
    let end_days = from_days + planet.period_days * MAX_SCAN_PERIODS;
    let events = search_transits(planet, model, from_days, end_days, config)?;
    Ok(events
        .into_iter()
        .find(|e| e.complete && e.ingress_days > from_days))
}

#[cfg(test)]
mod tests {
    use super::*;
    use transit_catalog::lookup;

    fn hd209458b() -> PlanetRecord {
        lookup("hd-209458b").unwrap()
    }

    #[test]
    fn one_window_per_orbit() {
        let p = hd209458b();
        let cfg = TransitSearchConfig::default();
        let events =
            search_transits(&p, TransitModel::AngleWindow, 0.0, p.period_days, &cfg).unwrap();
        assert_eq!(events.len(), 1);
        let e = events[0];
        assert!(e.complete);
        assert!((e.ingress_days - p.period_days * 80.0 / 360.0).abs() < 1e-6);
        assert!((e.egress_days - p.period_days * 100.0 / 360.0).abs() < 1e-6);
        assert!((e.mid_days - p.period_days / 4.0).abs() < 1e-6);
        assert!(e.min_flux < 0.0);
    }

    #[test]
    fn scaled_radius_finds_nothing() {
        let p = hd209458b();
        let cfg = TransitSearchConfig::default();
        let events =
            search_transits(&p, TransitModel::scaled_radius(), 0.0, 3.0 * p.period_days, &cfg)
                .unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn span_starting_in_transit_is_incomplete() {
        let p = hd209458b();
        let cfg = TransitSearchConfig::default();
        let start = p.period_days / 4.0;
        let events = search_transits(&p, TransitModel::AngleWindow, start, start + 0.5, &cfg)
            .unwrap();
        assert_eq!(events.len(), 1);
        assert!(!events[0].complete);
        assert_eq!(events[0].ingress_days, start);
    }

    #[test]
    fn span_ending_in_transit_is_incomplete() {
        let p = hd209458b();
        let cfg = TransitSearchConfig::default();
        let end = p.period_days / 4.0;
        let events = search_transits(&p, TransitModel::AngleWindow, 0.0, end, &cfg).unwrap();
        assert_eq!(events.len(), 1);
        assert!(!events[0].complete);
        assert_eq!(events[0].egress_days, end);
    }

    #[test]
    fn reversed_span_is_empty() {
        let p = hd209458b();
        let cfg = TransitSearchConfig::default();
        let events = search_transits(&p, TransitModel::AngleWindow, 2.0, 1.0, &cfg).unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn next_transit_skips_the_one_in_progress() {
        let p = hd209458b();
        let cfg = TransitSearchConfig::default();
        let from = p.period_days / 4.0;
        let e = next_transit(&p, TransitModel::AngleWindow, from, &cfg)
            .unwrap()
            .expect("a transit within two periods");
        assert!((e.mid_days - 1.25 * p.period_days).abs() < 1e-6);
    }

    #[test]
    fn next_transit_for_scaled_radius_is_none() {
        let p = hd209458b();
        let cfg = TransitSearchConfig::default();
        assert!(
            next_transit(&p, TransitModel::scaled_radius(), 0.0, &cfg)
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn zero_period_yields_nothing() {
        let mut p = hd209458b();
        p.period_days = 0.0;
        let cfg = TransitSearchConfig::default();
        assert!(
            next_transit(&p, TransitModel::AngleWindow, 1.0, &cfg)
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn nan_period_is_a_non_finite_span() {
        let mut p = hd209458b();
        p.period_days = f64::NAN;
        let cfg = TransitSearchConfig::default();
        let err = next_transit(&p, TransitModel::AngleWindow, 0.0, &cfg).unwrap_err();
        assert!(matches!(err, SearchError::NonFiniteSpan { .. }));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let p = hd209458b();
        let cfg = TransitSearchConfig {
            max_iterations: 0,
            ..Default::default()
        };
        let err = search_transits(&p, TransitModel::AngleWindow, 0.0, 1.0, &cfg).unwrap_err();
        assert_eq!(err, SearchError::InvalidConfig("max_iterations must be > 0"));
    }
}
