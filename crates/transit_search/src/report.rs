//! Per-planet transit reports and cross-planet comparison.

use log::warn;
use serde::Serialize;
use transit_catalog::PlanetRecord;
use transit_model::{TransitModel, TransitSample, transit_depth, transit_duration};

use crate::error::SearchError;
use crate::lightcurve::{sample, summarize};
use crate::lightcurve_types::{LightCurveConfig, LightCurveSummary};

/// Probes per orbit in a diagnostic report.
pub const DIAGNOSTIC_PROBES: usize = 8;

/// Step used for the one-period diagnostic light curve.
pub const DIAGNOSTIC_STEP_DAYS: f64 = 0.1;

/// Headline transit figures for one planet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransitReport {
    /// Catalog identifier.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Orbital period in days.
    pub period_days: f64,
    /// Physical transit duration in days, from the real radii.
    pub duration_days: f64,
    /// Same duration in hours.
    pub duration_hours: f64,
    /// `(Rp/Rs)^2` as a fraction.
    pub depth: f64,
    /// Depth as a percentage.
    pub depth_percent: f64,
}

/// Build the report for `planet`.
pub fn transit_report(planet: &PlanetRecord) -> TransitReport {
    let duration_days = transit_duration(planet);
    let depth = transit_depth(planet);
    TransitReport {
        id: planet.id,
        name: planet.name,
        period_days: planet.period_days,
        duration_days,
        duration_hours: duration_days * 24.0,
        depth,
        depth_percent: depth * 100.0,
    }
}

/// Reports for each known identifier in `ids`, in order. Unknown ids are
/// logged and skipped.
pub fn compare(ids: &[&str]) -> Vec<TransitReport> {
    ids.iter()
        .filter_map(|id| match transit_catalog::lookup(id) {
            Some(p) => Some(transit_report(&p)),
            None => {
                warn!("unknown planet '{id}', skipped");
                None
            }
        })
        .collect()
}

/// Diagnostic dump of one planet under one model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagnosticReport {
    /// Headline figures for the planet.
    pub report: TransitReport,
    /// Model evaluated at `k * P / 8` for `k = 0..8`.
    pub probes: Vec<TransitSample>,
    /// Summary of a one-period curve at [`DIAGNOSTIC_STEP_DAYS`].
    pub curve_summary: Option<LightCurveSummary>,
}

/// Probe `model` at eighths of an orbit and summarize one period.
pub fn diagnose(
    planet: &PlanetRecord,
    model: TransitModel,
) -> Result<DiagnosticReport, SearchError> {
    let period = planet.period_days;
    let probes = (0..DIAGNOSTIC_PROBES)
        .map(|k| model.evaluate(planet, k as f64 * period / DIAGNOSTIC_PROBES as f64))
        .collect();
    let curve = sample(
        planet,
        model,
        &LightCurveConfig::new(0.0, period).with_step(DIAGNOSTIC_STEP_DAYS),
    )?;
    Ok(DiagnosticReport {
        report: transit_report(planet),
        probes,
        curve_summary: summarize(&curve),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use transit_catalog::lookup;

    #[test]
    fn report_fields_are_consistent() {
        let p = lookup("hd-209458b").unwrap();
        let r = transit_report(&p);
        assert_eq!(r.id, "hd-209458b");
        assert!((r.duration_hours - r.duration_days * 24.0).abs() < 1e-12);
        assert!((r.depth_percent - r.depth * 100.0).abs() < 1e-9);
        assert!((r.depth - p.radius_ratio().powi(2)).abs() < 1e-12);
    }

    #[test]
    fn compare_keeps_order_and_skips_unknown() {
        let reports = compare(&["kepler-7b", "nope", "hd-209458b"]);
        let ids: Vec<_> = reports.iter().map(|r| r.id).collect();
        assert_eq!(ids, ["kepler-7b", "hd-209458b"]);
    }

    #[test]
    fn compare_empty() {
        assert!(compare(&[]).is_empty());
    }

    #[test]
    fn diagnose_scaled_radius_never_transits() {
        let p = lookup("hd-209458b").unwrap();
        let d = diagnose(&p, TransitModel::scaled_radius()).unwrap();
        assert_eq!(d.probes.len(), 8);
        assert!(d.probes.iter().all(|s| !s.is_transiting && s.flux == 1.0));
        let s = d.curve_summary.unwrap();
        assert_eq!(s.transiting_count, 0);
        assert_eq!(s.min_flux, 1.0);
    }

    #[test]
    fn diagnose_angle_window_transits_at_quarter_orbit() {
        let p = lookup("hd-209458b").unwrap();
        let d = diagnose(&p, TransitModel::AngleWindow).unwrap();
        // k = 2 is P/4, the window centre
        assert!(d.probes[2].is_transiting);
        assert!(d.curve_summary.unwrap().transiting_count > 0);
    }
}
