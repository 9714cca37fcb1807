//! Scaled-radius transit model.
//!
//! Real stellar and planetary radii are a tiny fraction of the orbit, so the
//! model inflates both by a common factor chosen to make their sum 1% of the
//! semi-major axis. A transit is flagged when the planet is near the line of
//! sight (`|x|` within two scaled stellar radii) and the projected distance
//! `|y|` is within the sum of the scaled radii. In-transit flux is a hard
//! step to `1 - depth`; there is no ingress or egress shape.
//!
//! On any orbit with a positive radius the two conditions cannot hold at
//! once (near `x = 0` the planet sits at `|y| ≈ a`), so this model reports
//! no transits for catalog planets. That is the observed behavior and is
//! kept.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use serde::Serialize;
use transit_catalog::PlanetRecord;

use crate::constants::{planet_radius_au, star_radius_au, transit_depth};
use crate::orbit::{OrbitPosition, angular_velocity, orbit_position};

/// Combined scaled radius as a fraction of the semi-major axis.
pub const SCALED_RADIUS_FRACTION: f64 = 0.01;

/// Phase offset that starts the planet 45° before the transit angle.
///
/// Not used as a default anywhere. Pass it explicitly to begin a run
/// approaching transit.
pub const APPROACH_PHASE_OFFSET_RAD: f64 = FRAC_PI_4;

/// Orbital angle at which the planet crosses in front of the star.
pub const TRANSIT_ANGLE_RAD: f64 = FRAC_PI_2;

/// Result of a scaled-radius evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScaledTransit {
    /// Whether the scaled disks overlap near the crossing point.
    pub is_transiting: bool,
    /// Normalized flux: 1 out of transit, `1 - transit_depth` in transit.
    pub flux: f64,
    /// Maximum possible depth, (Rp/Rs)².
    pub transit_depth: f64,
    /// `|y|` in AU, the distance from the star centre across the line of sight.
    pub projected_distance_au: f64,
    /// Orbital position including the phase offset.
    pub position: OrbitPosition,
}

/// Inflated radii used by the overlap test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScaledRadii {
    /// Multiplier applied to both real radii so they sum to 1% of the orbit.
    pub scale_factor: f64,
    /// Scaled star radius in AU.
    pub star_radius_au: f64,
    /// Scaled planet radius in AU.
    pub planet_radius_au: f64,
}

/// Scale factor and scaled radii for a planet.
pub fn scaled_radii(planet: &PlanetRecord) -> ScaledRadii {
    let planet_au = planet_radius_au(planet);
    let star_au = star_radius_au(planet);
    let scale_factor =
        (planet.semi_major_axis_au * SCALED_RADIUS_FRACTION) / (star_au + planet_au);
    ScaledRadii {
        scale_factor,
        star_radius_au: star_au * scale_factor,
        planet_radius_au: planet_au * scale_factor,
    }
}

/// Evaluate the scaled-radius model at `time_days`.
pub fn evaluate(planet: &PlanetRecord, time_days: f64, phase_offset_rad: f64) -> ScaledTransit {
    let position = orbit_position(
        planet.semi_major_axis_au,
        planet.period_days,
        time_days,
        phase_offset_rad,
    );
    let radii = scaled_radii(planet);

    let projected = position.y_au.abs();
    let near_crossing = position.x_au.abs() <= radii.star_radius_au * 2.0;
    let overlapping = projected <= radii.star_radius_au + radii.planet_radius_au;
    let is_transiting = near_crossing && overlapping;

    let depth = transit_depth(planet);
    let flux = if is_transiting { 1.0 - depth } else { 1.0 };

    ScaledTransit {
        is_transiting,
        flux,
        transit_depth: depth,
        projected_distance_au: projected,
        position,
    }
}

/// Transit duration in days from the real (unscaled) radii.
///
/// Chord `2(Rs + Rp)` in AU divided by the orbital speed `2πa / P`.
pub fn transit_duration(planet: &PlanetRecord) -> f64 {
    let chord = 2.0 * (star_radius_au(planet) + planet_radius_au(planet));
    let orbital_velocity = (2.0 * PI * planet.semi_major_axis_au) / planet.period_days;
    chord / orbital_velocity
}

/// Smallest time strictly after `current_days` at which the orbital angle
/// is π/2 modulo 2π.
pub fn next_transit_time(planet: &PlanetRecord, current_days: f64, phase_offset_rad: f64) -> f64 {
    let omega = angular_velocity(planet.period_days);
    let current_angle = (omega * current_days + phase_offset_rad).rem_euclid(2.0 * PI);

    let mut until = TRANSIT_ANGLE_RAD - current_angle;
    if until <= 0.0 {
        until += 2.0 * PI;
    }
    current_days + until / omega
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn hd209458b() -> PlanetRecord {
        transit_catalog::lookup("hd-209458b").unwrap()
    }

    #[test]
    fn scaled_radii_sum_to_one_percent_of_orbit() {
        for p in transit_catalog::all() {
            let r = scaled_radii(p);
            assert_relative_eq!(
                r.star_radius_au + r.planet_radius_au,
                p.semi_major_axis_au * 0.01,
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn flux_is_one_at_start() {
        let t = evaluate(&hd209458b(), 0.0, 0.0);
        assert!(!t.is_transiting);
        assert_eq!(t.flux, 1.0);
        assert_abs_diff_eq!(t.projected_distance_au, 0.0);
    }

    #[test]
    fn catalog_planets_never_transit() {
        for p in transit_catalog::all() {
            for i in 0..=1000 {
                let t = p.period_days * i as f64 / 1000.0;
                let r = evaluate(p, t, 0.0);
                assert!(!r.is_transiting, "{} transits at t={t}", p.id);
                assert_eq!(r.flux, 1.0);
            }
        }
    }

    #[test]
    fn collapsed_orbit_is_a_hard_step() {
        let mut p = hd209458b();
        p.semi_major_axis_au = 0.0;
        let r = evaluate(&p, 1.3, 0.0);
        assert!(r.is_transiting);
        assert_eq!(r.flux, 1.0 - r.transit_depth);
    }

    #[test]
    fn depth_reported_even_out_of_transit() {
        let r = evaluate(&hd209458b(), 0.4, 0.0);
        assert_abs_diff_eq!(r.transit_depth, 1.3225, epsilon = 1e-12);
    }

    #[test]
    fn phase_offset_moves_position() {
        let p = hd209458b();
        let r = evaluate(&p, 0.0, APPROACH_PHASE_OFFSET_RAD);
        assert_abs_diff_eq!(r.position.angle_rad, FRAC_PI_4);
        assert_abs_diff_eq!(r.position.x_au, r.position.y_au, epsilon = 1e-15);
    }

    #[test]
    fn duration_for_hd209458b() {
        let p = hd209458b();
        let chord = 2.0 * (1.2 * 695_700.0 + 1.38 * 6371.0) / 149_597_870.7;
        let v = 2.0 * PI * 0.047 / 3.5247;
        assert_relative_eq!(transit_duration(&p), chord / v, max_relative = 1e-12);
        // about 3.2 hours
        let hours = transit_duration(&p) * 24.0;
        assert!(hours > 3.0 && hours < 3.5, "hours = {hours}");
    }

    #[test]
    fn next_transit_from_zero_is_quarter_period() {
        let p = hd209458b();
        assert_relative_eq!(
            next_transit_time(&p, 0.0, 0.0),
            p.period_days / 4.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn next_transit_is_strictly_in_future() {
        let p = hd209458b();
        let at = p.period_days / 4.0;
        let next = next_transit_time(&p, at, 0.0);
        assert!(next >= at);
        // Either within rounding (the angle landed just short of π/2) or one
        // full period later.
        let gap = next - at;
        assert!(gap < 1e-9 || (gap - p.period_days).abs() < 1e-9, "gap = {gap}");
    }

    #[test]
    fn next_transit_after_crossing_wraps_to_next_orbit() {
        let p = hd209458b();
        let now = p.period_days * 0.5;
        let next = next_transit_time(&p, now, 0.0);
        assert_relative_eq!(next, p.period_days * 1.25, max_relative = 1e-12);
    }

    #[test]
    fn next_transit_with_approach_offset() {
        let p = hd209458b();
        let next = next_transit_time(&p, 0.0, APPROACH_PHASE_OFFSET_RAD);
        assert_relative_eq!(next, p.period_days / 8.0, max_relative = 1e-12);
    }

    #[test]
    fn next_transit_across_many_orbits() {
        let p = hd209458b();
        let now = p.period_days * 10.1;
        let next = next_transit_time(&p, now, 0.0);
        assert_relative_eq!(next, p.period_days * 10.25, max_relative = 1e-10);
    }

    #[test]
    fn evaluate_is_pure() {
        let p = hd209458b();
        assert_eq!(evaluate(&p, 2.2, 0.1), evaluate(&p, 2.2, 0.1));
    }
}
