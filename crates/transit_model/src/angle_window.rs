//! Angle-window transit model.
//!
//! Ignores the physical radii when deciding whether a transit is happening:
//! the planet is in transit whenever its orbital angle is within ±10° of 90°.
//! Inside the window the flux follows a raised-cosine "U" from no dip at the
//! edges to the full depth at the centre. This is the model the live readout
//! and the plots use.

use std::f64::consts::PI;

use serde::Serialize;
use transit_catalog::PlanetRecord;

use crate::constants::{
    EARTH_RADIUS_KM, SOLAR_RADIUS_KM, planet_radius_au, star_radius_au, transit_depth,
};
use crate::orbit::{OrbitPosition, angle_degrees, orbit_position};

/// Centre of the transit window in degrees.
pub const TRANSIT_CENTER_DEG: f64 = 90.0;

/// Half-width of the transit window in degrees.
pub const TRANSIT_HALF_WIDTH_DEG: f64 = 10.0;

/// Result of an angle-window evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WindowTransit {
    /// Whether the angle lies within the window, edges included.
    pub is_transiting: bool,
    /// Normalized flux in `[1 - depth, 1]`; exactly 1 outside the window.
    pub flux: f64,
    /// Orbital angle in degrees [0, 360).
    pub angle_deg: f64,
    /// Orbital position with no phase offset.
    pub position: OrbitPosition,
}

/// Real-scale geometry of a planet's system, for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScaleInfo {
    /// Real star radius in AU.
    pub star_radius_au: f64,
    /// Real planet radius in AU.
    pub planet_radius_au: f64,
    /// Orbit radius (semi-major axis) in AU.
    pub orbit_radius_au: f64,
    /// Real star radius in km.
    pub star_radius_km: f64,
    /// Real planet radius in km.
    pub planet_radius_km: f64,
    /// How many times larger the orbit is than the combined radii.
    pub scale_ratio: f64,
}

/// Fraction of the full depth at `angle_deg`, 0 outside the window.
///
/// `(cos(π·d) + 1) / 2` with `d` the distance from the window centre in
/// units of the half-width: 1 at the centre, 0 at either edge.
pub fn transit_fraction(angle_deg: f64) -> f64 {
    let from_center = (angle_deg - TRANSIT_CENTER_DEG).abs();
    if from_center > TRANSIT_HALF_WIDTH_DEG {
        return 0.0;
    }
    let normalized = from_center / TRANSIT_HALF_WIDTH_DEG;
    ((PI * normalized).cos() + 1.0) / 2.0
}

/// Evaluate the angle-window model at `time_days`. No phase offset.
pub fn evaluate(planet: &PlanetRecord, time_days: f64) -> WindowTransit {
    let position = orbit_position(planet.semi_major_axis_au, planet.period_days, time_days, 0.0);
    let angle_deg = angle_degrees(position.angle_rad);

    let is_transiting = (angle_deg - TRANSIT_CENTER_DEG).abs() <= TRANSIT_HALF_WIDTH_DEG;
    let flux = if is_transiting {
        1.0 - transit_depth(planet) * transit_fraction(angle_deg)
    } else {
        1.0
    };

    WindowTransit {
        is_transiting,
        flux,
        angle_deg,
        position,
    }
}

/// Real radii and orbit size for a planet. Has no effect on evaluation.
pub fn scale_info(planet: &PlanetRecord) -> ScaleInfo {
    let star_au = star_radius_au(planet);
    let planet_au = planet_radius_au(planet);
    let orbit_au = planet.semi_major_axis_au;
    ScaleInfo {
        star_radius_au: star_au,
        planet_radius_au: planet_au,
        orbit_radius_au: orbit_au,
        star_radius_km: planet.radius_star_solar * SOLAR_RADIUS_KM,
        planet_radius_km: planet.radius_planet_earth * EARTH_RADIUS_KM,
        scale_ratio: orbit_au / (star_au + planet_au),
    }
}
