//! Circular-orbit kinematics.

use std::f64::consts::PI;

use serde::Serialize;

/// Position of a planet on its circular orbit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrbitPosition {
    /// x offset from the star centre in AU.
    pub x_au: f64,
    /// y offset from the star centre in AU.
    pub y_au: f64,
    /// Orbital angle in radians. Not wrapped; grows with time.
    pub angle_rad: f64,
}

/// Mean angular velocity in radians per day.
pub fn angular_velocity(period_days: f64) -> f64 {
    (2.0 * PI) / period_days
}

/// Position at `time_days` on a circular orbit of radius `semi_major_axis_au`.
///
/// The angle is `ω·t + phase_offset_rad` with `ω = 2π / period`.
pub fn orbit_position(
    semi_major_axis_au: f64,
    period_days: f64,
    time_days: f64,
    phase_offset_rad: f64,
) -> OrbitPosition {
    let omega = angular_velocity(period_days);
    let angle = omega * time_days + phase_offset_rad;
    OrbitPosition {
        x_au: semi_major_axis_au * angle.cos(),
        y_au: semi_major_axis_au * angle.sin(),
        angle_rad: angle,
    }
}

/// Orbital angle folded into degrees [0, 360).
pub fn angle_degrees(angle_rad: f64) -> f64 {
    let deg = (angle_rad * 180.0 / PI).rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360
    if deg >= 360.0 { 0.0 } else { deg }
}
