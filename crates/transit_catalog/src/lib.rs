//! Fixed catalog of transiting exoplanets.
//!
//! The catalog is a static table compiled into the binary. It is never
//! mutated: callers list identifiers in table order and look records up by
//! identifier. An unknown identifier is "nothing selected", not an error.

use serde::Serialize;

/// Physical parameters of one cataloged planet and its host star.
///
/// Radii are in Earth radii (planet) and Solar radii (star), the period in
/// days and the semi-major axis in AU. The record is not validated; a zero
/// stellar radius or period propagates as NaN/Infinity through the transit
/// math.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlanetRecord {
    /// Catalog key, unique within the table.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Planet radius in Earth radii.
    pub radius_planet_earth: f64,
    /// Host star radius in Solar radii.
    pub radius_star_solar: f64,
    /// Orbital period in days.
    pub period_days: f64,
    /// Semi-major axis (circular orbit radius) in AU.
    pub semi_major_axis_au: f64,
    /// Optional one-line description.
    pub description: Option<&'static str>,
}

impl PlanetRecord {
    /// Planet-to-star radius ratio Rp/Rs, both taken in their catalog units.
    pub fn radius_ratio(&self) -> f64 {
        self.radius_planet_earth / self.radius_star_solar
    }
}

/// The catalog, in display order.
pub const CATALOG: [PlanetRecord; 6] = [
    PlanetRecord {
        id: "kepler-10b",
        name: "Kepler-10b",
        radius_planet_earth: 1.47,
        radius_star_solar: 1.0,
        period_days: 0.837,
        semi_major_axis_au: 0.017,
        description: Some("A rocky super-Earth with an extremely short period"),
    },
    PlanetRecord {
        id: "hd-209458b",
        name: "HD 209458b",
        radius_planet_earth: 1.38,
        radius_star_solar: 1.2,
        period_days: 3.5247,
        semi_major_axis_au: 0.047,
        description: Some("The first exoplanet discovered via transit method"),
    },
    PlanetRecord {
        id: "kepler-7b",
        name: "Kepler-7b",
        radius_planet_earth: 1.48,
        radius_star_solar: 1.84,
        period_days: 4.886,
        semi_major_axis_au: 0.06,
        description: Some("A hot Jupiter with very low density"),
    },
    PlanetRecord {
        id: "wasp-96b",
        name: "WASP-96b",
        radius_planet_earth: 1.2,
        radius_star_solar: 1.06,
        period_days: 3.43,
        semi_major_axis_au: 0.045,
        description: Some("A hot Jupiter observed by James Webb Space Telescope"),
    },
    PlanetRecord {
        id: "tres-2b",
        name: "TrES-2b",
        radius_planet_earth: 1.27,
        radius_star_solar: 0.98,
        period_days: 2.47,
        semi_major_axis_au: 0.036,
        description: Some("The darkest known exoplanet, reflecting less than 1% of light"),
    },
    PlanetRecord {
        id: "gj-1214b",
        name: "GJ 1214b",
        radius_planet_earth: 2.68,
        radius_star_solar: 0.21,
        period_days: 1.58,
        semi_major_axis_au: 0.014,
        description: Some("A super-Earth around a red dwarf star"),
    },
];

/// Identifiers in table order.
pub fn list() -> Vec<&'static str> {
    CATALOG.iter().map(|p| p.id).collect()
}

/// All records in table order.
pub fn all() -> &'static [PlanetRecord] {
    &CATALOG
}

/// Look a planet up by identifier.
///
/// Returns `None` for unknown identifiers, including the empty string used
/// by front ends for "nothing selected".
pub fn lookup(id: &str) -> Option<PlanetRecord> {
    CATALOG.iter().find(|p| p.id == id).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_preserves_table_order() {
        assert_eq!(
            list(),
            vec![
                "kepler-10b",
                "hd-209458b",
                "kepler-7b",
                "wasp-96b",
                "tres-2b",
                "gj-1214b"
            ]
        );
    }

    #[test]
    fn identifiers_are_unique() {
        let ids = list();
        for (i, a) in ids.iter().enumerate() {
            assert!(!ids[i + 1..].contains(a), "duplicate id {a}");
        }
    }

    #[test]
    fn lookup_known_planet() {
        let p = lookup("hd-209458b").expect("hd-209458b is cataloged");
        assert_eq!(p.name, "HD 209458b");
        assert_eq!(p.radius_planet_earth, 1.38);
        assert_eq!(p.radius_star_solar, 1.2);
        assert_eq!(p.period_days, 3.5247);
        assert_eq!(p.semi_major_axis_au, 0.047);
    }

    #[test]
    fn lookup_unknown_is_none() {
        assert!(lookup("kepler-999z").is_none());
        assert!(lookup("").is_none());
        assert!(lookup("HD-209458B").is_none());
    }

    #[test]
    fn all_matches_list() {
        let ids: Vec<_> = all().iter().map(|p| p.id).collect();
        assert_eq!(ids, list());
    }

    #[test]
    fn every_record_has_positive_parameters() {
        for p in all() {
            assert!(p.radius_planet_earth > 0.0, "{}", p.id);
            assert!(p.radius_star_solar > 0.0, "{}", p.id);
            assert!(p.period_days > 0.0, "{}", p.id);
            assert!(p.semi_major_axis_au > 0.0, "{}", p.id);
        }
    }

    #[test]
    fn radius_ratio() {
        let p = lookup("kepler-7b").unwrap();
        assert!((p.radius_ratio() - 1.48 / 1.84).abs() < 1e-15);
    }

    #[test]
    fn serializes_to_json() {
        let p = lookup("gj-1214b").unwrap();
        let json = serde_json::to_value(p).unwrap();
        assert_eq!(json["id"], "gj-1214b");
        assert_eq!(json["period_days"], 1.58);
    }
}
