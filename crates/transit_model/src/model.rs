//! Strategy selection between the two transit models.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Serialize;
use transit_catalog::PlanetRecord;

use crate::orbit::angle_degrees;
use crate::{angle_window, scaled_radius};

/// Which transit model to evaluate.
///
/// The two models disagree by construction and are never blended: the
/// scaled-radius model feeds textual diagnostics, the angle-window model
/// feeds the live readout and plots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TransitModel {
    /// Inflated-radius overlap test with a hard step in flux.
    ScaledRadius {
        /// Added to the orbital angle at every time, in radians.
        phase_offset_rad: f64,
    },
    /// Fixed ±10° window around 90° with a raised-cosine dip.
    #[default]
    AngleWindow,
}

impl TransitModel {
    /// Scaled-radius model with no phase offset.
    pub const fn scaled_radius() -> Self {
        Self::ScaledRadius {
            phase_offset_rad: 0.0,
        }
    }

    /// Short name used on the command line and in logs.
    pub const fn name(self) -> &'static str {
        match self {
            Self::ScaledRadius { .. } => "scaled-radius",
            Self::AngleWindow => "angle-window",
        }
    }

    /// Evaluate the selected model for `planet` at `time_days`.
    pub fn evaluate(self, planet: &PlanetRecord, time_days: f64) -> TransitSample {
        match self {
            Self::ScaledRadius { phase_offset_rad } => {
                let r = scaled_radius::evaluate(planet, time_days, phase_offset_rad);
                TransitSample {
                    time_days,
                    flux: r.flux,
                    is_transiting: r.is_transiting,
                    angle_deg: angle_degrees(r.position.angle_rad),
                }
            }
            Self::AngleWindow => {
                let r = angle_window::evaluate(planet, time_days);
                TransitSample {
                    time_days,
                    flux: r.flux,
                    is_transiting: r.is_transiting,
                    angle_deg: r.angle_deg,
                }
            }
        }
    }
}

impl Display for TransitModel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TransitModel {
    type Err = String;

    /// Parses the model name. A scaled-radius model parsed this way has no
    /// phase offset.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "scaled-radius" | "scaled" | "a" => Ok(Self::scaled_radius()),
            "angle-window" | "window" | "b" => Ok(Self::AngleWindow),
            _ => Err(format!(
                "unknown transit model: {s} (expected scaled-radius or angle-window)"
            )),
        }
    }
}

/// One point of a light curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TransitSample {
    /// Evaluation time in days.
    pub time_days: f64,
    /// Normalized flux, 1 = unobstructed. Negative when the depth exceeds 1.
    pub flux: f64,
    /// Whether the model reports a transit at this time.
    pub is_transiting: bool,
    /// Orbital angle in degrees [0, 360), including any phase offset.
    pub angle_deg: f64,
}
