//! Circular-orbit transit models.
//!
//! This crate provides:
//! - Orbital position on a circular orbit from period and semi-major axis
//! - The scaled-radius model: inflated-radius overlap test, hard-step flux,
//!   transit duration and analytic next-transit time
//! - The angle-window model: fixed ±10° window with a raised-cosine dip, and
//!   real-scale diagnostics
//! - [`TransitModel`], the strategy enum callers use to pick between them
//!
//! Every function here is pure. Degenerate inputs (zero stellar radius or
//! period) are not rejected and surface as NaN or infinite values.

pub mod angle_window;
pub mod constants;
pub mod model;
pub mod orbit;
pub mod scaled_radius;

pub use angle_window::{ScaleInfo, WindowTransit, scale_info, transit_fraction};
pub use constants::{
    AU_KM, EARTH_RADIUS_KM, SOLAR_RADIUS_KM, planet_radius_au, star_radius_au, transit_depth,
};
pub use model::{TransitModel, TransitSample};
pub use orbit::{OrbitPosition, angle_degrees, angular_velocity, orbit_position};
pub use scaled_radius::{
    APPROACH_PHASE_OFFSET_RAD, ScaledRadii, ScaledTransit, next_transit_time, scaled_radii,
    transit_duration,
};
