//! Interactive side of the transit visualizer.
//!
//! This crate provides:
//! - [`SimulationClock`]: play/pause/reset/seek/speed transitions and ticks
//! - [`Ticker`]: a cancellable repeating timer that paces ticks
//! - [`Session`]: owner of the clock and two planet slots, producing orbit
//!   readouts and light-curve plot frames
//! - [`SessionConfig`]: JSON-loadable startup settings

pub mod clock;
pub mod config;
pub mod error;
pub mod session;
pub mod ticker;
pub mod view;

pub use clock::{DAYS_PER_TICK, PlaybackState, SimulationClock, TICK_INTERVAL};
pub use config::SessionConfig;
pub use error::SimError;
pub use session::{Readout, Session, Slot};
pub use ticker::Ticker;
pub use view::{FluxAxis, Layout, PlotCurve, PlotFrame, PlotWindow};
