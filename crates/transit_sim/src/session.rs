//! Two-planet simulation session.
//!
//! [`Session`] is the single owner of the clock. It holds two planet slots,
//! the overlay flag and the ticker, and turns user actions and ticks into
//! clock transitions. Views read from it through [`Session::readout`] and
//! [`Session::plot_frame`]; neither mutates anything.

use std::time::{Duration, Instant};

use log::{debug, info};
use serde::Serialize;
use transit_catalog::PlanetRecord;
use transit_model::{ScaleInfo, TransitModel, angle_window, scale_info, transit_depth};
use transit_search::{LightCurveConfig, sample};

use crate::clock::SimulationClock;
use crate::config::SessionConfig;
use crate::error::SimError;
use crate::ticker::Ticker;
use crate::view::{FluxAxis, Layout, PlotCurve, PlotFrame, PlotWindow};

/// One of the two planet selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    First,
    Second,
}

impl Slot {
    pub const ALL: [Slot; 2] = [Slot::First, Slot::Second];

    fn index(self) -> usize {
        match self {
            Slot::First => 0,
            Slot::Second => 1,
        }
    }
}

/// Numeric orbital state of one selected planet at the current time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Readout {
    /// Slot the planet is selected in.
    pub slot: Slot,
    /// Catalog identifier.
    pub planet_id: &'static str,
    /// Display name.
    pub planet_name: &'static str,
    /// Simulated time in days.
    pub time_days: f64,
    /// x offset from the star centre in AU.
    pub x_au: f64,
    /// y offset from the star centre in AU.
    pub y_au: f64,
    /// Orbital angle in degrees [0, 360).
    pub angle_deg: f64,
    /// Angle-window flux, negative when the depth exceeds 1.
    pub flux: f64,
    /// Whether the angle lies in the transit window.
    pub is_transiting: bool,
    /// (Rp/Rs)² as a fraction.
    pub transit_depth: f64,
    /// Depth as a percentage.
    pub depth_percent: f64,
    /// Rp / Rs in catalog units.
    pub radius_ratio: f64,
    /// Real-scale geometry of the system.
    pub scale: ScaleInfo,
}

/// Top-level controller for a two-planet comparison.
#[derive(Debug)]
pub struct Session {
    clock: SimulationClock,
    selections: [Option<PlanetRecord>; 2],
    overlay: bool,
    curve_step_days: f64,
    ticker: Ticker,
}

fn resolve(id: Option<&str>) -> Result<Option<PlanetRecord>, SimError> {
    match id {
        None => Ok(None),
        Some(id) => transit_catalog::lookup(id)
            .map(Some)
            .ok_or_else(|| SimError::UnknownPlanet(id.to_string())),
    }
}

impl Session {
    /// Build a paused session from `config`.
    pub fn new(config: &SessionConfig) -> Result<Self, SimError> {
        config.validate().map_err(SimError::InvalidConfig)?;
        let mut clock = SimulationClock::new().with_days_per_tick(config.days_per_tick);
        clock.set_speed(config.speed);
        clock.set_time(config.start_time_days);
        let selections = [
            resolve(config.first_planet.as_deref())?,
            resolve(config.second_planet.as_deref())?,
        ];
        debug!(
            "session created: t={} speed={} overlay={}",
            config.start_time_days, config.speed, config.overlay
        );
        Ok(Self {
            clock,
            selections,
            overlay: config.overlay,
            curve_step_days: config.curve_step_days,
            ticker: Ticker::new(config.tick_interval()),
        })
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    pub fn overlay(&self) -> bool {
        self.overlay
    }

    /// Whether the ticker is armed. True exactly while playing.
    pub fn is_ticking(&self) -> bool {
        self.ticker.is_active()
    }

    pub fn selection(&self, slot: Slot) -> Option<&PlanetRecord> {
        self.selections[slot.index()].as_ref()
    }

    /// Put planet `id` in `slot`, or clear the slot with `None`.
    ///
    /// An unknown identifier leaves the slot unchanged.
    pub fn select(&mut self, slot: Slot, id: Option<&str>) -> Result<(), SimError> {
        let planet = resolve(id)?;
        info!("{slot:?} slot: {}", planet.map_or("none", |p| p.id));
        self.selections[slot.index()] = planet;
        Ok(())
    }

    pub fn play(&mut self) {
        if self.clock.play() {
            self.ticker.start();
            info!("playing from t={}", self.clock.current_time_days());
        }
    }

    pub fn pause(&mut self) {
        if self.clock.pause() {
            self.ticker.cancel();
            info!("paused at t={}", self.clock.current_time_days());
        }
    }

    pub fn reset(&mut self) {
        self.clock.reset();
        self.ticker.cancel();
        info!("reset");
    }

    pub fn set_time(&mut self, time_days: f64) {
        self.clock.set_time(time_days);
    }

    /// Change speed. A running ticker is restarted.
    pub fn set_speed(&mut self, speed: f64) {
        self.clock.set_speed(speed);
        if self.clock.is_playing() {
            self.ticker.start();
        }
        debug!("speed set to {speed}");
    }

    pub fn set_overlay(&mut self, overlay: bool) {
        self.overlay = overlay;
    }

    /// Wait up to `timeout` for one tick and apply it.
    ///
    /// Returns whether the clock advanced. Returns `false` immediately when
    /// paused.
    pub fn wait_tick(&mut self, timeout: Duration) -> bool {
        if !self.clock.is_playing() {
            return false;
        }
        self.ticker.wait(timeout) && self.clock.tick()
    }

    /// Apply ticks as they arrive for `duration` of wall time, or until
    /// paused. Returns the number of ticks applied.
    ///
    /// A duration too large to add to the current instant (such as
    /// `Duration::MAX`) means no deadline.
    pub fn run_for(&mut self, duration: Duration) -> usize {
        self.run_with(duration, |_| {})
    }

    /// Like [`run_for`](Session::run_for), calling `on_tick` after every
    /// applied tick. The callback may pause the session to stop early.
    pub fn run_with<F>(&mut self, duration: Duration, mut on_tick: F) -> usize
    where
        F: FnMut(&mut Session),
    {
        let deadline = Instant::now().checked_add(duration);
        let mut ticks = 0;
        while self.clock.is_playing() {
            let timeout = match deadline {
                Some(deadline) => {
                    let now = Instant::now();
                    if now >= deadline {
                        break;
                    }
                    deadline - now
                }
                None => self.ticker.interval().saturating_mul(2),
            };
            if self.wait_tick(timeout) {
                ticks += 1;
                on_tick(self);
            }
        }
        debug!("applied {ticks} tick(s), t={}", self.clock.current_time_days());
        ticks
    }

    /// Angle-window state of the planet in `slot` at the current time.
    ///
    /// `None` when the slot is empty.
    pub fn readout(&self, slot: Slot) -> Option<Readout> {
        let planet = self.selection(slot)?;
        let t = self.clock.current_time_days();
        let w = angle_window::evaluate(planet, t);
        let depth = transit_depth(planet);
        Some(Readout {
            slot,
            planet_id: planet.id,
            planet_name: planet.name,
            time_days: t,
            x_au: w.position.x_au,
            y_au: w.position.y_au,
            angle_deg: w.angle_deg,
            flux: w.flux,
            is_transiting: w.is_transiting,
            transit_depth: depth,
            depth_percent: depth * 100.0,
            radius_ratio: planet.radius_ratio(),
            scale: scale_info(planet),
        })
    }

    /// Light-curve plot data at the current time.
    pub fn plot_frame(&self) -> Result<PlotFrame, SimError> {
        let t = self.clock.current_time_days();
        let selected: Vec<(Slot, &PlanetRecord)> = Slot::ALL
            .iter()
            .filter_map(|&slot| self.selection(slot).map(|p| (slot, p)))
            .collect();

        let max_period = selected
            .iter()
            .map(|(_, p)| p.period_days)
            .fold(0.0, f64::max);
        let window = PlotWindow::around(t, max_period);
        let depths: Vec<f64> = selected.iter().map(|(_, p)| transit_depth(p)).collect();
        let flux_axis = FluxAxis::for_depths(&depths);

        let config = LightCurveConfig::new(window.start_days, window.end_days)
            .with_step(self.curve_step_days);
        let curves = selected
            .iter()
            .map(|&(slot, p)| {
                Ok(PlotCurve {
                    slot,
                    planet_id: p.id,
                    planet_name: p.name,
                    samples: sample(p, TransitModel::AngleWindow, &config)?,
                })
            })
            .collect::<Result<Vec<_>, SimError>>()?;

        Ok(PlotFrame {
            current_time_days: t,
            time_ticks: window.ticks(),
            flux_ticks: flux_axis.ticks(),
            cursor: window.cursor_fraction(t),
            window,
            flux_axis,
            layout: Layout::from_overlay(self.overlay),
            curves,
        })
    }
}
