//! Simulation clock.
//!
//! Holds playback state, current time and speed. Every change goes through a
//! named transition so that one user event or one tick is exactly one state
//! change. The clock does not know about wall time; the
//! [`Ticker`](crate::Ticker) decides when `tick` is called.

use std::time::Duration;

use serde::Serialize;

/// Simulated days added per tick at speed 1.
pub const DAYS_PER_TICK: f64 = 0.1;

/// Nominal real-time cadence between ticks (20 ticks per second).
pub const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Whether the clock advances on ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackState {
    #[default]
    Paused,
    Playing,
}

/// Playback state, current time and speed of a simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SimulationClock {
    state: PlaybackState,
    current_time_days: f64,
    speed: f64,
    days_per_tick: f64,
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationClock {
    /// Paused at t = 0 with speed 1.
    pub fn new() -> Self {
        Self {
            state: PlaybackState::Paused,
            current_time_days: 0.0,
            speed: 1.0,
            days_per_tick: DAYS_PER_TICK,
        }
    }

    /// Same clock with a different time step per tick.
    pub fn with_days_per_tick(self, days_per_tick: f64) -> Self {
        Self {
            days_per_tick,
            ..self
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn current_time_days(&self) -> f64 {
        self.current_time_days
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn days_per_tick(&self) -> f64 {
        self.days_per_tick
    }

    /// Paused → Playing. Returns `false` if already playing.
    pub fn play(&mut self) -> bool {
        let changed = !self.is_playing();
        self.state = PlaybackState::Playing;
        changed
    }

    /// Playing → Paused. Returns `false` if already paused.
    pub fn pause(&mut self) -> bool {
        let changed = self.is_playing();
        self.state = PlaybackState::Paused;
        changed
    }

    /// Pause and rewind to t = 0. Speed is kept.
    pub fn reset(&mut self) {
        self.state = PlaybackState::Paused;
        self.current_time_days = 0.0;
    }

    /// Jump to `t`. Not clamped.
    pub fn set_time(&mut self, time_days: f64) {
        self.current_time_days = time_days;
    }

    pub fn set_speed(&mut self, speed: f64) {
        self.speed = speed;
    }

    /// Advance by `speed * days_per_tick` if playing.
    ///
    /// Returns whether the time changed.
    pub fn tick(&mut self) -> bool {
        if !self.is_playing() {
            return false;
        }
        self.current_time_days += self.speed * self.days_per_tick;
        true
    }
}
