//! Session configuration.
//!
//! Loaded from JSON. Every field has a default, so a partial file (or `{}`)
//! is valid; unknown fields are rejected to catch typos.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use transit_search::DEFAULT_STEP_DAYS;

use crate::clock::{DAYS_PER_TICK, TICK_INTERVAL};
use crate::error::SimError;

/// Startup settings for a [`Session`](crate::Session).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    /// Real-time cadence between ticks in milliseconds (default 50).
    pub tick_interval_ms: u64,
    /// Simulated days per tick at speed 1 (default 0.1).
    pub days_per_tick: f64,
    /// Initial speed multiplier (default 1).
    pub speed: f64,
    /// Initial simulated time in days (default 0).
    pub start_time_days: f64,
    /// Superimpose both curves instead of stacking them (default false).
    pub overlay: bool,
    /// Planet identifier for the first slot.
    pub first_planet: Option<String>,
    /// Planet identifier for the second slot.
    pub second_planet: Option<String>,
    /// Sampling step for plotted curves in days (default 0.01).
    pub curve_step_days: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: TICK_INTERVAL.as_millis() as u64,
            days_per_tick: DAYS_PER_TICK,
            speed: 1.0,
            start_time_days: 0.0,
            overlay: false,
            first_planet: None,
            second_planet: None,
            curve_step_days: DEFAULT_STEP_DAYS,
        }
    }
}

impl SessionConfig {
    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, SimError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate().map_err(SimError::InvalidConfig)?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file.
    pub fn load(path: &Path) -> Result<Self, SimError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.tick_interval_ms == 0 {
            return Err("tick_interval_ms must be > 0");
        }
        if !self.days_per_tick.is_finite() || self.days_per_tick <= 0.0 {
            return Err("days_per_tick must be positive");
        }
        if !self.speed.is_finite() || self.speed <= 0.0 {
            return Err("speed must be positive");
        }
        if !self.start_time_days.is_finite() {
            return Err("start_time_days must be finite");
        }
        if !self.curve_step_days.is_finite() || self.curve_step_days <= 0.0 {
            return Err("curve_step_days must be positive");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        let c = SessionConfig::default();
        assert_eq!(c.tick_interval(), Duration::from_millis(50));
        assert_eq!(c.days_per_tick, 0.1);
        assert_eq!(c.speed, 1.0);
        assert!(!c.overlay);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn empty_object_is_default() {
        let c = SessionConfig::from_json_str("{}").unwrap();
        assert_eq!(c, SessionConfig::default());
    }

    #[test]
    fn partial_document() {
        let c = SessionConfig::from_json_str(
            r#"{ "speed": 2.5, "overlay": true, "first_planet": "kepler-7b" }"#,
        )
        .unwrap();
        assert_eq!(c.speed, 2.5);
        assert!(c.overlay);
        assert_eq!(c.first_planet.as_deref(), Some("kepler-7b"));
        assert_eq!(c.second_planet, None);
        assert_eq!(c.tick_interval_ms, 50);
    }

    #[test]
    fn unknown_field_is_a_parse_error() {
        let err = SessionConfig::from_json_str(r#"{ "sped": 2.0 }"#).unwrap_err();
        assert!(matches!(err, SimError::Json(_)));
    }

    #[test]
    fn zero_speed_is_invalid() {
        let err = SessionConfig::from_json_str(r#"{ "speed": 0.0 }"#).unwrap_err();
        assert!(matches!(err, SimError::InvalidConfig("speed must be positive")));
    }

    #[test]
    fn zero_interval_is_invalid() {
        let c = SessionConfig {
            tick_interval_ms: 0,
            ..Default::default()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = SessionConfig::load(Path::new("/nonexistent/session.json")).unwrap_err();
        assert!(matches!(err, SimError::Io(_)));
    }
}
