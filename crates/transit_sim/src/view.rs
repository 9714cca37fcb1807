//! Plot geometry for the light-curve view.
//!
//! Computes what a renderer needs to draw the two-planet light-curve plot:
//! the visible time window, the flux axis range, tick values and the layout.
//! Nothing here draws.

use serde::Serialize;
use transit_model::TransitSample;

use crate::session::Slot;

/// Shortest visible time range in days.
pub const MIN_TIME_RANGE_DAYS: f64 = 1.0;

/// Visible time range as a fraction of the longest selected period.
pub const PERIOD_FRACTION_SHOWN: f64 = 0.1;

/// Headroom below `1 - depth`, in units of the deepest depth.
pub const FLUX_MARGIN_BELOW: f64 = 1.5;

/// Headroom above 1, in units of the deepest depth.
pub const FLUX_MARGIN_ABOVE: f64 = 0.2;

/// Narrowest flux span the axis is allowed to show.
pub const MIN_FLUX_SPAN: f64 = 0.01;

/// Intervals between labelled ticks on the time axis.
pub const TIME_TICK_INTERVALS: usize = 5;

/// Intervals between labelled ticks on the flux axis.
pub const FLUX_TICK_INTERVALS: usize = 4;

/// Visible span of simulated time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlotWindow {
    /// Left edge in days, never below 0.
    pub start_days: f64,
    /// Right edge in days.
    pub end_days: f64,
    /// `end_days - start_days`.
    pub range_days: f64,
}

impl PlotWindow {
    /// Window centred on `current_days`, never starting before 0.
    ///
    /// The range is a tenth of `max_period_days`, but at least one day.
    pub fn around(current_days: f64, max_period_days: f64) -> Self {
        let range_days = MIN_TIME_RANGE_DAYS.max(max_period_days * PERIOD_FRACTION_SHOWN);
        let start_days = (current_days - range_days / 2.0).max(0.0);
        Self {
            start_days,
            end_days: start_days + range_days,
            range_days,
        }
    }

    /// Evenly spaced label times from start to end inclusive.
    pub fn ticks(&self) -> Vec<f64> {
        (0..=TIME_TICK_INTERVALS)
            .map(|i| self.start_days + (i as f64 / TIME_TICK_INTERVALS as f64) * self.range_days)
            .collect()
    }

    /// Horizontal position of `time_days` in `[0, 1]`, or `None` if it is
    /// outside the window.
    pub fn cursor_fraction(&self, time_days: f64) -> Option<f64> {
        let fraction = (time_days - self.start_days) / self.range_days;
        (0.0..=1.0).contains(&fraction).then_some(fraction)
    }
}

/// Vertical flux range of the plot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FluxAxis {
    /// Bottom of the axis in normalized flux.
    pub min: f64,
    /// Top of the axis in normalized flux.
    pub max: f64,
}

impl FluxAxis {
    /// Range that fits the deepest of `depths` with margins.
    ///
    /// With no depths the axis collapses onto 1 and is then widened to the
    /// minimum span.
    pub fn for_depths(depths: &[f64]) -> Self {
        let max_depth = depths.iter().copied().fold(0.0, f64::max);
        let mut min = 1.0 - max_depth * FLUX_MARGIN_BELOW;
        let mut max = 1.0 + max_depth * FLUX_MARGIN_ABOVE;
        if max - min < MIN_FLUX_SPAN {
            let centre = (min + max) / 2.0;
            min = centre - MIN_FLUX_SPAN / 2.0;
            max = centre + MIN_FLUX_SPAN / 2.0;
        }
        Self { min, max }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Evenly spaced label values from min to max inclusive.
    pub fn ticks(&self) -> Vec<f64> {
        (0..=FLUX_TICK_INTERVALS)
            .map(|i| self.min + (i as f64 / FLUX_TICK_INTERVALS as f64) * self.span())
            .collect()
    }
}

/// How two curves share the plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// Both curves on one set of axes.
    Overlay,
    /// Each curve in its own band, first above second.
    Stacked,
}

impl Layout {
    pub fn from_overlay(overlay: bool) -> Self {
        if overlay {
            Self::Overlay
        } else {
            Self::Stacked
        }
    }
}

/// One planet's sampled curve in the plot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotCurve {
    pub slot: Slot,
    pub planet_id: &'static str,
    pub planet_name: &'static str,
    /// Angle-window samples across the window.
    pub samples: Vec<TransitSample>,
}

/// Everything needed to draw the light-curve plot for one instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotFrame {
    /// Clock time the frame was built at, in days.
    pub current_time_days: f64,
    pub window: PlotWindow,
    pub flux_axis: FluxAxis,
    pub layout: Layout,
    /// Time-axis label values in days.
    pub time_ticks: Vec<f64>,
    /// Flux-axis label values.
    pub flux_ticks: Vec<f64>,
    /// Horizontal position of the current-time marker, if visible.
    pub cursor: Option<f64>,
    /// Curves of the selected planets, first slot first. Empty when nothing
    /// is selected.
    pub curves: Vec<PlotCurve>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn window_minimum_one_day() {
        let w = PlotWindow::around(5.0, 3.5247);
        assert_eq!(w.range_days, 1.0);
        assert_eq!(w.start_days, 4.5);
        assert_eq!(w.end_days, 5.5);
    }

    #[test]
    fn window_tenth_of_long_period() {
        let w = PlotWindow::around(100.0, 40.0);
        assert_abs_diff_eq!(w.range_days, 4.0, epsilon = 1e-12);
        assert_abs_diff_eq!(w.start_days, 98.0, epsilon = 1e-12);
    }

    #[test]
    fn window_never_starts_before_zero() {
        let w = PlotWindow::around(0.2, 0.0);
        assert_eq!(w.start_days, 0.0);
        assert_eq!(w.end_days, 1.0);
    }

    #[test]
    fn window_ticks() {
        let w = PlotWindow::around(0.0, 0.0);
        let t = w.ticks();
        assert_eq!(t.len(), 6);
        assert_eq!(t[0], 0.0);
        assert_abs_diff_eq!(t[5], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn cursor_inside_and_outside() {
        let w = PlotWindow::around(0.2, 0.0);
        assert_abs_diff_eq!(w.cursor_fraction(0.2).unwrap(), 0.2, epsilon = 1e-12);
        assert!(w.cursor_fraction(1.5).is_none());
        assert!(w.cursor_fraction(-0.1).is_none());
    }

    #[test]
    fn flux_axis_from_deepest() {
        let a = FluxAxis::for_depths(&[0.01, 0.02]);
        assert_abs_diff_eq!(a.min, 0.97, epsilon = 1e-12);
        assert_abs_diff_eq!(a.max, 1.004, epsilon = 1e-12);
    }

    #[test]
    fn flux_axis_widened_when_narrow() {
        let a = FluxAxis::for_depths(&[0.001]);
        assert_abs_diff_eq!(a.span(), MIN_FLUX_SPAN, epsilon = 1e-12);
        let centre = ((1.0 - 0.0015) + (1.0 + 0.0002)) / 2.0;
        assert_abs_diff_eq!((a.min + a.max) / 2.0, centre, epsilon = 1e-12);
    }

    #[test]
    fn flux_axis_without_depths() {
        let a = FluxAxis::for_depths(&[]);
        assert_abs_diff_eq!(a.min, 0.995, epsilon = 1e-12);
        assert_abs_diff_eq!(a.max, 1.005, epsilon = 1e-12);
    }

    #[test]
    fn flux_axis_ticks() {
        let a = FluxAxis { min: 0.0, max: 2.0 };
        assert_eq!(a.ticks(), vec![0.0, 0.5, 1.0, 1.5, 2.0]);
    }

    #[test]
    fn layout_from_flag() {
        assert_eq!(Layout::from_overlay(true), Layout::Overlay);
        assert_eq!(Layout::from_overlay(false), Layout::Stacked);
    }
}
