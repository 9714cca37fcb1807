//! Error types for light-curve sampling and transit search.

use thiserror::Error;

/// Errors from sampling or search configuration.
///
/// The transit models themselves never fail; only the parameters that shape
/// a sampling run are checked.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum SearchError {
    /// A configuration field is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
    /// The time span would produce more samples than allowed.
    #[error("{requested:.0} samples requested, at most {max} allowed")]
    TooManySamples { requested: f64, max: usize },
    /// The time span is NaN or infinite, usually from a zero or non-finite period.
    #[error("search span is not finite: [{start}, {end}]")]
    NonFiniteSpan { start: f64, end: f64 },
}
