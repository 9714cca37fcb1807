//! Error type for session setup and control.

use thiserror::Error;
use transit_search::SearchError;

/// Errors raised while configuring or driving a [`Session`](crate::Session).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SimError {
    /// A session configuration field is out of range.
    #[error("invalid session configuration: {0}")]
    InvalidConfig(&'static str),
    /// A selection named an identifier that is not in the catalog.
    #[error("unknown planet '{0}'")]
    UnknownPlanet(String),
    #[error("failed to read session configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse session configuration: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Search(#[from] SearchError),
}
