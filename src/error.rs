//! Configuration errors.
//!
//! Every failure the crate can report happens while building a configuration. Layout
//! itself never fails: unmeasured geometry and degenerate viewports are handled by
//! policy, not by error.

/// Error returned when popup configuration is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The placement name is not one of the eight supported placements.
    #[error("unknown placement: {0:?}")]
    InvalidPlacement(String),

    /// The offset could not be read as a number or a `horizontal,vertical` pair.
    #[error("invalid offset {0:?} (expected a number or 'horizontal,vertical')")]
    InvalidOffset(String),

    /// The configuration document could not be parsed.
    #[error("config parse failed: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
