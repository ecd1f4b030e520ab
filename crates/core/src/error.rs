//! Error types for waregrid.

use thiserror::Error;

/// Result type alias for waregrid operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while computing a layout.
///
/// Layout configuration problems fail fast through these variants.
/// Malformed backend data (floor codes, type codes) never surfaces
/// here; it is recovered with documented defaults at the call site.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid physical dimensions.
    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    InvalidConfig(String),

    /// A level index used by a placement routine has no plan entry.
    #[error("No configuration for level {0}")]
    UnknownLevel(u32),
}
