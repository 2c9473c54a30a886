//! Error taxonomy for page map construction.
//!
//! Lister I/O failures are fatal and abort the whole call. Structural
//! nesting issues (missing root, orphans) are not errors; they surface as
//! diagnostics on the nest outcome.

use thiserror::Error;

/// Errors surfaced by the page map pipeline.
#[derive(Debug, Error)]
pub enum PageMapError {
    /// I/O or traversal failure raised by the directory lister.
    #[error("scan failed: {0}")]
    Scan(#[from] walkdir::Error),

    /// Two files derived the same route under the fail-fast merge policy.
    #[error("route collision at {route}: {existing} and {incoming}")]
    RouteCollision {
        route: String,
        existing: String,
        incoming: String,
    },

    /// Configuration composition or validation failure.
    #[error("config error: {0}")]
    ConfigError(String),
}

impl From<config::ConfigError> for PageMapError {
    fn from(error: config::ConfigError) -> Self {
        PageMapError::ConfigError(error.to_string())
    }
}
