//! Error types for the storefront shell
//!
//! The presentational core has very few failure modes: a size token that
//! does not name a known variant, a malformed site configuration, or a
//! logging subscriber that cannot be installed. Broken images are a
//! presentation state, not an error, and have no variant here.

use thiserror::Error;

/// Errors surfaced by the storefront shell to its integration layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UiError {
    /// A textual size token did not name a `SizeVariant`
    #[error("Unknown size variant: '{0}' (expected small, medium or large)")]
    UnknownSizeVariant(String),

    /// The site configuration could not be parsed
    #[error("Invalid site configuration: {0}")]
    InvalidConfig(String),

    /// A theme breakpoint is non-positive or out of order
    #[error("Invalid breakpoint '{name}': {value}em")]
    InvalidBreakpoint { name: &'static str, value: String },

    /// The tracing subscriber could not be installed
    #[error("Logging initialization failed: {0}")]
    Logging(String),
}

/// Result type alias for storefront operations
pub type Result<T> = std::result::Result<T, UiError>;
