//! Error types for the roast gateway
//!
//! Handler-level failures map straight to HTTP error envelopes in
//! `api::roast` and never pass through this type; `Error` covers the
//! configuration and startup paths only.

use thiserror::Error;

/// Result type alias for gateway operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the roast gateway
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}
