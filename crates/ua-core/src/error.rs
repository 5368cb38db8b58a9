//! Errors raised by `ua-core` itself (configuration validation).
//!
//! `ua-sim` wraps `CoreError` via `#[from]`; lookups report through each
//! crate's own `NotFound` variants.

use thiserror::Error;

/// Invalid `SimConfig` values.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `ua-core`.
pub type CoreResult<T> = Result<T, CoreError>;
