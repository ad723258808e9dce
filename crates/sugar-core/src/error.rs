//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `CoreError` as one
//! variant via `#[from]` where configuration problems can surface.

use thiserror::Error;

/// Errors raised while validating engine inputs.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `sugar-core`.
pub type CoreResult<T> = Result<T, CoreError>;
