//! Core error type.
//!
//! Sub-crates define their own error enums; `CoreError` only covers the
//! parsing done by the primitives in this crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for `tn-core`.
pub type CoreResult<T> = Result<T, CoreError>;
