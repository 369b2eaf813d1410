//! Core error type.
//!
//! Sub-crates define their own error enums and either convert into
//! `CoreError` via `From` impls or wrap it as one variant.  Prefer whichever
//! keeps error sites clean.

use thiserror::Error;

use crate::RouteId;

/// The top-level error type for `sr-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A route with fewer than 2 coordinates has no segments; scoring it
    /// silently yields a perfect score, so strict callers reject it up front.
    #[error("route {0} is degenerate: {1} coordinate(s), need at least 2")]
    DegenerateRoute(RouteId, usize),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `sr-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
