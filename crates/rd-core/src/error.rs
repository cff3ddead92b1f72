//! Planner-wide base error type.
//!
//! Sub-crates define their own error enums and wrap `RdError` as one variant
//! via `#[from]` when they need to surface a core failure.

use thiserror::Error;

use crate::NodeId;

/// The top-level error type for `rd-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum RdError {
    #[error("node {0} not found")]
    NodeNotFound(NodeId),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for `rd-core`.
pub type RdResult<T> = Result<T, RdError>;
