//! Network-subsystem error type.

use thiserror::Error;

use rd_core::RdError;

/// Errors produced by `rd-network`.
#[derive(Debug, Error)]
pub enum NetworkError {
    #[error("node {0:?} not found in network")]
    UnknownNode(String),

    #[error("node {0:?} added twice")]
    DuplicateNode(String),

    #[error("edge {from:?} -> {to:?} has non-positive {what}")]
    InvalidEdge {
        from: String,
        to:   String,
        what: &'static str,
    },

    #[error(transparent)]
    Core(#[from] RdError),
}

pub type NetworkResult<T> = Result<T, NetworkError>;
