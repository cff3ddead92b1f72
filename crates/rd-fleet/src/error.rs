use thiserror::Error;

use rd_core::Fuel;

use crate::SupplyKind;

/// Errors produced by resource-model state transitions.
///
/// Resource exhaustion is always an error, never a silent clamp: clamping
/// would break `cargo == sum(contents)`.
#[derive(Debug, Error)]
pub enum FleetError {
    #[error("unknown vehicle category {0:?}")]
    UnknownCategory(String),

    #[error("unknown supply kind {0:?}")]
    UnknownSupplyKind(String),

    #[error("cannot unload {requested} {kind}: only {available} on board")]
    InsufficientCargo {
        kind:      SupplyKind,
        requested: u32,
        available: u32,
    },

    #[error("cannot load {requested} {kind}: only {free} free capacity")]
    CargoOverflow {
        kind:      SupplyKind,
        requested: u32,
        free:      u32,
    },

    #[error("cannot merge {got} into {expected}")]
    KindMismatch {
        expected: SupplyKind,
        got:      SupplyKind,
    },

    #[error("cannot split {requested} out of a supply of {available}")]
    SplitTooLarge {
        requested: u32,
        available: u32,
    },

    #[error("travel needs {needed}, tank holds {available}")]
    InsufficientFuel {
        needed:    Fuel,
        available: Fuel,
    },
}

pub type FleetResult<T> = Result<T, FleetError>;
