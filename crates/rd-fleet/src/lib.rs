//! `rd-fleet`: the resource model.
//!
//! Immutable vehicle specs plus the mutable state of vehicles, supplies,
//! catastrophes, and the operations that change them.  Everything here is a
//! plain value type with structural `Clone`: planners copy a vehicle per
//! search branch instead of sharing it.  No search logic lives here.
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`spec`]        | `VehicleSpec` category table                          |
//! | [`supply`]      | `SupplyKind`, `Supply`, `SupplyMap`                   |
//! | [`cargo`]       | `Cargo` hold with capacity bookkeeping                |
//! | [`vehicle`]     | `Vehicle` fuel/cargo state transitions                |
//! | [`catastrophe`] | `Catastrophe` demand and deadline                     |
//! | [`operation`]   | `Operation`, `Action`, `OperationKind`                |
//! | [`depot`]       | `DepotStock` per-node supply stock                    |
//! | [`error`]       | `FleetError`, `FleetResult<T>`                        |

pub mod cargo;
pub mod catastrophe;
pub mod depot;
pub mod error;
pub mod operation;
pub mod spec;
pub mod supply;
pub mod vehicle;

#[cfg(test)]
mod tests;

pub use cargo::Cargo;
pub use catastrophe::Catastrophe;
pub use depot::DepotStock;
pub use error::{FleetError, FleetResult};
pub use operation::{Action, Operation, OperationKind};
pub use spec::{VEHICLE_SPECS, VehicleSpec};
pub use supply::{Supply, SupplyKind, SupplyMap};
pub use vehicle::Vehicle;
