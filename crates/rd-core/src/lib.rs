//! `rd-core`: foundational types for the relief dispatch planner.
//!
//! This crate is a dependency of every other `rd-*` crate.  It has no `rd-*`
//! dependencies and a single external one (`thiserror`, plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`ids`]       | `NodeId`, `EdgeId`, `VehicleId`, `CatastropheId`        |
//! | [`time`]      | `Tick`, `MissionClock`, minute rounding helpers         |
//! | [`transport`] | `TravelMode`, `AccessLevel`                             |
//! | [`fuel`]      | `Fuel` fixed-point litres                               |
//! | [`error`]     | `RdError`, `RdResult`                                   |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod fuel;
pub mod ids;
pub mod time;
pub mod transport;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{RdError, RdResult};
pub use fuel::Fuel;
pub use ids::{CatastropheId, EdgeId, NodeId, VehicleId};
pub use time::{MissionClock, Tick, ceil_minutes};
pub use transport::{AccessLevel, TravelMode};
