//! `rd-network`: transport network, scheduled destruction, and heuristics.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                 |
//! |-----------------|----------------------------------------------------------|
//! | [`network`]     | `Network` (CSR + liveness masks), `NetworkBuilder`       |
//! | [`destruction`] | `Destructible`, `DestructionSchedule`                    |
//! | [`heuristics`]  | `HeuristicTable` read by best-first planners             |
//! | [`error`]       | `NetworkError`, `NetworkResult<T>`                       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public value types.     |

pub mod destruction;
pub mod error;
pub mod heuristics;
pub mod network;

#[cfg(test)]
mod tests;

pub use destruction::{DestructionSchedule, Destructible};
pub use error::{NetworkError, NetworkResult};
pub use heuristics::HeuristicTable;
pub use network::{Edge, Network, NetworkBuilder};
