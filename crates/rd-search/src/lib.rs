//! `rd-search`: route search for a single vehicle.
//!
//! Given a vehicle, its origin and a catastrophe, a planner produces the
//! timed operation sequence that gets the vehicle there before the deadline
//! and then shuttles supplies from the nearest depot until the demand is met
//! or time runs out.
//!
//! Every planner implements [`RoutePlanner`].  [`SearchStrategy`] is the
//! closed set of built-in planners and itself implements the trait, so
//! callers usually just pick a variant.
//!
//! | Strategy | Frontier                                   |
//! |----------|--------------------------------------------|
//! | `bfs`    | FIFO, node settled on first dequeue        |
//! | `ucs`    | min elapsed time                           |
//! | `greedy` | min heuristic                              |
//! | `astar`  | min elapsed time + heuristic               |
//!
//! Search never mutates the network or the caller's vehicle: each frontier
//! entry owns a scratch copy of both the vehicle and its operation list.
//!
//! # Feature flags
//!
//! | Flag      | Effect                                          |
//! |-----------|-------------------------------------------------|
//! | `fx-hash` | FxHash instead of SipHash for settled-node sets |

pub mod best_first;
pub mod bfs;
pub mod error;
pub mod plan;
pub mod planner;
mod shuttle;
mod timeline;

#[cfg(test)]
mod tests;

pub use best_first::{BestFirstPlanner, Priority};
pub use bfs::BreadthFirstPlanner;
pub use error::{SearchError, SearchResult};
pub use plan::{PlanRequest, RoutePlan, SearchContext};
pub use planner::{RoutePlanner, SearchStrategy, plan_by_name};

#[cfg(feature = "fx-hash")]
pub(crate) type NodeSet = rustc_hash::FxHashSet<rd_core::NodeId>;
#[cfg(not(feature = "fx-hash"))]
pub(crate) type NodeSet = std::collections::HashSet<rd_core::NodeId>;
