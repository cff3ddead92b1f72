//! `rd-mission`: assignment and the mission execution loop.
//!
//! # Tick loop
//!
//! ```text
//! plan at tick 0 (search every catastrophe × vehicle pair, assign greedily)
//! loop:
//!   ⓪ Halt?    `max_ticks` reached → Halted.
//!   ① Destroy  apply every node/link destruction scheduled for this tick;
//!              if anything actually went, discard pending operations
//!              (moves already under way on a standing road excepted) and
//!              plan again from the current state.
//!   ② Execute  apply every pending operation stamped with this tick, in
//!              (time, kind rank) order.
//!   ③ Age      perishable cargo loses one minute of shelf life.
//!   ④ Stop?    all catastrophes resolved → Resolved;
//!              all deadlines passed     → Expired.
//! ```
//!
//! Vehicles move by teleport-at-arrival: a vehicle stands at the node of its
//! last executed move.
//!
//! A [`Mission`] keeps its [`Scenario`] as an untouched baseline and runs
//! each call against a fresh clone, so runs under different strategies start
//! from identical state.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                              |
//! |------------|-----------------------------------------------------|
//! | `parallel` | Route searches of a planning round run on Rayon.    |
//! | `fx-hash`  | Forwarded to `rd-search`.                           |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! let scenario = ScenarioBuilder::new("city", network)
//!     .vehicle("car-1", "A", "car")
//!     .catastrophe("B", 600, [(SupplyKind::Food, 10)])
//!     .build()?;
//! let report = Mission::new(scenario, MissionConfig::default())
//!     .run(SearchStrategy::Ucs, &mut NoopObserver)?;
//! ```

pub mod assign;
pub mod config;
pub mod error;
pub mod mission;
pub mod observer;
mod planning;
pub mod report;
pub mod scenario;


pub use assign::{Assignment, Candidate, assign};
pub use config::MissionConfig;
pub use error::{MissionError, MissionResult};
pub use mission::Mission;
pub use observer::{MissionObserver, NoopObserver};
pub use report::{CatastropheReport, CatastropheStatus, MissionReport, Outcome};
pub use scenario::{Scenario, ScenarioBuilder};
