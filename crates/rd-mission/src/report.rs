//! End-of-run summary.

use std::fmt;

use rd_core::{CatastropheId, Fuel, NodeId, Tick};
use rd_fleet::{Action, Operation, SupplyMap};
use rd_search::SearchStrategy;

/// How the loop stopped.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Every catastrophe was resolved (trivially so if there were none).
    Resolved,
    /// Every deadline passed first.
    Expired,
    /// `max_ticks` was reached.
    Halted,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Outcome::Resolved => "resolved",
            Outcome::Expired => "expired",
            Outcome::Halted => "halted",
        })
    }
}

/// Final state of one catastrophe.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CatastropheStatus {
    Resolved { at: Tick },
    /// Had a vehicle at some point but demand remains.
    Unresolved { outstanding: SupplyMap },
    /// No planning round ever found a vehicle for it.
    Unassigned { outstanding: SupplyMap },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatastropheReport {
    pub id:       CatastropheId,
    pub node:     NodeId,
    pub name:     String,
    pub deadline: Tick,
    pub status:   CatastropheStatus,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MissionReport {
    /// `None` when run with a custom planner.
    pub strategy:   Option<SearchStrategy>,
    pub outcome:    Outcome,
    pub final_tick: Tick,
    /// Planning rounds triggered by destruction (the initial round excluded).
    pub replans:    u32,
    /// Every executed operation, in execution order.
    pub executed:   Vec<Operation>,
    pub statuses:   Vec<CatastropheReport>,
}

impl MissionReport {
    pub fn resolved_count(&self) -> usize {
        self.statuses
            .iter()
            .filter(|s| matches!(s.status, CatastropheStatus::Resolved { .. }))
            .count()
    }

    /// Fuel burnt by every executed move.
    pub fn fuel_consumed(&self) -> Fuel {
        self.executed
            .iter()
            .filter_map(|op| match op.action {
                Action::Move { fuel_consumed } => Some(fuel_consumed),
                _ => None,
            })
            .sum()
    }
}
