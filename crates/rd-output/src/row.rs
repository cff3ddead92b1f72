//! Plain data row types written by output backends.

use rd_fleet::Operation;
use rd_mission::{CatastropheReport, CatastropheStatus};

/// One executed operation, with names resolved for humans.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationRecord {
    pub time:         u64,
    pub kind:         &'static str,
    pub vehicle:      String,
    pub node:         String,
    pub duration_min: f64,
    /// Kind-specific detail, e.g. `food=10 water=5` or `fuel=2.40 L`.
    pub payload:      String,
}

impl OperationRecord {
    pub fn new(op: &Operation, vehicle: &str, node: &str) -> Self {
        Self {
            time:         op.time.0,
            kind:         op.kind().as_str(),
            vehicle:      vehicle.to_owned(),
            node:         node.to_owned(),
            duration_min: op.duration,
            payload:      op.action.to_string(),
        }
    }
}

/// Per-tick activity counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:       u64,
    pub operations: u64,
    pub destroyed:  u32,
    pub replanned:  bool,
}

/// Final state of one catastrophe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatastropheRow {
    pub name:        String,
    pub deadline:    u64,
    /// `resolved`, `unresolved` or `unassigned`.
    pub status:      &'static str,
    pub resolved_at: Option<u64>,
    /// Units still owed, all kinds together.
    pub outstanding: u32,
}

impl From<&CatastropheReport> for CatastropheRow {
    fn from(r: &CatastropheReport) -> Self {
        let (status, resolved_at, outstanding) = match &r.status {
            CatastropheStatus::Resolved { at } => ("resolved", Some(at.0), 0),
            CatastropheStatus::Unresolved { outstanding } => {
                ("unresolved", None, outstanding.values().sum())
            }
            CatastropheStatus::Unassigned { outstanding } => {
                ("unassigned", None, outstanding.values().sum())
            }
        };
        Self { name: r.name.clone(), deadline: r.deadline.0, status, resolved_at, outstanding }
    }
}
