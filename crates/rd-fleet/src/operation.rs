//! Timestamped vehicle operations.

use std::cmp::Ordering;
use std::fmt;

use rd_core::{Fuel, NodeId, Tick, VehicleId};

use crate::SupplyMap;

/// Operation category.  Declaration order is the same-tick execution order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OperationKind {
    Start,
    Move,
    Refuel,
    Drop,
    Load,
}

impl OperationKind {
    pub fn rank(self) -> u8 {
        self as u8
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OperationKind::Start => "start",
            OperationKind::Move => "move",
            OperationKind::Refuel => "refuel",
            OperationKind::Drop => "drop",
            OperationKind::Load => "load",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind-specific payload.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    Start,
    Move { fuel_consumed: Fuel },
    Refuel { fuel: Fuel },
    Drop { supplies: SupplyMap },
    Load { supplies: SupplyMap },
}

impl Action {
    pub fn kind(&self) -> OperationKind {
        match self {
            Action::Start => OperationKind::Start,
            Action::Move { .. } => OperationKind::Move,
            Action::Refuel { .. } => OperationKind::Refuel,
            Action::Drop { .. } => OperationKind::Drop,
            Action::Load { .. } => OperationKind::Load,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let supplies = |f: &mut fmt::Formatter<'_>, m: &SupplyMap| {
            let parts: Vec<_> = m.iter().map(|(k, n)| format!("{k}={n}")).collect();
            f.write_str(&parts.join(" "))
        };
        match self {
            Action::Start => Ok(()),
            Action::Move { fuel_consumed } => write!(f, "fuel={fuel_consumed}"),
            Action::Refuel { fuel } => write!(f, "fuel={fuel}"),
            Action::Drop { supplies: m } | Action::Load { supplies: m } => supplies(f, m),
        }
    }
}

/// One scheduled, immutable vehicle action.
///
/// `time` is the tick at which the action completes (moves are stamped at
/// arrival, and `node` is then the destination).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Operation {
    pub time:     Tick,
    pub vehicle:  VehicleId,
    pub node:     NodeId,
    /// Minutes the action itself takes (0 for start/load/drop).
    pub duration: f64,
    pub action:   Action,
}

impl Operation {
    pub fn new(time: Tick, vehicle: VehicleId, node: NodeId, duration: f64, action: Action) -> Self {
        Self { time, vehicle, node, duration, action }
    }

    #[inline]
    pub fn kind(&self) -> OperationKind {
        self.action.kind()
    }

    /// Global schedule key.
    #[inline]
    pub fn order_key(&self) -> (Tick, u8) {
        (self.time, self.kind().rank())
    }

    /// Total order by `(time, kind rank)`.  Stable sorts with this keep
    /// per-vehicle order for equal keys.
    pub fn schedule_cmp(&self, other: &Self) -> Ordering {
        self.order_key().cmp(&other.order_key())
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} @ {} {}", self.time, self.vehicle, self.kind(), self.node, self.action)
    }
}
