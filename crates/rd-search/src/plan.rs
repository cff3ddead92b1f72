//! Search inputs and outputs.

use rd_core::{Fuel, NodeId, Tick, VehicleId};
use rd_fleet::{Catastrophe, DepotStock, Operation, SupplyMap, Vehicle};
use rd_network::{HeuristicTable, Network};

/// Read-only world state a planner searches over.
#[derive(Copy, Clone, Debug)]
pub struct SearchContext<'a> {
    pub network:    &'a Network,
    pub depots:     &'a DepotStock,
    /// Required by the greedy and A* strategies only.
    pub heuristics: Option<&'a HeuristicTable>,
}

impl<'a> SearchContext<'a> {
    pub fn new(network: &'a Network, depots: &'a DepotStock) -> Self {
        Self { network, depots, heuristics: None }
    }

    pub fn with_heuristics(mut self, heuristics: &'a HeuristicTable) -> Self {
        self.heuristics = Some(heuristics);
        self
    }
}

/// One (vehicle, catastrophe) planning query.
#[derive(Copy, Clone, Debug)]
pub struct PlanRequest<'a> {
    pub vehicle:     &'a Vehicle,
    pub catastrophe: &'a Catastrophe,
    pub origin:      NodeId,
    /// Clock value the plan starts from.  A plan starting at tick 0 opens
    /// with a `start` operation; later plans continue an existing timeline.
    pub start:       Tick,
}

/// A feasible operation sequence for one vehicle.
#[derive(Clone, Debug, PartialEq)]
pub struct RoutePlan {
    pub vehicle:       VehicleId,
    /// Ordered by completion time.
    pub operations:    Vec<Operation>,
    /// Fuel burnt by every move in the plan.
    pub fuel_consumed: Fuel,
    /// Everything the plan drops at the catastrophe.
    pub delivered:     SupplyMap,
}

impl RoutePlan {
    /// Tick of the last operation.
    pub fn finish(&self) -> Tick {
        self.operations.last().map_or(Tick::ZERO, |op| op.time)
    }

    pub fn delivered_total(&self) -> u32 {
        self.delivered.values().sum()
    }
}
