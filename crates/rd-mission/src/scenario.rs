//! Mission baseline state and its fluent builder.

use std::collections::HashSet;

use rd_core::{NodeId, Tick, VehicleId};
use rd_fleet::{Catastrophe, DepotStock, SupplyKind, SupplyMap, Vehicle};
use rd_network::{DestructionSchedule, HeuristicTable, Network};

use crate::{MissionError, MissionResult};

/// Everything a mission starts from.
///
/// Vehicles and catastrophes are indexed by their ids, in creation order.
#[derive(Clone, Debug)]
pub struct Scenario {
    pub name:         String,
    pub network:      Network,
    pub fleet:        Vec<Vehicle>,
    /// Starting node of each vehicle.  Indexed by `VehicleId`.
    pub positions:    Vec<NodeId>,
    pub catastrophes: Vec<Catastrophe>,
    pub depots:       DepotStock,
    pub schedule:     DestructionSchedule,
    pub heuristics:   Option<HeuristicTable>,
}

impl Scenario {
    pub fn vehicle_name(&self, id: VehicleId) -> &str {
        &self.fleet[id.index()].name
    }
}

// ── ScenarioBuilder ───────────────────────────────────────────────────────────

struct PendingVehicle {
    name:     String,
    at:       String,
    category: String,
}

struct PendingCatastrophe {
    at:       String,
    deadline: u64,
    demand:   SupplyMap,
}

enum PendingDestruction {
    Node(String, u64),
    Link(String, String, u64),
}

/// Fluent builder for [`Scenario`].
///
/// Entries refer to nodes by name.  Nothing is validated until
/// [`build`](Self::build), which rejects unknown nodes, unknown vehicle
/// categories, duplicate vehicle names and two catastrophes on one node.
///
/// # Optional inputs (have defaults)
///
/// | Method             | Default                      |
/// |--------------------|------------------------------|
/// | `.depot(..)`       | every node is an unlimited depot |
/// | `.destroy_*_at(..)`| nothing is ever destroyed    |
/// | `.heuristics(t)`   | none (greedy/astar rejected) |
///
/// # Example
///
/// ```rust,ignore
/// let scenario = ScenarioBuilder::new("grid", network)
///     .vehicle("moto-1", "A", "motorcycle")
///     .catastrophe("G", 300, [(SupplyKind::Food, 150)])
///     .destroy_node_at("C", 300)
///     .build()?;
/// ```
pub struct ScenarioBuilder {
    name:         String,
    network:      Network,
    vehicles:     Vec<PendingVehicle>,
    catastrophes: Vec<PendingCatastrophe>,
    depots:       Vec<(String, SupplyMap)>,
    destruction:  Vec<PendingDestruction>,
    heuristics:   Option<HeuristicTable>,
}

impl ScenarioBuilder {
    pub fn new(name: impl Into<String>, network: Network) -> Self {
        Self {
            name: name.into(),
            network,
            vehicles: Vec::new(),
            catastrophes: Vec::new(),
            depots: Vec::new(),
            destruction: Vec::new(),
            heuristics: None,
        }
    }

    /// Add a vehicle of `category` starting at node `at`.
    pub fn vehicle(mut self, name: &str, at: &str, category: &str) -> Self {
        self.vehicles.push(PendingVehicle {
            name:     name.to_owned(),
            at:       at.to_owned(),
            category: category.to_owned(),
        });
        self
    }

    /// Add a catastrophe at node `at` with a deadline in minutes.
    pub fn catastrophe(
        mut self,
        at:       &str,
        deadline: u64,
        demand:   impl IntoIterator<Item = (SupplyKind, u32)>,
    ) -> Self {
        self.catastrophes.push(PendingCatastrophe {
            at: at.to_owned(),
            deadline,
            demand: demand.into_iter().collect(),
        });
        self
    }

    /// Give node `at` a finite stock.
    pub fn depot(mut self, at: &str, supplies: impl IntoIterator<Item = (SupplyKind, u32)>) -> Self {
        self.depots.push((at.to_owned(), supplies.into_iter().collect()));
        self
    }

    pub fn destroy_node_at(mut self, node: &str, tick: u64) -> Self {
        self.destruction.push(PendingDestruction::Node(node.to_owned(), tick));
        self
    }

    /// Destroy every edge between `a` and `b` at `tick`.
    pub fn destroy_link_at(mut self, a: &str, b: &str, tick: u64) -> Self {
        self.destruction.push(PendingDestruction::Link(a.to_owned(), b.to_owned(), tick));
        self
    }

    pub fn heuristics(mut self, table: HeuristicTable) -> Self {
        self.heuristics = Some(table);
        self
    }

    /// Resolve names and return a ready [`Scenario`].
    pub fn build(self) -> MissionResult<Scenario> {
        let net = self.network;

        // ── Fleet ─────────────────────────────────────────────────────────
        let mut names = HashSet::new();
        let mut fleet = Vec::with_capacity(self.vehicles.len());
        let mut positions = Vec::with_capacity(self.vehicles.len());
        for (i, pending) in self.vehicles.into_iter().enumerate() {
            if !names.insert(pending.name.clone()) {
                return Err(MissionError::Scenario(format!(
                    "duplicate vehicle name {:?}",
                    pending.name
                )));
            }
            positions.push(net.require_node(&pending.at)?);
            let id = VehicleId::try_from(i)
                .map_err(|_| MissionError::Scenario("too many vehicles".into()))?;
            fleet.push(Vehicle::new(id, pending.name, &pending.category)?);
        }

        // ── Catastrophes ──────────────────────────────────────────────────
        let mut seen = HashSet::new();
        let mut catastrophes = Vec::with_capacity(self.catastrophes.len());
        for pending in self.catastrophes {
            let node = net.require_node(&pending.at)?;
            if !seen.insert(node) {
                return Err(MissionError::Scenario(format!(
                    "more than one catastrophe at {:?}",
                    pending.at
                )));
            }
            catastrophes.push(Catastrophe::new(node, Tick(pending.deadline), pending.demand));
        }

        // ── Depots ────────────────────────────────────────────────────────
        let mut depots = DepotStock::new();
        for (at, supplies) in self.depots {
            depots.set(net.require_node(&at)?, supplies);
        }

        // ── Destruction schedule ──────────────────────────────────────────
        let mut schedule = DestructionSchedule::new();
        for pending in self.destruction {
            match pending {
                PendingDestruction::Node(n, t) => schedule.node_at(net.require_node(&n)?, Tick(t)),
                PendingDestruction::Link(a, b, t) => {
                    schedule.link_at(net.require_node(&a)?, net.require_node(&b)?, Tick(t))
                }
            }
        }

        Ok(Scenario {
            name: self.name,
            network: net,
            fleet,
            positions,
            catastrophes,
            depots,
            schedule,
            heuristics: self.heuristics,
        })
    }
}
