//! Per-branch scratch state.

use std::collections::BTreeMap;

use rd_core::{Fuel, NodeId, Tick, VehicleId, ceil_minutes};
use rd_fleet::{Action, Catastrophe, Operation, SupplyMap, Vehicle};
use rd_network::Edge;

use crate::{PlanRequest, RoutePlan, SearchContext, SearchResult};

/// Operations accumulated by one branch, with a running clock.
///
/// Each push advances the clock by the operation's duration and stamps the
/// operation with the rounded-up completion time, so the list is always one
/// consistent per-vehicle timeline.
#[derive(Clone, Debug)]
pub(crate) struct Timeline {
    vehicle:   VehicleId,
    elapsed:   f64,
    ops:       Vec<Operation>,
    fuel:      Fuel,
    delivered: SupplyMap,
    /// Units this branch has loaded from finite depots, per node.
    drawn:     BTreeMap<NodeId, SupplyMap>,
}

impl Timeline {
    fn new(vehicle: VehicleId, start: Tick) -> Self {
        Self {
            vehicle,
            elapsed: start.as_minutes(),
            ops: Vec::new(),
            fuel: Fuel::ZERO,
            delivered: SupplyMap::new(),
            drawn: BTreeMap::new(),
        }
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    fn push(&mut self, node: NodeId, duration: f64, action: Action) {
        self.elapsed += duration;
        match &action {
            Action::Move { fuel_consumed } => self.fuel += *fuel_consumed,
            Action::Drop { supplies } => {
                for (&kind, &n) in supplies {
                    *self.delivered.entry(kind).or_insert(0) += n;
                }
            }
            _ => {}
        }
        let time = ceil_minutes(self.elapsed);
        self.ops.push(Operation::new(time, self.vehicle, node, duration, action));
    }

    fn drawn_at(&self, node: NodeId) -> Option<&SupplyMap> {
        self.drawn.get(&node)
    }

    fn record_draw(&mut self, node: NodeId, loaded: &SupplyMap) {
        let held = self.drawn.entry(node).or_default();
        for (&kind, &n) in loaded {
            *held.entry(kind).or_insert(0) += n;
        }
    }

    pub fn delivered_anything(&self) -> bool {
        !self.delivered.is_empty()
    }

    pub fn into_plan(self) -> RoutePlan {
        RoutePlan {
            vehicle:       self.vehicle,
            operations:    self.ops,
            fuel_consumed: self.fuel,
            delivered:     self.delivered,
        }
    }
}

/// A frontier entry: where the branch is, its own vehicle copy, and its
/// timeline so far.
#[derive(Clone, Debug)]
pub(crate) struct Scratch {
    pub node:     NodeId,
    pub vehicle:  Vehicle,
    pub timeline: Timeline,
}

impl Scratch {
    /// Root branch at the request's origin, after the initial load.
    ///
    /// `None` when the origin or target is gone or the deadline has already
    /// passed.
    pub fn depart(ctx: &SearchContext<'_>, req: &PlanRequest<'_>) -> SearchResult<Option<Self>> {
        let net = ctx.network;
        let cat = req.catastrophe;
        if !net.is_node_alive(req.origin) || !net.is_node_alive(cat.node) {
            return Ok(None);
        }
        if cat.has_expired_at(req.start) {
            return Ok(None);
        }

        let mut root = Scratch {
            node:     req.origin,
            vehicle:  req.vehicle.clone(),
            timeline: Timeline::new(req.vehicle.id, req.start),
        };
        if req.start == Tick::ZERO {
            root.timeline.push(root.node, 0.0, Action::Start);
        }
        root.load(ctx, cat.demand())?;
        Ok(Some(root))
    }

    #[inline]
    pub fn expired(&self, cat: &Catastrophe) -> bool {
        cat.has_time_expired(self.timeline.elapsed)
    }

    /// Refuel if needed, then cross `edge`.
    ///
    /// Returns `false` (leaving `self` half-advanced, so callers work on a
    /// clone) when the vehicle cannot use the edge or the leg would end at
    /// or past the deadline.
    pub fn cross(&mut self, edge: &Edge, cat: &Catastrophe) -> SearchResult<bool> {
        let v = &mut self.vehicle;
        if !v.travel_possible(edge.mode, edge.access) || !v.can_ever_cover(edge.distance_km) {
            return Ok(false);
        }
        if cat.has_time_expired(self.timeline.elapsed) {
            return Ok(false);
        }

        if !v.has_enough_fuel(edge.distance_km) {
            let top_up = v.fuel_needed(edge.distance_km).saturating_sub(v.tank());
            let (_, minutes) = v.refuel(top_up);
            self.timeline.push(self.node, minutes as f64, Action::Refuel { fuel: top_up });
            if cat.has_time_expired(self.timeline.elapsed) {
                return Ok(false);
            }
        }

        let (minutes, burnt) = v.travel(edge.distance_km, edge.speed_multiplier)?;
        self.node = edge.to;
        self.timeline.push(edge.to, minutes, Action::Move { fuel_consumed: burnt });
        Ok(!cat.has_time_expired(self.timeline.elapsed))
    }

    /// Load against `demand` at the current node, capped by what the depot
    /// holds after this branch's earlier loads there.
    pub fn load(&mut self, ctx: &SearchContext<'_>, demand: &SupplyMap) -> SearchResult<SupplyMap> {
        let drawn = self.timeline.drawn_at(self.node);
        let fillable = ctx.depots.cap(self.node, demand, self.vehicle.cargo(), drawn);
        let (loaded, _) = self.vehicle.load_supplies_for_catastrophe(&fillable)?;
        if !loaded.is_empty() {
            if ctx.depots.is_limited(self.node) {
                self.timeline.record_draw(self.node, &loaded);
            }
            self.timeline.push(self.node, 0.0, Action::Load { supplies: loaded.clone() });
        }
        Ok(loaded)
    }

    /// Hand over whatever `cat` still needs from the cargo.
    pub fn drop_at(&mut self, cat: &mut Catastrophe) -> SearchResult<SupplyMap> {
        let (delivered, remaining) = cat.supply(self.vehicle.cargo())?;
        if !delivered.is_empty() {
            *self.vehicle.cargo_mut() = remaining;
            self.timeline.push(self.node, 0.0, Action::Drop { supplies: delivered.clone() });
        }
        Ok(delivered)
    }
}
