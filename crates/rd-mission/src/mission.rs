//! The `Mission` runner and its tick loop.

use tracing::{debug, info, warn};

use rd_core::{CatastropheId, MissionClock, NodeId, Tick};
use rd_fleet::{Action, Catastrophe, DepotStock, Operation, OperationKind, Supply, SupplyMap, Vehicle};
use rd_network::{Destructible, DestructionSchedule, HeuristicTable, Network};
use rd_search::{RoutePlanner, SearchContext, SearchError, SearchStrategy};

use crate::planning::candidate_routes;
use crate::{
    Assignment, CatastropheReport, CatastropheStatus, MissionConfig, MissionObserver,
    MissionReport, MissionResult, Outcome, Scenario, assign,
};

// ── Mission ───────────────────────────────────────────────────────────────────

/// A scenario plus run configuration.
///
/// The scenario is a baseline: [`run`](Self::run) works on a clone and never
/// touches it, so consecutive runs start from identical state.
pub struct Mission {
    baseline: Scenario,
    config:   MissionConfig,
}

impl Mission {
    pub fn new(scenario: Scenario, config: MissionConfig) -> Self {
        Self { baseline: scenario, config }
    }

    pub fn scenario(&self) -> &Scenario {
        &self.baseline
    }

    pub fn config(&self) -> &MissionConfig {
        &self.config
    }

    /// Run the mission to a terminal state with a built-in strategy.
    ///
    /// A heuristic strategy on a scenario without a heuristic table is
    /// rejected before anything runs.
    pub fn run<O: MissionObserver>(
        &self,
        strategy: SearchStrategy,
        observer: &mut O,
    ) -> MissionResult<MissionReport> {
        if strategy.needs_heuristics() && self.baseline.heuristics.is_none() {
            return Err(SearchError::MissingHeuristics(strategy.as_str()).into());
        }
        self.drive(&strategy, Some(strategy), observer)
    }

    /// Run with any planner.  The report carries no strategy name.
    pub fn run_with<O: MissionObserver>(
        &self,
        planner:  &dyn RoutePlanner,
        observer: &mut O,
    ) -> MissionResult<MissionReport> {
        self.drive(planner, None, observer)
    }

    fn drive<O: MissionObserver>(
        &self,
        planner:  &dyn RoutePlanner,
        strategy: Option<SearchStrategy>,
        observer: &mut O,
    ) -> MissionResult<MissionReport> {
        let mut w = Working::new(&self.baseline);
        let mut clock = MissionClock::new();
        let mut replans = 0u32;
        let mut executed = Vec::new();

        info!(
            scenario = %self.baseline.name,
            vehicles = w.fleet.len(),
            catastrophes = w.catastrophes.len(),
            "mission start"
        );
        let round = w.plan_round(planner, Tick::ZERO)?;
        observer.on_replan(Tick::ZERO, &round);

        let outcome = loop {
            let now = clock.current_tick;
            if self.config.max_ticks.is_some_and(|max| now.0 >= max) {
                break Outcome::Halted;
            }
            observer.on_tick_start(now);

            // ── ① Destruction ─────────────────────────────────────────────
            if w.apply_destruction(now, observer) {
                replans += 1;
                let round = w.plan_round(planner, now)?;
                info!(tick = %now, assigned = round.chosen.len(), "replanned after destruction");
                observer.on_replan(now, &round);
            }

            // ── ② Execute due operations ──────────────────────────────────
            let due = w.take_due(now);
            let count = due.len();
            for op in due {
                let op = w.execute(op, now)?;
                observer.on_operation(&op);
                executed.push(op);
            }

            // ── ③ Age cargo ───────────────────────────────────────────────
            w.age_cargo();
            observer.on_tick_end(now, count);

            // ── ④ Termination ─────────────────────────────────────────────
            if w.catastrophes.iter().all(Catastrophe::is_resolved) {
                break Outcome::Resolved;
            }
            if w.catastrophes.iter().all(|c| c.has_expired_at(now)) {
                break Outcome::Expired;
            }
            clock.advance();
        };

        let final_tick = clock.current_tick;
        info!(scenario = %self.baseline.name, %outcome, tick = %clock, replans, "mission end");
        let report = MissionReport {
            strategy,
            outcome,
            final_tick,
            replans,
            executed,
            statuses: w.statuses(),
        };
        observer.on_mission_end(&report);
        Ok(report)
    }
}

// ── Working state ─────────────────────────────────────────────────────────────

/// Mutable clone of the baseline for one run.
struct Working<'a> {
    network:       Network,
    fleet:         Vec<Vehicle>,
    positions:     Vec<NodeId>,
    catastrophes:  Vec<Catastrophe>,
    depots:        DepotStock,
    schedule:      DestructionSchedule,
    heuristics:    Option<&'a HeuristicTable>,
    /// Operations not yet executed, sorted by `(time, kind rank)`.
    pending:       Vec<Operation>,
    /// Catastrophe each vehicle is currently serving.
    objectives:    Vec<Option<CatastropheId>>,
    resolved_at:   Vec<Option<Tick>>,
    ever_assigned: Vec<bool>,
}

impl<'a> Working<'a> {
    fn new(s: &'a Scenario) -> Self {
        Self {
            network:       s.network.clone(),
            fleet:         s.fleet.clone(),
            positions:     s.positions.clone(),
            catastrophes:  s.catastrophes.clone(),
            depots:        s.depots.clone(),
            schedule:      s.schedule.clone(),
            heuristics:    s.heuristics.as_ref(),
            pending:       Vec::new(),
            objectives:    vec![None; s.fleet.len()],
            resolved_at:   s
                .catastrophes
                .iter()
                .map(|c| c.is_resolved().then_some(Tick::ZERO))
                .collect(),
            ever_assigned: vec![false; s.catastrophes.len()],
        }
    }

    // ── Planning ──────────────────────────────────────────────────────────

    /// Search, assign, and replace every pending operation.
    ///
    /// A vehicle part-way along a road keeps that move and plans from the
    /// far end at its arrival tick.  If the road is gone it turns back and
    /// plans from where it set out.
    fn plan_round(&mut self, planner: &dyn RoutePlanner, now: Tick) -> MissionResult<Assignment> {
        let active: Vec<CatastropheId> = self
            .catastrophes
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.is_resolved() && !c.has_expired_at(now))
            .map(|(i, _)| CatastropheId(i as u32))
            .collect();

        let previous = std::mem::take(&mut self.pending);
        let in_flight = self.in_flight_moves(&previous, now);
        let mut fleet = self.fleet.clone();
        let mut departures: Vec<(NodeId, Tick)> = self.positions.iter().map(|&n| (n, now)).collect();
        for op in &in_flight {
            let v = op.vehicle.index();
            if let Action::Move { fuel_consumed } = op.action {
                fleet[v].burn(fuel_consumed)?;
            }
            departures[v] = (op.node, op.time);
        }

        let routes = {
            let mut ctx = SearchContext::new(&self.network, &self.depots);
            ctx.heuristics = self.heuristics;
            candidate_routes(planner, &ctx, &self.catastrophes, &active, &fleet, &departures)?
        };
        debug!(
            tick = %now,
            active = active.len(),
            candidates = routes.iter().map(|(_, c)| c.len()).sum::<usize>(),
            "planning round"
        );

        let assignment = assign(routes);

        self.pending = in_flight;
        self.objectives.fill(None);
        for (cat, cand) in &assignment.chosen {
            self.objectives[cand.vehicle.index()] = Some(*cat);
            self.ever_assigned[cat.index()] = true;
            self.pending.extend(cand.plan.operations.iter().cloned());
            info!(
                tick = %now,
                catastrophe = %self.node_name(self.catastrophes[cat.index()].node),
                vehicle = %self.fleet[cand.vehicle.index()].name,
                fuel = %cand.plan.fuel_consumed,
                finish = %cand.plan.finish(),
                "vehicle assigned"
            );
        }
        for cat in &assignment.unassigned {
            warn!(
                tick = %now,
                catastrophe = %self.node_name(self.catastrophes[cat.index()].node),
                "no vehicle can reach catastrophe in time"
            );
        }
        self.pending.sort_by(Operation::schedule_cmp);
        Ok(assignment)
    }

    /// The move each vehicle is part-way through, where its road still stands.
    ///
    /// Plans have no idle gaps, so a vehicle whose next pending operation is
    /// a move has already set out on it from its current position.
    fn in_flight_moves(&self, pending: &[Operation], now: Tick) -> Vec<Operation> {
        let mut seen = vec![false; self.fleet.len()];
        let mut kept = Vec::new();
        for op in pending {
            let v = op.vehicle.index();
            if std::mem::replace(&mut seen[v], true) || op.kind() != OperationKind::Move {
                continue;
            }
            let from = self.positions[v];
            let road_stands = self
                .network
                .out_edges(from)
                .any(|e| self.network.edge(e).to == op.node);
            if road_stands {
                kept.push(op.clone());
            } else {
                info!(
                    tick = %now,
                    vehicle = %self.fleet[v].name,
                    from = %self.node_name(from),
                    to = %self.node_name(op.node),
                    "road gone mid-move, turning back"
                );
            }
        }
        kept
    }

    // ── Stepping ──────────────────────────────────────────────────────────

    /// Apply destruction due at `now`.  Returns `true` if anything changed.
    fn apply_destruction<O: MissionObserver>(&mut self, now: Tick, observer: &mut O) -> bool {
        let Some(due) = self.schedule.drain_tick(now) else {
            return false;
        };
        let mut changed = false;
        for element in due {
            if element.apply(&mut self.network) {
                changed = true;
                info!(tick = %now, element = %self.describe(element), "destroyed");
                observer.on_destroyed(now, &element);
            }
        }
        changed
    }

    /// Remove and return every pending operation stamped at or before `now`.
    fn take_due(&mut self, now: Tick) -> Vec<Operation> {
        let n = self.pending.partition_point(|op| op.time <= now);
        self.pending.drain(..n).collect()
    }

    /// Apply one operation to the working state.
    ///
    /// Returns the operation as performed: a load the depot cannot cover in
    /// full is cut down to what was actually taken.
    fn execute(&mut self, mut op: Operation, now: Tick) -> MissionResult<Operation> {
        let v = op.vehicle.index();
        let objective = self.objectives[v];
        let performed = match &op.action {
            Action::Start => None,
            Action::Move { fuel_consumed } => {
                self.fleet[v].burn(*fuel_consumed)?;
                self.positions[v] = op.node;
                None
            }
            Action::Refuel { fuel } => {
                self.fleet[v].refuel(*fuel);
                None
            }
            Action::Load { supplies } => {
                let vehicle = &mut self.fleet[v];
                if let Some(c) = objective {
                    vehicle.cargo_mut().evict_except(self.catastrophes[c.index()].demand());
                }
                let mut loaded = SupplyMap::new();
                let mut short = SupplyMap::new();
                for (&kind, &n) in supplies {
                    let held = self.depots.available(op.node, kind).unwrap_or(u32::MAX);
                    let take = n.min(vehicle.cargo().free()).min(held);
                    if take > 0 {
                        vehicle.cargo_mut().load(Supply::new(kind, take))?;
                        loaded.insert(kind, take);
                    }
                    if take < n {
                        short.insert(kind, n - take);
                    }
                }
                self.depots.draw(op.node, &loaded);
                if !short.is_empty() {
                    warn!(
                        tick = %now,
                        depot = %self.node_name(op.node),
                        vehicle = %self.fleet[v].name,
                        ?short,
                        "load fell short of plan"
                    );
                }
                Some(Action::Load { supplies: loaded })
            }
            Action::Drop { .. } => {
                if let Some(c) = objective {
                    let cat = &mut self.catastrophes[c.index()];
                    let (_, remaining) = cat.supply(self.fleet[v].cargo())?;
                    let (resolved, node) = (cat.is_resolved(), cat.node);
                    *self.fleet[v].cargo_mut() = remaining;
                    if resolved && self.resolved_at[c.index()].is_none() {
                        self.resolved_at[c.index()] = Some(now);
                        info!(tick = %now, catastrophe = %self.node_name(node), "catastrophe resolved");
                    }
                } else {
                    debug!(vehicle = %self.fleet[v].name, "drop without an objective skipped");
                }
                None
            }
        };
        if let Some(action) = performed {
            op.action = action;
        }
        Ok(op)
    }

    fn age_cargo(&mut self) {
        for vehicle in &mut self.fleet {
            for kind in vehicle.cargo_mut().age(1) {
                warn!(vehicle = %vehicle.name, %kind, "cargo spoiled");
            }
        }
    }

    // ── Reporting ─────────────────────────────────────────────────────────

    fn statuses(&self) -> Vec<CatastropheReport> {
        self.catastrophes
            .iter()
            .enumerate()
            .map(|(i, cat)| {
                let status = match self.resolved_at[i] {
                    Some(at) => CatastropheStatus::Resolved { at },
                    None if self.ever_assigned[i] => {
                        CatastropheStatus::Unresolved { outstanding: cat.demand().clone() }
                    }
                    None => CatastropheStatus::Unassigned { outstanding: cat.demand().clone() },
                };
                CatastropheReport {
                    id: CatastropheId(i as u32),
                    node: cat.node,
                    name: self.node_name(cat.node).to_owned(),
                    deadline: cat.deadline,
                    status,
                }
            })
            .collect()
    }

    fn node_name(&self, node: NodeId) -> &str {
        self.network.name(node)
    }

    fn describe(&self, element: Destructible) -> String {
        match element {
            Destructible::Node(n) => self.node_name(n).to_owned(),
            Destructible::Link(a, b) => format!("{}-{}", self.node_name(a), self.node_name(b)),
        }
    }
}
