//! Unit tests for rd-search.
//!
//! Every test uses a hand-built network of at most four nodes.

#[cfg(test)]
mod helpers {
    use rd_core::{AccessLevel, NodeId, Tick, TravelMode, VehicleId};
    use rd_fleet::{Catastrophe, OperationKind, SupplyKind, SupplyMap, Vehicle};
    use rd_network::{Network, NetworkBuilder};

    use crate::RoutePlan;

    /// Nodes `A, B, C, …` joined by two-way land routes of access LOW.
    pub fn land(nodes: &[&str], routes: &[(&str, &str, f64)]) -> Network {
        let mut b = NetworkBuilder::new();
        for n in nodes {
            b.add_node(n).unwrap();
        }
        for &(x, y, km) in routes {
            let (x, y) = (b.node(x).unwrap(), b.node(y).unwrap());
            b.add_route(x, y, km, 1.0, TravelMode::Land, AccessLevel::LOW).unwrap();
        }
        b.build()
    }

    pub fn vehicle(category: &str) -> Vehicle {
        Vehicle::new(VehicleId(0), category, category).unwrap()
    }

    pub fn food(n: u32) -> SupplyMap {
        SupplyMap::from([(SupplyKind::Food, n)])
    }

    pub fn catastrophe(node: NodeId, deadline: u64, demand: SupplyMap) -> Catastrophe {
        Catastrophe::new(node, Tick(deadline), demand)
    }

    pub fn kinds(plan: &RoutePlan) -> Vec<OperationKind> {
        plan.operations.iter().map(|op| op.kind()).collect()
    }

    pub fn times(plan: &RoutePlan) -> Vec<u64> {
        plan.operations.iter().map(|op| op.time.0).collect()
    }

    /// Sum of every load in the plan.
    pub fn loaded(plan: &RoutePlan) -> SupplyMap {
        let mut total = SupplyMap::new();
        for op in &plan.operations {
            if let rd_fleet::Action::Load { supplies } = &op.action {
                for (&kind, &n) in supplies {
                    *total.entry(kind).or_insert(0) += n;
                }
            }
        }
        total
    }

    /// Destination of each move, in order.
    pub fn hops(net: &Network, plan: &RoutePlan) -> Vec<String> {
        plan.operations
            .iter()
            .filter(|op| op.kind() == OperationKind::Move)
            .map(|op| net.name(op.node).to_owned())
            .collect()
    }
}

// ── Single-edge scenarios ─────────────────────────────────────────────────────

#[cfg(test)]
mod single_edge {
    use rd_core::{Fuel, Tick};
    use rd_fleet::{Action, DepotStock, OperationKind::*, VehicleSpec};

    use super::helpers::*;
    use crate::{PlanRequest, RoutePlanner, SearchContext, SearchStrategy};

    #[test]
    fn car_delivers_over_one_edge() {
        let net = land(&["A", "B"], &[("A", "B", 30.0)]);
        let depots = DepotStock::new();
        let ctx = SearchContext::new(&net, &depots);
        let car = vehicle("car");
        let cat = catastrophe(net.node("B").unwrap(), 600, food(10));
        let req = PlanRequest { vehicle: &car, catastrophe: &cat, origin: net.node("A").unwrap(), start: Tick::ZERO };

        for strategy in [SearchStrategy::Bfs, SearchStrategy::Ucs] {
            let plan = strategy.plan(&ctx, &req).unwrap().unwrap();
            assert_eq!(kinds(&plan), vec![Start, Load, Move, Drop], "{strategy}");
            assert_eq!(times(&plan), vec![0, 0, 12, 12]);
            assert_eq!(plan.operations[1].action, Action::Load { supplies: food(10) });
            assert_eq!(plan.operations[2].node, cat.node);
            assert_eq!(plan.fuel_consumed, Fuel(240));
            assert_eq!(plan.delivered, food(10));
        }
        assert_eq!(car.tank(), car.tank_capacity(), "caller's vehicle untouched");
        assert!(car.cargo().is_empty());
    }

    #[test]
    fn empty_tank_refuels_before_moving() {
        let net = land(&["A", "B"], &[("A", "B", 30.0)]);
        let depots = DepotStock::new();
        let ctx = SearchContext::new(&net, &depots);
        let car = vehicle("car").with_tank(Fuel::ZERO);
        let cat = catastrophe(net.node("B").unwrap(), 600, food(10));
        let req = PlanRequest { vehicle: &car, catastrophe: &cat, origin: net.node("A").unwrap(), start: Tick::ZERO };

        let plan = SearchStrategy::Ucs.plan(&ctx, &req).unwrap().unwrap();
        assert_eq!(kinds(&plan), vec![Start, Load, Refuel, Move, Drop]);
        // 2.4 L at 0.2 min/L rounds up to one minute, then 11.25 min driving.
        assert_eq!(times(&plan), vec![0, 0, 1, 13, 13]);
        assert_eq!(plan.operations[2].action, Action::Refuel { fuel: Fuel(240) });
    }

    #[test]
    fn refuel_past_deadline_is_infeasible() {
        let net = land(&["A", "B"], &[("A", "B", 30.0)]);
        let depots = DepotStock::new();
        let ctx = SearchContext::new(&net, &depots);
        let car = vehicle("car").with_tank(Fuel::ZERO);
        let cat = catastrophe(net.node("B").unwrap(), 1, food(10));
        let req = PlanRequest { vehicle: &car, catastrophe: &cat, origin: net.node("A").unwrap(), start: Tick::ZERO };
        assert!(SearchStrategy::Bfs.plan(&ctx, &req).unwrap().is_none());
    }

    #[test]
    fn tank_smaller_than_leg_is_infeasible() {
        let net = land(&["A", "B"], &[("A", "B", 30.0)]);
        let depots = DepotStock::new();
        let ctx = SearchContext::new(&net, &depots);
        let spec = VehicleSpec { tank_capacity: Fuel::from_litres(1.0), ..VehicleSpec::lookup("car").unwrap() };
        let car = rd_fleet::Vehicle::from_spec(rd_core::VehicleId(0), "tiny", spec);
        let cat = catastrophe(net.node("B").unwrap(), 600, food(10));
        let req = PlanRequest { vehicle: &car, catastrophe: &cat, origin: net.node("A").unwrap(), start: Tick::ZERO };
        assert!(SearchStrategy::Ucs.plan(&ctx, &req).unwrap().is_none());
    }

    #[test]
    fn arrival_exactly_at_deadline_is_rejected() {
        // Truck: 100 km at 100 km/h is exactly 60 minutes.
        let net = land(&["A", "B"], &[("A", "B", 100.0)]);
        let depots = DepotStock::new();
        let ctx = SearchContext::new(&net, &depots);
        let truck = vehicle("truck");
        let (a, b) = (net.node("A").unwrap(), net.node("B").unwrap());

        let on_the_dot = catastrophe(b, 60, food(1));
        let req = PlanRequest { vehicle: &truck, catastrophe: &on_the_dot, origin: a, start: Tick::ZERO };
        assert!(SearchStrategy::Ucs.plan(&ctx, &req).unwrap().is_none());
        assert!(SearchStrategy::Bfs.plan(&ctx, &req).unwrap().is_none());

        let one_spare = catastrophe(b, 61, food(1));
        let req = PlanRequest { catastrophe: &one_spare, ..req };
        assert!(SearchStrategy::Ucs.plan(&ctx, &req).unwrap().is_some());
    }

    #[test]
    fn starting_at_target_loads_and_drops_in_place() {
        let net = land(&["A", "B"], &[("A", "B", 30.0)]);
        let depots = DepotStock::new();
        let ctx = SearchContext::new(&net, &depots);
        let car = vehicle("car");
        let b = net.node("B").unwrap();
        let cat = catastrophe(b, 600, food(10));
        let req = PlanRequest { vehicle: &car, catastrophe: &cat, origin: b, start: Tick::ZERO };

        let plan = SearchStrategy::Bfs.plan(&ctx, &req).unwrap().unwrap();
        assert_eq!(kinds(&plan), vec![Start, Load, Drop]);
        assert_eq!(plan.fuel_consumed, Fuel::ZERO);
    }

    #[test]
    fn replans_do_not_restart_the_timeline() {
        let net = land(&["A", "B"], &[("A", "B", 30.0)]);
        let depots = DepotStock::new();
        let ctx = SearchContext::new(&net, &depots);
        let car = vehicle("car");
        let cat = catastrophe(net.node("B").unwrap(), 600, food(10));
        let req = PlanRequest { vehicle: &car, catastrophe: &cat, origin: net.node("A").unwrap(), start: Tick(50) };

        let plan = SearchStrategy::Ucs.plan(&ctx, &req).unwrap().unwrap();
        assert_eq!(kinds(&plan), vec![Load, Move, Drop]);
        assert_eq!(times(&plan), vec![50, 62, 62]);
    }
}

// ── Strategy differences ──────────────────────────────────────────────────────

#[cfg(test)]
mod strategies {
    use rd_core::{AccessLevel, Tick, TravelMode};
    use rd_fleet::DepotStock;
    use rd_network::{HeuristicTable, NetworkBuilder};

    use super::helpers::*;
    use crate::{PlanRequest, RoutePlanner, SearchContext, SearchError, SearchStrategy};

    /// `A ─200─ C` directly, or `A ─30─ B ─30─ C`.
    fn detour() -> rd_network::Network {
        land(&["A", "B", "C"], &[("A", "B", 30.0), ("A", "C", 200.0), ("B", "C", 30.0)])
    }

    #[test]
    fn bfs_takes_fewest_hops_ucs_takes_least_time() {
        let net = detour();
        let depots = DepotStock::new();
        let ctx = SearchContext::new(&net, &depots);
        let car = vehicle("car");
        let cat = catastrophe(net.node("C").unwrap(), 600, food(10));
        let req = PlanRequest { vehicle: &car, catastrophe: &cat, origin: net.node("A").unwrap(), start: Tick::ZERO };

        let bfs = SearchStrategy::Bfs.plan(&ctx, &req).unwrap().unwrap();
        let ucs = SearchStrategy::Ucs.plan(&ctx, &req).unwrap().unwrap();
        assert_eq!(hops(&net, &bfs), vec!["C"]);
        assert_eq!(hops(&net, &ucs), vec!["B", "C"]);
        assert!(ucs.finish() < bfs.finish());
        assert!(ucs.fuel_consumed < bfs.fuel_consumed);
    }

    #[test]
    fn mode_and_access_filter_edges() {
        let mut b = NetworkBuilder::new();
        let a = b.add_node("A").unwrap();
        let c = b.add_node("B").unwrap();
        b.add_route(a, c, 10.0, 1.0, TravelMode::Land, AccessLevel::HIGH).unwrap();
        b.add_route(a, c, 10.0, 1.0, TravelMode::Water, AccessLevel::LOW).unwrap();
        let net = b.build();
        let depots = DepotStock::new();
        let ctx = SearchContext::new(&net, &depots);
        let cat = catastrophe(c, 600, food(5));

        let car = vehicle("car");
        let req = PlanRequest { vehicle: &car, catastrophe: &cat, origin: a, start: Tick::ZERO };
        assert!(SearchStrategy::Bfs.plan(&ctx, &req).unwrap().is_none(), "car lacks access");

        let moto = vehicle("motorcycle");
        let req = PlanRequest { vehicle: &moto, ..req };
        assert!(SearchStrategy::Bfs.plan(&ctx, &req).unwrap().is_some());

        let boat = vehicle("small_boat");
        let req = PlanRequest { vehicle: &boat, ..req };
        assert!(SearchStrategy::Ucs.plan(&ctx, &req).unwrap().is_some());
    }

    #[test]
    fn heuristic_strategies_need_a_table() {
        let net = detour();
        let depots = DepotStock::new();
        let ctx = SearchContext::new(&net, &depots);
        let car = vehicle("car");
        let cat = catastrophe(net.node("C").unwrap(), 600, food(10));
        let req = PlanRequest { vehicle: &car, catastrophe: &cat, origin: net.node("A").unwrap(), start: Tick::ZERO };

        for strategy in [SearchStrategy::Greedy, SearchStrategy::AStar] {
            assert!(strategy.needs_heuristics());
            assert!(matches!(strategy.plan(&ctx, &req), Err(SearchError::MissingHeuristics(_))));
        }
    }

    #[test]
    fn heuristic_steers_the_frontier() {
        let net = detour();
        let depots = DepotStock::new();
        let (a, b, c) = (net.node("A").unwrap(), net.node("B").unwrap(), net.node("C").unwrap());
        let mut table = HeuristicTable::new();
        table.insert(a, c, "car", 22.5);
        table.insert(b, c, "car", 11.25);
        let ctx = SearchContext::new(&net, &depots).with_heuristics(&table);
        let car = vehicle("car");
        let cat = catastrophe(c, 600, food(10));
        let req = PlanRequest { vehicle: &car, catastrophe: &cat, origin: a, start: Tick::ZERO };

        let greedy = SearchStrategy::Greedy.plan(&ctx, &req).unwrap().unwrap();
        let astar = SearchStrategy::AStar.plan(&ctx, &req).unwrap().unwrap();
        // The target scores 0 under greedy, so the direct edge wins there.
        assert_eq!(hops(&net, &greedy), vec!["C"]);
        assert_eq!(hops(&net, &astar), vec!["B", "C"]);
    }

    #[test]
    fn strategy_parses_case_insensitively() {
        assert_eq!("UCS".parse::<SearchStrategy>().unwrap(), SearchStrategy::Ucs);
        assert_eq!("astar".parse::<SearchStrategy>().unwrap(), SearchStrategy::AStar);
        assert!(matches!("dfs".parse::<SearchStrategy>(), Err(SearchError::UnknownStrategy(_))));
    }

    #[test]
    fn repeated_searches_are_identical() {
        let net = detour();
        let depots = DepotStock::new();
        let ctx = SearchContext::new(&net, &depots);
        let moto = vehicle("motorcycle");
        let cat = catastrophe(net.node("C").unwrap(), 600, food(25));
        let req = PlanRequest { vehicle: &moto, catastrophe: &cat, origin: net.node("A").unwrap(), start: Tick::ZERO };

        for strategy in [SearchStrategy::Bfs, SearchStrategy::Ucs] {
            let first = strategy.plan(&ctx, &req).unwrap();
            let second = strategy.plan(&ctx, &req).unwrap();
            assert_eq!(first, second);
        }
    }
}

// ── Shuttle loop ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod shuttle {
    use rd_core::{Fuel, Tick};
    use rd_fleet::{Action, DepotStock, OperationKind::*};

    use super::helpers::*;
    use crate::{PlanRequest, RoutePlanner, SearchContext, SearchStrategy};

    #[test]
    fn shuttles_until_demand_met() {
        // Motorcycle carries 10; 12 km at 120 km/h is 6 minutes.
        let net = land(&["A", "B"], &[("A", "B", 12.0)]);
        let depots = DepotStock::new();
        let ctx = SearchContext::new(&net, &depots);
        let moto = vehicle("motorcycle");
        let cat = catastrophe(net.node("B").unwrap(), 600, food(25));
        let req = PlanRequest { vehicle: &moto, catastrophe: &cat, origin: net.node("A").unwrap(), start: Tick::ZERO };

        let plan = SearchStrategy::Ucs.plan(&ctx, &req).unwrap().unwrap();
        assert_eq!(
            kinds(&plan),
            vec![Start, Load, Move, Drop, Move, Load, Move, Drop, Move, Load, Move, Drop]
        );
        assert_eq!(times(&plan), vec![0, 0, 6, 6, 12, 12, 18, 18, 24, 24, 30, 30]);
        assert_eq!(plan.delivered, food(25));
        assert_eq!(plan.fuel_consumed, Fuel(48 * 5));
    }

    #[test]
    fn trip_that_misses_the_deadline_is_dropped() {
        let net = land(&["A", "B"], &[("A", "B", 12.0)]);
        let depots = DepotStock::new();
        let ctx = SearchContext::new(&net, &depots);
        let moto = vehicle("motorcycle");
        let cat = catastrophe(net.node("B").unwrap(), 20, food(25));
        let req = PlanRequest { vehicle: &moto, catastrophe: &cat, origin: net.node("A").unwrap(), start: Tick::ZERO };

        let plan = SearchStrategy::Bfs.plan(&ctx, &req).unwrap().unwrap();
        assert_eq!(plan.delivered, food(20));
        assert_eq!(plan.finish(), Tick(18));
    }

    #[test]
    fn return_leg_refuels_at_the_depot() {
        // 1 L in the tank covers two 0.48 L legs; the third needs a top-up.
        let net = land(&["A", "B"], &[("A", "B", 12.0)]);
        let depots = DepotStock::new();
        let ctx = SearchContext::new(&net, &depots);
        let moto = vehicle("motorcycle").with_tank(Fuel(100));
        let cat = catastrophe(net.node("B").unwrap(), 600, food(20));
        let req = PlanRequest { vehicle: &moto, catastrophe: &cat, origin: net.node("A").unwrap(), start: Tick::ZERO };

        let plan = SearchStrategy::Bfs.plan(&ctx, &req).unwrap().unwrap();
        assert_eq!(kinds(&plan), vec![Start, Load, Move, Drop, Move, Load, Refuel, Move, Drop]);
        assert_eq!(times(&plan), vec![0, 0, 6, 6, 12, 12, 13, 19, 19]);
        let refuel = &plan.operations[6];
        assert_eq!(refuel.node, net.node("A").unwrap());
        assert_eq!(refuel.action, Action::Refuel { fuel: Fuel(44) });
        assert_eq!(plan.delivered, food(20));
        assert_eq!(plan.fuel_consumed, Fuel(48 * 3));
    }

    #[test]
    fn shuttle_draws_no_more_than_the_depot_holds() {
        let net = land(&["A", "B"], &[("A", "B", 12.0)]);
        let mut depots = DepotStock::new();
        depots.set(net.node("A").unwrap(), food(15));
        let ctx = SearchContext::new(&net, &depots);
        let moto = vehicle("motorcycle");
        let cat = catastrophe(net.node("B").unwrap(), 600, food(25));
        let req = PlanRequest { vehicle: &moto, catastrophe: &cat, origin: net.node("A").unwrap(), start: Tick::ZERO };

        for strategy in [SearchStrategy::Bfs, SearchStrategy::Ucs] {
            let plan = strategy.plan(&ctx, &req).unwrap().unwrap();
            assert_eq!(kinds(&plan), vec![Start, Load, Move, Drop, Move, Load, Move, Drop], "{strategy}");
            assert_eq!(loaded(&plan), food(15));
            assert_eq!(plan.delivered, food(15));
        }
    }

    #[test]
    fn empty_depot_yields_no_plan() {
        let net = land(&["A", "B"], &[("A", "B", 12.0)]);
        let mut depots = DepotStock::new();
        depots.set(net.node("A").unwrap(), food(0));
        let ctx = SearchContext::new(&net, &depots);
        let moto = vehicle("motorcycle");
        let cat = catastrophe(net.node("B").unwrap(), 600, food(5));
        let req = PlanRequest { vehicle: &moto, catastrophe: &cat, origin: net.node("A").unwrap(), start: Tick::ZERO };
        assert!(SearchStrategy::Ucs.plan(&ctx, &req).unwrap().is_none());
    }
}

// ── Name resolution & destruction ─────────────────────────────────────────────

#[cfg(test)]
mod names {
    use rd_core::Tick;
    use rd_fleet::DepotStock;

    use super::helpers::*;
    use crate::{SearchContext, SearchStrategy, plan_by_name};

    #[test]
    fn unknown_origin_is_unreachable() {
        let net = land(&["A", "B"], &[("A", "B", 30.0)]);
        let depots = DepotStock::new();
        let ctx = SearchContext::new(&net, &depots);
        let cat = catastrophe(net.node("B").unwrap(), 600, food(1));
        let plan = plan_by_name(&SearchStrategy::Bfs, &ctx, &vehicle("car"), &cat, "Z", Tick::ZERO);
        assert!(plan.unwrap().is_none());
    }

    #[test]
    fn destroyed_nodes_are_unreachable() {
        let mut net = land(&["A", "B", "C"], &[("A", "B", 30.0), ("B", "C", 30.0)]);
        let depots = DepotStock::new();
        let (a, b, c) = (net.node("A").unwrap(), net.node("B").unwrap(), net.node("C").unwrap());
        let cat = catastrophe(c, 600, food(1));
        let car = vehicle("car");

        {
            let ctx = SearchContext::new(&net, &depots);
            assert!(plan_by_name(&SearchStrategy::Ucs, &ctx, &car, &cat, "A", Tick::ZERO).unwrap().is_some());
        }
        net.destroy_node(b);
        let ctx = SearchContext::new(&net, &depots);
        assert!(plan_by_name(&SearchStrategy::Ucs, &ctx, &car, &cat, "A", Tick::ZERO).unwrap().is_none());
        assert!(plan_by_name(&SearchStrategy::Ucs, &ctx, &car, &cat, "B", Tick::ZERO).unwrap().is_none());

        let at_a = catastrophe(a, 600, food(1));
        net.destroy_node(a);
        let ctx = SearchContext::new(&net, &depots);
        assert!(plan_by_name(&SearchStrategy::Bfs, &ctx, &car, &at_a, "C", Tick::ZERO).unwrap().is_none());
    }
}
