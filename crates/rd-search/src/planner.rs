//! The planner trait and the built-in strategy selector.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use rd_core::Tick;
use rd_fleet::{Catastrophe, Vehicle};

use crate::{
    BestFirstPlanner, BreadthFirstPlanner, PlanRequest, RoutePlan, SearchContext, SearchError,
    SearchResult,
};

// ── RoutePlanner trait ────────────────────────────────────────────────────────

/// Pluggable single-vehicle route search.
///
/// Implementations must not mutate anything reachable from `ctx` or `req`.
/// `Ok(None)` means the vehicle cannot help this catastrophe in time; `Err`
/// is reserved for configuration problems.
///
/// # Thread safety
///
/// `Send + Sync` so one planner can serve parallel per-pair searches.
pub trait RoutePlanner: Send + Sync {
    fn plan(&self, ctx: &SearchContext<'_>, req: &PlanRequest<'_>) -> SearchResult<Option<RoutePlan>>;
}

// ── SearchStrategy ────────────────────────────────────────────────────────────

/// Closed set of built-in planners.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SearchStrategy {
    Bfs,
    Ucs,
    Greedy,
    AStar,
}

impl SearchStrategy {
    pub const ALL: [SearchStrategy; 4] =
        [SearchStrategy::Bfs, SearchStrategy::Ucs, SearchStrategy::Greedy, SearchStrategy::AStar];

    pub fn as_str(self) -> &'static str {
        match self {
            SearchStrategy::Bfs => "bfs",
            SearchStrategy::Ucs => "ucs",
            SearchStrategy::Greedy => "greedy",
            SearchStrategy::AStar => "astar",
        }
    }

    /// Whether the strategy reads a heuristic table.
    pub fn needs_heuristics(self) -> bool {
        matches!(self, SearchStrategy::Greedy | SearchStrategy::AStar)
    }
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchStrategy {
    type Err = SearchError;

    fn from_str(s: &str) -> SearchResult<Self> {
        SearchStrategy::ALL
            .into_iter()
            .find(|st| st.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| SearchError::UnknownStrategy(s.to_owned()))
    }
}

impl RoutePlanner for SearchStrategy {
    fn plan(&self, ctx: &SearchContext<'_>, req: &PlanRequest<'_>) -> SearchResult<Option<RoutePlan>> {
        let plan = match self {
            SearchStrategy::Bfs => BreadthFirstPlanner.plan(ctx, req)?,
            SearchStrategy::Ucs => BestFirstPlanner::UNIFORM_COST.plan(ctx, req)?,
            SearchStrategy::Greedy => BestFirstPlanner::GREEDY.plan(ctx, req)?,
            SearchStrategy::AStar => BestFirstPlanner::A_STAR.plan(ctx, req)?,
        };
        match &plan {
            Some(p) => debug!(
                strategy = %self,
                vehicle = %req.vehicle.name,
                target = %ctx.network.name(req.catastrophe.node),
                fuel = %p.fuel_consumed,
                ops = p.operations.len(),
                finish = %p.finish(),
                "candidate route"
            ),
            None => debug!(
                strategy = %self,
                vehicle = %req.vehicle.name,
                target = %ctx.network.name(req.catastrophe.node),
                "no feasible route"
            ),
        }
        Ok(plan)
    }
}

// ── Name-based entry point ────────────────────────────────────────────────────

/// Plan from a node given by name.
///
/// An origin that does not resolve (unknown or destroyed) yields `Ok(None)`,
/// like any other unreachable pair.
pub fn plan_by_name(
    planner:     &dyn RoutePlanner,
    ctx:         &SearchContext<'_>,
    vehicle:     &Vehicle,
    catastrophe: &Catastrophe,
    origin:      &str,
    start:       Tick,
) -> SearchResult<Option<RoutePlan>> {
    let Some(origin) = ctx.network.node(origin) else {
        return Ok(None);
    };
    planner.plan(ctx, &PlanRequest { vehicle, catastrophe, origin, start })
}
