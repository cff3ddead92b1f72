//! Best-first planners: uniform-cost, greedy and A*.
//!
//! All three share one engine.  They differ only in the frontier priority:
//!
//! | Priority               | Strategy | Key                 |
//! |------------------------|----------|---------------------|
//! | `Elapsed`              | ucs      | `g`                 |
//! | `Heuristic`            | greedy   | `h`                 |
//! | `ElapsedPlusHeuristic` | astar    | `g + h`             |
//!
//! `g` is elapsed minutes; `h` is read from the [`HeuristicTable`] for
//! `(node, catastrophe node, vehicle category)`.  A missing entry counts as
//! `+∞`, so such nodes are explored last; the target itself is always `0`.
//!
//! [`HeuristicTable`]: rd_network::HeuristicTable

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use rd_core::NodeId;
use rd_network::HeuristicTable;

use crate::timeline::Scratch;
use crate::{
    NodeSet, PlanRequest, RoutePlan, RoutePlanner, SearchContext, SearchError, SearchResult,
    shuttle,
};

/// What the frontier is ordered by.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Priority {
    Elapsed,
    Heuristic,
    ElapsedPlusHeuristic,
}

impl Priority {
    fn uses_heuristic(self) -> bool {
        !matches!(self, Priority::Elapsed)
    }

    fn name(self) -> &'static str {
        match self {
            Priority::Elapsed => "ucs",
            Priority::Heuristic => "greedy",
            Priority::ElapsedPlusHeuristic => "astar",
        }
    }
}

/// Time-respecting Dijkstra relaxation with a pluggable priority.
///
/// Under [`Priority::Elapsed`] the first dequeue of the target is the
/// earliest feasible arrival.
#[derive(Copy, Clone, Debug)]
pub struct BestFirstPlanner {
    pub priority: Priority,
}

impl BestFirstPlanner {
    pub const UNIFORM_COST: Self = Self { priority: Priority::Elapsed };
    pub const GREEDY: Self = Self { priority: Priority::Heuristic };
    pub const A_STAR: Self = Self { priority: Priority::ElapsedPlusHeuristic };
}

// ── Frontier entry ────────────────────────────────────────────────────────────

/// Heap entry.  Ordered by `(key, seq)`; `seq` is the insertion counter so
/// equal keys pop in insertion order.
struct Entry {
    key:    f64,
    seq:    u64,
    branch: Scratch,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.total_cmp(&other.key).then(self.seq.cmp(&other.seq))
    }
}

// ── Engine ────────────────────────────────────────────────────────────────────

impl RoutePlanner for BestFirstPlanner {
    fn plan(&self, ctx: &SearchContext<'_>, req: &PlanRequest<'_>) -> SearchResult<Option<RoutePlan>> {
        let table = match (self.priority.uses_heuristic(), ctx.heuristics) {
            (true, None) => return Err(SearchError::MissingHeuristics(self.priority.name())),
            (_, table) => table,
        };
        let Some(root) = Scratch::depart(ctx, req)? else {
            return Ok(None);
        };

        let net = ctx.network;
        let target = req.catastrophe.node;
        let category = req.vehicle.category();
        let key = |branch: &Scratch| -> f64 {
            let g = branch.timeline.elapsed();
            let h = || heuristic(table, branch.node, target, category);
            match self.priority {
                Priority::Elapsed => g,
                Priority::Heuristic => h(),
                Priority::ElapsedPlusHeuristic => g + h(),
            }
        };

        // best[v] = earliest elapsed time any branch has reached v with.
        let mut best = vec![f64::INFINITY; net.node_count()];
        let mut settled = NodeSet::default();
        let mut heap = BinaryHeap::new();
        let mut seq = 0u64;

        best[root.node.index()] = root.timeline.elapsed();
        heap.push(Reverse(Entry { key: key(&root), seq, branch: root }));

        while let Some(Reverse(Entry { branch, .. })) = heap.pop() {
            if branch.node == target {
                return shuttle::complete(branch, req.catastrophe, ctx);
            }
            // Stale entry.
            if !settled.insert(branch.node) {
                continue;
            }
            for e in net.out_edges(branch.node) {
                let edge = net.edge(e);
                if settled.contains(&edge.to) {
                    continue;
                }
                let mut next = branch.clone();
                if !next.cross(&edge, req.catastrophe)? {
                    continue;
                }
                let arrival = next.timeline.elapsed();
                if arrival < best[edge.to.index()] {
                    best[edge.to.index()] = arrival;
                    seq += 1;
                    heap.push(Reverse(Entry { key: key(&next), seq, branch: next }));
                }
            }
        }
        Ok(None)
    }
}

fn heuristic(table: Option<&HeuristicTable>, node: NodeId, target: NodeId, category: &str) -> f64 {
    if node == target {
        return 0.0;
    }
    table
        .and_then(|t| t.get(node, target, category))
        .unwrap_or(f64::INFINITY)
}
