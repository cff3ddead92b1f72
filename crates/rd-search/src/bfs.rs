//! Breadth-first planner.

use std::collections::VecDeque;

use crate::timeline::Scratch;
use crate::{NodeSet, PlanRequest, RoutePlan, RoutePlanner, SearchContext, SearchResult, shuttle};

/// Level-order search.
///
/// A node is settled the first time it is dequeued, not when first
/// discovered, so a parallel edge of another mode still gets its chance.
/// The first branch dequeued at the target wins; it has the fewest hops,
/// not necessarily the shortest time.
#[derive(Copy, Clone, Debug, Default)]
pub struct BreadthFirstPlanner;

impl RoutePlanner for BreadthFirstPlanner {
    fn plan(&self, ctx: &SearchContext<'_>, req: &PlanRequest<'_>) -> SearchResult<Option<RoutePlan>> {
        let Some(root) = Scratch::depart(ctx, req)? else {
            return Ok(None);
        };
        let target = req.catastrophe.node;
        let net = ctx.network;

        let mut settled = NodeSet::default();
        let mut queue = VecDeque::from([root]);

        while let Some(branch) = queue.pop_front() {
            if branch.node == target {
                return shuttle::complete(branch, req.catastrophe, ctx);
            }
            if !settled.insert(branch.node) {
                continue;
            }
            for e in net.out_edges(branch.node) {
                let edge = net.edge(e);
                if settled.contains(&edge.to) {
                    continue;
                }
                let mut next = branch.clone();
                if next.cross(&edge, req.catastrophe)? {
                    queue.push_back(next);
                }
            }
        }
        Ok(None)
    }
}
