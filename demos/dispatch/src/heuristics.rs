//! Heuristic table precomputation for the greedy and A* strategies.
//!
//! `h(node, target, category)` is the fastest pure travel time in minutes
//! from `node` to `target` for a vehicle of that category, over the edges it
//! may use.  Refuel stops are ignored, so the estimate never overshoots.
//!
//! Every bundled network is symmetric, so distances are searched outward
//! from each target.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashSet};

use rd_core::NodeId;
use rd_fleet::Vehicle;
use rd_mission::Scenario;
use rd_network::{HeuristicTable, Network};

struct Entry {
    minutes: f64,
    node:    NodeId,
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
        self.minutes.total_cmp(&other.minutes).then(self.node.cmp(&other.node))
    }
}

/// One entry per (node, catastrophe node, fleet category) that is reachable.
pub fn travel_time_table(scenario: &Scenario) -> HeuristicTable {
    let mut table = HeuristicTable::new();
    let mut seen = HashSet::new();
    for vehicle in &scenario.fleet {
        if !seen.insert(vehicle.category()) {
            continue;
        }
        for cat in &scenario.catastrophes {
            for (node, minutes) in fastest_times(&scenario.network, vehicle, cat.node) {
                table.insert(node, cat.node, vehicle.category(), minutes);
            }
        }
    }
    table
}

fn fastest_times(network: &Network, vehicle: &Vehicle, source: NodeId) -> Vec<(NodeId, f64)> {
    let mut best = vec![f64::INFINITY; network.node_count()];
    let mut heap = BinaryHeap::new();
    best[source.index()] = 0.0;
    heap.push(Reverse(Entry { minutes: 0.0, node: source }));

    while let Some(Reverse(Entry { minutes, node })) = heap.pop() {
        if minutes > best[node.index()] {
            continue;
        }
        for e in network.out_edges(node) {
            let edge = network.edge(e);
            if !vehicle.travel_possible(edge.mode, edge.access)
                || !vehicle.can_ever_cover(edge.distance_km)
            {
                continue;
            }
            let next = minutes + vehicle.travel_minutes(edge.distance_km, edge.speed_multiplier);
            if next < best[edge.to.index()] {
                best[edge.to.index()] = next;
                heap.push(Reverse(Entry { minutes: next, node: edge.to }));
            }
        }
    }

    best.into_iter()
        .enumerate()
        .filter(|(_, m)| m.is_finite())
        .filter_map(|(i, m)| NodeId::try_from(i).ok().map(|n| (n, m)))
        .collect()
}
