//! `DestructionSchedule`: sparse per-tick queue of network elements to remove.
//!
//! Scenarios declare destruction times for nodes and for node pairs (every
//! edge between the pair).  The mission loop drains the entries due at the
//! current tick and applies them to its working [`Network`](crate::Network).
//!
//! `BTreeMap` keeps ticks ordered so [`next_tick`](DestructionSchedule::next_tick)
//! is O(log W) where W is the number of distinct destruction times.

use std::collections::BTreeMap;

use rd_core::{NodeId, Tick};

use crate::Network;

/// One destructible network element.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Destructible {
    Node(NodeId),
    /// Every edge between the two nodes, both directions, all modes.
    Link(NodeId, NodeId),
}

impl Destructible {
    /// Apply to `network`.  Returns `true` if anything was actually removed.
    pub fn apply(self, network: &mut Network) -> bool {
        match self {
            Destructible::Node(n)    => network.destroy_node(n),
            Destructible::Link(a, b) => network.destroy_link(a, b) > 0,
        }
    }
}

/// Tick → elements scheduled for removal at that tick.
#[derive(Clone, Debug, Default)]
pub struct DestructionSchedule {
    inner: BTreeMap<Tick, Vec<Destructible>>,
    total: usize,
}

impl DestructionSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `node` for removal at `tick`.
    pub fn node_at(&mut self, node: NodeId, tick: Tick) {
        self.push(tick, Destructible::Node(node));
    }

    /// Schedule every edge between `a` and `b` for removal at `tick`.
    pub fn link_at(&mut self, a: NodeId, b: NodeId, tick: Tick) {
        self.push(tick, Destructible::Link(a, b));
    }

    pub fn push(&mut self, tick: Tick, element: Destructible) {
        self.inner.entry(tick).or_default().push(element);
        self.total += 1;
    }

    /// Remove and return every element due at exactly `tick`, in the order
    /// they were scheduled.
    pub fn drain_tick(&mut self, tick: Tick) -> Option<Vec<Destructible>> {
        let due = self.inner.remove(&tick)?;
        self.total -= due.len();
        Some(due)
    }

    /// The earliest tick with a pending destruction.
    pub fn next_tick(&self) -> Option<Tick> {
        self.inner.keys().next().copied()
    }

    /// Every pending entry as `(tick, element)`, in tick order.
    pub fn iter(&self) -> impl Iterator<Item = (Tick, Destructible)> + '_ {
        self.inner
            .iter()
            .flat_map(|(&t, v)| v.iter().map(move |&d| (t, d)))
    }

    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
