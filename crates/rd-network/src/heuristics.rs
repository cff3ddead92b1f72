//! Heuristic lookup consumed by the best-first planners.
//!
//! The table maps `(node, catastrophe node, vehicle category)` to a number.
//! How it was produced (distance, time, fuel blends…) is the caller's
//! business; planners only read it.

use std::collections::HashMap;

use rd_core::NodeId;

/// `node → catastrophe node → vehicle category → value`.
#[derive(Clone, Debug, Default)]
pub struct HeuristicTable {
    values: HashMap<(NodeId, NodeId), HashMap<String, f64>>,
}

impl HeuristicTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, node: NodeId, target: NodeId, category: &str, value: f64) {
        self.values
            .entry((node, target))
            .or_default()
            .insert(category.to_owned(), value);
    }

    /// The value for `(node, target, category)`, if one was supplied.
    pub fn get(&self, node: NodeId, target: NodeId, category: &str) -> Option<f64> {
        self.values
            .get(&(node, target))
            .and_then(|by_category| by_category.get(category))
            .copied()
    }

    pub fn len(&self) -> usize {
        self.values.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
