//! Per-node supply stock.

use std::collections::HashMap;

use rd_core::NodeId;

use crate::{Cargo, SupplyKind, SupplyMap};

/// Finite supply stock at some nodes.
///
/// A node with no entry is an unlimited depot.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DepotStock {
    stock: HashMap<NodeId, SupplyMap>,
}

impl DepotStock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Give `node` a finite stock.  Replaces any earlier entry.
    pub fn set(&mut self, node: NodeId, supplies: SupplyMap) {
        self.stock.insert(node, supplies);
    }

    pub fn is_limited(&self, node: NodeId) -> bool {
        self.stock.contains_key(&node)
    }

    /// Stock at `node`, `None` when unlimited.
    pub fn get(&self, node: NodeId) -> Option<&SupplyMap> {
        self.stock.get(&node)
    }

    /// Units of `kind` held at `node`, `None` when unlimited.
    pub fn available(&self, node: NodeId, kind: SupplyKind) -> Option<u32> {
        self.stock
            .get(&node)
            .map(|held| held.get(&kind).copied().unwrap_or(0))
    }

    /// The demand a vehicle can actually fill at `node`.  Read-only.
    ///
    /// Units already `on_board` count toward `demand`; only the rest is
    /// capped by the stock, less whatever the caller has `drawn` from this
    /// node without writing it back yet.  Every demanded kind stays in the
    /// result so a load against it never evicts wanted cargo.
    pub fn cap(
        &self,
        node: NodeId,
        demand: &SupplyMap,
        on_board: &Cargo,
        drawn: Option<&SupplyMap>,
    ) -> SupplyMap {
        demand
            .iter()
            .map(|(&kind, &want)| {
                let aboard = on_board.amount(kind).min(want);
                let extra = want - aboard;
                let taken = drawn.and_then(|d| d.get(&kind)).copied().unwrap_or(0);
                let extra = self
                    .available(node, kind)
                    .map_or(extra, |held| held.saturating_sub(taken).min(extra));
                (kind, aboard + extra)
            })
            .collect()
    }

    /// Remove `taken` from `node`'s stock, saturating at zero.
    ///
    /// Returns the shortfall (units taken that the stock did not hold).
    /// Unlimited depots never run short.
    pub fn draw(&mut self, node: NodeId, taken: &SupplyMap) -> SupplyMap {
        let mut shortfall = SupplyMap::new();
        let Some(held) = self.stock.get_mut(&node) else {
            return shortfall;
        };
        for (&kind, &n) in taken {
            let have = held.get(&kind).copied().unwrap_or(0);
            if n > have {
                shortfall.insert(kind, n - have);
            }
            let left = have.saturating_sub(n);
            if left == 0 {
                held.remove(&kind);
            } else {
                held.insert(kind, left);
            }
        }
        shortfall
    }
}
