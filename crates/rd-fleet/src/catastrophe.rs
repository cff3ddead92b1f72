//! Supply deficits with a deadline.

use rd_core::{NodeId, Tick};

use crate::{Cargo, FleetResult, SupplyMap};

/// A location short of supplies, with a hard response deadline.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Catastrophe {
    pub node:     NodeId,
    /// Minutes from mission start.
    pub deadline: Tick,
    demand:       SupplyMap,
}

impl Catastrophe {
    /// Zero quantities are dropped on construction.
    pub fn new(node: NodeId, deadline: Tick, mut demand: SupplyMap) -> Self {
        demand.retain(|_, n| *n > 0);
        Self { node, deadline, demand }
    }

    /// Outstanding demand.  A kind is absent once fully met.
    pub fn demand(&self) -> &SupplyMap {
        &self.demand
    }

    pub fn outstanding(&self) -> u32 {
        self.demand.values().sum()
    }

    pub fn is_resolved(&self) -> bool {
        self.demand.is_empty()
    }

    /// `elapsed` minutes have reached the deadline.
    #[inline]
    pub fn has_time_expired(&self, elapsed: f64) -> bool {
        elapsed >= self.deadline.as_minutes()
    }

    #[inline]
    pub fn has_expired_at(&self, tick: Tick) -> bool {
        tick >= self.deadline
    }

    /// Fulfil demand from `cargo`.
    ///
    /// For each demanded kind on board, `min(available, outstanding)` moves
    /// off the vehicle.  Returns `(delivered, cargo left on board)`.
    pub fn supply(&mut self, cargo: &Cargo) -> FleetResult<(SupplyMap, Cargo)> {
        let mut remaining = cargo.clone();
        let mut delivered = SupplyMap::new();
        for (&kind, outstanding) in self.demand.iter_mut() {
            let give = remaining.amount(kind).min(*outstanding);
            if give == 0 {
                continue;
            }
            remaining.unload(kind, give)?;
            *outstanding -= give;
            delivered.insert(kind, give);
        }
        self.demand.retain(|_, n| *n > 0);
        Ok((delivered, remaining))
    }
}
