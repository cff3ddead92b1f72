//! A vehicle's cargo hold.

use std::collections::BTreeMap;

use crate::{FleetError, FleetResult, Supply, SupplyKind, SupplyMap};

/// Supplies on board plus the hold's capacity.
///
/// The load figure is always computed from the contents, never stored, so it
/// cannot drift from them.  Zero-amount entries are dropped eagerly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cargo {
    capacity: u32,
    contents: BTreeMap<SupplyKind, Supply>,
}

impl Cargo {
    pub fn new(capacity: u32) -> Self {
        Self { capacity, contents: BTreeMap::new() }
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Units currently on board.
    pub fn total(&self) -> u32 {
        self.contents.values().map(|s| s.amount).sum()
    }

    pub fn free(&self) -> u32 {
        self.capacity - self.total()
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    /// Units of `kind` on board (0 if absent).
    pub fn amount(&self, kind: SupplyKind) -> u32 {
        self.contents.get(&kind).map_or(0, |s| s.amount)
    }

    pub fn get(&self, kind: SupplyKind) -> Option<&Supply> {
        self.contents.get(&kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Supply> {
        self.contents.values()
    }

    /// Kind → amount view of the hold.
    pub fn to_map(&self) -> SupplyMap {
        self.contents.values().map(|s| (s.kind, s.amount)).collect()
    }

    /// Put `supply` on board, merging with any of the same kind.
    pub fn load(&mut self, supply: Supply) -> FleetResult<()> {
        let free = self.free();
        if supply.amount > free {
            return Err(FleetError::CargoOverflow {
                kind:      supply.kind,
                requested: supply.amount,
                free,
            });
        }
        if supply.amount == 0 {
            return Ok(());
        }
        match self.contents.get_mut(&supply.kind) {
            Some(existing) => existing.merge(supply)?,
            None => {
                self.contents.insert(supply.kind, supply);
            }
        }
        Ok(())
    }

    /// Take `amount` units of `kind` off.
    pub fn unload(&mut self, kind: SupplyKind, amount: u32) -> FleetResult<Supply> {
        let available = self.amount(kind);
        if amount > available {
            return Err(FleetError::InsufficientCargo { kind, requested: amount, available });
        }
        let Some(held) = self.contents.remove(&kind) else {
            // amount == 0 and nothing held
            return Ok(Supply::new(kind, 0));
        };
        let (taken, rest) = held.split(amount)?;
        if rest.amount > 0 {
            self.contents.insert(kind, rest);
        }
        Ok(taken)
    }

    /// Drop every kind not listed in `keep`.  Returns what was thrown out.
    pub fn evict_except(&mut self, keep: &SupplyMap) -> SupplyMap {
        let mut evicted = SupplyMap::new();
        self.contents.retain(|kind, supply| {
            let keep_it = keep.contains_key(kind);
            if !keep_it {
                evicted.insert(*kind, supply.amount);
            }
            keep_it
        });
        evicted
    }

    /// Age every perishable on board.  Returns the kinds that spoiled during
    /// this call.
    pub fn age(&mut self, minutes: u32) -> Vec<SupplyKind> {
        let mut spoiled = Vec::new();
        for supply in self.contents.values_mut() {
            let was_fresh = !supply.is_spoiled();
            supply.age(minutes);
            if was_fresh && supply.is_spoiled() {
                spoiled.push(supply.kind);
            }
        }
        spoiled
    }
}
