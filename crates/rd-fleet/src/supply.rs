//! Relief supplies.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::{FleetError, FleetResult};

/// Kind → quantity.  Used for catastrophe demand and load/drop payloads.
///
/// `BTreeMap` so iteration (and therefore every plan built from it) is
/// deterministic.
pub type SupplyMap = BTreeMap<SupplyKind, u32>;

// ── SupplyKind ────────────────────────────────────────────────────────────────

/// Category of relief material.  Declaration order is the tie-break order
/// used whenever kinds are iterated.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SupplyKind {
    Food,
    Water,
    SosKit,
    Medicine,
}

impl SupplyKind {
    pub const ALL: [SupplyKind; 4] =
        [SupplyKind::Food, SupplyKind::Water, SupplyKind::SosKit, SupplyKind::Medicine];

    /// Minutes before a freshly loaded unit spoils, if the kind is perishable.
    pub fn shelf_life(self) -> Option<u32> {
        match self {
            SupplyKind::Food => Some(600),
            SupplyKind::Medicine => Some(500),
            SupplyKind::Water | SupplyKind::SosKit => None,
        }
    }

    #[inline]
    pub fn is_perishable(self) -> bool {
        self.shelf_life().is_some()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SupplyKind::Food => "food",
            SupplyKind::Water => "water",
            SupplyKind::SosKit => "soskit",
            SupplyKind::Medicine => "medicine",
        }
    }
}

impl fmt::Display for SupplyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SupplyKind {
    type Err = FleetError;

    fn from_str(s: &str) -> FleetResult<Self> {
        SupplyKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| FleetError::UnknownSupplyKind(s.to_owned()))
    }
}

// ── Supply ────────────────────────────────────────────────────────────────────

/// A quantity of one kind, with a spoilage countdown for perishables.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Supply {
    pub kind:            SupplyKind,
    pub amount:          u32,
    /// Minutes left before spoiling.  `None` for non-perishables.
    pub perishable_time: Option<u32>,
}

impl Supply {
    /// A fresh supply with the kind's full shelf life.
    pub fn new(kind: SupplyKind, amount: u32) -> Self {
        Self { kind, amount, perishable_time: kind.shelf_life() }
    }

    /// Split `k` units off.  Returns `(k units, remainder)`; both halves keep
    /// the spoilage countdown.
    pub fn split(self, k: u32) -> FleetResult<(Supply, Supply)> {
        if k > self.amount {
            return Err(FleetError::SplitTooLarge { requested: k, available: self.amount });
        }
        let head = Supply { amount: k, ..self.clone() };
        let tail = Supply { amount: self.amount - k, ..self };
        Ok((head, tail))
    }

    /// Absorb `other` (same kind only).  The merged countdown is the shorter
    /// of the two.
    pub fn merge(&mut self, other: Supply) -> FleetResult<()> {
        if other.kind != self.kind {
            return Err(FleetError::KindMismatch { expected: self.kind, got: other.kind });
        }
        self.amount += other.amount;
        self.perishable_time = match (self.perishable_time, other.perishable_time) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
        Ok(())
    }

    /// Count the spoilage timer down by `minutes`.
    pub fn age(&mut self, minutes: u32) {
        if let Some(t) = self.perishable_time.as_mut() {
            *t = t.saturating_sub(minutes);
        }
    }

    pub fn is_spoiled(&self) -> bool {
        self.perishable_time == Some(0)
    }
}

impl fmt::Display for Supply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.kind)
    }
}
