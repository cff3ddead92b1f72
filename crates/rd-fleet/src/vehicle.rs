//! Mutable vehicle state: fuel and cargo.

use rd_core::{AccessLevel, Fuel, TravelMode, VehicleId, ceil_minutes};

use crate::{Cargo, FleetError, FleetResult, Supply, SupplyMap, VehicleSpec};

/// One vehicle of the fleet.
///
/// A value type: search clones it per branch and mutates the clone.  The
/// caller's instance is only touched by the execution loop.
#[derive(Clone, Debug, PartialEq)]
pub struct Vehicle {
    pub id:   VehicleId,
    pub name: String,
    spec:     VehicleSpec,
    tank:     Fuel,
    cargo:    Cargo,
}

impl Vehicle {
    /// A vehicle of `category` with a full tank and an empty hold.
    pub fn new(id: VehicleId, name: impl Into<String>, category: &str) -> FleetResult<Self> {
        let spec = VehicleSpec::lookup(category)?;
        Ok(Self::from_spec(id, name, spec))
    }

    pub fn from_spec(id: VehicleId, name: impl Into<String>, spec: VehicleSpec) -> Self {
        Self {
            id,
            name: name.into(),
            spec,
            tank: spec.tank_capacity,
            cargo: Cargo::new(spec.cargo_capacity),
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn spec(&self) -> &VehicleSpec { &self.spec }
    pub fn category(&self) -> &'static str { self.spec.category }
    pub fn mode(&self) -> TravelMode { self.spec.mode }
    pub fn access(&self) -> AccessLevel { self.spec.access }
    pub fn tank(&self) -> Fuel { self.tank }
    pub fn tank_capacity(&self) -> Fuel { self.spec.tank_capacity }
    pub fn cargo(&self) -> &Cargo { &self.cargo }
    pub fn cargo_mut(&mut self) -> &mut Cargo { &mut self.cargo }

    /// Override the starting tank level (clamped to capacity).
    pub fn with_tank(mut self, tank: Fuel) -> Self {
        self.tank = tank.min(self.spec.tank_capacity);
        self
    }

    // ── Fuel ──────────────────────────────────────────────────────────────

    /// Add `amount` to the tank, clamped to capacity.
    ///
    /// Returns `(surplus that did not fit, minutes spent pumping)`.  Pumping
    /// time is charged on the requested amount.
    pub fn refuel(&mut self, amount: Fuel) -> (Fuel, u64) {
        let filled = self.tank + amount;
        let capacity = self.spec.tank_capacity;
        self.tank = filled.min(capacity);
        let surplus = filled.saturating_sub(capacity);
        (surplus, self.refuel_minutes(amount))
    }

    /// Minutes needed to pump `amount`, rounded up.
    pub fn refuel_minutes(&self, amount: Fuel) -> u64 {
        ceil_minutes(amount.litres() * self.spec.refuel_min_per_l).0
    }

    /// Whether an edge of `mode` requiring `required` access is usable.
    #[inline]
    pub fn travel_possible(&self, mode: TravelMode, required: AccessLevel) -> bool {
        self.spec.mode == mode && self.spec.access.satisfies(required)
    }

    /// Fuel burnt over `distance_km`, rounded up to the centilitre.
    #[inline]
    pub fn fuel_needed(&self, distance_km: f64) -> Fuel {
        Fuel::ceil_centilitres(distance_km * self.spec.consumption)
    }

    #[inline]
    pub fn has_enough_fuel(&self, distance_km: f64) -> bool {
        self.tank >= self.fuel_needed(distance_km)
    }

    /// Whether even a full tank covers `distance_km`.
    #[inline]
    pub fn can_ever_cover(&self, distance_km: f64) -> bool {
        self.spec.tank_capacity >= self.fuel_needed(distance_km)
    }

    /// Minutes to cover `distance_km` on an edge with `speed_multiplier`.
    #[inline]
    pub fn travel_minutes(&self, distance_km: f64, speed_multiplier: f64) -> f64 {
        distance_km / (self.spec.speed_kmh * speed_multiplier) * 60.0
    }

    /// Drive `distance_km`.  Returns `(minutes, fuel burnt)`.
    pub fn travel(&mut self, distance_km: f64, speed_multiplier: f64) -> FleetResult<(f64, Fuel)> {
        let needed = self.fuel_needed(distance_km);
        if needed > self.tank {
            return Err(FleetError::InsufficientFuel { needed, available: self.tank });
        }
        self.tank = self.tank.saturating_sub(needed);
        Ok((self.travel_minutes(distance_km, speed_multiplier), needed))
    }

    /// Burn an already-computed amount.
    ///
    /// Burning more than the tank holds is an error and leaves the tank as is.
    pub fn burn(&mut self, fuel: Fuel) -> FleetResult<()> {
        if fuel > self.tank {
            return Err(FleetError::InsufficientFuel { needed: fuel, available: self.tank });
        }
        self.tank = self.tank.saturating_sub(fuel);
        Ok(())
    }

    // ── Cargo ─────────────────────────────────────────────────────────────

    /// Fill the hold against `demand`.
    ///
    /// Kinds the catastrophe does not want are thrown out first.  Perishable
    /// kinds are loaded before the rest; units already on board count toward
    /// the demand.  Returns `(loaded, still unmet)`.
    pub fn load_supplies_for_catastrophe(
        &mut self,
        demand: &SupplyMap,
    ) -> FleetResult<(SupplyMap, SupplyMap)> {
        self.cargo.evict_except(demand);

        let mut kinds: Vec<_> = demand.keys().copied().collect();
        kinds.sort_by_key(|k| (!k.is_perishable(), *k));

        let mut loaded = SupplyMap::new();
        let mut unmet = SupplyMap::new();
        for kind in kinds {
            let want = demand[&kind].saturating_sub(self.cargo.amount(kind));
            let take = want.min(self.cargo.free());
            if take > 0 {
                self.cargo.load(Supply::new(kind, take))?;
                loaded.insert(kind, take);
            }
            if want > take {
                unmet.insert(kind, want - take);
            }
        }
        Ok((loaded, unmet))
    }
}
