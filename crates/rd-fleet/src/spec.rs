//! Fixed per-category vehicle specifications.

use rd_core::{AccessLevel, Fuel, TravelMode};

use crate::{FleetError, FleetResult};

/// Immutable capabilities shared by every vehicle of one category.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VehicleSpec {
    pub category:         &'static str,
    pub mode:             TravelMode,
    pub access:           AccessLevel,
    /// Nominal speed in km/h.
    pub speed_kmh:        f64,
    /// Cargo capacity in supply units.
    pub cargo_capacity:   u32,
    pub tank_capacity:    Fuel,
    /// Litres per 100 km.
    pub consumption:      f64,
    /// Minutes needed to pump one litre.
    pub refuel_min_per_l: f64,
}

const fn spec(
    category:         &'static str,
    mode:             TravelMode,
    access:           AccessLevel,
    speed_kmh:        f64,
    cargo_capacity:   u32,
    tank_litres:      u64,
    consumption:      f64,
    refuel_min_per_l: f64,
) -> VehicleSpec {
    VehicleSpec {
        category,
        mode,
        access,
        speed_kmh,
        cargo_capacity,
        tank_capacity: Fuel(tank_litres * 100),
        consumption,
        refuel_min_per_l,
    }
}

/// Every known category.  Scenario loading rejects anything else.
pub const VEHICLE_SPECS: [VehicleSpec; 8] = [
    spec("motorcycle",  TravelMode::Land,  AccessLevel::HIGH,   120.0,   10,   15,  4.0, 0.2),
    spec("car",         TravelMode::Land,  AccessLevel::MEDIUM, 160.0,  500,   50,  8.0, 0.2),
    spec("truck",       TravelMode::Land,  AccessLevel::LOW,    100.0, 2000,  300, 30.0, 0.1),
    spec("drone",       TravelMode::Air,   AccessLevel::HIGH,   100.0,    5,    5,  2.0, 0.5),
    spec("helicopter",  TravelMode::Air,   AccessLevel::HIGH,   250.0,  700,  300, 70.0, 0.1),
    spec("airplane",    TravelMode::Air,   AccessLevel::LOW,    250.0,  800,  200, 40.0, 0.1),
    spec("small_boat",  TravelMode::Water, AccessLevel::HIGH,    50.0, 2000,  500, 40.0, 0.1),
    spec("medium_boat", TravelMode::Water, AccessLevel::MEDIUM,  40.0, 5000, 1000, 50.0, 0.05),
];

impl VehicleSpec {
    /// Look up a category by name.
    pub fn lookup(category: &str) -> FleetResult<VehicleSpec> {
        VEHICLE_SPECS
            .iter()
            .find(|s| s.category == category)
            .copied()
            .ok_or_else(|| FleetError::UnknownCategory(category.to_owned()))
    }
}
