//! The three bundled scenarios.
//!
//! Every node is an unlimited depot and refuelling point; none of the
//! scenarios declares finite stock.

use anyhow::{Result, bail};

use rd_core::{AccessLevel, TravelMode};
use rd_fleet::SupplyKind::{Food, Medicine, SosKit, Water};
use rd_mission::{Scenario, ScenarioBuilder};
use rd_network::{Network, NetworkBuilder};

use crate::heuristics::travel_time_table;

pub const NAMES: [&str; 3] = ["city", "azores", "grid"];

/// Resolve `"all"` or one scenario name.
pub fn select(name: &str) -> Result<Vec<Scenario>> {
    match name {
        "all"    => Ok(vec![city()?, azores()?, grid()?]),
        "city"   => Ok(vec![city()?]),
        "azores" => Ok(vec![azores()?]),
        "grid"   => Ok(vec![grid()?]),
        other    => bail!("unknown scenario {other:?} (expected one of {NAMES:?} or \"all\")"),
    }
}

type Route<'a> = (&'a str, &'a str, f64, f64, TravelMode, AccessLevel);

fn network(nodes: &[&str], routes: &[Route<'_>]) -> Result<Network> {
    let mut b = NetworkBuilder::new();
    for n in nodes {
        b.add_node(n)?;
    }
    for &(x, y, km, mult, mode, access) in routes {
        let (x, y) = (b.node(x)?, b.node(y)?);
        b.add_route(x, y, km, mult, mode, access)?;
    }
    Ok(b.build())
}

fn with_heuristics(mut scenario: Scenario) -> Scenario {
    scenario.heuristics = Some(travel_time_table(&scenario));
    scenario
}

// ── City ──────────────────────────────────────────────────────────────────────

/// Ten city districts joined by roads, air corridors and a river.
pub fn city() -> Result<Scenario> {
    use AccessLevel as A;
    use TravelMode::{Air, Land, Water as River};

    let net = network(
        &["A", "B", "C", "D", "E", "F", "G", "H", "I", "J"],
        &[
            ("A", "B", 20.0, 1.00, Air,   A::MEDIUM),
            ("A", "C", 30.0, 0.85, Land,  A::MEDIUM),
            ("A", "D", 40.0, 0.80, River, A::HIGH),
            ("A", "E", 50.0, 0.70, Land,  A::HIGH),
            ("B", "C", 25.0, 0.75, Land,  A::MEDIUM),
            ("B", "D", 30.0, 0.90, Air,   A::MEDIUM),
            ("B", "D", 35.0, 0.70, River, A::MEDIUM),
            ("B", "F", 45.0, 0.95, Air,   A::MEDIUM),
            ("C", "E", 30.0, 1.00, Land,  A::LOW),
            ("C", "F", 60.0, 1.00, Land,  A::LOW),
            ("D", "G", 30.0, 0.80, River, A::MEDIUM),
            ("D", "H", 25.0, 0.70, Air,   A::MEDIUM),
            ("E", "F", 20.0, 1.00, Land,  A::LOW),
            ("E", "H", 40.0, 0.75, Land,  A::MEDIUM),
            ("F", "I", 50.0, 1.00, Land,  A::LOW),
            ("G", "H", 20.0, 1.00, Land,  A::LOW),
            ("G", "I", 40.0, 0.85, Land,  A::MEDIUM),
            ("H", "J", 30.0, 0.85, Land,  A::MEDIUM),
            ("F", "I", 30.0, 0.80, Air,   A::HIGH),
            ("I", "J", 35.0, 0.80, Land,  A::MEDIUM),
        ],
    )?;

    let scenario = ScenarioBuilder::new("city", net)
        .vehicle("Bike1", "A", "motorcycle")
        .vehicle("Car1", "A", "car")
        .vehicle("Truck1", "A", "truck")
        .vehicle("Drone1", "A", "drone")
        .vehicle("Drone2", "D", "drone")
        .vehicle("Helicopter1", "D", "helicopter")
        .vehicle("Boat1", "D", "small_boat")
        .vehicle("Car2", "H", "car")
        .vehicle("Truck2", "H", "truck")
        .catastrophe("B", 600, [(Food, 300), (Water, 200)])
        .catastrophe("F", 300, [(Food, 300), (Water, 500), (SosKit, 50)])
        .catastrophe("I", 400, [(Medicine, 200), (Water, 300)])
        .destroy_node_at("C", 300)
        .destroy_node_at("G", 400)
        .destroy_link_at("A", "D", 350)
        .destroy_link_at("E", "H", 250)
        .destroy_link_at("F", "I", 200)
        .build()?;
    Ok(with_heuristics(scenario))
}

// ── Azores ────────────────────────────────────────────────────────────────────

/// Nine islands linked by sea lanes and flight paths.
pub fn azores() -> Result<Scenario> {
    let mut routes = Vec::new();
    for &(x, y, km, sea, air) in &[
        ("Sao Miguel",  "Santa Maria",  81.0, 0.75, 0.60),
        ("Sao Miguel",  "Terceira",    144.0, 0.75, 0.60),
        ("Santa Maria", "Terceira",    175.0, 0.80, 0.65),
        ("Terceira",    "Graciosa",     81.0, 0.85, 0.70),
        ("Graciosa",    "Sao Jorge",    42.0, 0.85, 0.75),
        ("Faial",       "Pico",          8.0, 0.85, 0.65),
        ("Sao Jorge",   "Faial",        56.0, 0.75, 0.60),
        ("Flores",      "Corvo",        23.0, 0.80, 0.75),
        ("Pico",        "Sao Jorge",    58.0, 0.85, 0.70),
        ("Flores",      "Faial",       240.0, 0.85, 0.70),
        ("Flores",      "Sao Jorge",   260.0, 0.90, 0.70),
        ("Corvo",       "Faial",       230.0, 0.85, 0.70),
        ("Corvo",       "Sao Miguel",  350.0, 0.85, 0.65),
        ("Pico",        "Terceira",    120.0, 0.80, 0.65),
        ("Santa Maria", "Sao Jorge",   190.0, 0.85, 0.70),
        ("Sao Miguel",  "Faial",       180.0, 0.85, 0.70),
    ] {
        routes.push((x, y, km, sea, TravelMode::Water, AccessLevel::MEDIUM));
        routes.push((x, y, km, air, TravelMode::Air, AccessLevel::LOW));
    }
    let net = network(
        &[
            "Sao Miguel", "Santa Maria", "Faial", "Pico", "Flores",
            "Corvo", "Terceira", "Graciosa", "Sao Jorge",
        ],
        &routes,
    )?;

    let scenario = ScenarioBuilder::new("azores", net)
        .vehicle("Boat1", "Terceira", "small_boat")
        .vehicle("Boat2", "Terceira", "medium_boat")
        .vehicle("Airplane1", "Graciosa", "airplane")
        .vehicle("Helicopter1", "Graciosa", "helicopter")
        .catastrophe("Sao Miguel", 500, [(Food, 200), (Water, 100)])
        .catastrophe("Santa Maria", 400, [(Medicine, 150), (Water, 200)])
        .catastrophe("Faial", 300, [(Food, 100), (SosKit, 50)])
        .catastrophe("Pico", 600, [(Water, 400), (Medicine, 300)])
        .destroy_node_at("Santa Maria", 400)
        .destroy_node_at("Flores", 100)
        .destroy_link_at("Flores", "Faial", 200)
        .destroy_link_at("Graciosa", "Sao Jorge", 250)
        .build()?;
    Ok(with_heuristics(scenario))
}

// ── Grid ──────────────────────────────────────────────────────────────────────

/// Fifteen nodes shaped so BFS and UCS pick visibly different routes.
pub fn grid() -> Result<Scenario> {
    let land = |x, y, km| (x, y, km, 1.0, TravelMode::Land, AccessLevel::MEDIUM);
    let net = network(
        &["A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O"],
        &[
            land("A", "B", 20.0),
            land("A", "C", 5.0),
            land("A", "D", 15.0),
            land("B", "E", 10.0),
            land("B", "F", 50.0),
            land("C", "F", 10.0),
            land("C", "G", 30.0),
            land("D", "H", 10.0),
            land("E", "J", 25.0),
            land("F", "L", 5.0),
            land("F", "M", 15.0),
            land("G", "N", 10.0),
            land("G", "O", 20.0),
            land("L", "O", 10.0),
            land("H", "L", 40.0),
            land("I", "G", 10.0),
            land("J", "M", 20.0),
            land("K", "N", 50.0),
            land("M", "O", 5.0),
        ],
    )?;

    // Boat1 has no water route anywhere and is never assigned.
    let scenario = ScenarioBuilder::new("grid", net)
        .vehicle("Bike1", "A", "motorcycle")
        .vehicle("Car1", "A", "car")
        .vehicle("Helicopter1", "A", "helicopter")
        .vehicle("Boat1", "A", "small_boat")
        .catastrophe("G", 300, [(Food, 150), (Water, 100), (SosKit, 50)])
        .catastrophe("L", 600, [(Food, 175), (Water, 25)])
        .build()?;
    Ok(with_heuristics(scenario))
}
