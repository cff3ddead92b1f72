//! Unit tests for rd-fleet.

#[cfg(test)]
mod helpers {
    use rd_core::VehicleId;

    use crate::{SupplyKind, SupplyMap, Vehicle};

    pub fn vehicle(category: &str) -> Vehicle {
        Vehicle::new(VehicleId(0), format!("{category}-0"), category).unwrap()
    }

    pub fn demand(items: &[(SupplyKind, u32)]) -> SupplyMap {
        items.iter().copied().collect()
    }
}

// ── Spec table ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod spec {
    use rd_core::{AccessLevel, Fuel, TravelMode};

    use crate::{FleetError, VehicleSpec};

    #[test]
    fn car_matches_table() {
        let car = VehicleSpec::lookup("car").unwrap();
        assert_eq!(car.mode, TravelMode::Land);
        assert_eq!(car.access, AccessLevel::MEDIUM);
        assert_eq!(car.tank_capacity, Fuel::from_litres(50.0));
        assert_eq!(car.cargo_capacity, 500);
    }

    #[test]
    fn unknown_category_rejected() {
        assert!(matches!(VehicleSpec::lookup("zeppelin"), Err(FleetError::UnknownCategory(_))));
    }
}

// ── Vehicle ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod vehicle {
    use rd_core::{AccessLevel, Fuel, TravelMode};

    use super::helpers::{demand, vehicle};
    use crate::{FleetError, SupplyKind::*};

    #[test]
    fn starts_full_and_empty() {
        let v = vehicle("truck");
        assert_eq!(v.tank(), v.tank_capacity());
        assert!(v.cargo().is_empty());
    }

    #[test]
    fn fuel_needed_rounds_up_to_centilitre() {
        let v = vehicle("car");
        assert_eq!(v.fuel_needed(30.0), Fuel(240));
        // 0.125 km × 8 = 1.0 cl exactly, 0.126 km needs 1.008 → 2 cl
        assert_eq!(v.fuel_needed(0.125), Fuel(1));
        assert_eq!(v.fuel_needed(0.126), Fuel(2));
    }

    #[test]
    fn travel_burns_fuel_and_reports_minutes() {
        let mut v = vehicle("car");
        let (minutes, burnt) = v.travel(30.0, 1.0).unwrap();
        assert!((minutes - 11.25).abs() < 1e-9);
        assert_eq!(burnt, Fuel(240));
        assert_eq!(v.tank(), Fuel(5000 - 240));
    }

    #[test]
    fn speed_multiplier_scales_time() {
        let v = vehicle("car");
        assert!((v.travel_minutes(80.0, 0.5) - 60.0).abs() < 1e-9);
    }

    #[test]
    fn travel_without_fuel_is_an_error() {
        let mut v = vehicle("drone").with_tank(Fuel::ZERO);
        assert!(matches!(v.travel(10.0, 1.0), Err(FleetError::InsufficientFuel { .. })));
        assert_eq!(v.tank(), Fuel::ZERO);
    }

    #[test]
    fn burning_more_than_the_tank_holds_is_an_error() {
        let mut v = vehicle("drone").with_tank(Fuel(100));
        assert!(matches!(
            v.burn(Fuel(101)),
            Err(FleetError::InsufficientFuel { needed: Fuel(101), available: Fuel(100) })
        ));
        assert_eq!(v.tank(), Fuel(100));
        v.burn(Fuel(100)).unwrap();
        assert_eq!(v.tank(), Fuel::ZERO);
    }

    #[test]
    fn refuel_clamps_and_returns_surplus() {
        let mut v = vehicle("car");
        v.burn(Fuel(240)).unwrap();
        let (surplus, minutes) = v.refuel(Fuel::from_litres(10.0));
        assert_eq!(v.tank(), v.tank_capacity());
        assert_eq!(surplus, Fuel(760));
        assert_eq!(minutes, 2);
    }

    #[test]
    fn travel_possible_checks_mode_and_access() {
        let moto = vehicle("motorcycle");
        assert!(moto.travel_possible(TravelMode::Land, AccessLevel::HIGH));
        assert!(!moto.travel_possible(TravelMode::Water, AccessLevel::LOW));
        let truck = vehicle("truck");
        assert!(truck.travel_possible(TravelMode::Land, AccessLevel::LOW));
        assert!(!truck.travel_possible(TravelMode::Land, AccessLevel::MEDIUM));
    }

    #[test]
    fn load_prefers_perishables_and_caps_by_capacity() {
        let mut moto = vehicle("motorcycle"); // capacity 10
        let want = demand(&[(Water, 5), (Food, 8), (Medicine, 4)]);
        let (loaded, unmet) = moto.load_supplies_for_catastrophe(&want).unwrap();
        assert_eq!(loaded, demand(&[(Food, 8), (Medicine, 2)]));
        assert_eq!(unmet, demand(&[(Medicine, 2), (Water, 5)]));
        assert_eq!(moto.cargo().total(), 10);
    }

    #[test]
    fn load_evicts_unwanted_kinds_and_counts_what_is_aboard() {
        let mut car = vehicle("car");
        car.load_supplies_for_catastrophe(&demand(&[(SosKit, 300), (Water, 50)])).unwrap();
        let (loaded, unmet) =
            car.load_supplies_for_catastrophe(&demand(&[(Water, 400)])).unwrap();
        assert_eq!(car.cargo().amount(SosKit), 0);
        assert_eq!(loaded, demand(&[(Water, 350)]));
        assert!(unmet.is_empty());
        assert_eq!(car.cargo().total(), 400);
    }
}

// ── Supply & cargo ────────────────────────────────────────────────────────────

#[cfg(test)]
mod supply {
    use crate::{Cargo, FleetError, Supply, SupplyKind};

    #[test]
    fn split_then_merge_restores_amount() {
        let s = Supply::new(SupplyKind::Water, 70);
        let (mut head, tail) = s.clone().split(30).unwrap();
        assert_eq!((head.amount, tail.amount), (30, 40));
        head.merge(tail).unwrap();
        assert_eq!(head, s);
    }

    #[test]
    fn split_beyond_amount_rejected() {
        let s = Supply::new(SupplyKind::Food, 3);
        assert!(matches!(s.split(4), Err(FleetError::SplitTooLarge { .. })));
    }

    #[test]
    fn merge_rejects_other_kind() {
        let mut s = Supply::new(SupplyKind::Food, 3);
        assert!(s.merge(Supply::new(SupplyKind::Water, 1)).is_err());
        assert_eq!(s.amount, 3);
    }

    #[test]
    fn perishables_age_to_zero() {
        let mut food = Supply::new(SupplyKind::Food, 1);
        assert_eq!(food.perishable_time, Some(600));
        food.age(599);
        assert!(!food.is_spoiled());
        food.age(5);
        assert!(food.is_spoiled());

        let mut water = Supply::new(SupplyKind::Water, 1);
        water.age(10_000);
        assert!(!water.is_spoiled());
    }

    #[test]
    fn kind_parses_from_name() {
        assert_eq!("soskit".parse::<SupplyKind>().unwrap(), SupplyKind::SosKit);
        assert!("gold".parse::<SupplyKind>().is_err());
    }

    #[test]
    fn cargo_rejects_overflow_and_overdraw() {
        let mut hold = Cargo::new(10);
        hold.load(Supply::new(SupplyKind::Food, 7)).unwrap();
        assert!(matches!(
            hold.load(Supply::new(SupplyKind::Water, 4)),
            Err(FleetError::CargoOverflow { free: 3, .. })
        ));
        assert!(matches!(
            hold.unload(SupplyKind::Food, 8),
            Err(FleetError::InsufficientCargo { available: 7, .. })
        ));
        assert_eq!(hold.total(), 7);
    }

    #[test]
    fn emptied_kind_leaves_the_hold() {
        let mut hold = Cargo::new(10);
        hold.load(Supply::new(SupplyKind::Food, 4)).unwrap();
        let taken = hold.unload(SupplyKind::Food, 4).unwrap();
        assert_eq!(taken.amount, 4);
        assert!(hold.get(SupplyKind::Food).is_none());
        assert!(hold.is_empty());
    }

    #[test]
    fn aging_reports_each_spoilage_once() {
        let mut hold = Cargo::new(10);
        hold.load(Supply::new(SupplyKind::Medicine, 1)).unwrap();
        assert!(hold.age(499).is_empty());
        assert_eq!(hold.age(1), vec![SupplyKind::Medicine]);
        assert!(hold.age(1).is_empty());
    }
}

// ── Catastrophe ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod catastrophe {
    use rd_core::{NodeId, Tick};

    use super::helpers::demand;
    use crate::{Cargo, Catastrophe, Supply, SupplyKind::*};

    #[test]
    fn partial_supply_keeps_outstanding_kinds() {
        let mut cat = Catastrophe::new(NodeId(1), Tick(600), demand(&[(Food, 10), (Water, 5)]));
        let mut hold = Cargo::new(100);
        hold.load(Supply::new(Food, 15)).unwrap();
        hold.load(Supply::new(Medicine, 3)).unwrap();

        let (delivered, left) = cat.supply(&hold).unwrap();
        assert_eq!(delivered, demand(&[(Food, 10)]));
        assert_eq!(left.to_map(), demand(&[(Food, 5), (Medicine, 3)]));
        assert_eq!(cat.demand(), &demand(&[(Water, 5)]));
        assert!(!cat.is_resolved());
    }

    #[test]
    fn zero_demand_is_resolved() {
        let cat = Catastrophe::new(NodeId(0), Tick(10), demand(&[(Food, 0)]));
        assert!(cat.is_resolved());
    }

    #[test]
    fn expiry_is_inclusive() {
        let cat = Catastrophe::new(NodeId(0), Tick(60), demand(&[(Food, 1)]));
        assert!(!cat.has_time_expired(59.9));
        assert!(cat.has_time_expired(60.0));
        assert!(cat.has_expired_at(Tick(60)));
        assert!(!cat.has_expired_at(Tick(59)));
    }
}

// ── Operations ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod operation {
    use rd_core::{Fuel, NodeId, Tick, VehicleId};

    use crate::{Action, Operation, OperationKind, SupplyMap};

    #[test]
    fn kind_rank_order() {
        use OperationKind::*;
        let ranks: Vec<_> = [Start, Move, Refuel, Drop, Load].map(OperationKind::rank).into();
        assert_eq!(ranks, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn schedule_sort_by_time_then_kind() {
        let op = |t, action| Operation::new(Tick(t), VehicleId(0), NodeId(0), 0.0, action);
        let mut ops = vec![
            op(5, Action::Load { supplies: SupplyMap::new() }),
            op(5, Action::Drop { supplies: SupplyMap::new() }),
            op(3, Action::Refuel { fuel: Fuel(10) }),
            op(5, Action::Move { fuel_consumed: Fuel(1) }),
            op(0, Action::Start),
        ];
        ops.sort_by(Operation::schedule_cmp);
        let kinds: Vec<_> = ops.iter().map(|o| (o.time.0, o.kind())).collect();
        assert_eq!(
            kinds,
            vec![
                (0, OperationKind::Start),
                (3, OperationKind::Refuel),
                (5, OperationKind::Move),
                (5, OperationKind::Drop),
                (5, OperationKind::Load),
            ]
        );
    }
}

// ── Depots ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod depot {
    use rd_core::NodeId;

    use super::helpers::demand;
    use crate::{Cargo, DepotStock, Supply, SupplyKind::*};

    #[test]
    fn missing_entry_is_unlimited() {
        let mut stock = DepotStock::new();
        let want = demand(&[(Food, 1_000)]);
        assert_eq!(stock.cap(NodeId(3), &want, &Cargo::new(10), None), want);
        assert!(stock.draw(NodeId(3), &want).is_empty());
    }

    #[test]
    fn finite_stock_caps_and_draws_down() {
        let mut stock = DepotStock::new();
        stock.set(NodeId(0), demand(&[(Food, 50), (Water, 10)]));
        let want = demand(&[(Food, 80), (Medicine, 5)]);
        assert_eq!(
            stock.cap(NodeId(0), &want, &Cargo::new(100), None),
            demand(&[(Food, 50), (Medicine, 0)])
        );

        let short = stock.draw(NodeId(0), &demand(&[(Food, 60)]));
        assert_eq!(short, demand(&[(Food, 10)]));
        assert_eq!(stock.get(NodeId(0)), Some(&demand(&[(Water, 10)])));
    }

    #[test]
    fn cargo_on_board_counts_toward_demand() {
        let mut stock = DepotStock::new();
        stock.set(NodeId(0), demand(&[(Food, 5)]));
        let mut hold = Cargo::new(100);
        hold.load(Supply::new(Food, 20)).unwrap();
        let want = demand(&[(Food, 30)]);
        assert_eq!(stock.cap(NodeId(0), &want, &hold, None), demand(&[(Food, 25)]));
    }

    #[test]
    fn earlier_draws_shrink_the_cap() {
        let mut stock = DepotStock::new();
        stock.set(NodeId(0), demand(&[(Food, 8)]));
        let want = demand(&[(Food, 10)]);
        let hold = Cargo::new(100);

        let drawn = demand(&[(Food, 5)]);
        assert_eq!(stock.cap(NodeId(0), &want, &hold, Some(&drawn)), demand(&[(Food, 3)]));
        let drawn = demand(&[(Food, 12)]);
        assert_eq!(stock.cap(NodeId(0), &want, &hold, Some(&drawn)), demand(&[(Food, 0)]));
        // Unlimited nodes ignore draws.
        assert_eq!(stock.cap(NodeId(1), &want, &hold, Some(&drawn)), want);
    }
}
