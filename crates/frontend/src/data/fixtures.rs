//! Deterministic in-memory mock collections.
//!
//! Ids are fixed (`from_u128` with a per-collection namespace) and dates are
//! pinned to July/August 2025, so list pages, KPIs and tests all see the same
//! data on every run. The stores are mutable so bulk delete behaves like a
//! real backend would.

use chrono::{NaiveDate, TimeZone, Utc};
use contracts::domain::a001_order::{Order, OrderId, OrderStatus};
use contracts::domain::a002_trip::{Trip, TripId, TripStatus};
use contracts::domain::a003_route_plan::{RoutePlan, RoutePlanId, RouteStop};
use contracts::domain::a004_vehicle::{Vehicle, VehicleId, VehicleKind, VehicleStatus};
use contracts::domain::a005_driver::{Driver, DriverId, DriverStatus};
use contracts::domain::a006_maintenance_task::{
    MaintenancePriority, MaintenanceStatus, MaintenanceTask, MaintenanceTaskId,
};
use contracts::domain::a007_returnable::{ReturnableAccount, ReturnableAccountId, ReturnableKind};
use contracts::domain::a008_sale::{SaleRecord, SaleRecordId, SalesChannel};
use contracts::domain::common::{BaseAggregate, EntityMetadata};
use once_cell::sync::Lazy;
use std::sync::RwLock;

// Id namespaces, one per collection
const NS_ORDER: u128 = 0x0001_0000;
const NS_TRIP: u128 = 0x0002_0000;
const NS_ROUTE: u128 = 0x0003_0000;
const NS_VEHICLE: u128 = 0x0004_0000;
const NS_DRIVER: u128 = 0x0005_0000;
const NS_MAINTENANCE: u128 = 0x0006_0000;
const NS_RETURNABLE: u128 = 0x0007_0000;
const NS_SALE: u128 = 0x0008_0000;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid fixture date")
}

fn base<Id>(id: Id, code: &str, description: &str) -> BaseAggregate<Id> {
    let created = Utc
        .with_ymd_and_hms(2025, 6, 30, 8, 0, 0)
        .single()
        .expect("valid fixture timestamp");
    BaseAggregate {
        id,
        code: code.to_string(),
        description: description.to_string(),
        comment: None,
        metadata: EntityMetadata::at(created),
    }
}

fn vehicles() -> Vec<Vehicle> {
    let rows = [
        ("VH-001", "WGM-402", "MAN TGX 18.470", VehicleKind::Semi, 24_000.0, 418_230.0, VehicleStatus::OnTrip),
        ("VH-002", "WGM-517", "Volvo FH 460", VehicleKind::Semi, 24_000.0, 287_410.0, VehicleStatus::Available),
        ("VH-003", "KLN-108", "Mercedes Atego 1224", VehicleKind::BoxTruck, 6_500.0, 154_980.0, VehicleStatus::OnTrip),
        ("VH-004", "KLN-233", "Iveco Daily 35S16", VehicleKind::Van, 1_200.0, 98_320.0, VehicleStatus::Available),
        ("VH-005", "HHA-771", "Scania R450 Frigo", VehicleKind::Refrigerated, 22_000.0, 334_600.0, VehicleStatus::InService),
        ("VH-006", "HHA-790", "Renault Master L3H2", VehicleKind::Van, 1_400.0, 61_150.0, VehicleStatus::Available),
    ];
    rows.iter()
        .enumerate()
        .map(|(i, (code, plate, model, kind, capacity, odometer, status))| Vehicle {
            base: base(VehicleId::from_u128(NS_VEHICLE + i as u128), code, model),
            plate: plate.to_string(),
            model: model.to_string(),
            kind: *kind,
            capacity_kg: *capacity,
            odometer_km: *odometer,
            status: *status,
        })
        .collect()
}

fn drivers() -> Vec<Driver> {
    let rows = [
        ("DR-001", "Jonas Keller", "CE", "+49 171 555 0141", DriverStatus::Active, 412),
        ("DR-002", "Marta Olszewska", "CE", "+48 602 555 913", DriverStatus::Active, 287),
        ("DR-003", "Sven Brandt", "C1", "+49 160 555 7702", DriverStatus::OnLeave, 198),
        ("DR-004", "Lucie Marchand", "C", "+33 6 55 50 23 18", DriverStatus::Active, 356),
        ("DR-005", "Petr Novák", "CE", "+420 605 555 341", DriverStatus::Active, 521),
        ("DR-006", "Arvid Lindqvist", "C1", "+46 70 555 6280", DriverStatus::Suspended, 74),
    ];
    rows.iter()
        .enumerate()
        .map(|(i, (code, name, license, phone, status, trips))| Driver {
            base: base(DriverId::from_u128(NS_DRIVER + i as u128), code, name),
            name: name.to_string(),
            license_class: license.to_string(),
            phone: phone.to_string(),
            status: *status,
            trips_completed: *trips,
        })
        .collect()
}

fn route_plans() -> Vec<RoutePlan> {
    let stop = |location: &str, dwell: u32| RouteStop {
        location: location.to_string(),
        dwell_minutes: dwell,
    };
    vec![
        RoutePlan {
            base: base(RoutePlanId::from_u128(NS_ROUTE), "RTE-001", "Rotterdam — Berlin"),
            name: "Rotterdam — Berlin".to_string(),
            origin: "Rotterdam".to_string(),
            destination: "Berlin".to_string(),
            stops: vec![stop("Osnabrück", 30), stop("Hannover", 45)],
            distance_km: 692.0,
            estimated_minutes: 420,
        },
        RoutePlan {
            base: base(RoutePlanId::from_u128(NS_ROUTE + 1), "RTE-002", "Hamburg — Prague"),
            name: "Hamburg — Prague".to_string(),
            origin: "Hamburg".to_string(),
            destination: "Prague".to_string(),
            stops: vec![stop("Dresden", 40)],
            distance_km: 645.0,
            estimated_minutes: 390,
        },
        RoutePlan {
            base: base(RoutePlanId::from_u128(NS_ROUTE + 2), "RTE-003", "Antwerp — Lyon"),
            name: "Antwerp — Lyon".to_string(),
            origin: "Antwerp".to_string(),
            destination: "Lyon".to_string(),
            stops: vec![stop("Reims", 35), stop("Dijon", 25)],
            distance_km: 780.0,
            estimated_minutes: 465,
        },
        RoutePlan {
            base: base(RoutePlanId::from_u128(NS_ROUTE + 3), "RTE-004", "Munich — Milan"),
            name: "Munich — Milan".to_string(),
            origin: "Munich".to_string(),
            destination: "Milan".to_string(),
            stops: vec![stop("Innsbruck", 30)],
            distance_km: 492.0,
            estimated_minutes: 330,
        },
        RoutePlan {
            base: base(RoutePlanId::from_u128(NS_ROUTE + 4), "RTE-005", "Warsaw — Vienna"),
            name: "Warsaw — Vienna".to_string(),
            origin: "Warsaw".to_string(),
            destination: "Vienna".to_string(),
            stops: vec![stop("Katowice", 20), stop("Brno", 30)],
            distance_km: 556.0,
            estimated_minutes: 350,
        },
    ]
}

fn orders() -> Vec<Order> {
    let rows = [
        ("ORD-2025-101", "Nordwind Foods", "Rotterdam", "Berlin", OrderStatus::Delivered, (2025, 7, 3), 8_400.0, 2_310.00),
        ("ORD-2025-102", "Baltic Steel", "Hamburg", "Prague", OrderStatus::Delivered, (2025, 7, 8), 21_500.0, 3_980.00),
        ("ORD-2025-103", "Helvetia Pharma", "Antwerp", "Lyon", OrderStatus::Delivered, (2025, 7, 15), 3_200.0, 2_750.00),
        ("ORD-2025-104", "Atlas Retail", "Munich", "Milan", OrderStatus::InTransit, (2025, 8, 4), 12_700.0, 2_120.00),
        ("ORD-2025-105", "Verde Produce", "Rotterdam", "Berlin", OrderStatus::InTransit, (2025, 8, 6), 15_900.0, 2_840.00),
        ("ORD-2025-106", "Kranich Logistik", "Warsaw", "Vienna", OrderStatus::Confirmed, (2025, 8, 12), 9_100.0, 1_930.00),
        ("ORD-2025-107", "Nordwind Foods", "Hamburg", "Prague", OrderStatus::Confirmed, (2025, 8, 14), 18_300.0, 3_410.00),
        ("ORD-2025-108", "Atlas Retail", "Antwerp", "Lyon", OrderStatus::Confirmed, (2025, 8, 19), 6_800.0, 2_260.00),
        ("ORD-2025-109", "Baltic Steel", "Munich", "Milan", OrderStatus::Draft, (2025, 8, 25), 22_000.0, 4_150.00),
        ("ORD-2025-110", "Verde Produce", "Warsaw", "Vienna", OrderStatus::Cancelled, (2025, 8, 9), 7_500.0, 1_780.00),
    ];
    rows.iter()
        .enumerate()
        .map(|(i, (code, customer, origin, destination, status, (y, m, d), weight, amount))| {
            Order::new(
                OrderId::from_u128(NS_ORDER + i as u128),
                code.to_string(),
                customer.to_string(),
                origin.to_string(),
                destination.to_string(),
                *status,
                date(*y, *m, *d),
                *weight,
                *amount,
            )
        })
        .collect()
}

fn trips() -> Vec<Trip> {
    let vehicles = vehicles();
    let drivers = drivers();
    let routes = route_plans();

    // (code, driver idx, vehicle idx, route idx, departure (d, h), hours, on_time, status)
    let rows: [(&str, usize, usize, usize, (u32, u32), i64, Option<bool>, TripStatus); 8] = [
        ("TRP-2025-301", 0, 0, 0, (2, 6), 8, Some(true), TripStatus::Completed),
        ("TRP-2025-302", 1, 2, 1, (7, 5), 7, Some(true), TripStatus::Completed),
        ("TRP-2025-303", 3, 4, 2, (14, 4), 9, Some(false), TripStatus::Completed),
        ("TRP-2025-304", 4, 0, 3, (21, 6), 6, Some(true), TripStatus::Completed),
        ("TRP-2025-305", 0, 0, 3, (28, 7), 6, Some(true), TripStatus::Completed),
        ("TRP-2025-306", 1, 2, 0, (33, 6), 8, None, TripStatus::EnRoute),
        ("TRP-2025-307", 4, 1, 4, (35, 5), 7, None, TripStatus::Planned),
        ("TRP-2025-308", 3, 3, 2, (34, 8), 9, None, TripStatus::Delayed),
    ];

    rows.iter()
        .enumerate()
        .map(|(i, (code, dr, vh, rt, (day_offset, hour), hours, on_time, status))| {
            // Day offsets count from 2025-07-01
            let departure = Utc
                .with_ymd_and_hms(2025, 7, 1, *hour, 0, 0)
                .single()
                .expect("valid fixture timestamp")
                + chrono::Duration::days(*day_offset as i64 - 1);
            let route = &routes[*rt];
            Trip {
                base: base(TripId::from_u128(NS_TRIP + i as u128), code, &route.name),
                driver_id: drivers[*dr].base.id,
                driver_name: drivers[*dr].name.clone(),
                vehicle_id: vehicles[*vh].base.id,
                vehicle_plate: vehicles[*vh].plate.clone(),
                route_plan_id: route.base.id,
                route_name: route.name.clone(),
                departure,
                arrival: departure + chrono::Duration::hours(*hours),
                on_time: *on_time,
                status: *status,
                distance_km: route.distance_km,
            }
        })
        .collect()
}

fn maintenance_tasks() -> Vec<MaintenanceTask> {
    let vehicles = vehicles();
    let rows = [
        ("MNT-501", 4, "Cooling unit overhaul", (2025, 8, 5), MaintenancePriority::Critical, MaintenanceStatus::InProgress, 2_400.0),
        ("MNT-502", 0, "Brake pad replacement", (2025, 8, 18), MaintenancePriority::High, MaintenanceStatus::Scheduled, 850.0),
        ("MNT-503", 2, "Annual inspection", (2025, 8, 22), MaintenancePriority::Medium, MaintenanceStatus::Scheduled, 420.0),
        ("MNT-504", 1, "Tire rotation", (2025, 7, 28), MaintenancePriority::Low, MaintenanceStatus::Done, 180.0),
        ("MNT-505", 3, "Oil and filter change", (2025, 7, 20), MaintenancePriority::Low, MaintenanceStatus::Done, 150.0),
        ("MNT-506", 5, "Tachograph calibration", (2025, 7, 10), MaintenancePriority::Medium, MaintenanceStatus::Overdue, 260.0),
    ];
    rows.iter()
        .enumerate()
        .map(|(i, (code, vh, task, (y, m, d), priority, status, cost))| MaintenanceTask {
            base: base(MaintenanceTaskId::from_u128(NS_MAINTENANCE + i as u128), code, task),
            vehicle_id: vehicles[*vh].base.id,
            vehicle_plate: vehicles[*vh].plate.clone(),
            task: task.to_string(),
            due_date: date(*y, *m, *d),
            priority: *priority,
            status: *status,
            estimated_cost: *cost,
        })
        .collect()
}

fn returnables() -> Vec<ReturnableAccount> {
    let rows = [
        ("RET-601", ReturnableKind::Pallet, "Nordwind Foods", 420, 385),
        ("RET-602", ReturnableKind::Pallet, "Atlas Retail", 260, 260),
        ("RET-603", ReturnableKind::Crate, "Verde Produce", 1_180, 940),
        ("RET-604", ReturnableKind::Crate, "Nordwind Foods", 640, 590),
        ("RET-605", ReturnableKind::Container, "Baltic Steel", 36, 28),
        ("RET-606", ReturnableKind::Container, "Helvetia Pharma", 18, 11),
    ];
    rows.iter()
        .enumerate()
        .map(|(i, (code, kind, customer, issued, returned))| ReturnableAccount {
            base: base(
                ReturnableAccountId::from_u128(NS_RETURNABLE + i as u128),
                code,
                customer,
            ),
            kind: *kind,
            customer: customer.to_string(),
            issued: *issued,
            returned: *returned,
        })
        .collect()
}

fn sales() -> Vec<SaleRecord> {
    let rows = [
        ("SAL-701", (2025, 7, 2), "Nordwind Foods", 14, 2_310.00, 18.5, SalesChannel::Direct),
        ("SAL-702", (2025, 7, 7), "Baltic Steel", 6, 3_980.00, 22.0, SalesChannel::Distributor),
        ("SAL-703", (2025, 7, 11), "Helvetia Pharma", 9, 2_750.00, 31.2, SalesChannel::Direct),
        ("SAL-704", (2025, 7, 16), "Atlas Retail", 22, 1_890.00, 14.8, SalesChannel::Online),
        ("SAL-705", (2025, 7, 21), "Verde Produce", 31, 2_640.00, 12.4, SalesChannel::Direct),
        ("SAL-706", (2025, 7, 25), "Kranich Logistik", 4, 1_120.00, 19.7, SalesChannel::Distributor),
        ("SAL-707", (2025, 7, 30), "Nordwind Foods", 11, 1_980.00, 17.3, SalesChannel::Direct),
        ("SAL-708", (2025, 8, 4), "Atlas Retail", 18, 2_120.00, 15.1, SalesChannel::Online),
        ("SAL-709", (2025, 8, 8), "Verde Produce", 27, 2_840.00, 13.9, SalesChannel::Direct),
        ("SAL-710", (2025, 8, 13), "Baltic Steel", 8, 4_150.00, 23.6, SalesChannel::Distributor),
        ("SAL-711", (2025, 8, 19), "Helvetia Pharma", 7, 2_260.00, 29.8, SalesChannel::Direct),
        ("SAL-712", (2025, 8, 24), "Kranich Logistik", 5, 1_930.00, 20.2, SalesChannel::Online),
    ];
    rows.iter()
        .enumerate()
        .map(|(i, (code, (y, m, d), customer, items, amount, margin, channel))| SaleRecord {
            base: base(SaleRecordId::from_u128(NS_SALE + i as u128), code, customer),
            sale_date: date(*y, *m, *d),
            customer: customer.to_string(),
            items: *items,
            amount: *amount,
            margin_pct: *margin,
            channel: *channel,
        })
        .collect()
}

// ============================================================================
// Mutable stores
// ============================================================================

macro_rules! store {
    ($static_name:ident, $get:ident, $remove:ident, $ty:ty, $seed:expr) => {
        static $static_name: Lazy<RwLock<Vec<$ty>>> = Lazy::new(|| RwLock::new($seed));

        pub fn $get() -> Vec<$ty> {
            $static_name.read().expect("store lock poisoned").clone()
        }

        /// Removes rows whose id string is in `ids`; returns removed count
        pub fn $remove(ids: &[String]) -> usize {
            use contracts::domain::common::AggregateId;
            let mut store = $static_name.write().expect("store lock poisoned");
            let before = store.len();
            store.retain(|row| !ids.contains(&row.base.id.as_string()));
            before - store.len()
        }
    };
}

store!(ORDERS, all_orders, remove_orders, Order, orders());
store!(TRIPS, all_trips, remove_trips, Trip, trips());
store!(ROUTE_PLANS, all_route_plans, remove_route_plans, RoutePlan, route_plans());
store!(VEHICLES, all_vehicles, remove_vehicles, Vehicle, vehicles());
store!(DRIVERS, all_drivers, remove_drivers, Driver, drivers());
store!(MAINTENANCE, all_maintenance_tasks, remove_maintenance_tasks, MaintenanceTask, maintenance_tasks());
store!(RETURNABLES, all_returnables, remove_returnables, ReturnableAccount, returnables());
store!(SALES, all_sales, remove_sales, SaleRecord, sales());

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::AggregateId;
    use std::collections::HashSet;

    fn assert_unique_ids<I: Iterator<Item = String>>(ids: I) {
        let mut seen = HashSet::new();
        for id in ids {
            assert!(seen.insert(id.clone()), "duplicate id {id}");
        }
    }

    #[test]
    fn every_collection_has_unique_keys() {
        assert_unique_ids(orders().iter().map(|r| r.base.id.as_string()));
        assert_unique_ids(trips().iter().map(|r| r.base.id.as_string()));
        assert_unique_ids(route_plans().iter().map(|r| r.base.id.as_string()));
        assert_unique_ids(vehicles().iter().map(|r| r.base.id.as_string()));
        assert_unique_ids(drivers().iter().map(|r| r.base.id.as_string()));
        assert_unique_ids(maintenance_tasks().iter().map(|r| r.base.id.as_string()));
        assert_unique_ids(returnables().iter().map(|r| r.base.id.as_string()));
        assert_unique_ids(sales().iter().map(|r| r.base.id.as_string()));
    }

    #[test]
    fn trips_reference_existing_fleet_and_routes() {
        let vehicle_ids: HashSet<_> = vehicles().iter().map(|v| v.base.id).collect();
        let driver_ids: HashSet<_> = drivers().iter().map(|d| d.base.id).collect();
        let route_ids: HashSet<_> = route_plans().iter().map(|r| r.base.id).collect();
        for trip in trips() {
            assert!(vehicle_ids.contains(&trip.vehicle_id));
            assert!(driver_ids.contains(&trip.driver_id));
            assert!(route_ids.contains(&trip.route_plan_id));
        }
    }

    #[test]
    fn maintenance_references_existing_vehicles() {
        let vehicle_ids: HashSet<_> = vehicles().iter().map(|v| v.base.id).collect();
        for task in maintenance_tasks() {
            assert!(vehicle_ids.contains(&task.vehicle_id));
        }
    }

    #[test]
    fn completed_trips_carry_an_on_time_flag() {
        for trip in trips() {
            if trip.status == TripStatus::Completed {
                assert!(trip.on_time.is_some(), "{} lacks on_time", trip.base.code);
            } else {
                assert!(trip.on_time.is_none(), "{} set too early", trip.base.code);
            }
        }
    }

    #[test]
    fn remove_drops_only_the_given_ids() {
        // Mutates the shared ORDERS store; the other tests read the seed
        // functions, not the store, so this stays isolated.
        let before = all_orders();
        let victim = before[0].base.id.as_string();

        assert_eq!(remove_orders(&[victim.clone()]), 1);

        let after = all_orders();
        assert_eq!(after.len(), before.len() - 1);
        assert!(after.iter().all(|row| row.base.id.as_string() != victim));
        // The survivors are exactly the non-victims, order preserved
        let expected: Vec<String> = before
            .iter()
            .map(|row| row.base.id.as_string())
            .filter(|id| *id != victim)
            .collect();
        let surviving: Vec<String> = after.iter().map(|row| row.base.id.as_string()).collect();
        assert_eq!(surviving, expected);

        // A second pass with the same id matches nothing
        assert_eq!(remove_orders(&[victim]), 0);
    }
}
