//! Pure KPI computations over the domain aggregates.
//!
//! Kept free of signals and fetching so every number on the dashboard has a
//! directly testable definition.

use chrono::NaiveDate;
use contracts::domain::a001_order::{Order, OrderStatus};
use contracts::domain::a002_trip::{Trip, TripStatus};
use contracts::domain::a004_vehicle::{Vehicle, VehicleStatus};
use contracts::domain::a006_maintenance_task::{MaintenanceStatus, MaintenanceTask};
use contracts::domain::a007_returnable::ReturnableAccount;
use contracts::domain::a008_sale::SaleRecord;

/// Orders not yet delivered or cancelled
pub fn open_orders(orders: &[Order]) -> usize {
    orders
        .iter()
        .filter(|o| {
            matches!(
                o.status,
                OrderStatus::Draft | OrderStatus::Confirmed | OrderStatus::InTransit
            )
        })
        .count()
}

/// Share of completed trips that arrived on time, percent.
/// `None` until at least one completed trip has a punctuality verdict.
pub fn on_time_rate(trips: &[Trip]) -> Option<f64> {
    let verdicts: Vec<bool> = trips
        .iter()
        .filter(|t| t.status == TripStatus::Completed)
        .filter_map(|t| t.on_time)
        .collect();
    if verdicts.is_empty() {
        return None;
    }
    let on_time = verdicts.iter().filter(|v| **v).count();
    Some(on_time as f64 / verdicts.len() as f64 * 100.0)
}

/// Share of the active fleet currently on a trip, percent.
/// Retired vehicles do not count toward the denominator.
pub fn fleet_utilization(vehicles: &[Vehicle]) -> Option<f64> {
    let active = vehicles
        .iter()
        .filter(|v| v.status != VehicleStatus::Retired)
        .count();
    if active == 0 {
        return None;
    }
    let on_trip = vehicles
        .iter()
        .filter(|v| v.status == VehicleStatus::OnTrip)
        .count();
    Some(on_trip as f64 / active as f64 * 100.0)
}

/// Maintenance tasks past their due date and not done
pub fn overdue_maintenance(tasks: &[MaintenanceTask]) -> usize {
    tasks
        .iter()
        .filter(|t| t.status == MaintenanceStatus::Overdue)
        .count()
}

/// Returnable units currently held by customers, all accounts summed
pub fn outstanding_returnables(accounts: &[ReturnableAccount]) -> u32 {
    accounts.iter().map(|a| a.outstanding()).sum()
}

/// Revenue within an inclusive date range; `None` bounds are open-ended
pub fn revenue_in_range(
    sales: &[SaleRecord],
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> f64 {
    sales
        .iter()
        .filter(|s| {
            from.map_or(true, |f| s.sale_date >= f) && to.map_or(true, |t| s.sale_date <= t)
        })
        .map(|s| s.amount)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_order::OrderId;
    use contracts::domain::a002_trip::TripId;
    use contracts::domain::a003_route_plan::RoutePlanId;
    use contracts::domain::a004_vehicle::{VehicleId, VehicleKind};
    use contracts::domain::a005_driver::DriverId;
    use contracts::domain::a008_sale::{SaleRecordId, SalesChannel};
    use contracts::domain::common::BaseAggregate;

    fn order(status: OrderStatus) -> Order {
        Order {
            base: BaseAggregate::new(OrderId::from_u128(1), "ORD-1".into(), String::new()),
            customer: "Acme".into(),
            origin: "A".into(),
            destination: "B".into(),
            status,
            scheduled_date: NaiveDate::from_ymd_opt(2025, 8, 1).unwrap(),
            weight_kg: 100.0,
            amount: 500.0,
        }
    }

    fn trip(status: TripStatus, on_time: Option<bool>) -> Trip {
        Trip {
            base: BaseAggregate::new(TripId::from_u128(1), "TRP-1".into(), String::new()),
            driver_id: DriverId::from_u128(1),
            driver_name: "D".into(),
            vehicle_id: VehicleId::from_u128(1),
            vehicle_plate: "V".into(),
            route_plan_id: RoutePlanId::from_u128(1),
            route_name: "R".into(),
            departure: chrono::Utc::now(),
            arrival: chrono::Utc::now(),
            on_time,
            status,
            distance_km: 10.0,
        }
    }

    fn vehicle(status: VehicleStatus) -> Vehicle {
        Vehicle {
            base: BaseAggregate::new(VehicleId::from_u128(1), "VEH-1".into(), String::new()),
            plate: "AB-123".into(),
            model: "Model".into(),
            kind: VehicleKind::Van,
            capacity_kg: 1000.0,
            odometer_km: 50_000.0,
            status,
        }
    }

    fn sale(date: &str, amount: f64) -> SaleRecord {
        SaleRecord {
            base: BaseAggregate::new(SaleRecordId::from_u128(1), "SAL-1".into(), String::new()),
            sale_date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            customer: "Acme".into(),
            items: 1,
            amount,
            margin_pct: 10.0,
            channel: SalesChannel::Direct,
        }
    }

    #[test]
    fn open_orders_exclude_terminal_statuses() {
        let orders = vec![
            order(OrderStatus::Draft),
            order(OrderStatus::Confirmed),
            order(OrderStatus::InTransit),
            order(OrderStatus::Delivered),
            order(OrderStatus::Cancelled),
        ];
        assert_eq!(open_orders(&orders), 3);
    }

    #[test]
    fn on_time_rate_counts_only_completed_with_verdict() {
        let trips = vec![
            trip(TripStatus::Completed, Some(true)),
            trip(TripStatus::Completed, Some(true)),
            trip(TripStatus::Completed, Some(false)),
            trip(TripStatus::Completed, None),
            trip(TripStatus::EnRoute, None),
        ];
        let rate = on_time_rate(&trips).unwrap();
        assert!((rate - 200.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn on_time_rate_empty_is_none() {
        assert_eq!(on_time_rate(&[]), None);
        assert_eq!(on_time_rate(&[trip(TripStatus::Planned, None)]), None);
    }

    #[test]
    fn utilization_ignores_retired_vehicles() {
        let fleet = vec![
            vehicle(VehicleStatus::OnTrip),
            vehicle(VehicleStatus::Available),
            vehicle(VehicleStatus::InService),
            vehicle(VehicleStatus::Retired),
        ];
        let rate = fleet_utilization(&fleet).unwrap();
        assert!((rate - 100.0 / 3.0).abs() < 1e-9);
        assert_eq!(fleet_utilization(&[vehicle(VehicleStatus::Retired)]), None);
    }

    #[test]
    fn revenue_respects_inclusive_bounds() {
        let sales = vec![
            sale("2025-07-31", 100.0),
            sale("2025-08-01", 200.0),
            sale("2025-08-31", 300.0),
            sale("2025-09-01", 400.0),
        ];
        let from = NaiveDate::from_ymd_opt(2025, 8, 1);
        let to = NaiveDate::from_ymd_opt(2025, 8, 31);
        assert_eq!(revenue_in_range(&sales, from, to), 500.0);
        assert_eq!(revenue_in_range(&sales, None, None), 1000.0);
        assert_eq!(revenue_in_range(&sales, from, None), 900.0);
    }
}
