//! Thin async data-service layer over the mock stores.
//!
//! Shaped like a remote API (async, `Result<_, String>`, simulated latency)
//! so list pages keep the fetch/error/refresh flow they would have against a
//! real backend. Swapping this module for HTTP calls would leave the pages
//! untouched.

use super::fixtures;
use contracts::domain::a001_order::Order;
use contracts::domain::a002_trip::Trip;
use contracts::domain::a003_route_plan::RoutePlan;
use contracts::domain::a004_vehicle::Vehicle;
use contracts::domain::a005_driver::Driver;
use contracts::domain::a006_maintenance_task::MaintenanceTask;
use contracts::domain::a007_returnable::ReturnableAccount;
use contracts::domain::a008_sale::SaleRecord;
use gloo_timers::future::TimeoutFuture;

// Keeps spinners visible long enough to be honest about being async
const LATENCY_MS: u32 = 120;

async fn simulate_latency() {
    TimeoutFuture::new(LATENCY_MS).await;
}

/// Outcome of a delete: requesting ids and matching none of them is an error,
/// an empty request is a no-op success.
fn deletion_result(removed: usize, requested: usize, label: &str) -> Result<usize, String> {
    if removed == 0 && requested > 0 {
        return Err(format!("No matching {} found", label));
    }
    Ok(removed)
}

macro_rules! service {
    ($fetch:ident, $delete:ident, $ty:ty, $get:path, $remove:path, $label:literal) => {
        pub async fn $fetch() -> Result<Vec<$ty>, String> {
            let started = js_sys::Date::now();
            simulate_latency().await;
            let rows = $get();
            log::debug!(
                concat!("fetch ", $label, ": {} rows in {:.0} ms"),
                rows.len(),
                js_sys::Date::now() - started
            );
            Ok(rows)
        }

        /// Delete by row keys; fails when nothing matched
        pub async fn $delete(ids: &[String]) -> Result<(), String> {
            simulate_latency().await;
            let removed = deletion_result($remove(ids), ids.len(), $label).map_err(|e| {
                log::error!(concat!("delete ", $label, ": no matching rows"));
                e
            })?;
            log::debug!(concat!("delete ", $label, ": {} rows"), removed);
            Ok(())
        }
    };
}

service!(fetch_orders, delete_orders, Order, fixtures::all_orders, fixtures::remove_orders, "orders");
service!(fetch_trips, delete_trips, Trip, fixtures::all_trips, fixtures::remove_trips, "trips");
service!(fetch_route_plans, delete_route_plans, RoutePlan, fixtures::all_route_plans, fixtures::remove_route_plans, "route plans");
service!(fetch_vehicles, delete_vehicles, Vehicle, fixtures::all_vehicles, fixtures::remove_vehicles, "vehicles");
service!(fetch_drivers, delete_drivers, Driver, fixtures::all_drivers, fixtures::remove_drivers, "drivers");
service!(fetch_maintenance_tasks, delete_maintenance_tasks, MaintenanceTask, fixtures::all_maintenance_tasks, fixtures::remove_maintenance_tasks, "maintenance tasks");
service!(fetch_returnables, delete_returnables, ReturnableAccount, fixtures::all_returnables, fixtures::remove_returnables, "returnable accounts");
service!(fetch_sales, delete_sales, SaleRecord, fixtures::all_sales, fixtures::remove_sales, "sales");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deleting_with_no_match_is_an_error() {
        let err = deletion_result(0, 2, "orders").unwrap_err();
        assert_eq!(err, "No matching orders found");
    }

    #[test]
    fn deleting_nothing_is_a_no_op() {
        assert_eq!(deletion_result(0, 0, "orders"), Ok(0));
    }

    #[test]
    fn partial_matches_still_succeed() {
        assert_eq!(deletion_result(1, 3, "orders"), Ok(1));
    }
}
