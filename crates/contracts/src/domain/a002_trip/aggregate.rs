use crate::domain::a003_route_plan::RoutePlanId;
use crate::domain::a004_vehicle::VehicleId;
use crate::domain::a005_driver::DriverId;
use crate::domain::common::BaseAggregate;
use crate::uuid_id;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

uuid_id! {
    /// Unique trip identifier
    TripId
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TripStatus {
    Planned,
    EnRoute,
    Completed,
    Delayed,
    Cancelled,
}

impl std::fmt::Display for TripStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TripStatus::Planned => "Planned",
            TripStatus::EnRoute => "En route",
            TripStatus::Completed => "Completed",
            TripStatus::Delayed => "Delayed",
            TripStatus::Cancelled => "Cancelled",
        };
        f.write_str(s)
    }
}

/// One execution of a route plan by a driver and a vehicle.
///
/// Denormalized display names are carried alongside the ids so list pages
/// do not need cross-aggregate lookups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trip {
    #[serde(flatten)]
    pub base: BaseAggregate<TripId>,

    #[serde(rename = "driverId")]
    pub driver_id: DriverId,
    #[serde(rename = "driverName")]
    pub driver_name: String,
    #[serde(rename = "vehicleId")]
    pub vehicle_id: VehicleId,
    #[serde(rename = "vehiclePlate")]
    pub vehicle_plate: String,
    #[serde(rename = "routePlanId")]
    pub route_plan_id: RoutePlanId,
    #[serde(rename = "routeName")]
    pub route_name: String,

    pub departure: DateTime<Utc>,
    /// Planned arrival; actual arrival once the trip completes
    pub arrival: DateTime<Utc>,
    /// Set on completion, true when arrival was within the planned window
    #[serde(rename = "onTime")]
    pub on_time: Option<bool>,
    pub status: TripStatus,
    #[serde(rename = "distanceKm")]
    pub distance_km: f64,
}
