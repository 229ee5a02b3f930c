use crate::domain::common::BaseAggregate;
use crate::uuid_id;
use serde::{Deserialize, Serialize};

uuid_id! {
    /// Unique vehicle identifier
    VehicleId
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleKind {
    Van,
    BoxTruck,
    Semi,
    Refrigerated,
}

impl std::fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            VehicleKind::Van => "Van",
            VehicleKind::BoxTruck => "Box truck",
            VehicleKind::Semi => "Semi",
            VehicleKind::Refrigerated => "Refrigerated",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleStatus {
    Available,
    OnTrip,
    InService,
    Retired,
}

impl std::fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            VehicleStatus::Available => "Available",
            VehicleStatus::OnTrip => "On trip",
            VehicleStatus::InService => "In service",
            VehicleStatus::Retired => "Retired",
        };
        f.write_str(s)
    }
}

/// Fleet vehicle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    #[serde(flatten)]
    pub base: BaseAggregate<VehicleId>,

    pub plate: String,
    pub model: String,
    pub kind: VehicleKind,
    #[serde(rename = "capacityKg")]
    pub capacity_kg: f64,
    #[serde(rename = "odometerKm")]
    pub odometer_km: f64,
    pub status: VehicleStatus,
}
