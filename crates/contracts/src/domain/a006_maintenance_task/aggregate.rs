use crate::domain::a004_vehicle::VehicleId;
use crate::domain::common::BaseAggregate;
use crate::uuid_id;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

uuid_id! {
    /// Unique maintenance task identifier
    MaintenanceTaskId
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaintenancePriority {
    Low,
    Medium,
    High,
    Critical,
}

impl std::fmt::Display for MaintenancePriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            MaintenancePriority::Low => "Low",
            MaintenancePriority::Medium => "Medium",
            MaintenancePriority::High => "High",
            MaintenancePriority::Critical => "Critical",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaintenanceStatus {
    Scheduled,
    InProgress,
    Done,
    Overdue,
}

impl std::fmt::Display for MaintenanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            MaintenanceStatus::Scheduled => "Scheduled",
            MaintenanceStatus::InProgress => "In progress",
            MaintenanceStatus::Done => "Done",
            MaintenanceStatus::Overdue => "Overdue",
        };
        f.write_str(s)
    }
}

/// Scheduled service work on one vehicle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaintenanceTask {
    #[serde(flatten)]
    pub base: BaseAggregate<MaintenanceTaskId>,

    #[serde(rename = "vehicleId")]
    pub vehicle_id: VehicleId,
    #[serde(rename = "vehiclePlate")]
    pub vehicle_plate: String,
    pub task: String,
    #[serde(rename = "dueDate")]
    pub due_date: NaiveDate,
    pub priority: MaintenancePriority,
    pub status: MaintenanceStatus,
    #[serde(rename = "estimatedCost")]
    pub estimated_cost: f64,
}
