use crate::domain::common::BaseAggregate;
use crate::uuid_id;
use serde::{Deserialize, Serialize};

uuid_id! {
    /// Unique driver identifier
    DriverId
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DriverStatus {
    Active,
    OnLeave,
    Suspended,
}

impl std::fmt::Display for DriverStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            DriverStatus::Active => "Active",
            DriverStatus::OnLeave => "On leave",
            DriverStatus::Suspended => "Suspended",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Driver {
    #[serde(flatten)]
    pub base: BaseAggregate<DriverId>,

    pub name: String,
    #[serde(rename = "licenseClass")]
    pub license_class: String,
    pub phone: String,
    pub status: DriverStatus,
    #[serde(rename = "tripsCompleted")]
    pub trips_completed: u32,
}
