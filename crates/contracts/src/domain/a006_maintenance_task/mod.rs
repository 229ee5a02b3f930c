pub mod aggregate;

pub use aggregate::{MaintenancePriority, MaintenanceStatus, MaintenanceTask, MaintenanceTaskId};
