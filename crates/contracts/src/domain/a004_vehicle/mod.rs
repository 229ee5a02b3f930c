pub mod aggregate;

pub use aggregate::{Vehicle, VehicleId, VehicleKind, VehicleStatus};
