pub mod aggregate;

pub use aggregate::{Trip, TripId, TripStatus};
