pub mod aggregate;

pub use aggregate::{RoutePlan, RoutePlanId, RouteStop};
