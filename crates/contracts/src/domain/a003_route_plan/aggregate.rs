use crate::domain::common::BaseAggregate;
use crate::uuid_id;
use serde::{Deserialize, Serialize};

uuid_id! {
    /// Unique route plan identifier
    RoutePlanId
}

/// One intermediate stop of a route plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteStop {
    pub location: String,
    /// Minutes planned at the stop
    #[serde(rename = "dwellMinutes")]
    pub dwell_minutes: u32,
}

/// Reusable route between two endpoints.
///
/// No geography here: routes are tabular (name, endpoints, stops, distance,
/// duration). Map rendering is out of scope for this dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutePlan {
    #[serde(flatten)]
    pub base: BaseAggregate<RoutePlanId>,

    pub name: String,
    pub origin: String,
    pub destination: String,
    pub stops: Vec<RouteStop>,
    #[serde(rename = "distanceKm")]
    pub distance_km: f64,
    /// Estimated driving time, minutes
    #[serde(rename = "estimatedMinutes")]
    pub estimated_minutes: u32,
}

impl RoutePlan {
    /// Driving plus dwell time, minutes
    pub fn total_minutes(&self) -> u32 {
        let dwell: u32 = self.stops.iter().map(|s| s.dwell_minutes).sum();
        self.estimated_minutes + dwell
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::BaseAggregate;

    #[test]
    fn total_minutes_includes_dwell() {
        let plan = RoutePlan {
            base: BaseAggregate::new(RoutePlanId::from_u128(1), "RTE-001".into(), "Test".into()),
            name: "Test".into(),
            origin: "A".into(),
            destination: "B".into(),
            stops: vec![
                RouteStop {
                    location: "S1".into(),
                    dwell_minutes: 20,
                },
                RouteStop {
                    location: "S2".into(),
                    dwell_minutes: 10,
                },
            ],
            distance_km: 120.0,
            estimated_minutes: 90,
        };
        assert_eq!(plan.total_minutes(), 120);
    }
}
