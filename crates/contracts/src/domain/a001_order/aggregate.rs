use crate::domain::common::BaseAggregate;
use crate::uuid_id;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

uuid_id! {
    /// Unique transport order identifier
    OrderId
}

/// Lifecycle of a transport order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Draft,
    Confirmed,
    InTransit,
    Delivered,
    Cancelled,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            OrderStatus::Draft => "Draft",
            OrderStatus::Confirmed => "Confirmed",
            OrderStatus::InTransit => "In transit",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        };
        f.write_str(s)
    }
}

/// Transport order: one customer shipment from origin to destination
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(flatten)]
    pub base: BaseAggregate<OrderId>,

    pub customer: String,
    pub origin: String,
    pub destination: String,
    pub status: OrderStatus,
    #[serde(rename = "scheduledDate")]
    pub scheduled_date: NaiveDate,
    #[serde(rename = "weightKg")]
    pub weight_kg: f64,
    pub amount: f64,
}

impl Order {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: OrderId,
        code: String,
        customer: String,
        origin: String,
        destination: String,
        status: OrderStatus,
        scheduled_date: NaiveDate,
        weight_kg: f64,
        amount: f64,
    ) -> Self {
        let description = format!("{} → {}", origin, destination);
        Self {
            base: BaseAggregate::new(id, code, description),
            customer,
            origin,
            destination,
            status,
            scheduled_date,
            weight_kg,
            amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_snake_case() {
        let json = serde_json::to_string(&OrderStatus::InTransit).unwrap();
        assert_eq!(json, "\"in_transit\"");
        let back: OrderStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, OrderStatus::InTransit);
    }

    #[test]
    fn order_round_trips_through_json() {
        let order = Order::new(
            OrderId::from_u128(1),
            "ORD-2025-001".into(),
            "Acme Foods".into(),
            "Rotterdam".into(),
            "Berlin".into(),
            OrderStatus::Confirmed,
            NaiveDate::from_ymd_opt(2025, 8, 12).unwrap(),
            1240.0,
            1890.50,
        );
        let json = serde_json::to_string(&order).unwrap();
        let back: Order = serde_json::from_str(&json).unwrap();
        assert_eq!(back.base.id, order.base.id);
        assert_eq!(back.customer, "Acme Foods");
        assert_eq!(back.scheduled_date, order.scheduled_date);
    }
}
