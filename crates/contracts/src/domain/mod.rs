pub mod common;

pub mod a001_order;
pub mod a002_trip;
pub mod a003_route_plan;
pub mod a004_vehicle;
pub mod a005_driver;
pub mod a006_maintenance_task;
pub mod a007_returnable;
pub mod a008_sale;
