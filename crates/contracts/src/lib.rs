//! Shared domain contracts for the fleetboard dashboard.
//!
//! Plain data types only: aggregates, enums and value formats used by the
//! frontend. No persistence and no transport logic lives here.

pub mod domain;
pub mod shared;
