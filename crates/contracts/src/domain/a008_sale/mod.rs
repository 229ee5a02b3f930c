pub mod aggregate;

pub use aggregate::{SaleRecord, SaleRecordId, SalesChannel};
