use crate::domain::common::BaseAggregate;
use crate::uuid_id;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

uuid_id! {
    /// Unique sale record identifier
    SaleRecordId
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalesChannel {
    Direct,
    Distributor,
    Online,
}

impl std::fmt::Display for SalesChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SalesChannel::Direct => "Direct",
            SalesChannel::Distributor => "Distributor",
            SalesChannel::Online => "Online",
        };
        f.write_str(s)
    }
}

/// One line of the sales register
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleRecord {
    #[serde(flatten)]
    pub base: BaseAggregate<SaleRecordId>,

    #[serde(rename = "saleDate")]
    pub sale_date: NaiveDate,
    pub customer: String,
    pub items: u32,
    pub amount: f64,
    #[serde(rename = "marginPct")]
    pub margin_pct: f64,
    pub channel: SalesChannel,
}
