use crate::domain::common::BaseAggregate;
use crate::uuid_id;
use serde::{Deserialize, Serialize};

uuid_id! {
    /// Unique returnable packaging account identifier
    ReturnableAccountId
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReturnableKind {
    Pallet,
    Crate,
    Container,
}

impl std::fmt::Display for ReturnableKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ReturnableKind::Pallet => "Pallet",
            ReturnableKind::Crate => "Crate",
            ReturnableKind::Container => "Container",
        };
        f.write_str(s)
    }
}

/// Per-customer balance of returnable packaging units
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReturnableAccount {
    #[serde(flatten)]
    pub base: BaseAggregate<ReturnableAccountId>,

    pub kind: ReturnableKind,
    pub customer: String,
    pub issued: u32,
    pub returned: u32,
}

impl ReturnableAccount {
    /// Units still held by the customer
    pub fn outstanding(&self) -> u32 {
        self.issued.saturating_sub(self.returned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::BaseAggregate;

    fn account(issued: u32, returned: u32) -> ReturnableAccount {
        ReturnableAccount {
            base: BaseAggregate::new(
                ReturnableAccountId::from_u128(1),
                "RET-001".into(),
                "Test".into(),
            ),
            kind: ReturnableKind::Pallet,
            customer: "Acme".into(),
            issued,
            returned,
        }
    }

    #[test]
    fn outstanding_is_issued_minus_returned() {
        assert_eq!(account(120, 80).outstanding(), 40);
    }

    #[test]
    fn outstanding_saturates_at_zero() {
        // Over-return happens when units come back unmatched to an issue
        assert_eq!(account(10, 14).outstanding(), 0);
    }
}
