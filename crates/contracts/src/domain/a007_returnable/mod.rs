pub mod aggregate;

pub use aggregate::{ReturnableAccount, ReturnableAccountId, ReturnableKind};
