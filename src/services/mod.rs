//! Application services layer - Use cases.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion.

mod add_account;

pub use add_account::{AddAccount, DbAddAccount};

#[cfg(any(test, feature = "test-utils"))]
pub use add_account::MockAddAccount;
