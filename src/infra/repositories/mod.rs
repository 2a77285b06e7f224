//! Repository layer - Data access abstraction
//!
//! Repositories hide the storage engine behind traits so the use case and
//! the error-logging decorator only see domain types.

mod account_repository;
pub mod entities;
mod log_repository;

pub use account_repository::{AccountRepository, AccountStore};
pub use log_repository::{LogErrorRepository, LogErrorStore};

// Export mocks for tests
#[cfg(any(test, feature = "test-utils"))]
pub use account_repository::MockAccountRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use log_repository::MockLogErrorRepository;
