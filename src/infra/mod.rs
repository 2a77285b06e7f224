//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connection handle
//! - Account and error-log repositories
//! - Password hashing

pub mod db;
pub mod hashing;
pub mod repositories;

pub use db::Database;
pub use hashing::{Argon2Hasher, Hasher};
pub use repositories::{AccountRepository, AccountStore, LogErrorRepository, LogErrorStore};

#[cfg(any(test, feature = "test-utils"))]
pub use hashing::MockHasher;
#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockAccountRepository, MockLogErrorRepository};
