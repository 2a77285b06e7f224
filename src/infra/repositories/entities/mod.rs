//! MongoDB document definitions
//!
//! These are storage-specific shapes kept separate from domain models.

pub mod account;
pub mod error_log;

pub use account::{map_inserted_account, AccountDocument};
pub use error_log::ErrorLogDocument;
