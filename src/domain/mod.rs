//! Domain layer - Core business entities
//!
//! The signup submission and the account shapes it turns into. Nothing here
//! knows about HTTP or the storage schema.

pub mod account;
pub mod registration;

pub use account::{Account, AccountToCreate, HashedAccountToCreate};
pub use registration::{Field, RegistrationInput};
