//! Utility adapters.

pub mod email_validator;

pub use email_validator::{EmailValidator, EmailValidatorAdapter};

#[cfg(any(test, feature = "test-utils"))]
pub use email_validator::MockEmailValidator;
