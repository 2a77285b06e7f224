//! Signup validation chain.
//!
//! Each [`Validation`] inspects the submission and either reports the first
//! problem it finds or passes. [`ValidationComposite`] runs its members in
//! order and stops at the first reported problem.

mod compare_fields;
mod composite;
mod email;
mod required_field;

use std::sync::Arc;

pub use compare_fields::CompareFieldsValidation;
pub use composite::ValidationComposite;
pub use email::EmailValidation;
pub use required_field::RequiredFieldValidation;

use super::ErrorDescriptor;
use crate::domain::{Field, RegistrationInput};
use crate::errors::AppResult;
use crate::utils::EmailValidator;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// One validation rule.
///
/// `Ok(Some(_))` is a client error, `Ok(None)` a pass. `Err` is reserved
/// for a faulty collaborator and becomes a server fault upstream.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait Validation: Send + Sync {
    fn validate(&self, input: &RegistrationInput) -> AppResult<Option<ErrorDescriptor>>;
}

/// Signup rules in check order: presence of every field, password
/// confirmation, then email format.
pub fn signup_validation(email_validator: Arc<dyn EmailValidator>) -> ValidationComposite {
    let mut validations: Vec<Box<dyn Validation>> = Field::REQUIRED
        .into_iter()
        .map(|field| Box::new(RequiredFieldValidation::new(field)) as Box<dyn Validation>)
        .collect();

    validations.push(Box::new(CompareFieldsValidation::new(
        Field::Password,
        Field::PasswordConfirmation,
    )));
    validations.push(Box::new(EmailValidation::new(Field::Email, email_validator)));

    ValidationComposite::new(validations)
}
