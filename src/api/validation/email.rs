use std::sync::Arc;

use super::Validation;
use crate::api::ErrorDescriptor;
use crate::domain::{Field, RegistrationInput};
use crate::errors::AppResult;
use crate::utils::EmailValidator;

/// Fails with `InvalidField` when the injected checker rejects the value.
///
/// An absent value is left to [`super::RequiredFieldValidation`].
pub struct EmailValidation {
    field: Field,
    email_validator: Arc<dyn EmailValidator>,
}

impl EmailValidation {
    pub fn new(field: Field, email_validator: Arc<dyn EmailValidator>) -> Self {
        Self {
            field,
            email_validator,
        }
    }
}

impl Validation for EmailValidation {
    fn validate(&self, input: &RegistrationInput) -> AppResult<Option<ErrorDescriptor>> {
        let Some(email) = input.field(self.field) else {
            return Ok(None);
        };

        let is_valid = self.email_validator.is_valid(email)?;
        Ok((!is_valid).then(|| ErrorDescriptor::invalid_field(self.field)))
    }
}
