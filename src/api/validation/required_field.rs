use super::Validation;
use crate::api::ErrorDescriptor;
use crate::domain::{Field, RegistrationInput};
use crate::errors::AppResult;

/// Fails with `MissingField` when the field is absent.
#[derive(Debug, Clone, Copy)]
pub struct RequiredFieldValidation {
    field: Field,
}

impl RequiredFieldValidation {
    pub fn new(field: Field) -> Self {
        Self { field }
    }
}

impl Validation for RequiredFieldValidation {
    fn validate(&self, input: &RegistrationInput) -> AppResult<Option<ErrorDescriptor>> {
        Ok(input
            .field(self.field)
            .is_none()
            .then(|| ErrorDescriptor::missing_field(self.field)))
    }
}
