use super::Validation;
use crate::api::ErrorDescriptor;
use crate::domain::{Field, RegistrationInput};
use crate::errors::AppResult;

/// Fails with `InvalidField(field_to_compare)` when the two values differ.
#[derive(Debug, Clone, Copy)]
pub struct CompareFieldsValidation {
    field: Field,
    field_to_compare: Field,
}

impl CompareFieldsValidation {
    pub fn new(field: Field, field_to_compare: Field) -> Self {
        Self {
            field,
            field_to_compare,
        }
    }
}

impl Validation for CompareFieldsValidation {
    fn validate(&self, input: &RegistrationInput) -> AppResult<Option<ErrorDescriptor>> {
        let matches = input.field(self.field) == input.field(self.field_to_compare);
        Ok((!matches).then(|| ErrorDescriptor::invalid_field(self.field_to_compare)))
    }
}
