use super::Validation;
use crate::api::ErrorDescriptor;
use crate::domain::RegistrationInput;
use crate::errors::AppResult;

/// Runs validations in order; the first reported problem wins.
pub struct ValidationComposite {
    validations: Vec<Box<dyn Validation>>,
}

impl ValidationComposite {
    pub fn new(validations: Vec<Box<dyn Validation>>) -> Self {
        Self { validations }
    }
}

impl Validation for ValidationComposite {
    fn validate(&self, input: &RegistrationInput) -> AppResult<Option<ErrorDescriptor>> {
        for validation in &self.validations {
            if let Some(descriptor) = validation.validate(input)? {
                return Ok(Some(descriptor));
            }
        }
        Ok(None)
    }
}
