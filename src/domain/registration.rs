//! Raw signup submission.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use super::AccountToCreate;

/// Fields of a signup submission, in the order presence is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    Email,
    Password,
    PasswordConfirmation,
}

impl Field {
    /// Every required field, in check order.
    pub const REQUIRED: [Field; 4] = [
        Field::Name,
        Field::Email,
        Field::Password,
        Field::PasswordConfirmation,
    ];

    /// Wire name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Password => "password",
            Field::PasswordConfirmation => "passwordConfirmation",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Untrusted signup submission; lives for a single request.
///
/// A field is present only when the submitted value is a non-empty JSON
/// string.
#[derive(Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationInput {
    #[schema(example = "Tauan Gabriel")]
    pub name: Option<String>,
    #[schema(example = "tauan@email.com")]
    pub email: Option<String>,
    #[schema(example = "123")]
    pub password: Option<String>,
    #[schema(example = "123")]
    pub password_confirmation: Option<String>,
}

impl std::fmt::Debug for RegistrationInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let redacted = |value: &Option<String>| value.as_ref().map(|_| "[REDACTED]");
        f.debug_struct("RegistrationInput")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &redacted(&self.password))
            .field("password_confirmation", &redacted(&self.password_confirmation))
            .finish()
    }
}

impl RegistrationInput {
    /// Extract the submission from a JSON request body.
    ///
    /// Never fails: anything that is not a non-empty string (absent keys,
    /// `null`, numbers, a body that is not an object) becomes `None`.
    /// A key that is present with a non-string value, such as `"name": 5`,
    /// is therefore reported as missing rather than invalid.
    pub fn from_body(body: &Value) -> Self {
        let text = |field: Field| {
            body.get(field.as_str())
                .and_then(Value::as_str)
                .filter(|value| !value.is_empty())
                .map(str::to_owned)
        };

        Self {
            name: text(Field::Name),
            email: text(Field::Email),
            password: text(Field::Password),
            password_confirmation: text(Field::PasswordConfirmation),
        }
    }

    /// Value of a field, if present.
    pub fn field(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => self.name.as_deref(),
            Field::Email => self.email.as_deref(),
            Field::Password => self.password.as_deref(),
            Field::PasswordConfirmation => self.password_confirmation.as_deref(),
        }
    }

    /// Drop the confirmation and keep what the use case needs.
    ///
    /// Returns `None` if name, email or password is missing.
    pub fn into_account(self) -> Option<AccountToCreate> {
        Some(AccountToCreate {
            name: self.name?,
            email: self.email?,
            password: self.password?,
        })
    }
}
