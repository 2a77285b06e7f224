//! Structured error values carried in response bodies.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Field;

/// Category of a client-visible error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ErrorKind {
    /// A required submission field is absent
    MissingField,
    /// A field is present but semantically invalid
    InvalidField,
    /// Anything unexpected; details stay server-side
    ServerFault,
}

/// Error body returned with 400 and 500 responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorDescriptor {
    pub kind: ErrorKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<Field>,
    #[schema(example = "Missing param: email")]
    pub message: String,
}

impl ErrorDescriptor {
    pub fn missing_field(field: Field) -> Self {
        Self {
            kind: ErrorKind::MissingField,
            field: Some(field),
            message: format!("Missing param: {}", field),
        }
    }

    pub fn invalid_field(field: Field) -> Self {
        Self {
            kind: ErrorKind::InvalidField,
            field: Some(field),
            message: format!("Invalid param: {}", field),
        }
    }

    /// Generic fault descriptor; never carries the underlying error.
    pub fn server_fault() -> Self {
        Self {
            kind: ErrorKind::ServerFault,
            field: None,
            message: "Internal server error".to_string(),
        }
    }
}
