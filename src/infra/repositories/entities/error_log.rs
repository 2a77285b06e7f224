//! Server-fault record stored in the `errors` collection.

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

/// One recorded server fault.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorLogDocument {
    /// Failure detail captured by the request handler
    pub stack: String,
    pub date: DateTime,
}

impl ErrorLogDocument {
    /// Record `stack` with the current time.
    pub fn now(stack: impl Into<String>) -> Self {
        Self {
            stack: stack.into(),
            date: DateTime::now(),
        }
    }
}
