//! Centralized error handling.
//!
//! Every collaborator failure (hashing, storage, email checking) travels as
//! an [`AppError`] until the request handler normalizes it into a
//! server-fault response. Validation outcomes are not errors; see
//! [`crate::api::ErrorDescriptor`].

use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// The hashing primitive failed or its worker task did not complete
    #[error("Hashing failed: {0}")]
    Hashing(String),

    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// Encoding or decoding a value crossing a boundary failed
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The email checker itself failed (not an invalid email)
    #[error("Email validation failed: {0}")]
    EmailValidation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<mongodb::bson::ser::Error> for AppError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

/// Convenience constructors
impl AppError {
    pub fn hashing(msg: impl Into<String>) -> Self {
        AppError::Hashing(msg.into())
    }

    pub fn serialization(msg: impl Into<String>) -> Self {
        AppError::Serialization(msg.into())
    }

    pub fn email_validation(msg: impl Into<String>) -> Self {
        AppError::EmailValidation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
