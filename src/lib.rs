//! Signup Service - account registration API
//!
//! Accepts a signup submission, validates it, hashes the password with
//! Argon2, stores the account in MongoDB and returns it.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Submission and account types
//! - **services**: Registration use case
//! - **infra**: MongoDB handle, repositories, password hashing
//! - **api**: Controllers, validation, decorators, axum routes
//! - **utils**: Email validity adapter
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Override the bind address
//! cargo run -- serve --host 127.0.0.1 --port 8080
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod utils;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Account, AccountToCreate, RegistrationInput};
pub use errors::{AppError, AppResult};
