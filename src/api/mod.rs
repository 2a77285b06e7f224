//! API layer - HTTP edge of the service
//!
//! - Transport-neutral request/response envelope and error descriptors
//! - Validation chain for signup submissions
//! - Controllers and decorators
//! - axum handlers, routes and application state

pub mod controller;
pub mod controllers;
pub mod decorators;
pub mod descriptors;
pub mod factories;
pub mod handlers;
pub mod http;
pub mod openapi;
pub mod routes;
pub mod state;
pub mod validation;

pub use controller::Controller;
pub use descriptors::{ErrorDescriptor, ErrorKind};
pub use http::{HttpRequest, HttpResponse};
pub use openapi::ApiDoc;
pub use routes::create_router;
pub use state::AppState;

#[cfg(any(test, feature = "test-utils"))]
pub use controller::MockController;
