//! axum adapters for controllers.

pub mod signup_handler;

pub use signup_handler::{adapt_route, signup_routes};
