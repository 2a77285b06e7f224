//! Request handlers for each endpoint.

mod signup;

pub use signup::SignUpController;
