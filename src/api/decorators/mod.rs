//! Cross-cutting wrappers around [`super::Controller`].

mod error_logging;

pub use error_logging::ErrorLoggingController;
