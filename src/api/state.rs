//! Application state shared by every handler.

use std::sync::Arc;

use super::factories;
use super::Controller;
use crate::infra::Database;

#[derive(Clone)]
pub struct AppState {
    /// Handles `POST /api/signup`
    pub signup_controller: Arc<dyn Controller>,
    /// Present when the state was built over a live connection; used by
    /// the health check.
    pub database: Option<Arc<Database>>,
}

impl AppState {
    /// State with a manually injected controller and no database handle.
    pub fn new(signup_controller: Arc<dyn Controller>) -> Self {
        Self {
            signup_controller,
            database: None,
        }
    }

    /// Production wiring over an open connection.
    pub fn from_database(database: Arc<Database>) -> Self {
        Self {
            signup_controller: factories::signup_controller(&database),
            database: Some(database),
        }
    }
}
