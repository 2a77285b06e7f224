//! Composition root: wires adapters into controllers.

use std::sync::Arc;

use crate::api::controllers::SignUpController;
use crate::api::decorators::ErrorLoggingController;
use crate::api::validation::signup_validation;
use crate::api::Controller;
use crate::infra::{AccountStore, Argon2Hasher, Database, LogErrorStore};
use crate::services::DbAddAccount;
use crate::utils::EmailValidatorAdapter;

/// Signup controller backed by MongoDB and Argon2, wrapped in error logging.
pub fn signup_controller(database: &Database) -> Arc<dyn Controller> {
    let add_account = DbAddAccount::new(
        Arc::new(Argon2Hasher::default()),
        Arc::new(AccountStore::new(database)),
    );
    let controller = SignUpController::new(
        Arc::new(signup_validation(Arc::new(EmailValidatorAdapter))),
        Arc::new(add_account),
    );

    Arc::new(ErrorLoggingController::new(
        Arc::new(controller),
        Arc::new(LogErrorStore::new(database)),
    ))
}
