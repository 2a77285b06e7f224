//! Signup request handler.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use async_trait::async_trait;
use futures::FutureExt;

use crate::api::validation::Validation;
use crate::api::{Controller, HttpRequest, HttpResponse};
use crate::domain::RegistrationInput;
use crate::errors::{AppError, AppResult};
use crate::services::AddAccount;

/// Validates a signup submission and registers the account.
///
/// 400 on the first validation failure, 200 with the stored account on
/// success, 500 for anything else. Panics from collaborators are caught and
/// reported as 500 too.
pub struct SignUpController {
    validation: Arc<dyn Validation>,
    add_account: Arc<dyn AddAccount>,
}

impl SignUpController {
    pub fn new(validation: Arc<dyn Validation>, add_account: Arc<dyn AddAccount>) -> Self {
        Self {
            validation,
            add_account,
        }
    }

    async fn try_handle(&self, request: HttpRequest) -> AppResult<HttpResponse> {
        let input = RegistrationInput::from_body(&request.body);

        if let Some(descriptor) = self.validation.validate(&input)? {
            tracing::debug!(field = ?descriptor.field, kind = ?descriptor.kind, "Signup rejected");
            return Ok(HttpResponse::bad_request(descriptor));
        }

        let account = input
            .into_account()
            .ok_or_else(|| AppError::internal("Validated submission is missing a field"))?;

        let account = self.add_account.add(account).await?;
        tracing::info!(account_id = %account.id, "Account registered");

        Ok(HttpResponse::ok(serde_json::to_value(&account)?))
    }
}

#[async_trait]
impl Controller for SignUpController {
    async fn handle(&self, request: HttpRequest) -> HttpResponse {
        match AssertUnwindSafe(self.try_handle(request)).catch_unwind().await {
            Ok(Ok(response)) => response,
            Ok(Err(e)) => HttpResponse::server_error(format!("{:?}", e)),
            Err(panic) => HttpResponse::server_error(panic_message(panic.as_ref())),
        }
    }
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    let message = panic
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| panic.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic payload".to_string());
    format!("panic: {}", message)
}
