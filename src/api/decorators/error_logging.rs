//! Records server faults without changing what the caller sees.

use std::sync::Arc;

use async_trait::async_trait;

use crate::api::{Controller, HttpRequest, HttpResponse};
use crate::infra::LogErrorRepository;

/// Wraps a controller; every 500 it produces is written to the error log.
///
/// The write runs on its own task, so a slow or failing log store never
/// holds back the response.
pub struct ErrorLoggingController {
    controller: Arc<dyn Controller>,
    log_repository: Arc<dyn LogErrorRepository>,
}

impl ErrorLoggingController {
    pub fn new(controller: Arc<dyn Controller>, log_repository: Arc<dyn LogErrorRepository>) -> Self {
        Self {
            controller,
            log_repository,
        }
    }
}

#[async_trait]
impl Controller for ErrorLoggingController {
    async fn handle(&self, request: HttpRequest) -> HttpResponse {
        let response = self.controller.handle(request).await;

        if response.is_server_error() {
            let detail = response.fault().unwrap_or_default().to_owned();
            tracing::error!(detail = %detail, "Request failed with a server error");

            let log_repository = Arc::clone(&self.log_repository);
            tokio::spawn(async move {
                if let Err(e) = log_repository.log_error(&detail).await {
                    tracing::warn!(error = %e, "Failed to persist error log");
                }
            });
        }

        response
    }
}
