//! Request-handler contract shared by controllers and their decorators.

use async_trait::async_trait;

use super::{HttpRequest, HttpResponse};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Turns one request into one response. Never fails: every outcome,
/// including collaborator faults, is expressed as a response.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait Controller: Send + Sync {
    async fn handle(&self, request: HttpRequest) -> HttpResponse;
}
