//! Integration tests for the HTTP surface.
//!
//! The router runs with the real Argon2 hasher and email checker; storage
//! is replaced by in-memory doubles so no MongoDB instance is needed.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use signup_service::api::controllers::SignUpController;
use signup_service::api::decorators::ErrorLoggingController;
use signup_service::api::validation::signup_validation;
use signup_service::api::{create_router, AppState};
use signup_service::domain::{Account, HashedAccountToCreate};
use signup_service::errors::{AppError, AppResult};
use signup_service::infra::{AccountRepository, Argon2Hasher, LogErrorRepository};
use signup_service::services::DbAddAccount;
use signup_service::utils::EmailValidatorAdapter;

// =============================================================================
// Test doubles
// =============================================================================

/// Account store that keeps documents in memory and numbers them.
#[derive(Default)]
struct InMemoryAccountRepository {
    accounts: Mutex<Vec<Account>>,
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn add(&self, account: HashedAccountToCreate) -> AppResult<Account> {
        let mut accounts = self.accounts.lock().unwrap();
        let account = Account {
            id: format!("{:024x}", accounts.len() + 1),
            name: account.name,
            email: account.email,
            password: account.password,
        };
        accounts.push(account.clone());
        Ok(account)
    }
}

/// Account store that always fails.
struct FailingAccountRepository;

#[async_trait]
impl AccountRepository for FailingAccountRepository {
    async fn add(&self, _account: HashedAccountToCreate) -> AppResult<Account> {
        Err(AppError::internal("connection reset by replica-2"))
    }
}

/// Error log that records every detail it receives.
#[derive(Default)]
struct RecordingLogRepository {
    entries: Mutex<Vec<String>>,
}

impl RecordingLogRepository {
    fn entries(&self) -> Vec<String> {
        self.entries.lock().unwrap().clone()
    }

    /// Entries once at least one has arrived; the write runs off the
    /// response path.
    async fn wait_for_entries(&self) -> Vec<String> {
        tokio::time::timeout(Duration::from_secs(1), async {
            loop {
                let entries = self.entries();
                if !entries.is_empty() {
                    return entries;
                }
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        })
        .await
        .expect("no error log recorded")
    }
}

#[async_trait]
impl LogErrorRepository for RecordingLogRepository {
    async fn log_error(&self, detail: &str) -> AppResult<()> {
        self.entries.lock().unwrap().push(detail.to_string());
        Ok(())
    }
}

// =============================================================================
// Helpers
// =============================================================================

fn create_app(
    account_repository: Arc<dyn AccountRepository>,
    log_repository: Arc<RecordingLogRepository>,
) -> Router {
    let hasher = Argon2Hasher::with_cost(1024, 1, 1).unwrap();
    let add_account = DbAddAccount::new(Arc::new(hasher), account_repository);
    let controller = SignUpController::new(
        Arc::new(signup_validation(Arc::new(EmailValidatorAdapter))),
        Arc::new(add_account),
    );
    let controller = ErrorLoggingController::new(Arc::new(controller), log_repository);

    create_router(AppState::new(Arc::new(controller)))
}

fn signup_request(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/signup")
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn valid_submission() -> Value {
    json!({
        "name": "Tauan Gabriel",
        "email": "tauan@email.com",
        "password": "123",
        "passwordConfirmation": "123",
    })
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn test_signup_returns_account_with_hashed_password() {
    let repository = Arc::new(InMemoryAccountRepository::default());
    let app = create_app(repository.clone(), Arc::new(RecordingLogRepository::default()));

    let (status, body) = send(app, signup_request(valid_submission().to_string())).await;

    assert_eq!(status, StatusCode::OK);
    assert!(!body["id"].as_str().unwrap().is_empty());
    assert_eq!(body["name"], "Tauan Gabriel");
    assert_eq!(body["email"], "tauan@email.com");
    assert_ne!(body["password"], "123");
    assert!(body.get("_id").is_none());

    let hash = body["password"].as_str().unwrap();
    let hasher = Argon2Hasher::with_cost(1024, 1, 1).unwrap();
    assert!(hasher.verify("123", hash));
    assert_eq!(repository.accounts.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_signup_missing_field() {
    let app = create_app(
        Arc::new(InMemoryAccountRepository::default()),
        Arc::new(RecordingLogRepository::default()),
    );

    let mut submission = valid_submission();
    submission.as_object_mut().unwrap().remove("email");
    let (status, body) = send(app, signup_request(submission.to_string())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({
            "kind": "MissingField",
            "field": "email",
            "message": "Missing param: email",
        })
    );
}

#[tokio::test]
async fn test_signup_password_mismatch() {
    let app = create_app(
        Arc::new(InMemoryAccountRepository::default()),
        Arc::new(RecordingLogRepository::default()),
    );

    let mut submission = valid_submission();
    submission["passwordConfirmation"] = json!("124");
    let (status, body) = send(app, signup_request(submission.to_string())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "InvalidField");
    assert_eq!(body["field"], "passwordConfirmation");
}

#[tokio::test]
async fn test_signup_invalid_email() {
    let app = create_app(
        Arc::new(InMemoryAccountRepository::default()),
        Arc::new(RecordingLogRepository::default()),
    );

    let mut submission = valid_submission();
    submission["email"] = json!("tauan-at-email");
    let (status, body) = send(app, signup_request(submission.to_string())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["field"], "email");
}

#[tokio::test]
async fn test_signup_malformed_body_reports_first_field() {
    let app = create_app(
        Arc::new(InMemoryAccountRepository::default()),
        Arc::new(RecordingLogRepository::default()),
    );

    let (status, body) = send(app, signup_request("{not json")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["kind"], "MissingField");
    assert_eq!(body["field"], "name");
}

#[tokio::test]
async fn test_signup_storage_failure_is_logged_not_leaked() {
    let log_repository = Arc::new(RecordingLogRepository::default());
    let app = create_app(Arc::new(FailingAccountRepository), log_repository.clone());

    let (status, body) = send(app, signup_request(valid_submission().to_string())).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({ "kind": "ServerFault", "message": "Internal server error" })
    );

    let entries = log_repository.wait_for_entries().await;
    assert_eq!(entries.len(), 1);
    assert!(entries[0].contains("replica-2"));
}

#[tokio::test]
async fn test_client_errors_are_not_logged() {
    let log_repository = Arc::new(RecordingLogRepository::default());
    let app = create_app(
        Arc::new(InMemoryAccountRepository::default()),
        log_repository.clone(),
    );

    let (status, _) = send(app, signup_request("{}")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(log_repository.entries().is_empty());
}

#[tokio::test]
async fn test_health_without_database() {
    let app = create_app(
        Arc::new(InMemoryAccountRepository::default()),
        Arc::new(RecordingLogRepository::default()),
    );

    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let (status, body) = send(app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"]["status"], "not_configured");
}

#[tokio::test]
async fn test_openapi_document_served() {
    let app = create_app(
        Arc::new(InMemoryAccountRepository::default()),
        Arc::new(RecordingLogRepository::default()),
    );

    let request = Request::builder()
        .uri("/api-docs/openapi.json")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/api/signup"].is_object());
}
