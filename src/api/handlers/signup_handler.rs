//! Signup route.

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
    routing::post,
    Router,
};
use serde_json::Value;

use crate::api::{AppState, Controller, ErrorDescriptor, HttpRequest, HttpResponse};
use crate::config::SIGNUP_ROUTE;
use crate::domain::{Account, RegistrationInput};

/// Create signup routes
pub fn signup_routes() -> Router<AppState> {
    Router::new().route(SIGNUP_ROUTE, post(signup))
}

/// Register a new account
#[utoipa::path(
    post,
    path = "/api/signup",
    tag = "Signup",
    request_body = RegistrationInput,
    responses(
        (status = 200, description = "Account registered", body = Account),
        (status = 400, description = "Missing or invalid field", body = ErrorDescriptor),
        (status = 500, description = "Internal server error", body = ErrorDescriptor)
    )
)]
pub async fn signup(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> HttpResponse {
    adapt_route(state.signup_controller.as_ref(), payload).await
}

/// Bridge an axum JSON body to a controller.
///
/// A body that is missing or not JSON reaches the controller as `null`, so
/// validation reports it like any other incomplete submission.
pub async fn adapt_route(
    controller: &dyn Controller,
    payload: Result<Json<Value>, JsonRejection>,
) -> HttpResponse {
    let body = match payload {
        Ok(Json(body)) => body,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Unreadable request body");
            Value::Null
        }
    };

    controller.handle(HttpRequest::new(body)).await
}
