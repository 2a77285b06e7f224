//! Transport-neutral request/response envelope.
//!
//! Controllers speak these types; the axum layer converts at the edge.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;

use super::ErrorDescriptor;

/// Inbound request as seen by a controller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HttpRequest {
    pub body: Value,
}

impl HttpRequest {
    pub fn new(body: Value) -> Self {
        Self { body }
    }
}

/// Uniform response envelope.
///
/// `fault` carries the internal failure detail of a server error so the
/// error-logging decorator can record it. It is never serialized and never
/// reaches the caller. The status is fixed by the constructor, so every 500
/// carries a fault.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    status_code: StatusCode,
    pub body: Value,
    fault: Option<String>,
}

impl HttpResponse {
    /// 200 with the given body
    pub fn ok(body: Value) -> Self {
        Self {
            status_code: StatusCode::OK,
            body,
            fault: None,
        }
    }

    /// 400 with a validation descriptor
    pub fn bad_request(descriptor: ErrorDescriptor) -> Self {
        Self {
            status_code: StatusCode::BAD_REQUEST,
            body: descriptor_body(&descriptor),
            fault: None,
        }
    }

    /// 500 with a generic body; `detail` stays internal
    pub fn server_error(detail: impl Into<String>) -> Self {
        Self {
            status_code: StatusCode::INTERNAL_SERVER_ERROR,
            body: descriptor_body(&ErrorDescriptor::server_fault()),
            fault: Some(detail.into()),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        self.status_code
    }

    /// Internal failure detail, present only on server errors
    pub fn fault(&self) -> Option<&str> {
        self.fault.as_deref()
    }

    pub fn is_server_error(&self) -> bool {
        self.status_code == StatusCode::INTERNAL_SERVER_ERROR
    }
}

fn descriptor_body(descriptor: &ErrorDescriptor) -> Value {
    serde_json::to_value(descriptor).unwrap_or_else(|_| Value::String(descriptor.message.clone()))
}

impl IntoResponse for HttpResponse {
    fn into_response(self) -> Response {
        (self.status_code, Json(self.body)).into_response()
    }
}
