// Copyright 2026 Benchbook Contributors
// SPDX-License-Identifier: Apache-2.0

//! HTTP error responses.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use benchbook_core::Error;
use serde_json::json;
use tracing::{error, warn};

/// Error response: `{"message", "code"}`, plus `"error"` for server faults.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: &'static str,
    pub message: String,
    pub error: Option<String>,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            code: "BAD_REQUEST",
            message: message.into(),
            error: None,
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            code: "NOT_FOUND",
            message: message.into(),
            error: None,
        }
    }

    pub fn internal(error: impl ToString) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            code: "INTERNAL_ERROR",
            message: "Internal Server Error".to_string(),
            error: Some(error.to_string()),
        }
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::Validation(message) => Self {
                code: "VALIDATION_ERROR",
                ..Self::bad_request(message)
            },
            Error::NotFound(id) => Self::not_found(format!("Benchmark {} not found", id)),
            other => {
                metrics::counter!("benchbook_store_errors_total").increment(1);
                Self::internal(other)
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self {
            code: "INVALID_BODY",
            ..Self::bad_request(rejection.body_text())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match &self.error {
            Some(detail) => {
                error!(code = self.code, error = %detail, "Request failed");
                json!({
                    "message": self.message,
                    "code": self.code,
                    "error": detail,
                })
            }
            None => {
                warn!(code = self.code, message = %self.message, "Request rejected");
                json!({
                    "message": self.message,
                    "code": self.code,
                })
            }
        };
        (self.status, Json(body)).into_response()
    }
}
