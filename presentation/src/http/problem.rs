//! Structured JSON error bodies.
//!
//! Every non-success response carries the same `{ code, message, errors? }`
//! shape, whether the failure happened during binding, in a use case or in
//! the repository. Handlers never return axum's plain-text rejections.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use courselib_domain::FieldViolation;
use serde::{Deserialize, Serialize};

/// Machine-readable category of an [`ApiProblem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProblemCode {
    BindingError,
    NotFound,
    ValidationFailed,
    StorageFailure,
}

/// Wire body for error responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiProblem {
    pub code: ProblemCode,
    pub message: String,
    /// Field-level details; omitted from the body when empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldViolation>,
}

impl ApiProblem {
    /// A request value could not be bound. `source` names the part of the
    /// request that failed ("query", "path" or "body").
    pub fn binding(source: &str, detail: impl Into<String>) -> Self {
        Self {
            code: ProblemCode::BindingError,
            message: format!("Invalid {source} in request"),
            errors: vec![FieldViolation::new(source, detail)],
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            code: ProblemCode::NotFound,
            message: message.into(),
            errors: Vec::new(),
        }
    }

    pub fn validation(errors: Vec<FieldViolation>) -> Self {
        Self {
            code: ProblemCode::ValidationFailed,
            message: "The request failed validation".to_string(),
            errors,
        }
    }

    /// Opaque persistence failure. The storage detail stays in the server
    /// log; clients only learn that the request did not commit.
    pub fn storage() -> Self {
        Self {
            code: ProblemCode::StorageFailure,
            message: "The request could not be persisted".to_string(),
            errors: Vec::new(),
        }
    }
}

pub(crate) fn problem_response(status: StatusCode, problem: ApiProblem) -> Response {
    (status, Json(problem)).into_response()
}
