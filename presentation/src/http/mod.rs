//! HTTP layer for the course library API.
//!
//! Routes follow the resource hierarchy: authors at `/api/authors`,
//! courses nested under their owner. Handlers build their use case per
//! request from the shared repository and translate use case errors into
//! [`ApiProblem`] responses.

pub mod dto;
pub mod extract;
pub mod problem;
pub mod query;

mod authors;
mod courses;

#[cfg(test)]
pub(crate) mod test_support;

use axum::Router;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use courselib_application::{CourseLibraryRepository, RepositoryError};
use courselib_domain::FieldViolation;
use serde::Serialize;
use std::sync::Arc;
use tracing::error;

use problem::{ApiProblem, problem_response};

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn CourseLibraryRepository>,
}

impl AppState {
    pub fn new(repository: Arc<dyn CourseLibraryRepository>) -> Self {
        Self { repository }
    }
}

/// Builds the API router.
///
/// `GET` routes answer `HEAD` as well; axum serves that without extra
/// registration.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/authors",
            get(authors::list_authors)
                .post(authors::create_author)
                .options(authors::authors_options),
        )
        .route(
            "/api/authors/:author_id",
            get(authors::get_author).delete(authors::delete_author),
        )
        .route(
            "/api/authors/:author_id/courses",
            get(courses::list_courses).post(courses::create_course),
        )
        .route(
            "/api/authors/:author_id/courses/:course_id",
            get(courses::get_course)
                .put(courses::upsert_course)
                .patch(courses::patch_course)
                .delete(courses::delete_course),
        )
        .with_state(state)
}

/// 201 with a `Location` header pointing at the canonical retrieval URL.
pub(crate) fn created_response(location: String, body: impl Serialize) -> Response {
    (
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        axum::Json(body),
    )
        .into_response()
}

pub(crate) fn not_found_problem(message: String) -> Response {
    problem_response(StatusCode::NOT_FOUND, ApiProblem::not_found(message))
}

pub(crate) fn validation_problem(violations: Vec<FieldViolation>) -> Response {
    problem_response(
        StatusCode::UNPROCESSABLE_ENTITY,
        ApiProblem::validation(violations),
    )
}

/// Storage details stay in the log; the client gets an opaque 500.
pub(crate) fn storage_problem(error: RepositoryError) -> Response {
    error!(%error, "Repository operation failed");
    problem_response(StatusCode::INTERNAL_SERVER_ERROR, ApiProblem::storage())
}
