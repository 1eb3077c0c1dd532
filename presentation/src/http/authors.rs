//! Handlers for the author routes.

use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use courselib_application::{
    CreateAuthorError, CreateAuthorUseCase, DeleteAuthorError, DeleteAuthorUseCase, GetAuthorError,
    GetAuthorUseCase, ListAuthorsUseCase,
};
use courselib_domain::AuthorId;
use serde::Deserialize;

use super::dto::{AuthorDto, NewAuthorRequest};
use super::extract::{BoundJson, BoundPath, BoundQuery};
use super::query::AuthorsQuery;
use super::{AppState, created_response, not_found_problem, storage_problem, validation_problem};

/// Path parameters for single-author routes.
#[derive(Debug, Clone, Copy, Deserialize)]
pub(crate) struct AuthorPath {
    pub author_id: AuthorId,
}

pub(crate) async fn list_authors(
    State(state): State<AppState>,
    BoundQuery(query): BoundQuery<AuthorsQuery>,
) -> Response {
    let use_case = ListAuthorsUseCase::new(state.repository.clone());
    match use_case.execute(&query.into_filter()).await {
        Ok(authors) => {
            let today = Utc::now().date_naive();
            let body: Vec<AuthorDto> = authors
                .iter()
                .map(|author| AuthorDto::from_entity(author, today))
                .collect();
            (StatusCode::OK, axum::Json(body)).into_response()
        }
        Err(error) => storage_problem(error),
    }
}

pub(crate) async fn create_author(
    State(state): State<AppState>,
    BoundJson(request): BoundJson<NewAuthorRequest>,
) -> Response {
    let use_case = CreateAuthorUseCase::new(state.repository.clone());
    match use_case.execute(request.into_input()).await {
        Ok(author) => {
            let today = Utc::now().date_naive();
            created_response(
                format!("/api/authors/{}", author.id),
                AuthorDto::from_entity(&author, today),
            )
        }
        Err(CreateAuthorError::Validation(violations)) => validation_problem(violations),
        Err(CreateAuthorError::Repository(error)) => storage_problem(error),
    }
}

/// Capability probe for the collection route.
pub(crate) async fn authors_options() -> Response {
    (StatusCode::OK, [(header::ALLOW, "GET,OPTIONS,POST")]).into_response()
}

pub(crate) async fn get_author(
    State(state): State<AppState>,
    BoundPath(path): BoundPath<AuthorPath>,
) -> Response {
    let use_case = GetAuthorUseCase::new(state.repository.clone());
    match use_case.execute(path.author_id).await {
        Ok(author) => {
            let today = Utc::now().date_naive();
            (
                StatusCode::OK,
                axum::Json(AuthorDto::from_entity(&author, today)),
            )
                .into_response()
        }
        Err(error @ GetAuthorError::AuthorNotFound(_)) => not_found_problem(error.to_string()),
        Err(GetAuthorError::Repository(error)) => storage_problem(error),
    }
}

pub(crate) async fn delete_author(
    State(state): State<AppState>,
    BoundPath(path): BoundPath<AuthorPath>,
) -> Response {
    let use_case = DeleteAuthorUseCase::new(state.repository.clone());
    match use_case.execute(path.author_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error @ DeleteAuthorError::AuthorNotFound(_)) => not_found_problem(error.to_string()),
        Err(DeleteAuthorError::Repository(error)) => storage_problem(error),
    }
}
