//! Request extractors with structured rejections.
//!
//! axum's stock `Query`/`Path`/`Json` extractors reject with plain-text
//! bodies. These wrappers run the same extraction but convert every
//! rejection into the [`ApiProblem`] JSON shape, so a bind failure aborts
//! the request before any handler logic runs and still looks like every
//! other error the API produces.

use axum::async_trait;
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::StatusCode;
use axum::http::request::Parts;
use axum::response::Response;
use serde::de::DeserializeOwned;

use super::problem::{ApiProblem, problem_response};

/// Query-string extractor. Rejects with a structured 400.
#[derive(Debug)]
pub struct BoundQuery<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for BoundQuery<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::try_from_uri(&parts.uri) {
            Ok(Query(value)) => Ok(Self(value)),
            Err(rejection) => Err(problem_response(
                StatusCode::BAD_REQUEST,
                ApiProblem::binding("query", rejection.body_text()),
            )),
        }
    }
}

/// Path-segment extractor. A malformed id never identifies a resource, so
/// it rejects as a binding problem rather than a 404.
#[derive(Debug)]
pub struct BoundPath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for BoundPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(Self(value)),
            Err(rejection) => Err(problem_response(
                rejection.status(),
                ApiProblem::binding("path", rejection.body_text()),
            )),
        }
    }
}

/// JSON body extractor. Keeps axum's status split (syntax errors 400,
/// shape errors 422, missing content type 415) but swaps the body for the
/// structured problem shape.
#[derive(Debug)]
pub struct BoundJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for BoundJson<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(problem_response(
                rejection.status(),
                ApiProblem::binding("body", rejection.body_text()),
            )),
        }
    }
}
