//! Handlers for the course routes.
//!
//! PUT and PATCH implement the upsert protocol: a created course answers
//! 201 with its canonical location and representation, a plain update
//! answers 204 with no body.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use courselib_application::{
    CreateCourseError, CreateCourseInput, CreateCourseUseCase, DeleteCourseError,
    DeleteCourseUseCase, GetCourseError, GetCourseUseCase, ListCoursesError, ListCoursesUseCase,
    PatchCourseError, PatchCourseInput, PatchCourseUseCase, UpsertCourseError, UpsertCourseInput,
    UpsertCourseUseCase, UpsertOutcome,
};
use courselib_domain::{AuthorId, Course, CourseId, PatchDocument};
use serde::Deserialize;

use super::authors::AuthorPath;
use super::dto::{CourseDto, CourseRequest};
use super::extract::{BoundJson, BoundPath};
use super::{AppState, created_response, not_found_problem, storage_problem, validation_problem};

/// Path parameters for single-course routes.
#[derive(Debug, Clone, Copy, Deserialize)]
pub(crate) struct CoursePath {
    pub author_id: AuthorId,
    pub course_id: CourseId,
}

fn course_location(course: &Course) -> String {
    format!("/api/authors/{}/courses/{}", course.author_id, course.id)
}

pub(crate) async fn list_courses(
    State(state): State<AppState>,
    BoundPath(path): BoundPath<AuthorPath>,
) -> Response {
    let use_case = ListCoursesUseCase::new(state.repository.clone());
    match use_case.execute(path.author_id).await {
        Ok(courses) => {
            let body: Vec<CourseDto> = courses.iter().map(CourseDto::from_entity).collect();
            (StatusCode::OK, axum::Json(body)).into_response()
        }
        Err(error @ ListCoursesError::AuthorNotFound(_)) => not_found_problem(error.to_string()),
        Err(ListCoursesError::Repository(error)) => storage_problem(error),
    }
}

pub(crate) async fn create_course(
    State(state): State<AppState>,
    BoundPath(path): BoundPath<AuthorPath>,
    BoundJson(request): BoundJson<CourseRequest>,
) -> Response {
    let use_case = CreateCourseUseCase::new(state.repository.clone());
    let input = CreateCourseInput {
        author_id: path.author_id,
        draft: request.into_draft(),
    };
    match use_case.execute(input).await {
        Ok(course) => created_response(course_location(&course), CourseDto::from_entity(&course)),
        Err(error @ CreateCourseError::AuthorNotFound(_)) => not_found_problem(error.to_string()),
        Err(CreateCourseError::Validation(violations)) => validation_problem(violations),
        Err(CreateCourseError::Repository(error)) => storage_problem(error),
    }
}

pub(crate) async fn get_course(
    State(state): State<AppState>,
    BoundPath(path): BoundPath<CoursePath>,
) -> Response {
    let use_case = GetCourseUseCase::new(state.repository.clone());
    match use_case.execute(path.author_id, path.course_id).await {
        Ok(course) => (StatusCode::OK, axum::Json(CourseDto::from_entity(&course))).into_response(),
        Err(error @ GetCourseError::AuthorNotFound(_))
        | Err(error @ GetCourseError::CourseNotFound(_)) => not_found_problem(error.to_string()),
        Err(GetCourseError::Repository(error)) => storage_problem(error),
    }
}

pub(crate) async fn upsert_course(
    State(state): State<AppState>,
    BoundPath(path): BoundPath<CoursePath>,
    BoundJson(request): BoundJson<CourseRequest>,
) -> Response {
    let use_case = UpsertCourseUseCase::new(state.repository.clone());
    let input = UpsertCourseInput {
        author_id: path.author_id,
        course_id: path.course_id,
        draft: request.into_draft(),
    };
    match use_case.execute(input).await {
        Ok(UpsertOutcome::Created(course)) => {
            created_response(course_location(&course), CourseDto::from_entity(&course))
        }
        Ok(UpsertOutcome::Updated) => StatusCode::NO_CONTENT.into_response(),
        Err(error @ UpsertCourseError::AuthorNotFound(_)) => not_found_problem(error.to_string()),
        Err(UpsertCourseError::Validation(violations)) => validation_problem(violations),
        Err(UpsertCourseError::Repository(error)) => storage_problem(error),
    }
}

pub(crate) async fn patch_course(
    State(state): State<AppState>,
    BoundPath(path): BoundPath<CoursePath>,
    BoundJson(patch): BoundJson<PatchDocument>,
) -> Response {
    let use_case = PatchCourseUseCase::new(state.repository.clone());
    let input = PatchCourseInput {
        author_id: path.author_id,
        course_id: path.course_id,
        patch,
    };
    match use_case.execute(input).await {
        Ok(UpsertOutcome::Created(course)) => {
            created_response(course_location(&course), CourseDto::from_entity(&course))
        }
        Ok(UpsertOutcome::Updated) => StatusCode::NO_CONTENT.into_response(),
        Err(error @ PatchCourseError::AuthorNotFound(_)) => not_found_problem(error.to_string()),
        Err(PatchCourseError::Validation(violations)) => validation_problem(violations),
        Err(PatchCourseError::Repository(error)) => storage_problem(error),
    }
}

pub(crate) async fn delete_course(
    State(state): State<AppState>,
    BoundPath(path): BoundPath<CoursePath>,
) -> Response {
    let use_case = DeleteCourseUseCase::new(state.repository.clone());
    match use_case.execute(path.author_id, path.course_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error @ DeleteCourseError::AuthorNotFound(_))
        | Err(error @ DeleteCourseError::CourseNotFound(_)) => not_found_problem(error.to_string()),
        Err(DeleteCourseError::Repository(error)) => storage_problem(error),
    }
}
