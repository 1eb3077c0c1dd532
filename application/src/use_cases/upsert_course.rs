//! Upsert Course use case.
//!
//! PUT semantics for a client-addressed course id: create the course
//! when the id is free, otherwise overwrite the stored course with the
//! submitted representation. The flow is strictly ordered: the owning
//! author is resolved first, the draft is validated next, and the
//! repository is written only after validation passes. A created course
//! keeps the id the client put in the URL.

use crate::ports::repository::{CourseLibraryRepository, RepositoryError};
use courselib_domain::{AuthorId, Course, CourseDraft, CourseId, FieldViolation, validate_draft};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors for the upsert flow, shared with the patch flow.
#[derive(Error, Debug)]
pub enum UpsertCourseError {
    #[error("Author {0} does not exist")]
    AuthorNotFound(AuthorId),

    #[error("Course payload failed validation")]
    Validation(Vec<FieldViolation>),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// How an upsert concluded.
///
/// `Created` carries the new course so callers can report its location
/// and representation; a plain update acknowledges with no body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpsertOutcome {
    Created(Course),
    Updated,
}

/// Input for the [`UpsertCourseUseCase`].
#[derive(Debug, Clone)]
pub struct UpsertCourseInput {
    pub author_id: AuthorId,
    /// Client-chosen course id from the request URL.
    pub course_id: CourseId,
    pub draft: CourseDraft,
}

/// Use case for PUT-style course upserts.
pub struct UpsertCourseUseCase {
    repository: Arc<dyn CourseLibraryRepository>,
}

impl UpsertCourseUseCase {
    pub fn new(repository: Arc<dyn CourseLibraryRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(
        &self,
        input: UpsertCourseInput,
    ) -> Result<UpsertOutcome, UpsertCourseError> {
        // Owner resolution comes before any validation work.
        if !self.repository.author_exists(input.author_id).await? {
            return Err(UpsertCourseError::AuthorNotFound(input.author_id));
        }

        let existing = self
            .repository
            .get_course(input.author_id, input.course_id)
            .await?;

        let violations = validate_draft(&input.draft);
        if !violations.is_empty() {
            return Err(UpsertCourseError::Validation(violations));
        }

        match existing {
            None => {
                let course = Course::from_draft(input.course_id, input.author_id, &input.draft);
                self.repository
                    .add_course(input.author_id, course.clone())
                    .await?;
                self.repository.save().await?;

                info!(
                    author_id = %input.author_id,
                    course_id = %course.id,
                    "Upserted course (created)"
                );
                Ok(UpsertOutcome::Created(course))
            }
            Some(mut course) => {
                course.apply_draft(&input.draft);
                self.repository.update_course(course).await?;
                self.repository.save().await?;

                info!(
                    author_id = %input.author_id,
                    course_id = %input.course_id,
                    "Upserted course (updated)"
                );
                Ok(UpsertOutcome::Updated)
            }
        }
    }
}
