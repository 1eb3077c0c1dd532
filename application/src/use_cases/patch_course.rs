//! Patch Course use case.
//!
//! PATCH semantics for a client-addressed course id. The patch never
//! touches the stored entity directly: it runs against a draft
//! projection, the patched draft is validated as a whole, and only then
//! is anything mapped back and persisted. Patching an id with no course
//! behind it applies the document to an empty draft and creates the
//! course, mirroring the PUT upsert.

use super::upsert_course::UpsertOutcome;
use crate::ports::repository::{CourseLibraryRepository, RepositoryError};
use courselib_domain::{
    AuthorId, Course, CourseDraft, CourseId, FieldViolation, PatchDocument, validate_draft,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors for the patch flow.
///
/// Patch application problems are validation failures from the caller's
/// point of view: the document named a path or value the update
/// representation cannot hold.
#[derive(Error, Debug)]
pub enum PatchCourseError {
    #[error("Author {0} does not exist")]
    AuthorNotFound(AuthorId),

    #[error("Patched course failed validation")]
    Validation(Vec<FieldViolation>),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Input for the [`PatchCourseUseCase`].
#[derive(Debug, Clone)]
pub struct PatchCourseInput {
    pub author_id: AuthorId,
    /// Client-chosen course id from the request URL.
    pub course_id: CourseId,
    pub patch: PatchDocument,
}

/// Use case for PATCH-style course upserts.
pub struct PatchCourseUseCase {
    repository: Arc<dyn CourseLibraryRepository>,
}

impl PatchCourseUseCase {
    pub fn new(repository: Arc<dyn CourseLibraryRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(
        &self,
        input: PatchCourseInput,
    ) -> Result<UpsertOutcome, PatchCourseError> {
        if !self.repository.author_exists(input.author_id).await? {
            return Err(PatchCourseError::AuthorNotFound(input.author_id));
        }

        let existing = self
            .repository
            .get_course(input.author_id, input.course_id)
            .await?;

        match existing {
            None => {
                // No course behind the id: the document patches an
                // empty draft and the result is created under the
                // client's id.
                let mut draft = CourseDraft::default();
                apply_patch(&input.patch, &mut draft)?;
                let violations = validate_draft(&draft);
                if !violations.is_empty() {
                    return Err(PatchCourseError::Validation(violations));
                }

                let course = Course::from_draft(input.course_id, input.author_id, &draft);
                self.repository
                    .add_course(input.author_id, course.clone())
                    .await?;
                self.repository.save().await?;

                info!(
                    author_id = %input.author_id,
                    course_id = %course.id,
                    "Patched course (created)"
                );
                Ok(UpsertOutcome::Created(course))
            }
            Some(mut course) => {
                let mut draft = course.to_draft();
                apply_patch(&input.patch, &mut draft)?;
                let violations = validate_draft(&draft);
                if !violations.is_empty() {
                    debug!(
                        course_id = %input.course_id,
                        violations = violations.len(),
                        "Patched draft failed validation"
                    );
                    return Err(PatchCourseError::Validation(violations));
                }

                course.apply_draft(&draft);
                self.repository.update_course(course).await?;
                self.repository.save().await?;

                info!(
                    author_id = %input.author_id,
                    course_id = %input.course_id,
                    "Patched course (updated)"
                );
                Ok(UpsertOutcome::Updated)
            }
        }
    }
}

/// Runs the document against the draft, folding application failures
/// into the validation error shape.
fn apply_patch(patch: &PatchDocument, draft: &mut CourseDraft) -> Result<(), PatchCourseError> {
    patch.apply(draft).map_err(|error| {
        PatchCourseError::Validation(vec![FieldViolation::new(
            "patchDocument",
            error.to_string(),
        )])
    })
}
