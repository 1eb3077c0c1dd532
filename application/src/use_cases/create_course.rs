//! Create Course use case.
//!
//! Creates a course under an existing author with a server-generated
//! id. The POST counterpart to the id-preserving upsert flow in
//! [`UpsertCourseUseCase`](super::upsert_course::UpsertCourseUseCase).

use crate::ports::repository::{CourseLibraryRepository, RepositoryError};
use courselib_domain::{AuthorId, Course, CourseDraft, FieldViolation, validate_draft};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors for course creation.
#[derive(Error, Debug)]
pub enum CreateCourseError {
    #[error("Author {0} does not exist")]
    AuthorNotFound(AuthorId),

    #[error("Course payload failed validation")]
    Validation(Vec<FieldViolation>),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Input for the [`CreateCourseUseCase`].
#[derive(Debug, Clone)]
pub struct CreateCourseInput {
    pub author_id: AuthorId,
    pub draft: CourseDraft,
}

/// Use case for creating a course under an author.
pub struct CreateCourseUseCase {
    repository: Arc<dyn CourseLibraryRepository>,
}

impl CreateCourseUseCase {
    pub fn new(repository: Arc<dyn CourseLibraryRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, input: CreateCourseInput) -> Result<Course, CreateCourseError> {
        if !self.repository.author_exists(input.author_id).await? {
            return Err(CreateCourseError::AuthorNotFound(input.author_id));
        }

        let violations = validate_draft(&input.draft);
        if !violations.is_empty() {
            return Err(CreateCourseError::Validation(violations));
        }

        let course = Course::new(
            input.author_id,
            input.draft.title.clone().unwrap_or_default(),
            input.draft.description.clone(),
        );
        self.repository
            .add_course(input.author_id, course.clone())
            .await?;
        self.repository.save().await?;

        info!(author_id = %input.author_id, course_id = %course.id, "Created course");
        Ok(course)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{StubRepository, sample_author};

    #[tokio::test]
    async fn test_create_course_persists_under_the_author() {
        let author = sample_author();
        let repository = Arc::new(StubRepository::new().with_author(author.clone()));
        let use_case = CreateCourseUseCase::new(repository.clone());
        let input = CreateCourseInput {
            author_id: author.id,
            draft: CourseDraft::new("Avoiding Brawls While Drinking", None),
        };

        let course = use_case.execute(input).await.unwrap();

        assert_eq!(course.author_id, author.id);
        assert_eq!(repository.courses(), vec![course]);
        assert_eq!(repository.save_calls(), 1);
    }

    #[tokio::test]
    async fn test_create_course_requires_an_existing_author() {
        let repository = Arc::new(StubRepository::new());
        let use_case = CreateCourseUseCase::new(repository.clone());
        let input = CreateCourseInput {
            author_id: AuthorId::generate(),
            draft: CourseDraft::new("Orphan course", None),
        };

        let error = use_case.execute(input).await.unwrap_err();

        assert!(matches!(error, CreateCourseError::AuthorNotFound(_)));
        assert_eq!(repository.save_calls(), 0);
    }

    #[tokio::test]
    async fn test_create_course_rejects_invalid_drafts_before_persisting() {
        let author = sample_author();
        let repository = Arc::new(StubRepository::new().with_author(author.clone()));
        let use_case = CreateCourseUseCase::new(repository.clone());
        let input = CreateCourseInput {
            author_id: author.id,
            draft: CourseDraft::new("Same", Some("Same".to_string())),
        };

        let error = use_case.execute(input).await.unwrap_err();

        assert!(matches!(error, CreateCourseError::Validation(_)));
        assert!(repository.courses().is_empty());
        assert_eq!(repository.save_calls(), 0);
    }
}
