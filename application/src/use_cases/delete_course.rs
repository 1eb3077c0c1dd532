//! Delete Course use case.

use crate::ports::repository::{CourseLibraryRepository, RepositoryError};
use courselib_domain::{AuthorId, CourseId};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors for course deletion.
#[derive(Error, Debug)]
pub enum DeleteCourseError {
    #[error("Author {0} does not exist")]
    AuthorNotFound(AuthorId),

    #[error("Course {0} does not exist")]
    CourseNotFound(CourseId),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Use case for deleting one course under an author.
pub struct DeleteCourseUseCase {
    repository: Arc<dyn CourseLibraryRepository>,
}

impl DeleteCourseUseCase {
    pub fn new(repository: Arc<dyn CourseLibraryRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(
        &self,
        author_id: AuthorId,
        course_id: CourseId,
    ) -> Result<(), DeleteCourseError> {
        if !self.repository.author_exists(author_id).await? {
            return Err(DeleteCourseError::AuthorNotFound(author_id));
        }
        if self
            .repository
            .get_course(author_id, course_id)
            .await?
            .is_none()
        {
            return Err(DeleteCourseError::CourseNotFound(course_id));
        }

        self.repository.delete_course(author_id, course_id).await?;
        self.repository.save().await?;

        info!(author_id = %author_id, course_id = %course_id, "Deleted course");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::{StubRepository, sample_author, sample_course};

    #[tokio::test]
    async fn test_delete_course_removes_only_that_course() {
        let author = sample_author();
        let doomed = sample_course(author.id);
        let survivor = sample_course(author.id);
        let repository = Arc::new(
            StubRepository::new()
                .with_author(author.clone())
                .with_course(doomed.clone())
                .with_course(survivor.clone()),
        );
        let use_case = DeleteCourseUseCase::new(repository.clone());

        use_case.execute(author.id, doomed.id).await.unwrap();

        assert_eq!(repository.courses(), vec![survivor]);
        assert_eq!(repository.save_calls(), 1);
    }

    #[tokio::test]
    async fn test_delete_course_rejects_unknown_courses() {
        let author = sample_author();
        let repository = Arc::new(StubRepository::new().with_author(author.clone()));
        let use_case = DeleteCourseUseCase::new(repository.clone());

        let error = use_case
            .execute(author.id, CourseId::generate())
            .await
            .unwrap_err();

        assert!(matches!(error, DeleteCourseError::CourseNotFound(_)));
        assert_eq!(repository.save_calls(), 0);
    }

    #[tokio::test]
    async fn test_delete_course_rejects_unknown_authors() {
        let repository = Arc::new(StubRepository::new());
        let use_case = DeleteCourseUseCase::new(repository);

        let error = use_case
            .execute(AuthorId::generate(), CourseId::generate())
            .await
            .unwrap_err();

        assert!(matches!(error, DeleteCourseError::AuthorNotFound(_)));
    }
}
