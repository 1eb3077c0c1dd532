//! Course read use cases.
//!
//! Both reads resolve the owning author before anything else: a course
//! under an unknown author is unreachable even if its id happens to be
//! in storage.

use crate::ports::repository::{CourseLibraryRepository, RepositoryError};
use courselib_domain::{AuthorId, Course, CourseId};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Errors for listing an author's courses.
#[derive(Error, Debug)]
pub enum ListCoursesError {
    #[error("Author {0} does not exist")]
    AuthorNotFound(AuthorId),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Use case for listing every course an author owns.
pub struct ListCoursesUseCase {
    repository: Arc<dyn CourseLibraryRepository>,
}

impl ListCoursesUseCase {
    pub fn new(repository: Arc<dyn CourseLibraryRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, author_id: AuthorId) -> Result<Vec<Course>, ListCoursesError> {
        if !self.repository.author_exists(author_id).await? {
            return Err(ListCoursesError::AuthorNotFound(author_id));
        }

        let courses = self.repository.list_courses(author_id).await?;
        debug!(author_id = %author_id, count = courses.len(), "Listed courses");
        Ok(courses)
    }
}

/// Errors for fetching a single course.
#[derive(Error, Debug)]
pub enum GetCourseError {
    #[error("Author {0} does not exist")]
    AuthorNotFound(AuthorId),

    #[error("Course {0} does not exist")]
    CourseNotFound(CourseId),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Use case for fetching one course under an author.
pub struct GetCourseUseCase {
    repository: Arc<dyn CourseLibraryRepository>,
}

impl GetCourseUseCase {
    pub fn new(repository: Arc<dyn CourseLibraryRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(
        &self,
        author_id: AuthorId,
        course_id: CourseId,
    ) -> Result<Course, GetCourseError> {
        if !self.repository.author_exists(author_id).await? {
            return Err(GetCourseError::AuthorNotFound(author_id));
        }

        self.repository
            .get_course(author_id, course_id)
            .await?
            .ok_or(GetCourseError::CourseNotFound(course_id))
    }
}
