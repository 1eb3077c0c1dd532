//! Create Author use case.
//!
//! Creates an author together with any courses submitted inline. Ids
//! are generated here, never taken from the caller. Embedded course
//! drafts are validated up front so the whole request either persists
//! completely or not at all.

use crate::ports::repository::{CourseLibraryRepository, RepositoryError};
use chrono::NaiveDate;
use courselib_domain::{Author, Course, CourseDraft, FieldViolation, validate_draft};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors for author creation.
#[derive(Error, Debug)]
pub enum CreateAuthorError {
    #[error("Author payload failed validation")]
    Validation(Vec<FieldViolation>),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Input for the [`CreateAuthorUseCase`].
#[derive(Debug, Clone)]
pub struct CreateAuthorInput {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub main_category: String,
    /// Courses to create under the new author, as unvalidated drafts.
    pub courses: Vec<CourseDraft>,
}

/// Use case for creating an author with optional inline courses.
pub struct CreateAuthorUseCase {
    repository: Arc<dyn CourseLibraryRepository>,
}

impl CreateAuthorUseCase {
    pub fn new(repository: Arc<dyn CourseLibraryRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, input: CreateAuthorInput) -> Result<Author, CreateAuthorError> {
        // Validate every embedded draft before touching the repository,
        // prefixing field paths with the course's position.
        let mut violations = Vec::new();
        for (index, draft) in input.courses.iter().enumerate() {
            for violation in validate_draft(draft) {
                violations.push(FieldViolation::new(
                    format!("courses[{index}].{}", violation.field),
                    violation.message,
                ));
            }
        }
        if !violations.is_empty() {
            return Err(CreateAuthorError::Validation(violations));
        }

        let author = Author::new(
            input.first_name,
            input.last_name,
            input.date_of_birth,
            input.main_category,
        );
        let courses: Vec<Course> = input
            .courses
            .iter()
            .map(|draft| {
                Course::new(
                    author.id,
                    draft.title.clone().unwrap_or_default(),
                    draft.description.clone(),
                )
            })
            .collect();

        self.repository
            .add_author(author.clone(), courses)
            .await?;
        self.repository.save().await?;

        info!(author_id = %author.id, courses = input.courses.len(), "Created author");
        Ok(author)
    }
}
