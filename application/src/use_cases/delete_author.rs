//! Delete Author use case.
//!
//! Removes an author and, through the repository's cascade, every
//! course they own.

use crate::ports::repository::{CourseLibraryRepository, RepositoryError};
use courselib_domain::AuthorId;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors for author deletion.
#[derive(Error, Debug)]
pub enum DeleteAuthorError {
    #[error("Author {0} does not exist")]
    AuthorNotFound(AuthorId),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Use case for deleting an author and their courses.
pub struct DeleteAuthorUseCase {
    repository: Arc<dyn CourseLibraryRepository>,
}

impl DeleteAuthorUseCase {
    pub fn new(repository: Arc<dyn CourseLibraryRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, author_id: AuthorId) -> Result<(), DeleteAuthorError> {
        if !self.repository.author_exists(author_id).await? {
            return Err(DeleteAuthorError::AuthorNotFound(author_id));
        }

        self.repository.delete_author(author_id).await?;
        self.repository.save().await?;

        info!(author_id = %author_id, "Deleted author");
        Ok(())
    }
}
