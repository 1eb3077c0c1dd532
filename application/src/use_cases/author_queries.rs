//! Author read use cases.
//!
//! Listing with an [`AuthorsFilter`] and single-author fetch. Reads go
//! straight to the repository's committed state; filtering itself lives
//! behind the port so adapters can push it into their query engine.

use crate::ports::repository::{AuthorsFilter, CourseLibraryRepository, RepositoryError};
use courselib_domain::{Author, AuthorId};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Use case for listing authors.
pub struct ListAuthorsUseCase {
    repository: Arc<dyn CourseLibraryRepository>,
}

impl ListAuthorsUseCase {
    pub fn new(repository: Arc<dyn CourseLibraryRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, filter: &AuthorsFilter) -> Result<Vec<Author>, RepositoryError> {
        let authors = self.repository.list_authors(filter).await?;
        debug!(count = authors.len(), "Listed authors");
        Ok(authors)
    }
}

/// Errors for fetching a single author.
#[derive(Error, Debug)]
pub enum GetAuthorError {
    #[error("Author {0} does not exist")]
    AuthorNotFound(AuthorId),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Use case for fetching one author by id.
pub struct GetAuthorUseCase {
    repository: Arc<dyn CourseLibraryRepository>,
}

impl GetAuthorUseCase {
    pub fn new(repository: Arc<dyn CourseLibraryRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, author_id: AuthorId) -> Result<Author, GetAuthorError> {
        self.repository
            .get_author(author_id)
            .await?
            .ok_or(GetAuthorError::AuthorNotFound(author_id))
    }
}
