//! Port for the course library's persistence collaborator.
//!
//! Defines the [`CourseLibraryRepository`] trait consumed by every use
//! case. Mutating operations only register a pending change; nothing is
//! visible to reads until [`save`](CourseLibraryRepository::save)
//! commits. Use cases decide when to call `save`, which keeps
//! validation strictly ahead of persistence.

use async_trait::async_trait;
use courselib_domain::{Author, AuthorId, Course, CourseId};
use thiserror::Error;

/// Opaque failure from the persistence collaborator.
///
/// Use cases never interpret the payload; it travels unchanged to the
/// caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Storage failure: {0}")]
    Storage(String),
}

/// Filter for author listings.
///
/// All fields are optional; an empty filter matches every author.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorsFilter {
    /// Restrict to these author ids, preserving request order.
    pub ids: Option<Vec<AuthorId>>,
    /// Exact match on the author's main category.
    pub main_category: Option<String>,
    /// Substring match over category and both name fields.
    pub search_query: Option<String>,
}

impl AuthorsFilter {
    /// Restrict the listing to the given ids.
    pub fn for_ids(ids: Vec<AuthorId>) -> Self {
        Self {
            ids: Some(ids),
            ..Self::default()
        }
    }
}

/// Port for author and course persistence.
///
/// `add_`, `update_` and `delete_` register pending changes; `save`
/// commits them and is the only operation that may enforce storage
/// constraints. Course operations are scoped by the owning author id.
#[async_trait]
pub trait CourseLibraryRepository: Send + Sync {
    /// Whether an author with this id exists in committed state.
    async fn author_exists(&self, author_id: AuthorId) -> Result<bool, RepositoryError>;

    async fn get_author(&self, author_id: AuthorId) -> Result<Option<Author>, RepositoryError>;

    async fn list_authors(&self, filter: &AuthorsFilter) -> Result<Vec<Author>, RepositoryError>;

    /// Registers an author together with any initial courses.
    async fn add_author(
        &self,
        author: Author,
        courses: Vec<Course>,
    ) -> Result<(), RepositoryError>;

    /// Registers an author deletion; owned courses go with it.
    async fn delete_author(&self, author_id: AuthorId) -> Result<(), RepositoryError>;

    async fn get_course(
        &self,
        author_id: AuthorId,
        course_id: CourseId,
    ) -> Result<Option<Course>, RepositoryError>;

    async fn list_courses(&self, author_id: AuthorId) -> Result<Vec<Course>, RepositoryError>;

    /// Registers a new course under the author. The course id was set
    /// by the caller and must survive the commit unchanged.
    async fn add_course(&self, author_id: AuthorId, course: Course)
    -> Result<(), RepositoryError>;

    /// Registers the course as modified.
    async fn update_course(&self, course: Course) -> Result<(), RepositoryError>;

    async fn delete_course(
        &self,
        author_id: AuthorId,
        course_id: CourseId,
    ) -> Result<(), RepositoryError>;

    /// Commits every pending change; may fail as a whole.
    async fn save(&self) -> Result<(), RepositoryError>;
}
