//! In-memory course library repository.
//!
//! Committed state lives in two maps guarded by one lock; mutating port
//! operations only append to a pending change list. `save` replays the
//! pending changes onto a copy of the committed maps and swaps the copy
//! in, so a failing commit leaves committed state untouched. Reads
//! never see pending changes.

use async_trait::async_trait;
use courselib_application::ports::repository::{
    AuthorsFilter, CourseLibraryRepository, RepositoryError,
};
use courselib_domain::{Author, AuthorId, Course, CourseId};
use std::collections::HashMap;
use std::sync::RwLock;
use tracing::{debug, warn};

/// A staged mutation, applied in order at commit time.
#[derive(Debug, Clone)]
enum Change {
    AddAuthor {
        author: Author,
        courses: Vec<Course>,
    },
    DeleteAuthor(AuthorId),
    AddCourse(Course),
    UpdateCourse(Course),
    DeleteCourse {
        author_id: AuthorId,
        course_id: CourseId,
    },
}

#[derive(Debug, Default, Clone)]
struct Committed {
    authors: HashMap<AuthorId, Author>,
    courses: HashMap<CourseId, Course>,
}

impl Committed {
    /// Replays one change, enforcing the same constraints a relational
    /// store would at commit: unique ids and a live owning author.
    fn apply(&mut self, change: Change) -> Result<(), RepositoryError> {
        match change {
            Change::AddAuthor { author, courses } => {
                if self.authors.contains_key(&author.id) {
                    return Err(RepositoryError::Storage(format!(
                        "author {} already exists",
                        author.id
                    )));
                }
                let author_id = author.id;
                self.authors.insert(author_id, author);
                for course in courses {
                    self.insert_course(course)?;
                }
                Ok(())
            }
            Change::DeleteAuthor(author_id) => {
                self.authors.remove(&author_id);
                self.courses
                    .retain(|_, course| course.author_id != author_id);
                Ok(())
            }
            Change::AddCourse(course) => self.insert_course(course),
            Change::UpdateCourse(course) => {
                // A course deleted between staging and commit is simply
                // gone; last write wins, nothing to update.
                if let Some(slot) = self.courses.get_mut(&course.id) {
                    *slot = course;
                }
                Ok(())
            }
            Change::DeleteCourse {
                author_id,
                course_id,
            } => {
                if let Some(course) = self.courses.get(&course_id) {
                    if course.author_id == author_id {
                        self.courses.remove(&course_id);
                    }
                }
                Ok(())
            }
        }
    }

    fn insert_course(&mut self, course: Course) -> Result<(), RepositoryError> {
        if !self.authors.contains_key(&course.author_id) {
            return Err(RepositoryError::Storage(format!(
                "author {} does not exist for course {}",
                course.author_id, course.id
            )));
        }
        if self.courses.contains_key(&course.id) {
            return Err(RepositoryError::Storage(format!(
                "course {} already exists",
                course.id
            )));
        }
        self.courses.insert(course.id, course);
        Ok(())
    }
}

#[derive(Debug, Default)]
struct State {
    committed: Committed,
    pending: Vec<Change>,
}

/// In-memory implementation of the course library repository.
///
/// One instance is shared by every request, so `save` commits whatever
/// is pending at that moment; concurrent writers are serialized by the
/// lock and the last write wins.
#[derive(Debug, Default)]
pub struct InMemoryCourseLibrary {
    state: RwLock<State>,
}

impl InMemoryCourseLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    fn read<T>(&self, f: impl FnOnce(&Committed) -> T) -> T {
        let state = self.state.read().unwrap_or_else(|e| e.into_inner());
        f(&state.committed)
    }

    fn stage(&self, change: Change) {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        state.pending.push(change);
    }
}

#[async_trait]
impl CourseLibraryRepository for InMemoryCourseLibrary {
    async fn author_exists(&self, author_id: AuthorId) -> Result<bool, RepositoryError> {
        Ok(self.read(|committed| committed.authors.contains_key(&author_id)))
    }

    async fn get_author(&self, author_id: AuthorId) -> Result<Option<Author>, RepositoryError> {
        Ok(self.read(|committed| committed.authors.get(&author_id).cloned()))
    }

    async fn list_authors(&self, filter: &AuthorsFilter) -> Result<Vec<Author>, RepositoryError> {
        Ok(self.read(|committed| {
            let mut authors: Vec<Author> = committed
                .authors
                .values()
                .filter(|author| matches_filter(author, filter))
                .cloned()
                .collect();
            authors.sort_by(|a, b| {
                (&a.first_name, &a.last_name).cmp(&(&b.first_name, &b.last_name))
            });
            authors
        }))
    }

    async fn add_author(
        &self,
        author: Author,
        courses: Vec<Course>,
    ) -> Result<(), RepositoryError> {
        self.stage(Change::AddAuthor { author, courses });
        Ok(())
    }

    async fn delete_author(&self, author_id: AuthorId) -> Result<(), RepositoryError> {
        self.stage(Change::DeleteAuthor(author_id));
        Ok(())
    }

    async fn get_course(
        &self,
        author_id: AuthorId,
        course_id: CourseId,
    ) -> Result<Option<Course>, RepositoryError> {
        Ok(self.read(|committed| {
            committed
                .courses
                .get(&course_id)
                .filter(|course| course.author_id == author_id)
                .cloned()
        }))
    }

    async fn list_courses(&self, author_id: AuthorId) -> Result<Vec<Course>, RepositoryError> {
        Ok(self.read(|committed| {
            let mut courses: Vec<Course> = committed
                .courses
                .values()
                .filter(|course| course.author_id == author_id)
                .cloned()
                .collect();
            courses.sort_by(|a, b| a.title.cmp(&b.title));
            courses
        }))
    }

    async fn add_course(
        &self,
        author_id: AuthorId,
        mut course: Course,
    ) -> Result<(), RepositoryError> {
        // The route owner always wins over whatever the entity carries.
        course.author_id = author_id;
        self.stage(Change::AddCourse(course));
        Ok(())
    }

    async fn update_course(&self, course: Course) -> Result<(), RepositoryError> {
        self.stage(Change::UpdateCourse(course));
        Ok(())
    }

    async fn delete_course(
        &self,
        author_id: AuthorId,
        course_id: CourseId,
    ) -> Result<(), RepositoryError> {
        self.stage(Change::DeleteCourse {
            author_id,
            course_id,
        });
        Ok(())
    }

    async fn save(&self) -> Result<(), RepositoryError> {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        if state.pending.is_empty() {
            return Ok(());
        }

        // All or nothing: replay onto a copy, swap in on success. A
        // failed commit discards the pending changes instead of leaving
        // them to poison the next request's save.
        let pending = std::mem::take(&mut state.pending);
        let count = pending.len();
        let mut next = state.committed.clone();
        for change in pending {
            if let Err(error) = next.apply(change) {
                warn!(%error, "Commit failed, discarding pending changes");
                return Err(error);
            }
        }

        state.committed = next;
        debug!(changes = count, "Committed pending changes");
        Ok(())
    }
}

fn matches_filter(author: &Author, filter: &AuthorsFilter) -> bool {
    if let Some(ids) = &filter.ids {
        if !ids.contains(&author.id) {
            return false;
        }
    }
    if let Some(category) = &filter.main_category {
        if author.main_category != category.trim() {
            return false;
        }
    }
    if let Some(query) = &filter.search_query {
        let query = query.trim();
        if !author.main_category.contains(query)
            && !author.first_name.contains(query)
            && !author.last_name.contains(query)
        {
            return false;
        }
    }
    true
}
