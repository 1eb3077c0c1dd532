//! Shared stub repository for handler tests.

use async_trait::async_trait;
use chrono::NaiveDate;
use courselib_application::{AuthorsFilter, CourseLibraryRepository, RepositoryError};
use courselib_domain::{Author, AuthorId, Course, CourseId};
use std::sync::Mutex;

/// Stub repository backed by plain vectors; mutations land immediately.
///
/// Handler tests only assert on statuses, headers and bodies, so the
/// staged-commit discipline of the real adapter is out of scope here.
pub struct StubRepository {
    authors: Mutex<Vec<Author>>,
    courses: Mutex<Vec<Course>>,
    fail_save: bool,
}

impl StubRepository {
    pub fn new() -> Self {
        Self {
            authors: Mutex::new(Vec::new()),
            courses: Mutex::new(Vec::new()),
            fail_save: false,
        }
    }

    pub fn with_author(self, author: Author) -> Self {
        self.authors.lock().unwrap().push(author);
        self
    }

    pub fn with_course(self, course: Course) -> Self {
        self.courses.lock().unwrap().push(course);
        self
    }

    /// Makes `save` fail with a storage error.
    pub fn failing_save(mut self) -> Self {
        self.fail_save = true;
        self
    }

    pub fn find_course(&self, course_id: CourseId) -> Option<Course> {
        self.courses
            .lock()
            .unwrap()
            .iter()
            .find(|course| course.id == course_id)
            .cloned()
    }
}

#[async_trait]
impl CourseLibraryRepository for StubRepository {
    async fn author_exists(&self, author_id: AuthorId) -> Result<bool, RepositoryError> {
        Ok(self
            .authors
            .lock()
            .unwrap()
            .iter()
            .any(|author| author.id == author_id))
    }

    async fn get_author(&self, author_id: AuthorId) -> Result<Option<Author>, RepositoryError> {
        Ok(self
            .authors
            .lock()
            .unwrap()
            .iter()
            .find(|author| author.id == author_id)
            .cloned())
    }

    async fn list_authors(&self, filter: &AuthorsFilter) -> Result<Vec<Author>, RepositoryError> {
        let authors = self.authors.lock().unwrap();
        Ok(authors
            .iter()
            .filter(|author| match &filter.ids {
                Some(ids) => ids.contains(&author.id),
                None => true,
            })
            .filter(|author| match &filter.main_category {
                Some(category) => author.main_category == *category,
                None => true,
            })
            .cloned()
            .collect())
    }

    async fn add_author(
        &self,
        author: Author,
        courses: Vec<Course>,
    ) -> Result<(), RepositoryError> {
        self.authors.lock().unwrap().push(author);
        self.courses.lock().unwrap().extend(courses);
        Ok(())
    }

    async fn delete_author(&self, author_id: AuthorId) -> Result<(), RepositoryError> {
        self.authors
            .lock()
            .unwrap()
            .retain(|author| author.id != author_id);
        self.courses
            .lock()
            .unwrap()
            .retain(|course| course.author_id != author_id);
        Ok(())
    }

    async fn get_course(
        &self,
        author_id: AuthorId,
        course_id: CourseId,
    ) -> Result<Option<Course>, RepositoryError> {
        Ok(self
            .courses
            .lock()
            .unwrap()
            .iter()
            .find(|course| course.author_id == author_id && course.id == course_id)
            .cloned())
    }

    async fn list_courses(&self, author_id: AuthorId) -> Result<Vec<Course>, RepositoryError> {
        Ok(self
            .courses
            .lock()
            .unwrap()
            .iter()
            .filter(|course| course.author_id == author_id)
            .cloned()
            .collect())
    }

    async fn add_course(
        &self,
        author_id: AuthorId,
        mut course: Course,
    ) -> Result<(), RepositoryError> {
        course.author_id = author_id;
        self.courses.lock().unwrap().push(course);
        Ok(())
    }

    async fn update_course(&self, course: Course) -> Result<(), RepositoryError> {
        let mut courses = self.courses.lock().unwrap();
        if let Some(slot) = courses.iter_mut().find(|existing| existing.id == course.id) {
            *slot = course;
        }
        Ok(())
    }

    async fn delete_course(
        &self,
        author_id: AuthorId,
        course_id: CourseId,
    ) -> Result<(), RepositoryError> {
        self.courses
            .lock()
            .unwrap()
            .retain(|course| !(course.author_id == author_id && course.id == course_id));
        Ok(())
    }

    async fn save(&self) -> Result<(), RepositoryError> {
        if self.fail_save {
            Err(RepositoryError::Storage("save failed".to_string()))
        } else {
            Ok(())
        }
    }
}

pub fn sample_author() -> Author {
    Author::new(
        "Berry",
        "Griffin Beak Eldritch",
        NaiveDate::from_ymd_opt(1980, 7, 23).unwrap(),
        "Ships",
    )
}

pub fn sample_course(author_id: AuthorId) -> Course {
    Course::new(
        author_id,
        "Commandeering a Ship Without Getting Caught",
        Some("Commandeering a ship in rough weather".to_string()),
    )
}
