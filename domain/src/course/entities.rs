//! Course entity.

use super::draft::CourseDraft;
use super::value_objects::CourseId;
use crate::author::value_objects::AuthorId;
use serde::{Deserialize, Serialize};

/// A course owned by exactly one author.
///
/// Courses have no lifecycle of their own: they are created under an
/// author, updated through validated [`CourseDraft`]s, and removed when
/// their author is deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub title: String,
    pub description: Option<String>,
    pub author_id: AuthorId,
}

impl Course {
    /// Creates a course with a freshly generated id.
    pub fn new(author_id: AuthorId, title: impl Into<String>, description: Option<String>) -> Self {
        Self {
            id: CourseId::generate(),
            title: title.into(),
            description,
            author_id,
        }
    }

    /// Builds a course from a validated draft, forcing the given id.
    ///
    /// This is the upsert creation path: the caller chose `id`, not this
    /// type, and it becomes the course's canonical identity.
    pub fn from_draft(id: CourseId, author_id: AuthorId, draft: &CourseDraft) -> Self {
        Self {
            id,
            title: draft.title.clone().unwrap_or_default(),
            description: draft.description.clone(),
            author_id,
        }
    }

    /// Overwrites this course's fields with the draft's.
    ///
    /// Every draft field replaces its counterpart unconditionally: an
    /// absent description resets the stored description rather than
    /// keeping it. Identity and ownership are untouched.
    pub fn apply_draft(&mut self, draft: &CourseDraft) {
        self.title = draft.title.clone().unwrap_or_default();
        self.description = draft.description.clone();
    }

    /// Projects this course into the update representation.
    ///
    /// Patch documents apply to the projection, never to the entity
    /// directly, so a failed patch leaves the entity untouched.
    pub fn to_draft(&self) -> CourseDraft {
        CourseDraft {
            title: Some(self.title.clone()),
            description: self.description.clone(),
        }
    }
}
