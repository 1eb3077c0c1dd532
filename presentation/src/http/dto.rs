//! Wire DTOs and their entity mappings.
//!
//! Mapping is explicit per pair: one function builds the response shape
//! from an entity, one converts a request body into the input the use
//! case wants. No field is copied by convention.

use chrono::NaiveDate;
use courselib_application::CreateAuthorInput;
use courselib_domain::{Author, AuthorId, Course, CourseDraft, CourseId};
use serde::{Deserialize, Serialize};

/// Author as served to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorDto {
    pub id: AuthorId,
    /// Display name, "first last".
    pub name: String,
    /// Whole years of age on the day the request is served.
    pub age: u32,
    pub main_category: String,
}

impl AuthorDto {
    pub fn from_entity(author: &Author, today: NaiveDate) -> Self {
        Self {
            id: author.id,
            name: author.full_name(),
            age: author.age_on(today),
            main_category: author.main_category.clone(),
        }
    }
}

/// Course as served to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseDto {
    pub id: CourseId,
    pub title: String,
    pub description: Option<String>,
    pub author_id: AuthorId,
}

impl CourseDto {
    pub fn from_entity(course: &Course) -> Self {
        Self {
            id: course.id,
            title: course.title.clone(),
            description: course.description.clone(),
            author_id: course.author_id,
        }
    }
}

/// Body for `POST /api/authors`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAuthorRequest {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub main_category: String,
    /// Courses to create together with the author.
    #[serde(default)]
    pub courses: Vec<CourseRequest>,
}

impl NewAuthorRequest {
    pub fn into_input(self) -> CreateAuthorInput {
        CreateAuthorInput {
            first_name: self.first_name,
            last_name: self.last_name,
            date_of_birth: self.date_of_birth,
            main_category: self.main_category,
            courses: self
                .courses
                .into_iter()
                .map(CourseRequest::into_draft)
                .collect(),
        }
    }
}

/// Body for course creation and for full replacement on PUT.
///
/// Both fields are optional at the wire level so that a missing title
/// reaches whole-object validation and comes back as a field violation
/// instead of failing body deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRequest {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl CourseRequest {
    pub fn into_draft(self) -> CourseDraft {
        CourseDraft {
            title: self.title,
            description: self.description,
        }
    }
}
