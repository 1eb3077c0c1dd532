//! Application layer for courselib
//!
//! This crate contains the use cases behind every API operation and the
//! repository port they consume. It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::repository::{AuthorsFilter, CourseLibraryRepository, RepositoryError};
pub use use_cases::author_queries::{GetAuthorError, GetAuthorUseCase, ListAuthorsUseCase};
pub use use_cases::course_queries::{
    GetCourseError, GetCourseUseCase, ListCoursesError, ListCoursesUseCase,
};
pub use use_cases::create_author::{CreateAuthorError, CreateAuthorInput, CreateAuthorUseCase};
pub use use_cases::create_course::{CreateCourseError, CreateCourseInput, CreateCourseUseCase};
pub use use_cases::delete_author::{DeleteAuthorError, DeleteAuthorUseCase};
pub use use_cases::delete_course::{DeleteCourseError, DeleteCourseUseCase};
pub use use_cases::patch_course::{PatchCourseError, PatchCourseInput, PatchCourseUseCase};
pub use use_cases::upsert_course::{
    UpsertCourseError, UpsertCourseInput, UpsertCourseUseCase, UpsertOutcome,
};
