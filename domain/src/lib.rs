//! Domain layer for course-library
//!
//! This crate contains the core business types: the author and course
//! entities, their identifiers, the course update representation (the
//! "draft"), patch-document application, and whole-object validation.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Draft
//!
//! A [`CourseDraft`] is the shape a course update works on. Both full
//! replacements (PUT) and patch documents (PATCH) produce a draft, which is
//! validated as a whole before it is mapped onto a [`Course`] entity. A
//! draft may be temporarily invalid; an entity never is.
//!
//! ## Whole-object validation
//!
//! [`validate_draft`] checks every field rule and the cross-field
//! title/description rule in one pass and returns the full list of
//! [`FieldViolation`]s, so callers can report all problems at once.

pub mod author;
pub mod core;
pub mod course;

// Re-export commonly used types
pub use author::entities::Author;
pub use author::value_objects::AuthorId;
pub use core::error::DomainError;
pub use course::draft::CourseDraft;
pub use course::entities::Course;
pub use course::patch::{PatchDocument, PatchError, PatchOperation};
pub use course::validation::{
    DESCRIPTION_MAX_CHARS, FieldViolation, TITLE_MAX_CHARS, validate_draft,
};
pub use course::value_objects::CourseId;
