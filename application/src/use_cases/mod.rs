//! Use cases
//!
//! Application-level operations that orchestrate domain logic. Each use
//! case owns its error type; the write flows share the rule that
//! validation runs to completion before the repository's `save` is
//! reached.

pub mod author_queries;
pub mod course_queries;
pub mod create_author;
pub mod create_course;
pub mod delete_author;
pub mod delete_course;
pub mod patch_course;
pub mod upsert_course;

#[cfg(test)]
pub(crate) mod test_support;
