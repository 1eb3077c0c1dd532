//! Whole-object validation for course drafts.
//!
//! The cross-field rule needs to read two sibling fields at once, so
//! drafts are validated as a whole instead of field by field. The
//! validator is a pure function; callers decide what a non-empty
//! violation list means for them.

use super::draft::CourseDraft;
use serde::{Deserialize, Serialize};

/// Longest accepted title, in characters.
pub const TITLE_MAX_CHARS: usize = 100;

/// Longest accepted description, in characters.
pub const DESCRIPTION_MAX_CHARS: usize = 1500;

/// A single validation failure, tied to the field that caused it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Validates a draft, returning every violation found.
///
/// An empty vector means the draft is acceptable. Limits are counted in
/// characters, not bytes.
pub fn validate_draft(draft: &CourseDraft) -> Vec<FieldViolation> {
    let mut violations = Vec::new();

    match &draft.title {
        Some(title) if !title.trim().is_empty() => {
            if title.chars().count() > TITLE_MAX_CHARS {
                violations.push(FieldViolation::new(
                    "title",
                    format!("The title must not be longer than {TITLE_MAX_CHARS} characters"),
                ));
            }
        }
        _ => violations.push(FieldViolation::new("title", "A title is required")),
    }

    if let Some(description) = &draft.description {
        if description.chars().count() > DESCRIPTION_MAX_CHARS {
            violations.push(FieldViolation::new(
                "description",
                format!(
                    "The description must not be longer than {DESCRIPTION_MAX_CHARS} characters"
                ),
            ));
        }
    }

    // Evaluated only once both fields are resolved on the draft; a
    // missing title is already its own violation.
    if let (Some(title), Some(description)) = (&draft.title, &draft.description) {
        if title == description {
            violations.push(FieldViolation::new(
                "description",
                "The description must differ from the title",
            ));
        }
    }

    violations
}
