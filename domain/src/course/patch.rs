//! Typed patch documents for course updates.
//!
//! A [`PatchDocument`] is an ordered list of operations applied to a
//! [`CourseDraft`](super::draft::CourseDraft) projection. Only the two
//! draft fields are addressable; operations targeting anything else are
//! rejected, and the first failing operation aborts the whole document.

use super::draft::CourseDraft;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Why a patch document could not be applied.
///
/// Every variant carries the zero-based index of the offending
/// operation so callers can point at it in their reports.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatchError {
    #[error("Operation {index} targets unknown path '{path}'")]
    UnknownPath { index: usize, path: String },

    #[error("Operation {index} carries a value for '{path}' that is neither a string nor null")]
    InvalidValue { index: usize, path: String },

    #[error("Operation {index} tested '{path}' against a value that did not match")]
    TestFailed { index: usize, path: String },
}

/// A single patch operation in wire form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum PatchOperation {
    Add {
        path: String,
        #[serde(default)]
        value: Value,
    },
    Remove {
        path: String,
    },
    Replace {
        path: String,
        #[serde(default)]
        value: Value,
    },
    Move {
        from: String,
        path: String,
    },
    Copy {
        from: String,
        path: String,
    },
    Test {
        path: String,
        #[serde(default)]
        value: Value,
    },
}

/// An ordered patch document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatchDocument(pub Vec<PatchOperation>);

/// The two addressable draft fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DraftField {
    Title,
    Description,
}

impl DraftField {
    fn resolve(index: usize, path: &str) -> Result<Self, PatchError> {
        if path.eq_ignore_ascii_case("/title") {
            Ok(Self::Title)
        } else if path.eq_ignore_ascii_case("/description") {
            Ok(Self::Description)
        } else {
            Err(PatchError::UnknownPath {
                index,
                path: path.to_string(),
            })
        }
    }

    fn read(self, draft: &CourseDraft) -> Option<String> {
        match self {
            Self::Title => draft.title.clone(),
            Self::Description => draft.description.clone(),
        }
    }

    fn write(self, draft: &mut CourseDraft, value: Option<String>) {
        match self {
            Self::Title => draft.title = value,
            Self::Description => draft.description = value,
        }
    }
}

/// Coerces a wire value into the draft's string-or-absent shape.
fn coerce(index: usize, path: &str, value: &Value) -> Result<Option<String>, PatchError> {
    match value {
        Value::Null => Ok(None),
        Value::String(text) => Ok(Some(text.clone())),
        _ => Err(PatchError::InvalidValue {
            index,
            path: path.to_string(),
        }),
    }
}

impl PatchDocument {
    /// Applies every operation in order, stopping at the first failure.
    ///
    /// On failure the draft may already carry the effects of earlier
    /// operations, so callers apply documents to a scratch projection
    /// and discard it when this returns an error.
    pub fn apply(&self, draft: &mut CourseDraft) -> Result<(), PatchError> {
        for (index, operation) in self.0.iter().enumerate() {
            apply_one(index, operation, draft)?;
        }
        Ok(())
    }
}

fn apply_one(
    index: usize,
    operation: &PatchOperation,
    draft: &mut CourseDraft,
) -> Result<(), PatchError> {
    match operation {
        // On a document with a fixed set of members, add and replace
        // both mean "set the target field".
        PatchOperation::Add { path, value } | PatchOperation::Replace { path, value } => {
            let field = DraftField::resolve(index, path)?;
            let value = coerce(index, path, value)?;
            field.write(draft, value);
        }
        PatchOperation::Remove { path } => {
            let field = DraftField::resolve(index, path)?;
            field.write(draft, None);
        }
        PatchOperation::Move { from, path } => {
            let source = DraftField::resolve(index, from)?;
            let target = DraftField::resolve(index, path)?;
            let value = source.read(draft);
            source.write(draft, None);
            target.write(draft, value);
        }
        PatchOperation::Copy { from, path } => {
            let source = DraftField::resolve(index, from)?;
            let target = DraftField::resolve(index, path)?;
            let value = source.read(draft);
            target.write(draft, value);
        }
        PatchOperation::Test { path, value } => {
            let field = DraftField::resolve(index, path)?;
            let expected = coerce(index, path, value)?;
            if field.read(draft) != expected {
                return Err(PatchError::TestFailed {
                    index,
                    path: path.to_string(),
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn draft() -> CourseDraft {
        CourseDraft::new("Original title", Some("Original description".to_string()))
    }

    fn parse(document: serde_json::Value) -> PatchDocument {
        serde_json::from_value(document).unwrap()
    }

    #[test]
    fn replace_overwrites_the_target_field() {
        let mut draft = draft();
        let document = parse(json!([
            { "op": "replace", "path": "/title", "value": "Updated title" }
        ]));

        document.apply(&mut draft).unwrap();

        assert_eq!(draft.title.as_deref(), Some("Updated title"));
        assert_eq!(draft.description.as_deref(), Some("Original description"));
    }

    #[test]
    fn add_sets_the_field_like_replace() {
        let mut draft = CourseDraft::default();
        let document = parse(json!([
            { "op": "add", "path": "/description", "value": "Fresh" }
        ]));

        document.apply(&mut draft).unwrap();

        assert_eq!(draft.description.as_deref(), Some("Fresh"));
    }

    #[test]
    fn remove_clears_the_field() {
        let mut draft = draft();
        let document = parse(json!([{ "op": "remove", "path": "/description" }]));

        document.apply(&mut draft).unwrap();

        assert_eq!(draft.description, None);
    }

    #[test]
    fn null_value_clears_like_remove() {
        let mut draft = draft();
        let document = parse(json!([
            { "op": "replace", "path": "/description", "value": null }
        ]));

        document.apply(&mut draft).unwrap();

        assert_eq!(draft.description, None);
    }

    #[test]
    fn move_transfers_the_value_and_clears_the_source() {
        let mut draft = draft();
        let document = parse(json!([
            { "op": "move", "from": "/title", "path": "/description" }
        ]));

        document.apply(&mut draft).unwrap();

        assert_eq!(draft.title, None);
        assert_eq!(draft.description.as_deref(), Some("Original title"));
    }

    #[test]
    fn copy_duplicates_the_value() {
        let mut draft = draft();
        let document = parse(json!([
            { "op": "copy", "from": "/title", "path": "/description" }
        ]));

        document.apply(&mut draft).unwrap();

        assert_eq!(draft.title.as_deref(), Some("Original title"));
        assert_eq!(draft.description.as_deref(), Some("Original title"));
    }

    #[test]
    fn test_passes_when_the_value_matches() {
        let mut draft = draft();
        let document = parse(json!([
            { "op": "test", "path": "/title", "value": "Original title" },
            { "op": "replace", "path": "/title", "value": "Updated" }
        ]));

        document.apply(&mut draft).unwrap();

        assert_eq!(draft.title.as_deref(), Some("Updated"));
    }

    #[test]
    fn failed_test_reports_its_index() {
        let mut draft = draft();
        let document = parse(json!([
            { "op": "test", "path": "/title", "value": "Something else" }
        ]));

        let error = document.apply(&mut draft).unwrap_err();

        assert_eq!(
            error,
            PatchError::TestFailed {
                index: 0,
                path: "/title".to_string(),
            }
        );
    }

    #[test]
    fn unknown_path_is_rejected() {
        let mut draft = draft();
        let document = parse(json!([
            { "op": "replace", "path": "/price", "value": "cheap" }
        ]));

        let error = document.apply(&mut draft).unwrap_err();

        assert_eq!(
            error,
            PatchError::UnknownPath {
                index: 0,
                path: "/price".to_string(),
            }
        );
    }

    #[test]
    fn paths_match_case_insensitively() {
        let mut draft = draft();
        let document = parse(json!([
            { "op": "replace", "path": "/Title", "value": "Cased" }
        ]));

        document.apply(&mut draft).unwrap();

        assert_eq!(draft.title.as_deref(), Some("Cased"));
    }

    #[test]
    fn non_string_value_is_rejected() {
        let mut draft = draft();
        let document = parse(json!([
            { "op": "replace", "path": "/title", "value": 42 }
        ]));

        let error = document.apply(&mut draft).unwrap_err();

        assert_eq!(
            error,
            PatchError::InvalidValue {
                index: 0,
                path: "/title".to_string(),
            }
        );
    }

    #[test]
    fn first_failure_aborts_the_remaining_operations() {
        let mut draft = draft();
        let document = parse(json!([
            { "op": "replace", "path": "/title", "value": "Applied" },
            { "op": "replace", "path": "/credits", "value": "3" },
            { "op": "remove", "path": "/description" }
        ]));

        let error = document.apply(&mut draft).unwrap_err();

        assert_eq!(
            error,
            PatchError::UnknownPath {
                index: 1,
                path: "/credits".to_string(),
            }
        );
        // The operation after the failure never ran.
        assert_eq!(draft.description.as_deref(), Some("Original description"));
    }

    #[test]
    fn missing_value_defaults_to_null() {
        let mut draft = draft();
        let document = parse(json!([{ "op": "replace", "path": "/description" }]));

        document.apply(&mut draft).unwrap();

        assert_eq!(draft.description, None);
    }

    #[test]
    fn rejects_unknown_op_at_parse() {
        let result: Result<PatchDocument, _> = serde_json::from_value(json!([
            { "op": "merge", "path": "/title", "value": "x" }
        ]));

        assert!(result.is_err());
    }
}
