//! The course update representation.

use serde::{Deserialize, Serialize};

/// The shape a course update works on.
///
/// Both a full replacement (PUT body) and a patch document (PATCH body)
/// produce a draft, which is then validated as a whole and mapped onto a
/// [`Course`](super::entities::Course). Unlike the entity, a draft may be
/// temporarily invalid: a patch is allowed to pass through states that
/// would never persist, as long as the final result validates.
///
/// A default draft has no title and no description; this is the starting
/// point when a patch document targets a course that does not exist yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseDraft {
    /// Course title. Required for the draft to validate.
    pub title: Option<String>,
    /// Course description. Optional; an absent description clears the
    /// stored one on update (overwrite semantics, not merge).
    pub description: Option<String>,
}

impl CourseDraft {
    /// Creates a draft with the given title and description.
    pub fn new(title: impl Into<String>, description: Option<String>) -> Self {
        Self {
            title: Some(title.into()),
            description,
        }
    }
}
