//! Author identifiers.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for an [`Author`](super::entities::Author).
///
/// Wraps a UUID; the canonical wire form is the hyphenated string
/// representation. Clients may supply their own ids when upserting, so the
/// parse path is part of the public contract, not just a convenience.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthorId(Uuid);

impl AuthorId {
    /// Creates an id from an existing UUID.
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    /// Generates a fresh random id.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl FromStr for AuthorId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| DomainError::InvalidId {
                kind: "author",
                value: s.to_string(),
            })
    }
}

impl std::fmt::Display for AuthorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_form() {
        let id: AuthorId = "3897cccd-1d9c-4b59-8b9a-1c4e25c3e9fb".parse().unwrap();
        assert_eq!(id.to_string(), "3897cccd-1d9c-4b59-8b9a-1c4e25c3e9fb");
    }

    #[test]
    fn rejects_garbage() {
        let err = "not-a-guid".parse::<AuthorId>().unwrap_err();
        assert_eq!(err.to_string(), "'not-a-guid' is not a valid author id");
    }

    #[test]
    fn generated_ids_are_distinct() {
        assert_ne!(AuthorId::generate(), AuthorId::generate());
    }
}
