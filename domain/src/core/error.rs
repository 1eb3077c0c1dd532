//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A string could not be parsed as an identifier.
    ///
    /// `kind` names the entity the identifier belongs to ("author" or
    /// "course"); `value` is the offending input, preserved verbatim so
    /// callers can point at it.
    #[error("'{value}' is not a valid {kind} id")]
    InvalidId { kind: &'static str, value: String },
}
